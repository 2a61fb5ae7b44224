//! Render snapshots published by the turn controller.

use crate::games::tictactoe::rules::{evaluate, winning_line};
use crate::games::tictactoe::{Cell, GameStatus, Grid, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where the turn controller is in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to confirm a cell.
    AwaitingHuman,
    /// The computer's reply is scheduled; human input is rejected.
    ComputerThinking,
    /// The round is decided; only a reset is accepted.
    RoundOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHuman => write!(f, "Your move"),
            Phase::ComputerThinking => write!(f, "Computer is thinking"),
            Phase::RoundOver => write!(f, "Round over"),
        }
    }
}

/// Rounds finished since the controller was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundTally {
    /// Rounds the human won.
    human_wins: u32,
    /// Rounds the computer won.
    computer_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl RoundTally {
    /// Counts a finished round. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::HumanWins => self.human_wins += 1,
            GameStatus::ComputerWins => self.computer_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Everything a renderer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Frame {
    /// Copy of the grid.
    grid: Grid,
    /// Cell under the pointer, if any.
    hovered: Option<Cell>,
    /// Status derived from the grid.
    status: GameStatus,
    /// Controller phase.
    phase: Phase,
    /// Completed line to highlight once the round is won.
    winning_line: Option<[Cell; 3]>,
    /// Most recent move of the round.
    last_move: Option<Move>,
    /// Finished rounds so far.
    tally: RoundTally,
}

impl Frame {
    pub(crate) fn new(
        grid: Grid,
        hovered: Option<Cell>,
        phase: Phase,
        last_move: Option<Move>,
        tally: RoundTally,
    ) -> Self {
        let (status, winning_line) = match winning_line(&grid) {
            Some((player, line)) => (GameStatus::won_by(player), Some(line)),
            None => (evaluate(&grid), None),
        };
        Self {
            grid,
            hovered,
            status,
            phase,
            winning_line,
            last_move,
            tally,
        }
    }
}
