//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Cell, Mark, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on a cell.
///
/// The mark is derived from the player, so a move can never place
/// [`Mark::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the mark.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: Cell) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the target cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// The mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.player.mark()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.cell.label())
    }
}

/// A rejected move. Always recoverable: the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// The move's player is not the one whose turn it is.
    #[display("It's {:?}'s turn, not {:?}'s", expected, found)]
    WrongTurn {
        /// Player whose turn it is.
        expected: Player,
        /// Player named by the move.
        found: Player,
    },

    /// The computer's reply is still pending.
    #[display("The computer is still thinking")]
    ComputerThinking,

    /// The round has ended; only a reset is accepted.
    #[display("The round is over")]
    RoundOver,

    /// No Tokio runtime is available to schedule the computer's reply.
    #[display("No async runtime to schedule the computer's reply")]
    NoRuntime,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
