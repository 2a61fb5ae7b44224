//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a grid according to
//! tic-tac-toe rules. Rules are separated from board storage so that the
//! search and the turn controller can share them on plain snapshots.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};

use super::{GameStatus, Grid};

/// Derives the status of a grid.
///
/// The first completed line in scan order decides the winner; otherwise a
/// full grid is a draw and anything else is still in progress.
pub fn evaluate(grid: &Grid) -> GameStatus {
    if let Some(winner) = check_winner(grid) {
        GameStatus::won_by(winner)
    } else if is_full(grid) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
