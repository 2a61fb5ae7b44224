//! Monotonic board invariant: cells never change once set.

use super::super::{BoardState, Grid};
use super::Invariant;

/// Invariant: Replaying the move history reproduces the grid.
///
/// Once a cell transitions from Empty to a mark it never changes, and no
/// cell is filled without a recorded move.
pub struct MonotonicBoardInvariant;

impl Invariant<BoardState> for MonotonicBoardInvariant {
    fn holds(board: &BoardState) -> bool {
        let mut reconstructed = Grid::new();

        for mov in board.history() {
            if !reconstructed.is_empty(mov.cell) {
                return false;
            }
            reconstructed.set(mov.cell, mov.mark());
        }

        reconstructed == *board.grid()
    }

    fn description() -> &'static str {
        "Grid matches a replay of the move history"
    }
}
