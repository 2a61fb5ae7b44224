//! Picks the computer's reply.

use super::super::{Cell, Grid, Player};
use super::minimax::score;
use tracing::{debug, instrument};

/// Scores every empty cell as the computer's next move.
///
/// Cells come back in increasing index order. Each score assumes the human
/// replies next and both sides play perfectly from there.
pub fn ranked_moves(grid: &Grid) -> Vec<(Cell, i8)> {
    grid.empty_cells()
        .map(|cell| {
            let mut child = *grid;
            child.set(cell, Player::Computer.mark());
            (cell, score(&child, Player::Human))
        })
        .collect()
}

/// Best cell for the computer, or `None` if the grid has no empty cell.
///
/// Ties go to the lowest cell index. The grid's status is not checked;
/// callers normally only ask while the round is in progress.
#[instrument(skip(grid), fields(grid = %grid))]
pub fn pick_move(grid: &Grid) -> Option<Cell> {
    let mut best: Option<(Cell, i8)> = None;
    for (cell, value) in ranked_moves(grid) {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((cell, value));
        }
    }

    match best {
        Some((cell, value)) => {
            debug!(%cell, value, "Computer move selected");
            Some(cell)
        }
        None => {
            debug!("No empty cell to play");
            None
        }
    }
}
