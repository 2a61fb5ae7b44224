//! Minimax scoring over the full game tree.

use super::super::{rules, Cell, GameStatus, Grid, Mark, Player};
use tracing::{instrument, trace};

/// Score of a position the computer has won.
pub const WIN: i8 = 1;
/// Score of a drawn position.
pub const DRAW: i8 = 0;
/// Score of a position the human has won.
pub const LOSS: i8 = -1;

/// Value of a finished grid, or `None` while moves remain.
fn terminal_score(grid: &Grid) -> Option<i8> {
    match rules::evaluate(grid) {
        GameStatus::ComputerWins => Some(WIN),
        GameStatus::HumanWins => Some(LOSS),
        GameStatus::Draw => Some(DRAW),
        GameStatus::InProgress => None,
    }
}

/// Scores `grid` with `to_move` about to play, assuming perfect play.
///
/// Returns [`WIN`], [`DRAW`] or [`LOSS`]. The search works on a private
/// copy of the grid, placing and lifting marks as it recurses; the caller's
/// grid is never modified. Alpha-beta pruning cuts branches that cannot
/// change the result, so the value always equals [`score_exhaustive`].
#[instrument(level = "trace", skip(grid), fields(grid = %grid))]
pub fn score(grid: &Grid, to_move: Player) -> i8 {
    let mut scratch = *grid;
    let mut nodes = 0u64;
    let value = alpha_beta(&mut scratch, to_move, LOSS - 1, WIN + 1, &mut nodes);
    trace!(value, nodes, "Position scored");
    value
}

fn alpha_beta(grid: &mut Grid, to_move: Player, mut alpha: i8, mut beta: i8, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if let Some(value) = terminal_score(grid) {
        return value;
    }

    let maximizing = to_move == Player::Computer;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for cell in Cell::ALL {
        if !grid.is_empty(cell) {
            continue;
        }

        grid.set(cell, to_move.mark());
        let value = alpha_beta(grid, to_move.opponent(), alpha, beta, nodes);
        grid.set(cell, Mark::Empty);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Plain minimax without pruning.
///
/// Visits every node of the remaining tree. Kept as the reference that the
/// pruned [`score`] is checked against.
pub fn score_exhaustive(grid: &Grid, to_move: Player) -> i8 {
    let mut scratch = *grid;
    minimax(&mut scratch, to_move)
}

fn minimax(grid: &mut Grid, to_move: Player) -> i8 {
    if let Some(value) = terminal_score(grid) {
        return value;
    }

    let mut scores = Vec::with_capacity(9);
    for cell in Cell::ALL {
        if grid.is_empty(cell) {
            grid.set(cell, to_move.mark());
            scores.push(minimax(grid, to_move.opponent()));
            grid.set(cell, Mark::Empty);
        }
    }

    let best = match to_move {
        Player::Computer => scores.iter().max(),
        Player::Human => scores.iter().min(),
    };
    // A grid that is not terminal always has an empty cell.
    best.copied().unwrap_or(DRAW)
}
