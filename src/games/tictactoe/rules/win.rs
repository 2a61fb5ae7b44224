//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Grid, Player};

/// The eight winning lines, in the order they are scanned.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the first completed line in [`LINES`] order, with its owner.
///
/// A grid reached by alternating single moves has at most one owner of
/// completed lines, but this function does not rely on it: with two
/// owners present the earlier line in scan order wins.
pub fn winning_line(grid: &Grid) -> Option<(Player, [Cell; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let mark = grid.get(a);
        if mark == grid.get(b) && mark == grid.get(c) {
            mark.player().map(|player| (player, [a, b, c]))
        } else {
            None
        }
    })
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(grid: &Grid) -> Option<Player> {
    winning_line(grid).map(|(player, _)| player)
}
