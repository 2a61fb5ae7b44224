//! Draw detection logic for tic-tac-toe.

use super::super::{Grid, Mark};

/// Checks if the grid is full (no empty cell).
///
/// A full grid with no winner indicates a draw.
pub fn is_full(grid: &Grid) -> bool {
    grid.marks().iter().all(|m| *m != Mark::Empty)
}

/// Full grid and no completed line.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && super::check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut grid = Grid::new();
        grid.set(Cell::Center, Mark::Human);
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_draw_detection() {
        // O X O / O X X / X O O
        let grid: Grid = "OXOOXXXOO".parse().expect("valid grid");
        assert!(is_full(&grid));
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full grid, X owns the middle column.
        let grid: Grid = "OXOOXXXXO".parse().expect("valid grid");
        assert!(is_full(&grid));
        assert!(!is_draw(&grid));
    }
}
