//! Cell enum for the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, in row-major order (index 0-8).
///
/// Row and column are `index / 3` and `index % 3`. Indices outside 0-8
/// cannot be represented, so every `Cell` addresses a real square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Converts the cell to its board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a cell from a row and column, both in 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Parse from an index (0-8) or a label (case-insensitive).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Cell> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        <Cell as strum::IntoEnumIterator>::iter().find(|cell| cell.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_row_col() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
            assert_eq!(cell.row(), i / 3);
            assert_eq!(cell.col(), i % 3);
            assert_eq!(Cell::from_row_col(cell.row(), cell.col()), Some(*cell));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Cell::from_index(9), None);
        assert_eq!(Cell::from_row_col(3, 0), None);
        assert_eq!(Cell::from_row_col(0, 3), None);
    }

    #[test]
    fn test_parse_label_or_number() {
        assert_eq!(Cell::from_label_or_number("4"), Some(Cell::Center));
        assert_eq!(Cell::from_label_or_number(" bottom-right "), Some(Cell::BottomRight));
        assert_eq!(Cell::from_label_or_number("12"), None);
        assert_eq!(Cell::from_label_or_number("corner"), None);
    }
}
