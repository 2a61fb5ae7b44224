//! Maps a pointer stream and a confirm signal to hovered cells and moves.

use crate::games::tictactoe::Cell;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A pointer position normalised to the board, `(0, 0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Horizontal position in `[0, 1)`.
    pub x: f32,
    /// Vertical position in `[0, 1)`, growing downward.
    pub y: f32,
}

impl PointerSample {
    /// Creates a sample.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Sample at the center of `cell`.
    pub fn center_of(cell: Cell) -> Self {
        Self {
            x: (cell.col() as f32 + 0.5) / 3.0,
            y: (cell.row() as f32 + 0.5) / 3.0,
        }
    }

    /// Cell under the pointer, or `None` outside the board (or for NaN).
    pub fn cell(&self) -> Option<Cell> {
        let col = (self.x * 3.0).floor();
        let row = (self.y * 3.0).floor();
        if (0.0..3.0).contains(&col) && (0.0..3.0).contains(&row) {
            Cell::from_row_col(row as usize, col as usize)
        } else {
            None
        }
    }
}

/// Result of feeding one sample to the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedInput {
    /// Cell under the pointer.
    pub hovered: Option<Cell>,
    /// Cell to submit, set only on the rising edge of the confirm signal.
    pub submit: Option<Cell>,
}

/// Turns a continuous pointer plus a held confirm signal into discrete
/// submissions.
///
/// Holding the confirm pose produces one submission, not one per frame:
/// the signal must be released before it can fire again.
#[derive(Debug, Clone, Default)]
pub struct InputGestureMapper {
    hovered: Option<Cell>,
    confirm_held: bool,
}

impl InputGestureMapper {
    /// Creates a mapper with nothing hovered and the signal released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one sample. `pointer` is `None` when no hand is tracked.
    pub fn update(&mut self, pointer: Option<PointerSample>, confirm: bool) -> MappedInput {
        self.hovered = pointer.and_then(|p| p.cell());

        let rising = confirm && !self.confirm_held;
        self.confirm_held = confirm;

        let submit = if rising { self.hovered } else { None };
        if let Some(cell) = submit {
            trace!(%cell, "Confirm edge on hovered cell");
        }

        MappedInput {
            hovered: self.hovered,
            submit,
        }
    }

    /// Cell hovered by the last sample.
    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_to_cell() {
        assert_eq!(PointerSample::new(0.0, 0.0).cell(), Some(Cell::TopLeft));
        assert_eq!(PointerSample::new(0.5, 0.5).cell(), Some(Cell::Center));
        assert_eq!(PointerSample::new(0.99, 0.4).cell(), Some(Cell::MiddleRight));
        assert_eq!(PointerSample::new(0.34, 0.99).cell(), Some(Cell::BottomCenter));
    }

    #[test]
    fn test_pointer_out_of_range() {
        assert_eq!(PointerSample::new(1.0, 0.5).cell(), None);
        assert_eq!(PointerSample::new(-0.01, 0.5).cell(), None);
        assert_eq!(PointerSample::new(0.5, 1.2).cell(), None);
        assert_eq!(PointerSample::new(f32::NAN, 0.5).cell(), None);
    }

    #[test]
    fn test_center_of_maps_back() {
        for cell in Cell::ALL {
            assert_eq!(PointerSample::center_of(cell).cell(), Some(cell));
        }
    }

    #[test]
    fn test_rising_edge_submits_once() {
        let mut mapper = InputGestureMapper::new();
        let center = Some(PointerSample::center_of(Cell::Center));

        assert_eq!(mapper.update(center, false).submit, None);
        assert_eq!(mapper.update(center, true).submit, Some(Cell::Center));
        // Held: no repeat.
        assert_eq!(mapper.update(center, true).submit, None);
        assert_eq!(mapper.update(center, false).submit, None);
        assert_eq!(mapper.update(center, true).submit, Some(Cell::Center));
    }

    #[test]
    fn test_edge_off_board_is_lost() {
        let mut mapper = InputGestureMapper::new();
        let off = Some(PointerSample::new(1.5, 0.5));
        let out = mapper.update(off, true);
        assert_eq!(out, MappedInput { hovered: None, submit: None });

        // Still held when moving onto the board: no submission.
        let on = Some(PointerSample::center_of(Cell::TopLeft));
        assert_eq!(mapper.update(on, true).submit, None);
        assert_eq!(mapper.hovered(), Some(Cell::TopLeft));
    }

    #[test]
    fn test_lost_hand_clears_hover() {
        let mut mapper = InputGestureMapper::new();
        mapper.update(Some(PointerSample::center_of(Cell::Center)), false);
        assert_eq!(mapper.update(None, false).hovered, None);
    }
}
