//! Tic-tac-toe against an unbeatable opponent.
//!
//! - [`types`]: cells, marks, grids and derived status
//! - [`rules`]: win and draw detection on grid snapshots
//! - [`search`]: minimax scoring and move selection
//! - [`BoardState`]: the single mutable owner of a grid, guarded by
//!   [`contracts`] and [`invariants`]

pub mod action;
pub mod board;
pub mod contracts;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod search;
pub mod types;

pub use action::{IllegalMove, Move};
pub use board::BoardState;
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use position::Cell;
pub use types::{GameStatus, Grid, GridParseError, Mark, Player};
