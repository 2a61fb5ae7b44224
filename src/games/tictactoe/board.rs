//! Mutable board ownership: grid, turn bookkeeping and move history.

use super::action::{IllegalMove, Move};
use super::contracts::{Contract, MoveContract};
use super::{rules, Cell, GameStatus, Grid, Player};
use tracing::{debug, instrument};

/// The single owner of the live grid.
///
/// Every mutation goes through [`BoardState::apply`], which checks the move
/// contract before touching the grid and re-checks the invariant set after
/// it in debug builds. Readers get copies via [`BoardState::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub(super) grid: Grid,
    pub(super) to_move: Player,
    pub(super) history: Vec<Move>,
}

impl BoardState {
    /// Creates an empty board with the human to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            to_move: Player::Human,
            history: Vec::new(),
        }
    }

    /// Rebuilds a board by applying `moves` in order from an empty grid.
    ///
    /// # Errors
    ///
    /// Returns the first move's [`IllegalMove`] that fails to apply.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, IllegalMove> {
        let mut board = Self::new();
        for action in moves {
            board.apply(*action)?;
        }
        Ok(board)
    }

    /// Applies a validated move.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::RoundOver`] if the grid is already decided
    /// - [`IllegalMove::CellOccupied`] if the target cell is not empty
    /// - [`IllegalMove::WrongTurn`] if the move's player is not to move
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply(&mut self, action: Move) -> Result<(), IllegalMove> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.grid.set(action.cell, action.mark());
        self.history.push(action);
        self.to_move = action.player.opponent();
        debug!(%action, grid = %self.grid, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, self) {
            *self = before;
            return Err(violation);
        }

        Ok(())
    }

    /// Copy of the grid for pure consumers.
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Clears the grid and history; the human moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Borrow of the live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status derived from the current grid.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.grid)
    }

    /// Whether `cell` is free.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.grid.is_empty(cell)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
