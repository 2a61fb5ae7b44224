//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{IllegalMove, Move};
use super::board::BoardState;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), IllegalMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The grid must not be decided yet.
pub struct RoundIsLive;

impl RoundIsLive {
    /// Rejects any move once a line is complete or the grid is full.
    pub fn check(board: &BoardState) -> Result<(), IllegalMove> {
        if rules::evaluate(board.grid()).is_terminal() {
            Err(IllegalMove::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    pub fn check(mov: &Move, board: &BoardState) -> Result<(), IllegalMove> {
        if board.is_empty(mov.cell) {
            Ok(())
        } else {
            Err(IllegalMove::CellOccupied(mov.cell))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who just moved.
    pub fn check(mov: &Move, board: &BoardState) -> Result<(), IllegalMove> {
        if mov.player == board.to_move() {
            Ok(())
        } else {
            Err(IllegalMove::WrongTurn {
                expected: board.to_move(),
                found: mov.player,
            })
        }
    }
}

/// Composite precondition: live round, empty cell, right player.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &BoardState) -> Result<(), IllegalMove> {
        RoundIsLive::check(board)?;
        CellIsEmpty::check(mov, board)?;
        PlayersTurn::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move to a [`BoardState`].
///
/// Preconditions:
/// - Round is not decided
/// - Cell must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one more move in history
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<BoardState, Move> for MoveContract {
    fn pre(board: &BoardState, action: &Move) -> Result<(), IllegalMove> {
        LegalMove::check(action, board)
    }

    fn post(before: &BoardState, after: &BoardState) -> Result<(), IllegalMove> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(IllegalMove::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            IllegalMove::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
