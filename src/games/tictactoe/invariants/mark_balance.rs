//! Mark balance invariant: the human is never more than one mark ahead.

use super::super::{BoardState, Mark};
use super::Invariant;

/// Invariant: human marks equal computer marks, or exceed them by one.
///
/// The human always opens a round, so any other difference means a move
/// was placed out of turn.
pub struct MarkBalanceInvariant;

impl Invariant<BoardState> for MarkBalanceInvariant {
    fn holds(board: &BoardState) -> bool {
        let human = board.grid().count(Mark::Human);
        let computer = board.grid().count(Mark::Computer);
        human == computer || human == computer + 1
    }

    fn description() -> &'static str {
        "Human marks equal computer marks or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Move, Player};

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::holds(&BoardState::new()));
    }

    #[test]
    fn test_holds_through_a_round() {
        let mut board = BoardState::new();
        for (player, cell) in [
            (Player::Human, Cell::Center),
            (Player::Computer, Cell::TopLeft),
            (Player::Human, Cell::BottomRight),
        ] {
            board.apply(Move::new(player, cell)).expect("legal move");
            assert!(MarkBalanceInvariant::holds(&board));
        }
    }

    #[test]
    fn test_computer_ahead_violates() {
        let mut board = BoardState::new();
        board.grid.set(Cell::Center, Mark::Computer);
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
