//! Alternating turn invariant: Human, Computer, Human, ...

use super::super::{BoardState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show a Human, Computer, Human, ... pattern and the
/// player to move must follow from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(board: &BoardState) -> bool {
        let history = board.history();

        if let Some(first) = history.first()
            && first.player != Player::Human
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::Human
        } else {
            Player::Computer
        };

        board.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (Human, Computer, Human, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, Move};

    #[test]
    fn test_empty_board_holds() {
        assert!(AlternatingTurnInvariant::holds(&BoardState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut board = BoardState::new();
        for (player, cell) in [
            (Player::Human, Cell::TopLeft),
            (Player::Computer, Cell::Center),
            (Player::Human, Cell::TopRight),
            (Player::Computer, Cell::TopCenter),
            (Player::Human, Cell::BottomCenter),
        ] {
            board.apply(Move::new(player, cell)).expect("legal move");
        }
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.to_move(), Player::Computer);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut board = BoardState::new();
        board.history = vec![
            Move::new(Player::Human, Cell::TopLeft),
            Move::new(Player::Human, Cell::Center),
        ];
        board.to_move = Player::Human;
        assert!(!AlternatingTurnInvariant::holds(&board));
    }

    #[test]
    fn test_computer_opening_violates() {
        let mut board = BoardState::new();
        board.history = vec![Move::new(Player::Computer, Cell::Center)];
        board.to_move = Player::Human;
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
