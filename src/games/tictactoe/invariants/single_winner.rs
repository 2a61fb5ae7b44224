//! Single winner invariant: completed lines never belong to both players.

use super::super::rules::LINES;
use super::super::{BoardState, Player};
use super::Invariant;

/// Invariant: at most one player owns a completed line.
///
/// Win detection reports the first completed line it finds. Play stops at
/// the first completed line, so a second owner can only appear through a
/// corrupted board; this check makes that precondition explicit.
pub struct SingleWinnerInvariant;

impl Invariant<BoardState> for SingleWinnerInvariant {
    fn holds(board: &BoardState) -> bool {
        let grid = board.grid();
        let owns_line = |player: Player| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&cell| grid.get(cell) == player.mark()))
        };
        !(owns_line(Player::Human) && owns_line(Player::Computer))
    }

    fn description() -> &'static str {
        "At most one player owns a completed line"
    }
}
