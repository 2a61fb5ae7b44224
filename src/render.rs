//! Plain-text rendering of controller frames.

use crate::controller::{Frame, Phase};
use crate::games::tictactoe::{Cell, GameStatus, Mark};

/// Draws a frame as a three-row board followed by a status line.
///
/// The hovered cell is bracketed, cells of the winning line are shown in
/// lowercase, and free cells show their index.
pub fn render_text(frame: &Frame) -> String {
    let grid = frame.grid();
    let mut out = String::new();

    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let cell = Cell::ALL[index];
            let mark = grid.get(cell);
            let mut symbol = match mark {
                Mark::Empty => char::from(b'0' + index as u8),
                other => other.symbol(),
            };
            if frame
                .winning_line()
                .is_some_and(|line| line.contains(&cell))
            {
                symbol = symbol.to_ascii_lowercase();
            }

            if *frame.hovered() == Some(cell) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push_str(&status_line(frame));
    out
}

/// One-line summary of phase, status and tally.
pub fn status_line(frame: &Frame) -> String {
    let headline = match (frame.phase(), frame.status()) {
        (Phase::RoundOver, GameStatus::HumanWins) => "You win! Type 'reset' for a new round.".to_string(),
        (Phase::RoundOver, GameStatus::ComputerWins) => {
            "Computer wins. Type 'reset' for a new round.".to_string()
        }
        (Phase::RoundOver, _) => "Draw. Type 'reset' for a new round.".to_string(),
        (phase, _) => phase.to_string(),
    };
    let tally = frame.tally();
    format!(
        "{} (you {} / computer {} / draws {})",
        headline,
        tally.human_wins(),
        tally.computer_wins(),
        tally.draws()
    )
}
