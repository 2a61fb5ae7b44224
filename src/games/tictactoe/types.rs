//! Core domain types for tic-tac-toe.

use super::position::Cell;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person at the camera (always moves first in a round).
    Human,
    /// The minimax opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Placed by the human.
    Human,
    /// Placed by the computer.
    Computer,
}

impl Mark {
    /// The player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
        }
    }

    /// Single-character symbol: `O` for the human, `X` for the computer.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::Human => 'O',
            Mark::Computer => 'X',
        }
    }
}

/// 3x3 grid of marks in row-major order.
///
/// `Grid` is a plain value: pure functions receive it by reference or copy
/// and can never observe a board that is being mutated elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    marks: [Mark; 9],
}

impl Grid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from marks in cell-index order.
    pub fn from_marks(marks: [Mark; 9]) -> Self {
        Self { marks }
    }

    /// Mark at the given cell.
    pub fn get(&self, cell: Cell) -> Mark {
        self.marks[cell.index()]
    }

    /// Overwrites the mark at the given cell.
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.marks[cell.index()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Mark::Empty
    }

    /// All marks in cell-index order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Empty cells in increasing index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|&cell| self.is_empty(cell))
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Formats the grid as three rows, empty cells shown by their index.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.marks[pos] {
                    Mark::Empty => char::from(b'0' + pos as u8),
                    mark => mark.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mark in self.marks {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Error parsing a grid from its 9-character text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The text did not have exactly nine cells.
    #[display("Expected 9 cells, found {}", found)]
    WrongLength {
        /// Number of cells present.
        found: usize,
    },
    /// A character did not name a mark.
    #[display("Unknown mark {:?} at cell {}", symbol, index)]
    UnknownMark {
        /// Offending character.
        symbol: char,
        /// Cell index of the character.
        index: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Accepts `O`/`H` for the human, `X`/`C` for the computer and
    /// `_`, `.` or `-` for empty cells. Whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != 9 {
            return Err(GridParseError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut marks = [Mark::Empty; 9];
        for (index, symbol) in symbols.into_iter().enumerate() {
            marks[index] = match symbol.to_ascii_uppercase() {
                'O' | 'H' => Mark::Human,
                'X' | 'C' => Mark::Computer,
                '_' | '.' | '-' => Mark::Empty,
                _ => return Err(GridParseError::UnknownMark { symbol, index }),
            };
        }
        Ok(Self { marks })
    }
}

/// Status of a round, always derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// The human completed a line.
    HumanWins,
    /// The computer completed a line.
    ComputerWins,
    /// Full grid, no line.
    Draw,
}

impl GameStatus {
    /// True for every status except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Status for a win by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWins,
            Player::Computer => GameStatus::ComputerWins,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::HumanWins => write!(f, "You win"),
            GameStatus::ComputerWins => write!(f, "Computer wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
