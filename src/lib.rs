//! Strictly Tic-Tac-Toe - a gesture-driven game engine with an unbeatable
//! minimax opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection on [`Grid`] snapshots
//! - **Search**: exhaustive minimax that picks the computer's reply
//! - **Controller**: [`TurnController`], the turn-taking state machine that
//!   owns the board and schedules the computer's reply after a thinking delay
//! - **Input**: pointer-to-cell mapping and pluggable confirm gestures
//! - **Session**: [`GameSession`] wires input into the controller
//!
//! # Example
//!
//! ```no_run
//! use strictly_tictactoe::{Cell, EngineConfig, Phase, TurnController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let controller = TurnController::new(&EngineConfig::default());
//! assert_eq!(controller.submit_human_move(Cell::Center)?, Phase::ComputerThinking);
//!
//! let frame = controller.settled().await;
//! println!("{}", strictly_tictactoe::render_text(&frame));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod games;
mod input;
mod render;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, GestureKind};

// Crate-level exports - Turn controller
pub use controller::{Frame, Phase, RoundTally, TurnController};

// Crate-level exports - Input
pub use input::{
    classifier_for, FistClassifier, GestureClassifier, HandLandmarks, InputGestureMapper, Landmark,
    MappedInput, PinchClassifier, PointerSample, LANDMARK_COUNT,
};

// Crate-level exports - Rendering
pub use render::{render_text, status_line};

// Crate-level exports - Session
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    rules, search, BoardState, Cell, Contract, GameStatus, Grid, GridParseError, IllegalMove,
    Invariant, InvariantSet, InvariantViolation, LegalMove, Mark, Move, MoveContract, Player,
    TicTacToeInvariants,
};
