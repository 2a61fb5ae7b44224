//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - play against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe engine with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the terminal, one input line per frame
    ///
    /// Lines: a cell (`0`-`8` or a label such as `center`) confirms that
    /// cell; `p X Y [confirm]` feeds a pointer sample in [0,1]x[0,1];
    /// `away` reports no hand; `reset` starts a new round; `quit` exits.
    Play {
        /// Override the thinking delay (milliseconds)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print frames as JSON lines instead of a text board
        #[arg(long)]
        json: bool,
    },

    /// Score every computer reply for a grid and print the best one
    Solve {
        /// Nine cells: O/H human, X/C computer, _ . - empty (e.g. "OO_XX____")
        grid: String,
    },
}
