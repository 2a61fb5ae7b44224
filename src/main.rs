//! Strictly Tic-Tac-Toe - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_tictactoe::{
    render_text, rules, search, Cell, EngineConfig, Frame, GameSession, Grid, PointerSample,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play { delay_ms, json } => {
            let config = match delay_ms {
                Some(ms) => config.with_thinking_delay_ms(ms),
                None => config,
            };
            run_play(config, json).await
        }
        Command::Solve { grid } => run_solve(&grid),
    }
}

/// Reads the config file if one was given, otherwise uses defaults.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::from_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum InputLine {
    Confirm(Cell),
    Pointer(PointerSample, bool),
    Away,
    Reset,
    Quit,
}

fn parse_line(line: &str) -> Option<InputLine> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    match first.to_lowercase().as_str() {
        "reset" => Some(InputLine::Reset),
        "quit" | "exit" => Some(InputLine::Quit),
        "away" => Some(InputLine::Away),
        "p" => {
            let x = words.next()?.parse().ok()?;
            let y = words.next()?.parse().ok()?;
            let confirm = words.next().is_some();
            Some(InputLine::Pointer(PointerSample::new(x, y), confirm))
        }
        _ => Cell::from_label_or_number(line).map(InputLine::Confirm),
    }
}

fn print_frame(frame: &Frame, json: bool) {
    if json {
        match serde_json::to_string(frame) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(error = %e, "Failed to encode frame"),
        }
    } else {
        println!("{}\n", render_text(frame));
    }
}

/// Runs the interactive game loop on stdin/stdout.
#[instrument(skip(config))]
async fn run_play(config: EngineConfig, json: bool) -> Result<()> {
    info!(delay_ms = config.thinking_delay_ms(), "Starting game");
    let mut session = GameSession::new(&config);

    let mut frames = session.frames();
    print_frame(&frames.borrow_and_update(), json);
    let printer = tokio::spawn(async move {
        while frames.changed().await.is_ok() {
            let frame = frames.borrow_and_update().clone();
            print_frame(&frame, json);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let Some(input) = parse_line(&line) else {
            eprintln!("Unrecognised input: {}", line.trim());
            continue;
        };
        debug!(?input, "Input line");

        let outcome = match input {
            InputLine::Confirm(cell) => {
                // A tap: hover the cell, close the hand, open it again.
                let pointer = Some(PointerSample::center_of(cell));
                let outcome = session.on_sample(pointer, true);
                session.on_sample(pointer, false);
                if outcome.is_none() {
                    eprintln!("{} is not available right now", cell);
                }
                outcome
            }
            InputLine::Pointer(sample, confirm) => session.on_sample(Some(sample), confirm),
            InputLine::Away => session.on_sample(None, false),
            InputLine::Reset => {
                session.reset();
                None
            }
            InputLine::Quit => break,
        };

        if let Some(Err(e)) = outcome {
            eprintln!("Move rejected: {}", e);
        }
    }

    // Let a pending reply land before exiting.
    session.controller().settled().await;
    drop(session);
    // The printer exits once the last controller handle is gone.
    if let Err(e) = printer.await {
        warn!(error = %e, "Frame printer failed");
    }
    Ok(())
}

/// Prints the score of every computer reply and the one it would pick.
#[instrument]
fn run_solve(text: &str) -> Result<()> {
    let grid: Grid = text.parse().context("Invalid grid")?;
    println!("{}\n", grid.display());
    println!("Status: {}", rules::evaluate(&grid));

    for (cell, value) in search::ranked_moves(&grid) {
        println!("  {:>13} ({}): {:+}", cell.label(), cell.index(), value);
    }

    match search::pick_move(&grid) {
        Some(cell) => println!("Best move: {} ({})", cell.label(), cell.index()),
        None => println!("No moves left"),
    }
    Ok(())
}
