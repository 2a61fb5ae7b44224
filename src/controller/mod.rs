//! Turn-taking state machine: a human move, then the computer's reply.

mod frame;

pub use frame::{Frame, Phase, RoundTally};

use crate::config::EngineConfig;
use crate::games::tictactoe::{search, BoardState, Cell, GameStatus, Grid, IllegalMove, Move, Player};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// The scheduled computer reply. While one exists, no move is accepted.
#[derive(Debug)]
struct PendingReply {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Debug)]
struct Inner {
    board: BoardState,
    phase: Phase,
    hovered: Option<Cell>,
    pending: Option<PendingReply>,
    /// Bumped on every reset so a reply scheduled earlier can tell it is stale.
    generation: u64,
    tally: RoundTally,
}

impl Inner {
    fn frame(&self) -> Frame {
        Frame::new(
            self.board.snapshot(),
            self.hovered,
            self.phase,
            self.board.history().last().copied(),
            self.tally,
        )
    }

    /// True when a reset happened after the reply for `generation` was
    /// scheduled.
    fn is_stale(&self, generation: u64) -> bool {
        if self.generation != generation {
            debug!(generation, current = self.generation, "Stale computer reply discarded");
            return true;
        }
        false
    }

    fn finish_round(&mut self, status: GameStatus) {
        self.phase = Phase::RoundOver;
        self.tally.record(status);
        info!(%status, moves = self.board.history().len(), "Round over");
    }
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    frames: watch::Sender<Frame>,
    delay: Duration,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) {
        self.frames.send_replace(inner.frame());
    }
}

/// Owns the board and sequences each human move with the computer's reply.
///
/// Phases move `AwaitingHuman -> ComputerThinking -> AwaitingHuman` until a
/// move decides the round, which parks the controller in `RoundOver` until
/// [`TurnController::reset`]. The reply runs on a Tokio task after the
/// configured thinking delay; the task handle doubles as the lock that
/// rejects human input in the meantime.
///
/// Cloning yields another handle to the same game.
#[derive(Debug, Clone)]
pub struct TurnController {
    shared: Arc<Shared>,
}

impl TurnController {
    /// Creates a controller using the configured thinking delay.
    #[instrument(skip(config))]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_delay(config.thinking_delay())
    }

    /// Creates a controller with an explicit thinking delay.
    #[instrument]
    pub fn with_delay(delay: Duration) -> Self {
        Self::from_parts(BoardState::new(), Phase::AwaitingHuman, delay)
    }

    /// Continues a round from an existing board.
    ///
    /// A decided board starts in `RoundOver`, otherwise in `AwaitingHuman`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::WrongTurn`] if the board is undecided and
    /// waiting for the computer.
    #[instrument(skip(board), fields(moves = board.history().len()))]
    pub fn resume(board: BoardState, delay: Duration) -> Result<Self, IllegalMove> {
        let phase = if board.status().is_terminal() {
            Phase::RoundOver
        } else if board.to_move() == Player::Human {
            Phase::AwaitingHuman
        } else {
            return Err(IllegalMove::WrongTurn {
                expected: Player::Human,
                found: Player::Computer,
            });
        };
        Ok(Self::from_parts(board, phase, delay))
    }

    fn from_parts(board: BoardState, phase: Phase, delay: Duration) -> Self {
        let inner = Inner {
            board,
            phase,
            hovered: None,
            pending: None,
            generation: 0,
            tally: RoundTally::default(),
        };
        let (frames, _) = watch::channel(inner.frame());
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                frames,
                delay,
            }),
        }
    }

    /// Submits the human's move and schedules the computer's reply.
    ///
    /// Returns the phase entered: `ComputerThinking` while the reply is
    /// pending, or `RoundOver` if this move decided the round.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::ComputerThinking`] while a reply is pending
    /// - [`IllegalMove::RoundOver`] after the round is decided
    /// - [`IllegalMove::NoRuntime`] outside a Tokio runtime
    /// - [`IllegalMove::CellOccupied`] if the cell is taken
    #[instrument(skip(self))]
    pub fn submit_human_move(&self, cell: Cell) -> Result<Phase, IllegalMove> {
        let mut inner = self.shared.lock();

        match inner.phase {
            Phase::AwaitingHuman if inner.pending.is_none() => {}
            Phase::RoundOver => {
                debug!("Move rejected, round is over");
                return Err(IllegalMove::RoundOver);
            }
            Phase::AwaitingHuman | Phase::ComputerThinking => {
                debug!("Move rejected, computer is thinking");
                return Err(IllegalMove::ComputerThinking);
            }
        }

        // The reply task needs a runtime; find it before the board changes.
        let runtime = Handle::try_current().map_err(|_| {
            warn!("Move rejected, no Tokio runtime for the computer's reply");
            IllegalMove::NoRuntime
        })?;

        inner.board.apply(Move::new(Player::Human, cell))?;

        let status = inner.board.status();
        if status.is_terminal() {
            inner.finish_round(status);
            self.shared.publish(&inner);
            return Ok(Phase::RoundOver);
        }

        inner.phase = Phase::ComputerThinking;
        let generation = inner.generation;
        let handle = runtime.spawn(reply_after_delay(Arc::clone(&self.shared), generation));
        inner.pending = Some(PendingReply { generation, handle });
        debug!(generation, delay = ?self.shared.delay, "Computer reply scheduled");

        self.shared.publish(&inner);
        Ok(Phase::ComputerThinking)
    }

    /// Starts a new round from any phase.
    ///
    /// A pending computer reply is cancelled and its move discarded.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        let mut inner = self.shared.lock();

        if let Some(pending) = inner.pending.take() {
            pending.handle.abort();
            info!(generation = pending.generation, "Pending computer reply cancelled");
        }

        inner.generation += 1;
        inner.board.reset();
        inner.phase = Phase::AwaitingHuman;
        debug!(generation = inner.generation, "Board reset");

        self.shared.publish(&inner);
    }

    /// Updates the hovered cell, publishing a frame only when it changes.
    pub fn set_hovered(&self, hovered: Option<Cell>) {
        let mut inner = self.shared.lock();
        if inner.hovered != hovered {
            inner.hovered = hovered;
            self.shared.publish(&inner);
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.shared.lock().phase
    }

    /// Copy of the grid.
    pub fn snapshot(&self) -> Grid {
        self.shared.lock().board.snapshot()
    }

    /// Status derived from the grid.
    pub fn status(&self) -> GameStatus {
        self.shared.lock().board.status()
    }

    /// Whether `cell` is free.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.shared.lock().board.is_empty(cell)
    }

    /// Finished rounds so far.
    pub fn tally(&self) -> RoundTally {
        self.shared.lock().tally
    }

    /// Moves of the current round.
    pub fn history(&self) -> Vec<Move> {
        self.shared.lock().board.history().to_vec()
    }

    /// Latest published frame.
    pub fn frame(&self) -> Frame {
        self.shared.frames.borrow().clone()
    }

    /// Receiver that observes a new frame after every state change.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.shared.frames.subscribe()
    }

    /// Waits until no computer reply is pending and returns that frame.
    pub async fn settled(&self) -> Frame {
        let mut frames = self.subscribe();
        match frames
            .wait_for(|frame| *frame.phase() != Phase::ComputerThinking)
            .await
        {
            Ok(frame) => frame.clone(),
            // The sender lives as long as `self`, so this is unreachable.
            Err(_) => self.frame(),
        }
    }
}

/// Body of the scheduled reply task.
///
/// The search runs on a snapshot without holding the state lock; the
/// generation is checked again before the move is applied in case a reset
/// slipped in meanwhile. A reply that cannot be applied parks the round in
/// `RoundOver` so only a reset is accepted.
async fn reply_after_delay(shared: Arc<Shared>, generation: u64) {
    tokio::time::sleep(shared.delay).await;

    let grid = {
        let inner = shared.lock();
        if inner.is_stale(generation) {
            return;
        }
        inner.board.snapshot()
    };

    let choice = search::pick_move(&grid);

    let mut inner = shared.lock();
    if inner.is_stale(generation) {
        return;
    }
    inner.pending = None;

    let applied = match choice {
        Some(cell) => match inner.board.apply(Move::new(Player::Computer, cell)) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, %cell, "Computer move rejected");
                false
            }
        },
        None => {
            warn!("Computer had no move on an unfinished round");
            false
        }
    };

    let status = inner.board.status();
    if !applied {
        inner.phase = Phase::RoundOver;
        warn!(%status, "Round halted until reset");
    } else if status.is_terminal() {
        inner.finish_round(status);
    } else {
        inner.phase = Phase::AwaitingHuman;
    }
    shared.publish(&inner);
}
