//! One player's game: input mapping, gesture classification and the turn
//! controller wired together.

use crate::config::EngineConfig;
use crate::controller::{Frame, Phase, TurnController};
use crate::games::tictactoe::IllegalMove;
use crate::input::{classifier_for, GestureClassifier, HandLandmarks, InputGestureMapper, PointerSample};
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Feeds per-frame input into a [`TurnController`].
///
/// A confirm edge only becomes a move when the controller is waiting for
/// the human and the hovered cell is empty; anything else is dropped
/// without touching the board.
#[derive(Debug)]
pub struct GameSession {
    controller: TurnController,
    mapper: InputGestureMapper,
    classifier: Box<dyn GestureClassifier>,
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_parts(TurnController::new(config), classifier_for(config))
    }

    /// Creates a session from an existing controller and classifier.
    pub fn with_parts(controller: TurnController, classifier: Box<dyn GestureClassifier>) -> Self {
        Self {
            controller,
            mapper: InputGestureMapper::new(),
            classifier,
        }
    }

    /// Handles one frame of hand tracking. `None` means no hand was found.
    ///
    /// Returns the controller's answer when the frame submitted a move.
    pub fn on_hand(&mut self, hand: Option<&HandLandmarks>) -> Option<Result<Phase, IllegalMove>> {
        let pointer = hand.map(HandLandmarks::pointer);
        let confirm = hand.is_some_and(|hand| self.classifier.is_confirm(hand));
        self.on_sample(pointer, confirm)
    }

    /// Handles one pointer sample with an explicit confirm signal.
    pub fn on_sample(
        &mut self,
        pointer: Option<PointerSample>,
        confirm: bool,
    ) -> Option<Result<Phase, IllegalMove>> {
        let mapped = self.mapper.update(pointer, confirm);
        self.controller.set_hovered(mapped.hovered);

        let cell = mapped.submit?;
        if self.controller.phase() != Phase::AwaitingHuman || !self.controller.is_empty(cell) {
            debug!(%cell, phase = ?self.controller.phase(), "Confirm ignored");
            return None;
        }
        Some(self.controller.submit_human_move(cell))
    }

    /// Starts a new round, cancelling any pending computer reply.
    pub fn reset(&self) {
        self.controller.reset();
    }

    /// The underlying controller.
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// Receiver for render frames.
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.controller.subscribe()
    }
}
