//! Tests for the turn controller state machine.

use std::time::Duration;
use strictly_tictactoe::{
    BoardState, Cell, GameStatus, Grid, IllegalMove, Mark, Move, Phase, Player, TurnController,
};

const DELAY: Duration = Duration::from_millis(400);

#[tokio::test(start_paused = true)]
async fn test_center_opening_gets_one_reply() {
    let controller = TurnController::with_delay(DELAY);
    assert_eq!(controller.phase(), Phase::AwaitingHuman);

    let phase = controller.submit_human_move(Cell::Center).expect("legal move");
    assert_eq!(phase, Phase::ComputerThinking);

    let frame = controller.settled().await;
    assert_eq!(*frame.phase(), Phase::AwaitingHuman);
    assert_eq!(*frame.status(), GameStatus::InProgress);
    assert_eq!(frame.grid().count(Mark::Human), 1);
    assert_eq!(frame.grid().count(Mark::Computer), 1);
    assert_eq!(frame.last_move().map(|m| m.player), Some(Player::Computer));
}

#[tokio::test(start_paused = true)]
async fn test_back_to_back_moves_accept_exactly_one() {
    let controller = TurnController::with_delay(DELAY);

    let first = controller.submit_human_move(Cell::Center);
    let second = controller.submit_human_move(Cell::TopLeft);

    assert_eq!(first, Ok(Phase::ComputerThinking));
    assert_eq!(second, Err(IllegalMove::ComputerThinking));
    assert_eq!(controller.snapshot().count(Mark::Human), 1);

    // Still rejected right up to the reply.
    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert_eq!(
        controller.submit_human_move(Cell::BottomRight),
        Err(IllegalMove::ComputerThinking)
    );

    controller.settled().await;
    assert_eq!(controller.snapshot().count(Mark::Human), 1);
    assert_eq!(controller.snapshot().count(Mark::Computer), 1);
}

#[tokio::test(start_paused = true)]
async fn test_occupied_cell_rejected_without_change() {
    let controller = TurnController::with_delay(DELAY);
    controller.submit_human_move(Cell::Center).expect("legal move");
    controller.settled().await;

    let before = controller.snapshot();
    assert_eq!(
        controller.submit_human_move(Cell::Center),
        Err(IllegalMove::CellOccupied(Cell::Center))
    );
    assert_eq!(controller.snapshot(), before);
    assert_eq!(controller.phase(), Phase::AwaitingHuman);
}

#[tokio::test(start_paused = true)]
async fn test_counts_balance_after_each_round_trip() {
    let controller = TurnController::with_delay(DELAY);

    loop {
        let grid = controller.snapshot();
        let Some(cell) = grid.empty_cells().next() else {
            break;
        };
        match controller.submit_human_move(cell) {
            Ok(Phase::RoundOver) => break,
            Ok(_) => {}
            Err(e) => panic!("unexpected rejection: {e}"),
        }

        let frame = controller.settled().await;
        if *frame.phase() == Phase::RoundOver {
            break;
        }
        assert_eq!(
            frame.grid().count(Mark::Human),
            frame.grid().count(Mark::Computer)
        );
    }

    assert_eq!(controller.phase(), Phase::RoundOver);
    assert_ne!(controller.status(), GameStatus::HumanWins);
}

#[tokio::test(start_paused = true)]
async fn test_winning_move_ends_round_without_reply() {
    // O O _ / X X _ / _ _ _ with the human to move.
    let board = BoardState::replay(&[
        Move::new(Player::Human, Cell::TopLeft),
        Move::new(Player::Computer, Cell::MiddleLeft),
        Move::new(Player::Human, Cell::TopCenter),
        Move::new(Player::Computer, Cell::Center),
    ])
    .expect("legal moves");
    let controller = TurnController::resume(board, DELAY).expect("human to move");

    assert_eq!(controller.submit_human_move(Cell::TopRight), Ok(Phase::RoundOver));
    assert_eq!(controller.status(), GameStatus::HumanWins);

    tokio::time::sleep(DELAY * 3).await;
    assert_eq!(controller.snapshot().count(Mark::Computer), 2);
    assert_eq!(controller.history().len(), 5);
    assert_eq!(*controller.tally().human_wins(), 1);

    let frame = controller.frame();
    assert_eq!(
        *frame.winning_line(),
        Some([Cell::TopLeft, Cell::TopCenter, Cell::TopRight])
    );
}

#[tokio::test(start_paused = true)]
async fn test_round_over_accepts_only_reset() {
    let board = BoardState::replay(&[
        Move::new(Player::Human, Cell::TopLeft),
        Move::new(Player::Computer, Cell::MiddleLeft),
        Move::new(Player::Human, Cell::TopCenter),
        Move::new(Player::Computer, Cell::Center),
        Move::new(Player::Human, Cell::TopRight),
    ])
    .expect("legal moves");
    let controller = TurnController::resume(board, DELAY).expect("decided board");
    assert_eq!(controller.phase(), Phase::RoundOver);

    assert_eq!(
        controller.submit_human_move(Cell::BottomRight),
        Err(IllegalMove::RoundOver)
    );

    controller.reset();
    assert_eq!(controller.phase(), Phase::AwaitingHuman);
    assert_eq!(controller.snapshot(), Grid::new());
    assert_eq!(controller.submit_human_move(Cell::BottomRight), Ok(Phase::ComputerThinking));
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_pending_reply() {
    let controller = TurnController::with_delay(DELAY);
    controller.submit_human_move(Cell::Center).expect("legal move");
    assert_eq!(controller.phase(), Phase::ComputerThinking);

    tokio::time::sleep(DELAY / 2).await;
    controller.reset();

    assert_eq!(controller.phase(), Phase::AwaitingHuman);
    assert_eq!(controller.snapshot(), Grid::new());

    // The cancelled reply never lands.
    tokio::time::sleep(DELAY * 3).await;
    assert_eq!(controller.snapshot(), Grid::new());
    assert_eq!(controller.phase(), Phase::AwaitingHuman);
    assert!(controller.history().is_empty());

    // And the lock is free again.
    assert_eq!(controller.submit_human_move(Cell::TopLeft), Ok(Phase::ComputerThinking));
}

#[test]
fn test_resume_rejects_computer_to_move() {
    let board = BoardState::replay(&[Move::new(Player::Human, Cell::Center)]).expect("legal move");
    let result = TurnController::resume(board, DELAY);
    assert!(matches!(result, Err(IllegalMove::WrongTurn { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_frames_follow_each_transition() {
    let controller = TurnController::with_delay(DELAY);
    let mut frames = controller.subscribe();

    controller.submit_human_move(Cell::Center).expect("legal move");
    frames.changed().await.expect("sender alive");
    assert_eq!(*frames.borrow_and_update().phase(), Phase::ComputerThinking);

    frames.changed().await.expect("sender alive");
    let frame = frames.borrow_and_update().clone();
    assert_eq!(*frame.phase(), Phase::AwaitingHuman);
    assert_eq!(frame.grid().count(Mark::Computer), 1);
}
