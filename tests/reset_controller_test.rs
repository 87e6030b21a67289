//! Tests for starting a new match.

mod common;

use common::{accepted, board, controller, pos};
use strictly_client::{
    Board, Mark, MatchState, MoveOutcome, MoveResponse, RESET_FAILED, ResetOutcome,
    ResetResponse, SkipReason, TransportError,
};

fn won_response() -> MoveResponse {
    let mut response = accepted(board(["OOO", "XX.", "..."]));
    response.winner = Some(Mark::Player);
    response.winning_cells = Some([pos(0, 0), pos(0, 1), pos(0, 2)]);
    response
}

#[tokio::test]
async fn test_reset_restores_pristine_view() {
    let (service, mut controller) = controller();
    service.push_move(Ok(won_response()));
    controller.submit_move(pos(0, 2)).await;
    service.push_reset(Ok(ResetResponse {
        board: Board::empty(),
    }));

    let outcome = controller.reset_game().await;

    assert_eq!(outcome, ResetOutcome::Reset);
    assert_eq!(controller.session().state(), &MatchState::Active);
    assert_eq!(controller.session().board(), &Board::empty());
    let surface = controller.view().surface();
    assert_eq!(surface.status(), "");
    assert!(surface.error().is_none());
    assert!(surface.win_line().is_none());
    for position in strictly_client::Position::ALL {
        assert_eq!(surface.cell(position).text(), " ");
        assert_eq!(surface.cell(position).class(), &None);
    }
}

#[tokio::test]
async fn test_reset_allows_play_again() {
    let (service, mut controller) = controller();
    service.push_move(Ok(won_response()));
    controller.submit_move(pos(0, 2)).await;
    service.push_reset(Ok(ResetResponse {
        board: Board::empty(),
    }));
    controller.reset_game().await;

    service.push_move(Ok(accepted(board(["..O", "...", "..."]))));
    let outcome = controller.submit_move(pos(0, 2)).await;

    assert_eq!(outcome, MoveOutcome::Continues);
    assert_eq!(service.requests()[1].board(), &Board::empty());
}

#[tokio::test]
async fn test_reset_uses_server_board() {
    let (service, mut controller) = controller();
    let opening = board(["...", ".X.", "..."]);
    service.push_reset(Ok(ResetResponse { board: opening }));

    controller.reset_game().await;

    assert_eq!(controller.session().board(), &opening);
    assert_eq!(controller.view().surface().cell(pos(1, 1)).text(), "X");
}

#[tokio::test]
async fn test_reset_clears_visible_error() {
    let (service, mut controller) = controller();
    service.push_move(Ok(MoveResponse::rejected("Invalid move")));
    controller.submit_move(pos(1, 1)).await;
    service.push_reset(Ok(ResetResponse {
        board: Board::empty(),
    }));

    controller.reset_game().await;

    assert!(controller.view().surface().error().is_none());
}

#[tokio::test]
async fn test_failed_reset_keeps_session() {
    let (service, mut controller) = controller();
    service.push_move(Ok(won_response()));
    controller.submit_move(pos(0, 2)).await;
    service.push_reset(Err(TransportError::new("connection refused")));

    let outcome = controller.reset_game().await;

    assert_eq!(outcome, ResetOutcome::Failed);
    assert_eq!(controller.session().state(), &MatchState::Won(Mark::Player));
    let surface = controller.view().surface();
    assert_eq!(surface.error().as_deref(), Some(RESET_FAILED));
    assert_eq!(surface.status(), "O wins!");
    assert!(surface.win_line().is_some());
}

#[tokio::test]
async fn test_reset_refused_while_move_pending() {
    let (service, mut controller) = controller();
    let _ticket = controller.begin_move(pos(0, 0)).unwrap();

    let outcome = controller.reset_game().await;

    assert_eq!(outcome, ResetOutcome::Skipped(SkipReason::Busy));
    assert_eq!(service.reset_calls(), 0);
}

#[tokio::test]
async fn test_move_answer_after_reset_is_stale() {
    let (_service, mut controller) = controller();
    let ticket = controller.begin_move(pos(0, 0)).unwrap();
    controller.finish_move(ticket.clone(), Ok(accepted(board(["O..", "...", "..."]))));
    let reset = controller.begin_reset().unwrap();
    controller.finish_reset(
        reset,
        Ok(ResetResponse {
            board: Board::empty(),
        }),
    );

    let outcome = controller.finish_move(ticket, Ok(won_response()));

    assert_eq!(outcome, MoveOutcome::Stale);
    assert_eq!(controller.session().board(), &Board::empty());
    assert_eq!(controller.session().state(), &MatchState::Active);
}
