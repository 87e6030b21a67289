//! Reference opponent service.
//!
//! Serves `POST /move` and `GET /reset` so the client can be played and
//! tested locally. The player is `O`, the opponent `X`.

mod opponent;

pub use opponent::best_move;

use anyhow::Result;
use axum::{
    Json, Router,
    body::Body,
    extract::rejection::JsonRejection,
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tracing::{debug, info, instrument, warn};

use crate::game::{Board, LineOutcome, Mark, Position};
use crate::protocol::{MoveRequest, MoveResponse, ResetResponse};

/// Message returned when the target cell is taken.
pub const INVALID_MOVE: &str = "Invalid move";

/// Builds the service routes.
pub fn router() -> Router {
    Router::new()
        .route("/move", post(make_move))
        .route("/reset", get(reset))
        .layer(middleware::from_fn(log_request))
}

/// Binds to `host:port` and serves until the process exits.
#[instrument]
pub async fn serve(host: String, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(address = %listener.local_addr()?, "Opponent service listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    let response = next.run(req).await;
    debug!(status = %response.status(), "Request completed");
    response
}

async fn make_move(
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> (StatusCode, Json<MoveResponse>) {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable move request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MoveResponse::rejected(rejection.body_text())),
            );
        }
    };

    let Some(position) = request.position() else {
        warn!(row = request.row(), col = request.col(), "Move off the board");
        return refused(INVALID_MOVE);
    };

    match resolve_move(*request.board(), position) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(message) => {
            warn!(%position, message, "Move refused");
            refused(message)
        }
    }
}

fn refused(message: &str) -> (StatusCode, Json<MoveResponse>) {
    let body = MoveResponse::rejected(message);
    (StatusCode::BAD_REQUEST, Json(body))
}

async fn reset() -> Json<ResetResponse> {
    Json(ResetResponse {
        board: Board::empty(),
    })
}

/// Applies the player's move and, if the match goes on, the opponent's
/// reply.
///
/// The returned board includes both moves. `draw` reports whether the board
/// is full, so a win on the last cell carries both `winner` and `draw`.
#[instrument]
pub fn resolve_move(mut board: Board, position: Position) -> Result<MoveResponse, &'static str> {
    if !board.is_empty(position) {
        return Err(INVALID_MOVE);
    }
    board.place(position, Mark::Player);

    let mut ai_move = None;
    if board.outcome().is_none()
        && let Some(reply) = best_move(&board)
    {
        debug!(%reply, "Opponent reply chosen");
        board.place(reply, Mark::Opponent);
        ai_move = Some(reply);
    }

    Ok(match board.outcome() {
        Some(outcome) => finished(board, outcome, ai_move),
        None => MoveResponse {
            board: Some(board),
            draw: Some(false),
            ai_move,
            ..MoveResponse::default()
        },
    })
}

fn finished(board: Board, outcome: LineOutcome, ai_move: Option<Position>) -> MoveResponse {
    let (winner, winning_cells) = match outcome {
        LineOutcome::Won { mark, cells } => (Some(mark), Some(cells)),
        LineOutcome::Drawn => (None, None),
    };
    MoveResponse {
        board: Some(board),
        error: None,
        winner,
        draw: Some(board.is_full()),
        winning_cells,
        ai_move,
    }
}
