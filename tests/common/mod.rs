//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use strictly_client::{
    Board, Mark, MoveController, MoveRequest, MoveResponse, MoveService, Position,
    ResetResponse, TerminalSurface, TransportError, ViewAdapter,
};
use tokio::time::Duration;

/// Move service that replays scripted answers and records what it was sent.
#[derive(Debug, Default)]
pub struct ScriptedService {
    moves: Mutex<VecDeque<Result<MoveResponse, TransportError>>>,
    resets: Mutex<VecDeque<Result<ResetResponse, TransportError>>>,
    requests: Mutex<Vec<MoveRequest>>,
    reset_calls: Mutex<usize>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_move(&self, answer: Result<MoveResponse, TransportError>) {
        self.moves.lock().unwrap().push_back(answer);
    }

    pub fn push_reset(&self, answer: Result<ResetResponse, TransportError>) {
        self.resets.lock().unwrap().push_back(answer);
    }

    pub fn requests(&self) -> Vec<MoveRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn reset_calls(&self) -> usize {
        *self.reset_calls.lock().unwrap()
    }
}

#[async_trait]
impl MoveService for ScriptedService {
    async fn submit_move(&self, request: &MoveRequest) -> Result<MoveResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.moves
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted move answer")))
    }

    async fn reset(&self) -> Result<ResetResponse, TransportError> {
        *self.reset_calls.lock().unwrap() += 1;
        self.resets
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reset answer")))
    }
}

pub type TestController = MoveController<ScriptedService, TerminalSurface>;

/// Controller on a fresh session with the default three second error delay.
pub fn controller() -> (Arc<ScriptedService>, TestController) {
    let service = Arc::new(ScriptedService::new());
    let view = ViewAdapter::new(TerminalSurface::new(), Duration::from_millis(3000));
    let controller = MoveController::new(Arc::clone(&service), view);
    (service, controller)
}

pub fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

/// Builds a board from three strings of `O`, `X` and `.`.
pub fn board(rows: [&str; 3]) -> Board {
    let cells = rows.map(|row| {
        let mut marks = [Mark::Empty; 3];
        for (mark, symbol) in marks.iter_mut().zip(row.chars()) {
            *mark = match symbol {
                'O' => Mark::Player,
                'X' => Mark::Opponent,
                _ => Mark::Empty,
            };
        }
        marks
    });
    Board::from_rows(cells)
}

/// Accepted move with a board and nothing else.
pub fn accepted(board: Board) -> MoveResponse {
    MoveResponse {
        board: Some(board),
        draw: Some(false),
        ..MoveResponse::default()
    }
}
