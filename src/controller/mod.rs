//! Move and reset orchestration.
//!
//! The controller owns the [`Session`] and the view. Each mutating request
//! goes through a single pending slot: while a move or reset is in flight,
//! further submissions are refused instead of racing it.

mod moves;
mod reset;

pub use moves::{MoveOutcome, MoveTicket};
pub use reset::{ResetOutcome, ResetTicket};

use std::sync::Arc;

use derive_getters::Getters;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

use crate::client::MoveService;
use crate::game::{Board, MatchState, WinningCells};
use crate::protocol::Verdict;
use crate::view::{Surface, ViewAdapter};

/// Generic message for a move that never got a usable answer.
pub const MOVE_FAILED: &str = "Error making move";

/// Generic message for a reset that never got a usable answer.
pub const RESET_FAILED: &str = "Error resetting game";

/// Everything that lives for one match: the board and where the match
/// stands. Replaced wholesale on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Session {
    board: Board,
    state: MatchState,
}

impl Session {
    /// A fresh, active session on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh, active session on `board`.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            state: MatchState::Active,
        }
    }
}

/// Why a submission was dropped without sending anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The match is already won or drawn.
    MatchOver,
    /// The target cell is taken.
    Occupied,
    /// Another request is still outstanding.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Move(u64),
    Reset(u64),
}

impl From<Verdict> for MatchState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Won(mark) => MatchState::Won(mark),
            Verdict::Drawn => MatchState::Drawn,
        }
    }
}

/// Drives the click, request, response, render cycle.
pub struct MoveController<S, V>
where
    S: MoveService,
    V: Surface,
{
    service: Arc<S>,
    view: ViewAdapter<V>,
    session: Session,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl<S, V> MoveController<S, V>
where
    S: MoveService,
    V: Surface,
{
    /// Creates a controller on a fresh session and renders the empty board.
    #[instrument(skip_all)]
    pub fn new(service: Arc<S>, view: ViewAdapter<V>) -> Self {
        info!("Creating move controller");
        let mut controller = Self {
            service,
            view,
            session: Session::new(),
            pending: None,
            next_ticket: 0,
        };
        controller.view.render_board(controller.session.board());
        controller
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The view adapter.
    pub fn view(&self) -> &ViewAdapter<V> {
        &self.view
    }

    /// The view adapter, mutably.
    pub fn view_mut(&mut self) -> &mut ViewAdapter<V> {
        &mut self.view
    }

    /// Shared handle to the move service, for running requests off the UI
    /// task.
    pub fn service(&self) -> Arc<S> {
        Arc::clone(&self.service)
    }

    /// Returns true while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies due error clears.
    pub fn tick(&mut self, now: Instant) {
        self.view.tick(now);
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn show_error(&mut self, message: &str) {
        self.view.show_error(message, Instant::now());
    }

    /// Moves the match to a terminal state and renders the ending.
    #[instrument(skip(self, cells))]
    fn end_match(&mut self, state: MatchState, cells: Option<&WinningCells>) -> MatchState {
        debug_assert!(self.session.state.is_active());
        info!(?state, "Match over");
        self.session.state = state;
        self.view.render_outcome(state, cells);
        state
    }

    fn release(&mut self, expected: Pending) -> bool {
        if self.pending == Some(expected) {
            self.pending = None;
            true
        } else {
            debug!(?expected, pending = ?self.pending, "Ignoring stale completion");
            false
        }
    }
}
