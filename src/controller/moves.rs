//! Move submission and response reconciliation.

use derive_getters::Getters;
use tracing::{debug, error, info, instrument, warn};

use super::{MOVE_FAILED, MoveController, Pending, SkipReason};
use crate::client::MoveService;
use crate::error::TransportError;
use crate::game::{LineOutcome, Mark, MatchState, Position};
use crate::protocol::{MoveRequest, MoveResponse};
use crate::view::Surface;

/// A move that passed local validation and holds the pending slot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveTicket {
    id: u64,
    request: MoveRequest,
}

/// What happened to a submitted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dropped locally; nothing was sent.
    Skipped(SkipReason),
    /// The service refused the move. State is unchanged.
    Rejected(String),
    /// No usable answer arrived. State is unchanged.
    Failed,
    /// Applied; the match goes on.
    Continues,
    /// Applied; the match ended.
    Ended(MatchState),
    /// The completion did not belong to the outstanding request.
    Stale,
}

impl<S, V> MoveController<S, V>
where
    S: MoveService,
    V: Surface,
{
    /// Validates a move locally and claims the pending slot.
    ///
    /// Fails without side effects if the match is over, the cell is taken
    /// or another request is outstanding. The ticket carries the request
    /// built from the current local board.
    #[instrument(skip(self))]
    pub fn begin_move(&mut self, position: Position) -> Result<MoveTicket, SkipReason> {
        let reason = if self.pending.is_some() {
            Some(SkipReason::Busy)
        } else if !self.session.state.is_active() {
            Some(SkipReason::MatchOver)
        } else if !self.session.board.is_empty(position) {
            Some(SkipReason::Occupied)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(?reason, "Move skipped");
            return Err(reason);
        }

        let id = self.issue_ticket();
        self.pending = Some(Pending::Move(id));
        debug!(id, "Move ticket issued");
        Ok(MoveTicket {
            id,
            request: MoveRequest::new(self.session.board, position),
        })
    }

    /// Reconciles local state with the service's answer to `ticket`.
    #[instrument(skip(self, ticket, result), fields(id = ticket.id))]
    pub fn finish_move(
        &mut self,
        ticket: MoveTicket,
        result: Result<MoveResponse, TransportError>,
    ) -> MoveOutcome {
        if !self.release(Pending::Move(ticket.id)) {
            return MoveOutcome::Stale;
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Move request failed");
                self.show_error(MOVE_FAILED);
                return MoveOutcome::Failed;
            }
        };

        let verdict = response.verdict();
        if let Some(message) = response.error {
            warn!(message = %message, "Move rejected");
            self.show_error(&message);
            return MoveOutcome::Rejected(message);
        }

        let Some(board) = response.board else {
            error!("Move response has neither board nor error");
            self.show_error(MOVE_FAILED);
            return MoveOutcome::Failed;
        };

        self.session.board = board;
        self.view.render_board(&self.session.board);

        // A move that ends the match wins over any counter-move in the
        // same response.
        if let Some(verdict) = verdict {
            let state = self.end_match(verdict.into(), response.winning_cells.as_ref());
            return MoveOutcome::Ended(state);
        }

        let Some(ai_move) = response.ai_move else {
            info!("Move applied");
            return MoveOutcome::Continues;
        };

        debug!(%ai_move, "Applying opponent move");
        self.session.board.place(ai_move, Mark::Opponent);
        self.view.render_board(&self.session.board);

        match self.session.board.outcome() {
            Some(LineOutcome::Won { mark, cells }) => {
                MoveOutcome::Ended(self.end_match(MatchState::Won(mark), Some(&cells)))
            }
            Some(LineOutcome::Drawn) => {
                MoveOutcome::Ended(self.end_match(MatchState::Drawn, None))
            }
            None => {
                info!("Move applied");
                MoveOutcome::Continues
            }
        }
    }

    /// Validates, sends and reconciles a move in one go.
    #[instrument(skip(self))]
    pub async fn submit_move(&mut self, position: Position) -> MoveOutcome {
        let ticket = match self.begin_move(position) {
            Ok(ticket) => ticket,
            Err(reason) => return MoveOutcome::Skipped(reason),
        };
        let result = self.service.submit_move(ticket.request()).await;
        self.finish_move(ticket, result)
    }
}
