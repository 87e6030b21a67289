//! Starting a new match.

use derive_getters::Getters;
use tracing::{debug, error, info, instrument};

use super::{MoveController, Pending, RESET_FAILED, Session, SkipReason};
use crate::client::MoveService;
use crate::error::TransportError;
use crate::protocol::ResetResponse;
use crate::view::Surface;

/// A reset that holds the pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct ResetTicket {
    id: u64,
}

/// What happened to a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Dropped locally; nothing was sent.
    Skipped(SkipReason),
    /// A fresh session is in place.
    Reset,
    /// No usable answer arrived. The previous session is kept.
    Failed,
    /// The completion did not belong to the outstanding request.
    Stale,
}

impl<S, V> MoveController<S, V>
where
    S: MoveService,
    V: Surface,
{
    /// Claims the pending slot for a reset.
    #[instrument(skip(self))]
    pub fn begin_reset(&mut self) -> Result<ResetTicket, SkipReason> {
        if self.pending.is_some() {
            debug!("Reset skipped, request outstanding");
            return Err(SkipReason::Busy);
        }
        let id = self.issue_ticket();
        self.pending = Some(Pending::Reset(id));
        Ok(ResetTicket { id })
    }

    /// Installs the fresh board, or reports the failure.
    #[instrument(skip(self, result))]
    pub fn finish_reset(
        &mut self,
        ticket: ResetTicket,
        result: Result<ResetResponse, TransportError>,
    ) -> ResetOutcome {
        if !self.release(Pending::Reset(ticket.id)) {
            return ResetOutcome::Stale;
        }

        match result {
            Ok(response) => {
                self.session = Session::from_board(response.board);
                self.view.clear_match(self.session.board());
                info!("Game reset");
                ResetOutcome::Reset
            }
            Err(e) => {
                error!(error = %e, "Reset request failed");
                self.show_error(RESET_FAILED);
                ResetOutcome::Failed
            }
        }
    }

    /// Requests a fresh board and starts over.
    #[instrument(skip(self))]
    pub async fn reset_game(&mut self) -> ResetOutcome {
        let ticket = match self.begin_reset() {
            Ok(ticket) => ticket,
            Err(reason) => return ResetOutcome::Skipped(reason),
        };
        let result = self.service.reset().await;
        self.finish_reset(ticket, result)
    }
}
