//! The move service seam.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::protocol::{MoveRequest, MoveResponse, ResetResponse};

/// Remote authority that resolves moves and hands out fresh boards.
///
/// Implementations perform a single request per call with no retry. A
/// rejection in the response body is returned as `Ok`; only transport or
/// parsing failures are errors.
#[async_trait]
pub trait MoveService: Send + Sync {
    /// Submits a move (`POST /move`).
    async fn submit_move(&self, request: &MoveRequest) -> Result<MoveResponse, TransportError>;

    /// Requests a fresh board (`GET /reset`).
    async fn reset(&self) -> Result<ResetResponse, TransportError>;
}
