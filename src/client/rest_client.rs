//! HTTP client for the move service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::MoveService;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::protocol::{MoveRequest, MoveResponse, ResetResponse};

/// Move service reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct RestMoveClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestMoveClient {
    /// Creates a client for the service at `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Creating REST move client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from configuration, applying the optional timeout.
    #[instrument(skip(config), fields(server_url = %config.server_url()))]
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs() {
            debug!(secs, "Applying request timeout");
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let client = builder.build()?;

        info!("Creating REST move client");
        Ok(Self {
            base_url: config.server_url().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MoveService for RestMoveClient {
    #[instrument(skip(self, request), fields(row = request.row(), col = request.col()))]
    async fn submit_move(&self, request: &MoveRequest) -> Result<MoveResponse, TransportError> {
        debug!("Posting move");

        let response = self
            .client
            .post(format!("{}/move", self.base_url))
            .json(request)
            .send()
            .await?;

        // Rejections come back as 4xx with an `error` body, so the body is
        // parsed whatever the status.
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "Got move response");

        let parsed: MoveResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(status = %status, error = %e, "Unparsable move response");
            TransportError::from(e)
        })?;

        if !status.is_success() && parsed.error.is_none() {
            return Err(TransportError::new(format!("HTTP {}", status)));
        }

        Ok(parsed)
    }

    #[instrument(skip(self))]
    async fn reset(&self) -> Result<ResetResponse, TransportError> {
        debug!("Requesting fresh board");

        let response = self
            .client
            .get(format!("{}/reset", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Reset failed");
            return Err(TransportError::new(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        let parsed: ResetResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
