//! Application state for the terminal client.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, instrument};

use super::input::Command;
use crate::client::MoveService;
use crate::controller::{MoveController, MoveTicket, ResetTicket};
use crate::error::TransportError;
use crate::game::Position;
use crate::protocol::{MoveResponse, ResetResponse};
use crate::view::{TerminalSurface, ViewAdapter};

/// A finished request, delivered back to the UI task.
#[derive(Debug)]
pub enum Completion {
    /// Answer to a move.
    Move(MoveTicket, Result<MoveResponse, TransportError>),
    /// Answer to a reset.
    Reset(ResetTicket, Result<ResetResponse, TransportError>),
}

/// Main application state.
///
/// Requests run on spawned tasks so the screen keeps redrawing; their
/// results come back through the completion channel and are applied on the
/// UI task, one at a time.
pub struct App<S: MoveService + 'static> {
    controller: MoveController<S, TerminalSurface>,
    cursor: Position,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<S: MoveService + 'static> App<S> {
    /// Creates an application around a move service.
    pub fn new(service: Arc<S>, view: ViewAdapter<TerminalSurface>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            controller: MoveController::new(service, view),
            cursor: Position::ALL[4],
            completions_tx,
            completions_rx,
        }
    }

    /// The controller.
    pub fn controller(&self) -> &MoveController<S, TerminalSurface> {
        &self.controller
    }

    /// Currently selected cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Surface and cursor for the drawing pass.
    pub fn draw_parts(&mut self) -> (&mut TerminalSurface, Position, bool) {
        let busy = self.controller.is_busy();
        (self.controller.view_mut().surface_mut(), self.cursor, busy)
    }

    /// Applies a user command. Returns false when the user quits.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Cursor(position) => self.cursor = position,
            Command::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
            Command::Reset => self.reset(),
        }
        true
    }

    fn play(&mut self, position: Position) {
        let ticket = match self.controller.begin_move(position) {
            Ok(ticket) => ticket,
            Err(reason) => {
                debug!(?reason, %position, "Move not sent");
                return;
            }
        };
        let service = self.controller.service();
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = service.submit_move(ticket.request()).await;
            let _ = tx.send(Completion::Move(ticket, result));
        });
    }

    fn reset(&mut self) {
        let ticket = match self.controller.begin_reset() {
            Ok(ticket) => ticket,
            Err(reason) => {
                debug!(?reason, "Reset not sent");
                return;
            }
        };
        let service = self.controller.service();
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = service.reset().await;
            let _ = tx.send(Completion::Reset(ticket, result));
        });
    }

    /// Applies due error clears, then finished requests.
    pub fn update(&mut self, now: Instant) {
        self.controller.tick(now);
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply(completion);
        }
    }

    /// Waits for the next finished request and applies it.
    pub async fn wait_for_completion(&mut self) {
        if let Some(completion) = self.completions_rx.recv().await {
            self.apply(completion);
        }
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Move(ticket, result) => {
                let outcome = self.controller.finish_move(ticket, result);
                debug!(?outcome, "Move completed");
            }
            Completion::Reset(ticket, result) => {
                let outcome = self.controller.finish_reset(ticket, result);
                debug!(?outcome, "Reset completed");
            }
        }
    }
}
