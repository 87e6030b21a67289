//! Strictly Client - a thin tic-tac-toe client for a server-driven game
//!
//! The client never decides outcomes. It sends the board and the chosen
//! cell to a move service, then reconciles its state with the answer.
//!
//! # Architecture
//!
//! - **Game**: board, marks, positions and local line detection
//! - **Protocol**: JSON bodies exchanged with the move service
//! - **Client**: the [`MoveService`] seam and its REST implementation
//! - **Controller**: move and reset orchestration with a single pending slot
//! - **View**: the [`Surface`] seam, error banner and win-line geometry
//! - **Server**: a reference opponent service for local play
//! - **Tui**: the ratatui front end
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use strictly_client::{MoveController, Position, RestMoveClient, TerminalSurface, ViewAdapter};
//! use tokio::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = Arc::new(RestMoveClient::new("http://127.0.0.1:5000"));
//! let view = ViewAdapter::new(TerminalSurface::new(), Duration::from_millis(3000));
//! let mut controller = MoveController::new(service, view);
//!
//! let outcome = controller.submit_move(Position::new(1, 1)?).await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod client;
mod config;
mod controller;
mod error;
mod game;
mod geometry;
mod protocol;
mod server;
mod tui;
mod view;

// Crate-level exports - Game types
pub use game::{
    Board, LineOutcome, Mark, MarkError, MatchState, Position, PositionError, WinningCells,
};

// Crate-level exports - Wire protocol
pub use protocol::{MoveRequest, MoveResponse, ResetResponse, Verdict};

// Crate-level exports - Errors and configuration
pub use config::{ClientConfig, ConfigError, DEFAULT_CONFIG_FILE, SERVER_URL_ENV};
pub use error::TransportError;

// Crate-level exports - Move service access
pub use client::{MoveService, RestMoveClient};

// Crate-level exports - Controller
pub use controller::{
    MOVE_FAILED, MoveController, MoveOutcome, MoveTicket, RESET_FAILED, ResetOutcome,
    ResetTicket, Session, SkipReason,
};

// Crate-level exports - View and geometry
pub use geometry::{LineDescriptor, Point, Rect, segment, win_line};
pub use view::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, CellView, ErrorBanner, Surface,
    TerminalSurface, ViewAdapter,
};

// Crate-level exports - Reference service
pub use server::{INVALID_MOVE, best_move, resolve_move, router, serve};

// Crate-level exports - Terminal front end
pub use tui::{App, Command, Completion, key_command, mouse_command, move_cursor, run_tui};
