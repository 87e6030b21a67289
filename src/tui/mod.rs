//! Terminal UI client.

mod app;
mod input;
mod ui;

pub use app::{App, Completion};
pub use input::{Command, key_command, mouse_command, move_cursor};

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::{Duration, Instant};
use tracing::{error, info, instrument};

use crate::client::{MoveService, RestMoveClient};
use crate::config::ClientConfig;
use crate::view::{TerminalSurface, ViewAdapter};

/// Runs the terminal client against the configured move service.
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    // Log to a file so output does not tear the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %config.server_url(), "Starting Strictly Games client");

    let service = Arc::new(RestMoveClient::from_config(&config)?);
    let view = ViewAdapter::new(
        TerminalSurface::new(),
        Duration::from_millis(*config.error_display_ms()),
    );
    let app = App::new(service, view);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Client loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app<S: MoveService + 'static>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.update(Instant::now());
        terminal.draw(|f| {
            let (surface, cursor, busy) = app.draw_parts();
            ui::draw(f, surface, cursor, busy);
        })?;

        if !event::poll(std::time::Duration::from_millis(50))? {
            // Give spawned requests a chance to run.
            tokio::task::yield_now().await;
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_command(app.cursor(), key),
            Event::Mouse(mouse) => mouse_command(app.controller().view().surface(), mouse),
            _ => None,
        };

        if let Some(command) = command
            && !app.handle(command)
        {
            info!("User quit");
            return Ok(());
        }
    }
}
