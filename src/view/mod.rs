//! Projection of board and match state onto a render surface.

mod banner;
mod terminal;

pub use banner::ErrorBanner;
pub use terminal::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, CellView, TerminalSurface};

use tokio::time::{Duration, Instant};
use tracing::{debug, instrument};

use crate::game::{Board, MatchState, Position, WinningCells};
use crate::geometry::{self, LineDescriptor, Rect};

/// The visible UI: cell text and styling, status text, error text and the
/// win-line overlay.
///
/// Measurement calls live here so geometry stays pure.
pub trait Surface {
    /// Sets a cell's displayed text and styling class.
    fn set_cell(&mut self, position: Position, text: &str, class: Option<&str>);

    /// Sets the status message.
    fn set_status(&mut self, text: &str);

    /// Sets or clears the error message.
    fn set_error(&mut self, text: Option<&str>);

    /// Shows the win-line with the given transform.
    fn show_win_line(&mut self, line: LineDescriptor);

    /// Hides the win-line.
    fn hide_win_line(&mut self);

    /// Bounding box of the board container.
    fn board_bounds(&self) -> Rect;

    /// Bounding box of a cell.
    fn cell_bounds(&self, position: Position) -> Rect;
}

/// Renders session state onto a [`Surface`].
///
/// Never mutates the board; it only reflects what the controller hands it.
#[derive(Debug)]
pub struct ViewAdapter<V: Surface> {
    surface: V,
    banner: ErrorBanner,
}

impl<V: Surface> ViewAdapter<V> {
    /// Creates an adapter whose errors stay visible for `error_display`.
    pub fn new(surface: V, error_display: Duration) -> Self {
        Self {
            surface,
            banner: ErrorBanner::new(error_display),
        }
    }

    /// The underlying surface.
    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// The underlying surface, mutably (for layout measurement).
    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    /// The error banner.
    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    /// Writes every cell's text and class.
    #[instrument(skip_all)]
    pub fn render_board(&mut self, board: &Board) {
        for position in Position::ALL {
            let mark = board.get(position);
            let class = mark.class();
            self.surface.set_cell(position, mark.symbol(), class.as_deref());
        }
    }

    /// Writes the end-of-match status and, for a win, the win-line.
    #[instrument(skip(self, cells))]
    pub fn render_outcome(&mut self, state: MatchState, cells: Option<&WinningCells>) {
        match state {
            MatchState::Active => {}
            MatchState::Won(mark) => {
                self.surface.set_status(&format!("{} wins!", mark));
                let surface = &self.surface;
                let line = geometry::win_line(cells, surface.board_bounds(), |position| {
                    surface.cell_bounds(position)
                });
                match line {
                    Some(line) => self.surface.show_win_line(line),
                    None => debug!("No winning cells, skipping win-line"),
                }
            }
            MatchState::Drawn => self.surface.set_status("It's a draw!"),
        }
    }

    /// Shows an error now; it clears itself after the display delay.
    #[instrument(skip(self, now))]
    pub fn show_error(&mut self, message: &str, now: Instant) {
        self.banner.show(message, now);
        self.surface.set_error(Some(message));
    }

    /// Applies any error clears that have come due.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.expire(now) {
            debug!("Error message expired");
            self.surface.set_error(None);
        }
    }

    /// Restores the pristine view for a fresh board.
    ///
    /// Clears status and error text, hides the win-line and strips every
    /// cell's styling class.
    #[instrument(skip_all)]
    pub fn clear_match(&mut self, board: &Board) {
        self.surface.set_status("");
        self.banner.clear();
        self.surface.set_error(None);
        self.surface.hide_win_line();
        for position in Position::ALL {
            self.surface.set_cell(position, board.get(position).symbol(), None);
        }
    }
}
