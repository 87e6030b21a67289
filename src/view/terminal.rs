//! In-memory surface backing the terminal UI.
//!
//! Holds what each element currently shows. The drawing pass reads it and
//! records where each cell actually landed on screen, which is what
//! measurement returns.

use derive_getters::Getters;

use super::Surface;
use crate::game::Position;
use crate::geometry::{LineDescriptor, Point, Rect};

/// Cell width in terminal columns for the default layout.
pub const CELL_WIDTH: u16 = 9;
/// Cell height in terminal rows for the default layout.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the board, separators included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the board, separators included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What a single cell displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct CellView {
    text: String,
    class: Option<String>,
}

/// Terminal-backed [`Surface`].
#[derive(Debug, Clone, Getters)]
pub struct TerminalSurface {
    #[getter(skip)]
    cells: [CellView; 9],
    status: String,
    error: Option<String>,
    win_line: Option<LineDescriptor>,
    #[getter(skip)]
    board: Rect,
    #[getter(skip)]
    cell_rects: [Rect; 9],
}

impl TerminalSurface {
    /// Creates a blank surface laid out at the origin.
    pub fn new() -> Self {
        let cell_rects = std::array::from_fn(|index| {
            let row = (index / 3) as u16;
            let col = (index % 3) as u16;
            Rect::new(
                f64::from(col * (CELL_WIDTH + 1)),
                f64::from(row * (CELL_HEIGHT + 1)),
                f64::from(CELL_WIDTH),
                f64::from(CELL_HEIGHT),
            )
        });
        Self {
            cells: Default::default(),
            status: String::new(),
            error: None,
            win_line: None,
            board: Rect::new(0.0, 0.0, f64::from(BOARD_WIDTH), f64::from(BOARD_HEIGHT)),
            cell_rects,
        }
    }

    /// What the cell at `position` displays.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }

    /// Records where the board and its cells were drawn.
    pub fn record_layout(&mut self, board: Rect, cells: [Rect; 9]) {
        self.board = board;
        self.cell_rects = cells;
    }

    /// Hit-tests a screen point against the recorded cell layout.
    pub fn cell_at(&self, point: Point) -> Option<Position> {
        self.cell_rects
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn set_cell(&mut self, position: Position, text: &str, class: Option<&str>) {
        self.cells[position.to_index()] = CellView {
            text: text.to_string(),
            class: class.map(str::to_string),
        };
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_error(&mut self, text: Option<&str>) {
        self.error = text.map(str::to_string);
    }

    fn show_win_line(&mut self, line: LineDescriptor) {
        self.win_line = Some(line);
    }

    fn hide_win_line(&mut self) {
        self.win_line = None;
    }

    fn board_bounds(&self) -> Rect {
        self.board
    }

    fn cell_bounds(&self, position: Position) -> Rect {
        self.cell_rects[position.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_hit_test() {
        let surface = TerminalSurface::new();
        let center = Position::new(1, 1).unwrap();
        let point = surface.cell_bounds(center).center();
        assert_eq!(surface.cell_at(point), Some(center));
        // Separator column between the first two cells.
        let separator = Point::new(f64::from(CELL_WIDTH), 0.0);
        assert_eq!(surface.cell_at(separator), None);
    }

    #[test]
    fn test_recorded_layout_drives_measurement() {
        let mut surface = TerminalSurface::new();
        let cells = std::array::from_fn(|index| {
            let left = 10.0 + (index % 3) as f64 * 4.0;
            let top = 5.0 + (index / 3) as f64 * 2.0;
            Rect::new(left, top, 4.0, 2.0)
        });
        surface.record_layout(Rect::new(10.0, 5.0, 12.0, 6.0), cells);
        assert_eq!(surface.board_bounds(), Rect::new(10.0, 5.0, 12.0, 6.0));
        assert_eq!(
            surface.cell_at(Point::new(21.0, 10.0)),
            Position::new(2, 2).ok()
        );
    }
}
