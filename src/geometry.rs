//! Win-line geometry.
//!
//! Pure functions over plain rectangles. Measuring rendered cells is the
//! job of the [`Surface`](crate::Surface); this module only does the math.

use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

use crate::game::{Position, WinningCells};

/// A point in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, new, Getters)]
pub struct Point {
    x: f64,
    y: f64,
}

/// An axis-aligned bounding box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, new, Getters)]
pub struct Rect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Returns true if the point lies inside the box.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.left + self.width
            && point.y >= self.top
            && point.y < self.top + self.height
    }
}

/// A rendered segment: anchored at one end, rotated by `angle`.
///
/// `angle` is in radians; 0 points right and positive turns clockwise on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct LineDescriptor {
    length: f64,
    anchor_x: f64,
    anchor_y: f64,
    angle: f64,
}

impl LineDescriptor {
    /// Start of the segment, relative to the board origin.
    pub fn start(&self) -> Point {
        Point::new(self.anchor_x, self.anchor_y)
    }

    /// Far end of the segment, relative to the board origin.
    pub fn end(&self) -> Point {
        Point::new(
            self.anchor_x + self.length * self.angle.cos(),
            self.anchor_y + self.length * self.angle.sin(),
        )
    }
}

/// Computes the segment joining the centers of two cells.
///
/// Centers are taken relative to the board's top-left corner.
#[instrument(level = "debug")]
pub fn segment(board: Rect, first: Rect, last: Rect) -> LineDescriptor {
    let start = first.center();
    let end = last.center();
    let x1 = start.x - board.left;
    let y1 = start.y - board.top;
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    LineDescriptor {
        length: dx.hypot(dy),
        anchor_x: x1,
        anchor_y: y1,
        angle: dy.atan2(dx),
    }
}

/// Computes the win-line for a winning triple, if there is one.
///
/// Only the first and last cells matter for drawing. Returns `None` when no
/// cells were supplied.
pub fn win_line<F>(
    cells: Option<&WinningCells>,
    board: Rect,
    cell_bounds: F,
) -> Option<LineDescriptor>
where
    F: Fn(Position) -> Rect,
{
    let [first, _, last] = cells?;
    Some(segment(board, cell_bounds(*first), cell_bounds(*last)))
}
