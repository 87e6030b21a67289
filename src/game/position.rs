//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the 3x3 board.
///
/// Serialized as a two-element `[row, col]` array, which is how the move
/// service encodes `ai_move` and `winning_cells`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, rejecting coordinates off the board.
    pub fn new(row: u8, col: u8) -> Result<Self, PositionError> {
        if row > 2 || col > 2 {
            return Err(PositionError { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<[u8; 2]> for Position {
    type Error = PositionError;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Position::new(row, col)
    }
}

impl From<Position> for [u8; 2] {
    fn from(position: Position) -> Self {
        [position.row, position.col]
    }
}

/// Coordinates outside the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position ({}, {}) is off the board", row, col)]
pub struct PositionError {
    /// Requested row.
    pub row: u8,
    /// Requested column.
    pub col: u8,
}
