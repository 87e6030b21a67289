//! The 3x3 grid and line detection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{Mark, Position};

/// Three positions forming a completed line, in board order.
pub type WinningCells = [Position; 3];

/// Row-major indices of every line, rows and columns interleaved, then the
/// two diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [3, 4, 5],
    [1, 4, 7],
    [6, 7, 8],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Terminal result found by scanning the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The three cells of the line.
        cells: WinningCells,
    },
    /// Every cell is occupied and nobody completed a line.
    Drawn,
}

/// 3x3 board of marks, indexed by `(row, col)`.
///
/// Serialized as a 3x3 array of mark symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Mark; 3]; 3],
}

impl Board {
    /// Creates an all-empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board from rows of marks.
    pub fn from_rows(cells: [[Mark; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Mark; 3]; 3] {
        &self.cells
    }

    /// Returns the mark at a position.
    pub fn get(&self, position: Position) -> Mark {
        self.cells[usize::from(position.row())][usize::from(position.col())]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Mark::Empty
    }

    /// Sets a single cell.
    ///
    /// Only the move controller's opponent overlay and the reference service
    /// write individual cells.
    pub(crate) fn place(&mut self, position: Position, mark: Mark) {
        self.cells[usize::from(position.row())][usize::from(position.col())] = mark;
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|mark| mark.is_occupied())
    }

    /// Positions of the empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|position| self.is_empty(*position))
    }

    /// Scans for a completed line, then for a full board.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Option<LineOutcome> {
        for line in LINES {
            let cells = line.map(|index| Position::ALL[index]);
            let mark = self.get(cells[0]);
            if mark.is_occupied() && cells.iter().all(|cell| self.get(*cell) == mark) {
                return Some(LineOutcome::Won { mark, cells });
            }
        }

        self.is_full().then_some(LineOutcome::Drawn)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<&str> = row.iter().map(|mark| mark.symbol()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
