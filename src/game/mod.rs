//! Board state for a single match: marks, positions and the 3x3 grid.

mod board;
mod mark;
mod match_state;
mod position;

pub use board::{Board, LineOutcome, WinningCells};
pub use mark::{Mark, MarkError};
pub use match_state::MatchState;
pub use position::{Position, PositionError};
