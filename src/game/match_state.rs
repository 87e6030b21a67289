//! Match lifecycle.

use super::Mark;

/// Where a match stands.
///
/// A match starts [`Active`](MatchState::Active) and moves to a terminal
/// state at most once; only a reset brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchState {
    /// Moves are accepted.
    #[default]
    Active,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up without a line.
    Drawn,
}

impl MatchState {
    /// Returns true while moves are accepted.
    pub fn is_active(self) -> bool {
        self == MatchState::Active
    }
}
