//! Cell marks and their wire encoding.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The symbol occupying a cell.
///
/// On the wire a mark is a single-character string: a blank space for an
/// empty cell, `"O"` for the human player and `"X"` for the opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "String", into = "String")]
pub enum Mark {
    /// No mark yet.
    #[default]
    Empty,
    /// The human player's mark.
    Player,
    /// The server-driven opponent's mark.
    Opponent,
}

impl Mark {
    /// Wire symbol for this mark.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => " ",
            Mark::Player => "O",
            Mark::Opponent => "X",
        }
    }

    /// Parses a wire symbol. Anything outside the closed set is rejected.
    pub fn from_symbol(symbol: &str) -> Result<Self, MarkError> {
        Mark::iter()
            .find(|mark| mark.symbol() == symbol)
            .ok_or_else(|| MarkError::new(symbol))
    }

    /// Returns true for player and opponent marks.
    pub fn is_occupied(self) -> bool {
        self != Mark::Empty
    }

    /// Style class token, derived by lower-casing the symbol.
    ///
    /// Empty cells carry no class.
    pub fn class(self) -> Option<String> {
        self.is_occupied().then(|| self.symbol().to_lowercase())
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for Mark {
    type Error = MarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Mark::from_symbol(&value)
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.symbol().to_string()
    }
}

/// A symbol that is not one of the three known marks.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown mark symbol {:?}", symbol)]
pub struct MarkError {
    /// The offending symbol.
    pub symbol: String,
}

impl MarkError {
    fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}
