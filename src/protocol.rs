//! Wire types for the move service.
//!
//! `POST /move` takes a [`MoveRequest`] and answers with a [`MoveResponse`];
//! `GET /reset` answers with a [`ResetResponse`].

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::game::{Board, Mark, Position, WinningCells};

/// Body of `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveRequest {
    /// Client's board snapshot at submission time.
    board: Board,
    /// Target row.
    row: u8,
    /// Target column.
    col: u8,
}

impl MoveRequest {
    /// Creates a request for a move at `position` on `board`.
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            row: position.row(),
            col: position.col(),
        }
    }

    /// Target cell, if the coordinates are on the board.
    pub fn position(&self) -> Option<Position> {
        Position::new(self.row, self.col).ok()
    }
}

/// Body returned by `POST /move`.
///
/// Optional fields may be absent or `null`. A `draw` of `false` means the
/// match is not drawn. `board` is only optional because rejections omit it;
/// an accepted move without a board is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Authoritative board after the move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    /// Rejection message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Winning mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Mark>,
    /// Draw flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw: Option<bool>,
    /// The completed line, for drawing the win-line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_cells: Option<WinningCells>,
    /// The opponent's counter-move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_move: Option<Position>,
}

/// Terminal result carried by a move response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A mark won.
    Won(Mark),
    /// The match is drawn.
    Drawn,
}

impl MoveResponse {
    /// Creates an error-only response.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Terminal verdict, if the response declares one.
    ///
    /// A winner takes precedence over the draw flag; a winner of
    /// [`Mark::Empty`] is ignored.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.winner {
            Some(mark) if mark.is_occupied() => Some(Verdict::Won(mark)),
            _ if self.draw.unwrap_or(false) => Some(Verdict::Drawn),
            _ => None,
        }
    }
}

/// Body returned by `GET /reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Fresh board.
    pub board: Board,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let position = Position::new(2, 1).unwrap();
        let request = MoveRequest::new(Board::empty(), position);
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["row"], 2);
        assert_eq!(json["col"], 1);
        assert_eq!(json["board"][0][0], " ");
        assert_eq!(request.position(), Some(position));
    }

    #[test]
    fn test_response_with_nulls() {
        let body = r#"{
            "board": [["O"," "," "],[" ","X"," "],[" "," "," "]],
            "ai_move": [1, 1],
            "winner": null,
            "winning_cells": null,
            "draw": false
        }"#;
        let response: MoveResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.verdict(), None);
        assert_eq!(response.ai_move, Some(Position::new(1, 1).unwrap()));
        assert_eq!(response.winning_cells, None);
    }

    #[test]
    fn test_winner_takes_precedence_over_draw() {
        let body = r#"{
            "board": [["X","X","X"],["O","O","X"],["X","O","O"]],
            "winner": "X",
            "winning_cells": [[0,0],[0,1],[0,2]],
            "draw": true
        }"#;
        let response: MoveResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.verdict(), Some(Verdict::Won(Mark::Opponent)));
    }

    #[test]
    fn test_error_body_without_board() {
        let response: MoveResponse = serde_json::from_str(r#"{"error": "Invalid move"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("Invalid move"));
    }

    #[test]
    fn test_winning_cells_must_be_a_triple() {
        let body = r#"{
            "board": [[" "," "," "],[" "," "," "],[" "," "," "]],
            "winning_cells": [[0,0],[0,1]]
        }"#;
        assert!(serde_json::from_str::<MoveResponse>(body).is_err());
    }
}
