//! Opponent move selection: minimax with alpha-beta pruning.
//!
//! The opponent maximizes; a line for the opponent scores +1, a line for the
//! player -1 and a draw 0.

use tracing::instrument;

use crate::game::{Board, LineOutcome, Mark, Position};

/// Picks the opponent's best reply, preferring earlier cells on ties.
///
/// Returns `None` on a full board.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Position> {
    let mut best: Option<(i32, Position)> = None;
    for position in board.empty_positions() {
        let mut next = *board;
        next.place(position, Mark::Opponent);
        let score = minimax(&next, false, i32::MIN, i32::MAX);
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, position));
        }
    }
    best.map(|(_, position)| position)
}

fn minimax(board: &Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    match board.outcome() {
        Some(LineOutcome::Won { mark: Mark::Opponent, .. }) => return 1,
        Some(LineOutcome::Won { .. }) => return -1,
        Some(LineOutcome::Drawn) => return 0,
        None => {}
    }

    let mark = if maximizing { Mark::Opponent } else { Mark::Player };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for position in board.empty_positions() {
        let mut next = *board;
        next.place(position, mark);
        let score = minimax(&next, !maximizing, alpha, beta);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}
