//! Picks the computer's move by scoring each candidate with minimax.

use super::super::rules::available_moves;
use super::super::{Board, Position, Square};
use super::minimax::{SideToMove, score};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A candidate move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where the computer would play.
    pub position: Position,
    /// Score after playing there, from the computer's point of view.
    pub score: i32,
}

/// Scores each candidate as an `O` placement followed by the human's reply.
///
/// Candidates keep their given order.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn evaluate_moves(board: &Board, candidates: &[Position]) -> Vec<ScoredMove> {
    candidates
        .iter()
        .map(|&position| {
            let mut child = *board;
            child.set(position, Square::Occupied(SideToMove::Computer.mark()));
            ScoredMove {
                position,
                score: score(&child, 0, SideToMove::Human),
            }
        })
        .collect()
}

/// Selects the computer's move among `candidates`.
///
/// The strictly greatest score wins, so ties go to the earliest candidate
/// (the lowest index when candidates come from [`available_moves`]).
/// Returns `None` when there are no candidates; callers must not apply a
/// move in that case.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn select_move(board: &Board, candidates: &[Position]) -> Option<Position> {
    let mut best: Option<ScoredMove> = None;
    for scored in evaluate_moves(board, candidates) {
        if best.is_none_or(|b| scored.score > b.score) {
            best = Some(scored);
        }
    }

    if let Some(chosen) = best {
        debug!(position = %chosen.position, score = chosen.score, "Selected move");
    }
    best.map(|b| b.position)
}

/// Selects the computer's move among all empty squares.
pub fn best_move(board: &Board) -> Option<Position> {
    select_move(board, &available_moves(board))
}
