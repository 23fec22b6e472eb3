//! Depth-limited minimax evaluation.
//!
//! Scores are always from the computer's point of view: a win for `O`
//! is positive, a win for `X` is negative, and the magnitude shrinks with
//! depth so faster wins and slower losses are preferred.

use super::super::rules::{available_moves, winner};
use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Search horizon in plies.
pub const MAX_DEPTH: u32 = 5;

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// The side whose turn it is inside the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideToMove {
    /// The computer (`O`), maximizing.
    Computer,
    /// The human (`X`), minimizing.
    Human,
}

impl SideToMove {
    /// Mark placed by this side.
    pub fn mark(self) -> Player {
        match self {
            SideToMove::Computer => Player::O,
            SideToMove::Human => Player::X,
        }
    }

    /// The side that moves next.
    pub fn other(self) -> Self {
        match self {
            SideToMove::Computer => SideToMove::Human,
            SideToMove::Human => SideToMove::Computer,
        }
    }

    /// True for the maximizing side.
    pub fn is_maximizing(self) -> bool {
        self == SideToMove::Computer
    }
}

/// Scores `board` with `side` to move, `depth` plies below the root.
///
/// Terminal wins score `10 - depth` for `O` and `depth - 10` for `X`.
/// Positions at or past [`MAX_DEPTH`] and positions with no moves left
/// score `0`; a truncated search and a true draw are not distinguished.
///
/// Every child is searched on its own copy of the board, so `board` is
/// untouched when this returns.
pub fn score(board: &Board, depth: u32, side: SideToMove) -> i32 {
    let depth_score = i32::try_from(depth).unwrap_or(i32::MAX);
    match winner(board) {
        Some(Player::O) => return WIN_SCORE - depth_score,
        Some(Player::X) => return depth_score - WIN_SCORE,
        None => {}
    }

    if depth >= MAX_DEPTH {
        return 0;
    }

    let children = available_moves(board).into_iter().map(|pos| {
        let mut child = *board;
        child.set(pos, Square::Occupied(side.mark()));
        score(&child, depth + 1, side.other())
    });

    let best = if side.is_maximizing() {
        children.max()
    } else {
        children.min()
    };
    best.unwrap_or(0)
}
