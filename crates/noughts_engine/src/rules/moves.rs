//! Legal move enumeration.

use super::super::{Board, Position};

/// Lists the empty positions in ascending index order.
///
/// A full board yields an empty list.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}
