//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: the count of `X` marks minus `O` marks is 0 or 1.
///
/// X moves first and one mark is placed per turn.
pub struct MarkBalanceInvariant;

impl<P> Invariant<Game<P>> for MarkBalanceInvariant {
    fn holds(game: &Game<P>) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}
