//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern.
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl<P> Invariant<Game<P>> for AlternatingTurnInvariant {
    fn holds(game: &Game<P>) -> bool {
        game.history().iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameTransition, Move, PlayerTurn, Position};

    #[test]
    fn test_empty_game_holds() {
        let game = Game::<PlayerTurn>::new();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_replayed_sequence_holds() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
        ];
        let Ok(GameTransition::OpponentTurn(game)) = Game::<PlayerTurn>::replay(&moves) else {
            panic!("Expected computer's turn");
        };
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::<PlayerTurn>::new();
        game.history.push(Move::new(Player::X, Position::TopLeft));
        game.history.push(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
