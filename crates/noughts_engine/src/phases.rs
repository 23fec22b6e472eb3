//! Phase marker types for the turn state machine.
//!
//! These types exist solely as type-level markers to encode
//! game phase in the type system.

use super::Player;
use serde::{Deserialize, Serialize};

/// Phase marker: waiting for the human's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTurn;

/// Phase marker: the computer is about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpponentTurn;

/// Phase marker: game has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finished;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the human's move.
    PlayerTurn,
    /// The computer moves next.
    OpponentTurn,
    /// Terminal until the game is reset.
    GameOver(Outcome),
}

impl TurnState {
    /// True once the game has finished.
    pub fn is_over(&self) -> bool {
        matches!(self, TurnState::GameOver(_))
    }
}

/// Status line shown under the board.
impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::PlayerTurn => write!(f, "Your turn"),
            TurnState::OpponentTurn => write!(f, "Computer is thinking..."),
            TurnState::GameOver(outcome) => write!(f, "{}", outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_turn_state_status_line() {
        assert_eq!(TurnState::PlayerTurn.to_string(), "Your turn");
        assert_eq!(
            TurnState::OpponentTurn.to_string(),
            "Computer is thinking..."
        );
        assert_eq!(TurnState::GameOver(Outcome::Draw).to_string(), "Draw");
        assert!(TurnState::GameOver(Outcome::Draw).is_over());
        assert!(!TurnState::OpponentTurn.is_over());
    }
}
