//! Runtime wrapper over the typestate phases.

use super::action::{Move, MoveError};
use super::phases::{Finished, OpponentTurn, Outcome, PlayerTurn, TurnState};
use super::typestate::{Game, GameTransition};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A game in any phase.
///
/// The owner of a game (a UI, a session) cannot know the phase at compile
/// time, so it holds this enum. Rejected moves leave it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyGame {
    /// Waiting for the human.
    PlayerTurn(Game<PlayerTurn>),
    /// The computer moves next.
    OpponentTurn(Game<OpponentTurn>),
    /// Game over.
    Finished(Game<Finished>),
}

impl From<GameTransition> for AnyGame {
    fn from(transition: GameTransition) -> Self {
        match transition {
            GameTransition::PlayerTurn(g) => AnyGame::PlayerTurn(g),
            GameTransition::OpponentTurn(g) => AnyGame::OpponentTurn(g),
            GameTransition::Finished(g) => AnyGame::Finished(g),
        }
    }
}

impl From<Game<PlayerTurn>> for AnyGame {
    fn from(game: Game<PlayerTurn>) -> Self {
        AnyGame::PlayerTurn(game)
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl AnyGame {
    /// A fresh game waiting for the human.
    pub fn new() -> Self {
        AnyGame::PlayerTurn(Game::new())
    }

    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::PlayerTurn(g) => g.board(),
            AnyGame::OpponentTurn(g) => g.board(),
            AnyGame::Finished(g) => g.board(),
        }
    }

    /// Returns the move history for any game phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::PlayerTurn(g) => g.history(),
            AnyGame::OpponentTurn(g) => g.history(),
            AnyGame::Finished(g) => g.history(),
        }
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        match self {
            AnyGame::PlayerTurn(_) => TurnState::PlayerTurn,
            AnyGame::OpponentTurn(_) => TurnState::OpponentTurn,
            AnyGame::Finished(g) => TurnState::GameOver(g.outcome()),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Returns the outcome, if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyGame::Finished(g) => Some(g.outcome()),
            _ => None,
        }
    }

    /// Returns the winner, if game is won.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|o| o.winner())
    }

    /// Places the human's mark.
    ///
    /// An occupied square, the computer's turn, or a finished game is
    /// rejected and leaves the game as it was.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn place(&mut self, pos: Position) -> Result<TurnState, MoveError> {
        let game = match self {
            AnyGame::PlayerTurn(g) => g.clone(),
            AnyGame::OpponentTurn(_) => return Err(MoveError::NotYourTurn(Player::X)),
            AnyGame::Finished(_) => return Err(MoveError::GameOver),
        };

        let transition = game.place(pos).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        *self = transition.into();
        debug!(state = %self.state(), "Human moved");
        Ok(self.state())
    }

    /// Lets the computer choose and play its move.
    ///
    /// Returns the square the computer took.
    #[instrument(skip(self))]
    pub fn respond(&mut self) -> Result<Position, MoveError> {
        let game = match self {
            AnyGame::OpponentTurn(g) => g.clone(),
            AnyGame::PlayerTurn(_) => return Err(MoveError::NotYourTurn(Player::O)),
            AnyGame::Finished(_) => return Err(MoveError::GameOver),
        };

        let pos = game.choose().ok_or(MoveError::NoMovesAvailable)?;
        *self = game.play(pos)?.into();
        debug!(position = %pos, state = %self.state(), "Computer moved");
        Ok(pos)
    }

    /// Back to an empty board with the human to move.
    pub fn reset(&mut self) {
        *self = AnyGame::new();
    }
}
