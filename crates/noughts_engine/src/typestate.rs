//! Typestate turn state machine for a human-versus-computer game.
//!
//! The phase is encoded in the type parameter, so invalid operations are
//! impossible at compile time:
//! - `Game<PlayerTurn>` accepts the human's `place()`
//! - `Game<OpponentTurn>` can only `respond()` (or `play()` a chosen square)
//! - `Game<Finished>` only reports its outcome or restarts

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::{Finished, OpponentTurn, Outcome, PlayerTurn};
use super::rules::{available_moves, is_full, winner, winning_line};
use super::search::best_move;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Game state with typestate phase encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game<S> {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) _state: PhantomData<S>,
}

/// Result of a move - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Waiting for the human.
    PlayerTurn(Game<PlayerTurn>),
    /// The computer moves next.
    OpponentTurn(Game<OpponentTurn>),
    /// Game over.
    Finished(Game<Finished>),
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark due to move next, derived from the history length.
    pub fn next_mark(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// True once the board has a winner or no empty squares.
    pub fn is_terminal(&self) -> bool {
        winner(&self.board).is_some() || is_full(&self.board)
    }

    fn into_phase<T>(self) -> Game<T> {
        Game {
            board: self.board,
            history: self.history,
            _state: PhantomData,
        }
    }

    /// Validates and applies a move, then settles into the next phase.
    ///
    /// Postconditions are verified in debug builds only.
    fn commit(self, action: Move) -> Result<GameTransition, MoveError>
    where
        S: Clone,
    {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.player));
        game.history.push(action);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        debug!(%action, "Move applied");
        Ok(game.settle())
    }

    fn settle(self) -> GameTransition {
        if self.is_terminal() {
            return GameTransition::Finished(self.into_phase());
        }
        match self.next_mark() {
            Player::X => GameTransition::PlayerTurn(self.into_phase()),
            Player::O => GameTransition::OpponentTurn(self.into_phase()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  PlayerTurn - the human places an X
// ─────────────────────────────────────────────────────────────

impl Game<PlayerTurn> {
    /// Creates a new game; the human moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        Player::X
    }

    /// Returns the empty squares.
    pub fn valid_moves(&self) -> Vec<Position> {
        available_moves(&self.board)
    }

    /// Places the human's mark, consuming the game.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the position is taken.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn place(self, pos: Position) -> Result<GameTransition, MoveError> {
        self.commit(Move::new(Player::X, pos))
    }

    /// Replays moves from the initial state.
    ///
    /// Moves after the game has finished are rejected with `MoveError::GameOver`.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameTransition, MoveError> {
        let mut transition = GameTransition::PlayerTurn(Self::new());

        for &action in moves {
            transition = match transition {
                GameTransition::PlayerTurn(game) => game.commit(action)?,
                GameTransition::OpponentTurn(game) => game.commit(action)?,
                GameTransition::Finished(_) => return Err(MoveError::GameOver),
            };
        }

        Ok(transition)
    }
}

impl Default for Game<PlayerTurn> {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  OpponentTurn - the computer places an O
// ─────────────────────────────────────────────────────────────

impl Game<OpponentTurn> {
    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        Player::O
    }

    /// Asks the move selector for the computer's move.
    pub fn choose(&self) -> Option<Position> {
        best_move(&self.board)
    }

    /// Places the computer's mark at `pos`.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play(self, pos: Position) -> Result<GameTransition, MoveError> {
        self.commit(Move::new(Player::O, pos))
    }

    /// Chooses and plays the computer's move.
    #[instrument(skip(self))]
    pub fn respond(self) -> Result<GameTransition, MoveError> {
        let pos = self.choose().ok_or(MoveError::NoMovesAvailable)?;
        self.play(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished - outcome is always present
// ─────────────────────────────────────────────────────────────

impl Game<Finished> {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        match winner(&self.board) {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        }
    }

    /// The completed line, when the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board)
    }

    /// Restarts the game with an empty board.
    #[instrument(skip(self))]
    pub fn restart(self) -> Game<PlayerTurn> {
        Game::new()
    }
}
