//! Single-owner game session.
//!
//! The computer's reply is applied later than it is requested (the UI
//! waits before showing it). A ticket taken when the computer's turn
//! begins carries the session epoch and the move count; `reset` advances
//! the epoch, so a reply scheduled for an earlier game is refused instead
//! of landing on the new board, and a used ticket matches no later turn.

use super::action::MoveError;
use super::phases::TurnState;
use super::wrapper::AnyGame;
use super::{Board, Position};
use tracing::{debug, info, instrument, warn};

/// Permission to apply one computer move in a given game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentTicket {
    epoch: u64,
    turn: usize,
}

impl OpponentTicket {
    /// Epoch of the game the ticket was issued for.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of moves on the board when the ticket was issued.
    pub fn turn(&self) -> usize {
        self.turn
    }
}

/// A human-versus-computer game with reset and deferred computer moves.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    game: AnyGame,
    epoch: u64,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game session");
        Self::default()
    }

    /// Returns the game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        self.game.state()
    }

    /// Number of resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Handles a click on `pos` by the human.
    ///
    /// Occupied squares, the computer's turn and finished games are
    /// rejected without changing anything.
    #[instrument(skip(self), fields(epoch = self.epoch, position = %pos))]
    pub fn click(&mut self, pos: Position) -> Result<TurnState, MoveError> {
        let state = self.game.place(pos)?;
        info!(%state, "Human move accepted");
        Ok(state)
    }

    /// Issues a ticket when it is the computer's turn.
    pub fn opponent_ticket(&self) -> Option<OpponentTicket> {
        match self.state() {
            TurnState::OpponentTurn => Some(OpponentTicket {
                epoch: self.epoch,
                turn: self.game.history().len(),
            }),
            _ => None,
        }
    }

    /// Applies the computer's move for `ticket`.
    ///
    /// The game is re-read here, not when the ticket was issued: a ticket
    /// from before a reset, or one already used, yields
    /// `MoveError::StaleTurn` and changes nothing.
    #[instrument(
        skip(self, ticket),
        fields(epoch = self.epoch, ticket_epoch = ticket.epoch, ticket_turn = ticket.turn)
    )]
    pub fn apply_opponent(&mut self, ticket: OpponentTicket) -> Result<Position, MoveError> {
        if ticket.epoch != self.epoch
            || ticket.turn != self.game.history().len()
            || self.state() != TurnState::OpponentTurn
        {
            warn!(state = %self.state(), "Discarding stale computer move");
            return Err(MoveError::StaleTurn);
        }

        let pos = self.game.respond()?;
        info!(position = %pos, state = %self.state(), "Computer move applied");
        Ok(pos)
    }

    /// Starts a new game; outstanding tickets become stale.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.epoch += 1;
        debug!(epoch = self.epoch, "Session reset");
    }
}
