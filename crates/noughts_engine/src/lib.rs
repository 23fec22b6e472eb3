//! Tic-tac-toe engine with a depth-limited minimax opponent.
//!
//! The human plays `X` and moves first; the computer plays `O`.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`winner`], [`available_moves`], draw detection
//! - **Search**: [`score`] (minimax bounded by [`MAX_DEPTH`]) and
//!   [`select_move`] for the computer's reply
//! - **Turn state machine**: typestate [`Game`] phases wrapped by
//!   [`AnyGame`], owned by a [`GameSession`]
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Board, Position, best_move};
//!
//! let board: Board = "XX.O.....".parse().unwrap();
//! assert_eq!(best_move(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod phases;
mod position;
mod session;
mod typestate;
mod types;
mod wrapper;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use phases::{Finished, OpponentTurn, Outcome, PlayerTurn, TurnState};
pub use position::Position;
pub use rules::{WIN_LINES, available_moves, is_draw, is_full, winner, winning_line};
pub use search::{
    AuditReport, MAX_DEPTH, ScoredMove, SideToMove, WIN_SCORE, audit_opening, best_move,
    evaluate_moves, score, select_move,
};
pub use session::{GameSession, OpponentTicket};
pub use typestate::{Game, GameTransition};
pub use types::{BOARD_SIZE, Board, BoardParseError, Player, Square};
pub use wrapper::AnyGame;
