//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::typestate::Game;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    pub fn check<P>(mov: &Move, game: &Game<P>) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side that is not due to move.
    pub fn check<P>(mov: &Move, game: &Game<P>) -> Result<(), MoveError> {
        if mov.player == game.next_mark() {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn(mov.player))
        }
    }
}

/// Composite precondition: the game is live, the square is empty and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "debug", skip(game))]
    pub fn check<P>(mov: &Move, game: &Game<P>) -> Result<(), MoveError> {
        if game.is_terminal() {
            return Err(MoveError::GameOver);
        }
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one more mark on the board
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl<P> Contract<Game<P>, Move> for MoveContract {
    fn pre(game: &Game<P>, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game<P>, after: &Game<P>) -> Result<(), MoveError> {
        if after.board().occupied() != before.board().occupied() + 1 {
            warn!(
                before = before.board().occupied(),
                after = after.board().occupied(),
                "Move did not place exactly one mark"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: exactly one mark per move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
