//! Deferred computer moves.
//!
//! The computer's reply is applied after a short pause so the human sees
//! their own move first. The pause runs on a spawned task; the input loop
//! keeps serving `restart` meanwhile, and a reply whose game was reset is
//! dropped by the session.

use noughts_engine::{GameSession, MoveError, OpponentTicket, Position, TurnState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Session shared between the input loop and scheduled moves.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Messages sent from scheduled moves to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The computer took a square.
    OpponentMoved {
        /// Square taken.
        position: Position,
        /// State after the move.
        state: TurnState,
    },
    /// The game was reset before the move landed.
    StaleMoveDiscarded,
    /// The session refused the move for another reason.
    OpponentFailed(MoveError),
}

/// Spawns delayed computer moves against a shared session.
#[derive(Debug, Clone)]
pub struct OpponentScheduler {
    session: SharedSession,
    delay: Duration,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl OpponentScheduler {
    /// Creates a scheduler reporting to `event_tx`.
    pub fn new(
        session: SharedSession,
        delay: Duration,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            delay,
            event_tx,
        }
    }

    /// Applies `ticket` once the delay has passed.
    #[instrument(skip(self, ticket), fields(epoch = ticket.epoch(), delay = ?self.delay))]
    pub fn schedule(&self, ticket: OpponentTicket) -> JoinHandle<()> {
        let session = Arc::clone(&self.session);
        let event_tx = self.event_tx.clone();
        let delay = self.delay;

        debug!("Scheduling computer move");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let event = {
                let mut session = session.lock().await;
                match session.apply_opponent(ticket) {
                    Ok(position) => GameEvent::OpponentMoved {
                        position,
                        state: session.state(),
                    },
                    Err(MoveError::StaleTurn) => {
                        debug!(epoch = ticket.epoch(), "Game was reset, dropping move");
                        GameEvent::StaleMoveDiscarded
                    }
                    Err(e) => {
                        warn!(error = %e, "Computer move failed");
                        GameEvent::OpponentFailed(e)
                    }
                }
            };

            if event_tx.send(event).is_err() {
                debug!("Game loop gone, event dropped");
            }
        })
    }
}
