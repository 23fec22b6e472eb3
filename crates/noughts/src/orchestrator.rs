//! Terminal game loop.

use crate::config::GameConfig;
use crate::scheduler::{GameEvent, OpponentScheduler, SharedSession};
use anyhow::Result;
use noughts_engine::{GameSession, Position, TurnState};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument, warn};

/// A line typed by the human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place an `X`.
    Place(Position),
    /// Start over.
    Restart,
    /// Leave the game.
    Quit,
    /// Nothing typed.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a square index (0-8), a square name, or a command.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Input::Empty,
            "restart" | "r" | "new" => Input::Restart,
            "quit" | "q" | "exit" => Input::Quit,
            _ => match Position::from_label_or_number(trimmed) {
                Some(pos) => Input::Place(pos),
                None => Input::Unknown(trimmed.to_string()),
            },
        }
    }
}

/// Runs one interactive session: reads moves, renders the board, and
/// schedules the computer's replies.
pub struct Orchestrator {
    session: SharedSession,
    scheduler: OpponentScheduler,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
    // Scheduled moves whose event has not arrived yet.
    in_flight: usize,
    show_hints: bool,
}

impl Orchestrator {
    /// Creates an orchestrator with a fresh session.
    pub fn new(config: &GameConfig) -> Self {
        let session = Arc::new(Mutex::new(GameSession::new()));
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let scheduler =
            OpponentScheduler::new(Arc::clone(&session), config.thinking_delay(), event_tx);
        Self {
            session,
            scheduler,
            event_rx,
            in_flight: 0,
            show_hints: *config.show_hints(),
        }
    }

    /// The shared session.
    pub fn session(&self) -> SharedSession {
        Arc::clone(&self.session)
    }

    /// Runs the game loop until `quit` or end of input.
    ///
    /// When input ends while the computer is thinking, its move is still
    /// shown before returning.
    #[instrument(skip_all)]
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting game loop");
        let mut lines = input.lines();
        let mut input_open = true;
        self.render(&mut output).await?;

        loop {
            if !input_open && self.in_flight == 0 {
                debug!("Input closed and nothing pending");
                break;
            }

            tokio::select! {
                biased;

                Some(event) = self.event_rx.recv() => {
                    self.on_event(event, &mut output).await?;
                }

                line = lines.next_line(), if input_open => {
                    let Some(line) = line? else {
                        input_open = false;
                        continue;
                    };
                    match Input::parse(&line) {
                        Input::Quit => {
                            info!("Player quit");
                            break;
                        }
                        Input::Restart => {
                            self.session.lock().await.reset();
                            output.write_all(b"New game.\n").await?;
                            self.render(&mut output).await?;
                        }
                        Input::Place(pos) => self.on_click(pos, &mut output).await?,
                        Input::Empty => {}
                        Input::Unknown(text) => {
                            debug!(%text, "Unrecognised input");
                            output
                                .write_all(
                                    format!("Unrecognised input '{}'. {}\n", text, HINT).as_bytes(),
                                )
                                .await?;
                        }
                    }
                }

                else => break,
            }
        }

        output.flush().await?;
        Ok(())
    }

    async fn on_click<W: AsyncWrite + Unpin>(
        &mut self,
        pos: Position,
        output: &mut W,
    ) -> Result<()> {
        let (result, ticket) = {
            let mut session = self.session.lock().await;
            let result = session.click(pos);
            (result, session.opponent_ticket())
        };

        match result {
            Ok(_) => {
                self.render(output).await?;
                if let Some(ticket) = ticket {
                    self.scheduler.schedule(ticket);
                    self.in_flight += 1;
                }
            }
            Err(e) => {
                warn!(error = %e, position = %pos, "Click rejected");
                output.write_all(format!("{}\n", e).as_bytes()).await?;
            }
        }
        Ok(())
    }

    async fn on_event<W: AsyncWrite + Unpin>(
        &mut self,
        event: GameEvent,
        output: &mut W,
    ) -> Result<()> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match event {
            GameEvent::OpponentMoved { position, .. } => {
                output
                    .write_all(
                        format!("Computer plays {} ({})\n", position.to_index(), position)
                            .as_bytes(),
                    )
                    .await?;
                self.render(output).await?;
            }
            GameEvent::StaleMoveDiscarded => {}
            GameEvent::OpponentFailed(e) => {
                output
                    .write_all(format!("Computer could not move: {}\n", e).as_bytes())
                    .await?;
            }
        }
        Ok(())
    }

    async fn render<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        let (board, state) = {
            let session = self.session.lock().await;
            (*session.board(), session.state())
        };

        let mut text = format!("\n{}\n\n{}\n", board.display(), state);
        if self.show_hints {
            match state {
                TurnState::PlayerTurn => text.push_str(&format!("{}\n", HINT)),
                TurnState::GameOver(_) => text.push_str("Type 'restart' to play again.\n"),
                TurnState::OpponentTurn => {}
            }
        }
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
        Ok(())
    }
}

const HINT: &str = "Enter a square 0-8 or a name like 'center'; 'restart' or 'quit'.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("4"), Input::Place(Position::Center));
        assert_eq!(Input::parse(" top-left "), Input::Place(Position::TopLeft));
        assert_eq!(Input::parse("RESTART"), Input::Restart);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("   "), Input::Empty);
        assert_eq!(Input::parse("9"), Input::Unknown("9".to_string()));
    }
}
