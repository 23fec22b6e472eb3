//! Noughts - terminal tic-tac-toe against a minimax opponent.
//!
//! The game rules and the computer's search live in `noughts_engine`;
//! this crate adds the command line, configuration, and the interactive
//! loop that shows the computer's reply after a short delay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod scheduler;

pub use analysis::{BestMoveReport, analyze, render_analysis};
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use orchestrator::{Input, Orchestrator};
pub use scheduler::{GameEvent, OpponentScheduler, SharedSession};
