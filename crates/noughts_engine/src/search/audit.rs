//! Exhaustive self-play check of the computer opponent.
//!
//! Every legal human line from the empty board is played against
//! [`best_move`]; the computer's replies are deterministic, so the tree
//! only branches on human moves.

use super::super::rules::{available_moves, is_full, winner};
use super::super::{Board, Player, Square};
use super::selector::best_move;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Outcome tally over all finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Games won by the human (`X`).
    pub human_wins: u32,
    /// Games won by the computer (`O`).
    pub computer_wins: u32,
    /// Games ending on a full board.
    pub draws: u32,
}

impl AuditReport {
    /// Total number of distinct games played.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    /// True when no human line beats the computer.
    pub fn computer_never_loses(&self) -> bool {
        self.human_wins == 0
    }

    fn record(&mut self, board: &Board) -> bool {
        match winner(board) {
            Some(Player::X) => self.human_wins += 1,
            Some(Player::O) => self.computer_wins += 1,
            None if is_full(board) => self.draws += 1,
            None => return false,
        }
        true
    }
}

/// Plays every human line from the empty board against the computer.
#[instrument]
pub fn audit_opening() -> AuditReport {
    let mut report = AuditReport::default();
    explore(&Board::new(), &mut report);
    info!(
        games = report.games(),
        human_wins = report.human_wins,
        computer_wins = report.computer_wins,
        draws = report.draws,
        "Opening audit finished"
    );
    report
}

fn explore(board: &Board, report: &mut AuditReport) {
    for pos in available_moves(board) {
        let mut after_human = *board;
        after_human.set(pos, Square::Occupied(Player::X));
        if report.record(&after_human) {
            continue;
        }

        let Some(reply) = best_move(&after_human) else {
            continue;
        };
        let mut after_computer = after_human;
        after_computer.set(reply, Square::Occupied(Player::O));
        if report.record(&after_computer) {
            continue;
        }

        explore(&after_computer, report);
    }
}
