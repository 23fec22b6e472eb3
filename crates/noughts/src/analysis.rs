//! One-shot board queries behind the `best-move` and `analyze` commands.

use noughts_engine::{
    Board, Player, Position, ScoredMove, available_moves, best_move, evaluate_moves, winner,
};
use serde::Serialize;
use tracing::instrument;

/// The computer's choice for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// The board in compact notation.
    pub board: String,
    /// Index of the selected square; `None` when the board is full.
    pub index: Option<usize>,
    /// The selected square.
    pub position: Option<Position>,
    /// Winner already on the board, if any.
    pub winner: Option<Player>,
}

impl BestMoveReport {
    /// Runs the move selector on `board`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn new(board: &Board) -> Self {
        let position = best_move(board);
        Self {
            board: board.to_string(),
            index: position.map(Position::to_index),
            position,
            winner: winner(board),
        }
    }
}

impl std::fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some(pos) => write!(f, "Best move: {} ({})", pos.to_index(), pos)?,
            None => write!(f, "No move available")?,
        }
        if let Some(player) = self.winner {
            write!(f, "\nWinner: {}", player)?;
        }
        Ok(())
    }
}

/// Scores every empty square from the computer's side.
pub fn analyze(board: &Board) -> Vec<ScoredMove> {
    evaluate_moves(board, &available_moves(board))
}

/// Renders [`analyze`] output, marking the square the selector would take.
pub fn render_analysis(board: &Board, scores: &[ScoredMove]) -> String {
    let chosen = best_move(board);
    let mut out = format!("{}\n\n", board.display());
    if scores.is_empty() {
        out.push_str("No candidate moves\n");
        return out;
    }
    for scored in scores {
        let marker = if Some(scored.position) == chosen { " <-" } else { "" };
        out.push_str(&format!(
            "{} {:<13} {:>3}{}\n",
            scored.position.to_index(),
            scored.position.label(),
            scored.score,
            marker
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_block() {
        let board: Board = "XX.O.....".parse().unwrap();
        let report = BestMoveReport::new(&board);
        assert_eq!(report.index, Some(2));
        assert_eq!(report.winner, None);
        assert_eq!(report.to_string(), "Best move: 2 (Top-right)");
    }

    #[test]
    fn test_report_for_full_board() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let report = BestMoveReport::new(&board);
        assert_eq!(report.index, None);
        assert_eq!(report.to_string(), "No move available");
    }

    #[test]
    fn test_report_json() {
        let board: Board = "OO.XX....".parse().unwrap();
        let json = serde_json::to_value(BestMoveReport::new(&board)).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["position"], "TopRight");
        assert!(json["winner"].is_null());
    }

    #[test]
    fn test_analysis_marks_choice() {
        let board: Board = "XX.OO....".parse().unwrap();
        let scores = analyze(&board);
        assert_eq!(scores.len(), 5);
        let rendered = render_analysis(&board, &scores);
        let marked: Vec<&str> = rendered.lines().filter(|l| l.ends_with("<-")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("5 Middle-right"));
    }
}
