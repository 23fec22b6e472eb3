//! Computer opponent: depth-limited minimax and move selection.

pub mod audit;
pub mod minimax;
pub mod selector;

pub use audit::{AuditReport, audit_opening};
pub use minimax::{MAX_DEPTH, SideToMove, WIN_SCORE, score};
pub use selector::{ScoredMove, best_move, evaluate_moves, select_move};
