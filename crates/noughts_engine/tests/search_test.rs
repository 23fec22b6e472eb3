//! Tests for the computer opponent's search.

use noughts_engine::{
    Board, MAX_DEPTH, Position, SideToMove, available_moves, best_move, evaluate_moves, is_draw,
    score, select_move, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("Valid board")
}

#[test]
fn test_blocks_human_row() {
    // X threatens the top row; O has no win of its own.
    let board = board("XX.O.....");
    assert_eq!(best_move(&board), Some(Position::TopRight));
}

#[test]
fn test_completes_own_row() {
    let board = board("OO.XX....");
    assert_eq!(best_move(&board), Some(Position::TopRight));
}

#[test]
fn test_prefers_win_over_block() {
    // Blocking at 2 scores lower than winning the middle row at 5.
    let board = board("XX.OO....");
    let scores = evaluate_moves(&board, &available_moves(&board));
    let block = scores
        .iter()
        .find(|s| s.position == Position::TopRight)
        .expect("Block candidate");
    let win = scores
        .iter()
        .find(|s| s.position == Position::MiddleRight)
        .expect("Win candidate");
    assert!(win.score > block.score);
    assert_eq!(best_move(&board), Some(Position::MiddleRight));
}

#[test]
fn test_full_board_draw() {
    let board = board("XOXXOOOXX");
    assert_eq!(winner(&board), None);
    assert!(is_draw(&board));
    assert!(available_moves(&board).is_empty());
    assert_eq!(best_move(&board), None);
}

#[test]
fn test_empty_board_has_every_move() {
    let board = Board::new();
    assert_eq!(winner(&board), None);
    assert_eq!(available_moves(&board), Position::ALL.to_vec());
}

#[test]
fn test_terminal_scores_discount_depth() {
    assert_eq!(score(&board("OOOXX.X.."), 2, SideToMove::Human), 8);
    assert_eq!(score(&board("XXXOO.O.."), 3, SideToMove::Computer), -7);
}

#[test]
fn test_depth_limit_scores_zero() {
    assert_eq!(score(&board("X...O...."), MAX_DEPTH, SideToMove::Human), 0);
}

#[test]
fn test_selection_honours_candidate_order_on_ties() {
    // All four corners score the same against a centre opening.
    let board = board("....X....");
    assert_eq!(best_move(&board), Some(Position::TopLeft));

    let reversed: Vec<Position> = available_moves(&board).into_iter().rev().collect();
    assert_eq!(select_move(&board, &reversed), Some(Position::BottomRight));
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = board("X.X.O....");
    let before = board;
    assert_eq!(best_move(&board), Some(Position::TopCenter));
    assert_eq!(board, before);
}
