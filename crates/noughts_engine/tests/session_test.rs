//! Tests for the game session and deferred computer moves.

use noughts_engine::{
    Board, GameSession, MoveError, Outcome, Player, Position, Square, TurnState, available_moves,
};

#[test]
fn test_click_then_computer_reply() {
    let mut session = GameSession::new();
    assert_eq!(session.click(Position::TopLeft), Ok(TurnState::OpponentTurn));

    let ticket = session.opponent_ticket().expect("Computer's turn");
    assert_eq!(session.apply_opponent(ticket), Ok(Position::Center));
    assert_eq!(session.state(), TurnState::PlayerTurn);
    assert_eq!(
        session.board().get(Position::Center),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_clicks_ignored_while_computer_thinks() {
    let mut session = GameSession::new();
    session.click(Position::Center).unwrap();

    assert_eq!(
        session.click(Position::TopLeft),
        Err(MoveError::NotYourTurn(Player::X))
    );
    assert_eq!(session.board().occupied(), 1);
}

#[test]
fn test_occupied_click_rejected() {
    let mut session = GameSession::new();
    session.click(Position::TopLeft).unwrap();
    let ticket = session.opponent_ticket().unwrap();
    session.apply_opponent(ticket).unwrap();

    assert_eq!(
        session.click(Position::TopLeft),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(session.state(), TurnState::PlayerTurn);
}

#[test]
fn test_reset_discards_pending_reply() {
    let mut session = GameSession::new();
    session.click(Position::BottomRight).unwrap();
    let stale = session.opponent_ticket().unwrap();

    session.reset();
    assert_eq!(session.state(), TurnState::PlayerTurn);
    assert_eq!(session.apply_opponent(stale), Err(MoveError::StaleTurn));
    assert_eq!(session.board().occupied(), 0);
}

#[test]
fn test_full_game_never_lost() {
    let mut session = GameSession::new();
    while !session.state().is_over() {
        match session.state() {
            TurnState::PlayerTurn => {
                let pos = *available_moves(session.board())
                    .last()
                    .expect("Moves remain");
                session.click(pos).unwrap();
            }
            TurnState::OpponentTurn => {
                let ticket = session.opponent_ticket().unwrap();
                session.apply_opponent(ticket).unwrap();
            }
            TurnState::GameOver(_) => unreachable!(),
        }
    }

    assert_ne!(session.state(), TurnState::GameOver(Outcome::Winner(Player::X)));
    assert_eq!(session.click(Position::Center), Err(MoveError::GameOver));
}

#[test]
fn test_drawn_game_reports_draw() {
    let mut session = GameSession::new();
    let human = [4, 1, 3, 2, 8];
    let computer = [0, 7, 5, 6];

    for (turn, &index) in human.iter().enumerate() {
        let pos = Position::from_index(index).expect("Valid index");
        let state = session.click(pos).expect("Legal move");
        if turn == human.len() - 1 {
            assert_eq!(state, TurnState::GameOver(Outcome::Draw));
            break;
        }
        assert_eq!(state, TurnState::OpponentTurn);
        assert_eq!(state.to_string(), "Computer is thinking...");

        let ticket = session.opponent_ticket().expect("Computer's turn");
        let reply = session.apply_opponent(ticket).expect("Computer moves");
        assert_eq!(reply.to_index(), computer[turn]);
        assert_eq!(session.state().to_string(), "Your turn");
    }

    let expected: Board = "OXXXXOOOX".parse().expect("Valid board");
    assert_eq!(*session.board(), expected);
    assert_eq!(session.state(), TurnState::GameOver(Outcome::Draw));
    assert_eq!(session.state().to_string(), "Draw");
    assert!(session.opponent_ticket().is_none());
}
