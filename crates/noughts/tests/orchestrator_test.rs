//! Tests for the terminal game loop.

use noughts::{GameConfig, Orchestrator};
use noughts_engine::{Player, Position, Square, TurnState};

fn fast_config() -> GameConfig {
    GameConfig::default().with_thinking_delay_ms(0)
}

async fn play(orchestrator: &mut Orchestrator, input: &str) -> String {
    let mut output = Vec::new();
    orchestrator
        .run(input.as_bytes(), &mut output)
        .await
        .expect("Game loop failed");
    String::from_utf8(output).expect("UTF-8 output")
}

#[tokio::test]
async fn test_computer_reply_shown_before_exit() {
    let mut orchestrator = Orchestrator::new(&fast_config());
    let output = play(&mut orchestrator, "0\n").await;

    assert!(output.contains("Computer plays 4 (Center)"), "{output}");
    let session = orchestrator.session();
    let session = session.lock().await;
    assert_eq!(
        session.board().get(Position::Center),
        Square::Occupied(Player::O)
    );
    assert_eq!(session.state(), TurnState::PlayerTurn);
}

#[tokio::test]
async fn test_quit_stops_immediately() {
    let mut orchestrator = Orchestrator::new(&fast_config());
    let output = play(&mut orchestrator, "quit\n4\n").await;

    assert!(output.contains("Your turn"));
    assert_eq!(orchestrator.session().lock().await.board().occupied(), 0);
}

#[tokio::test]
async fn test_unknown_input_reports_hint() {
    let mut orchestrator = Orchestrator::new(&fast_config());
    let output = play(&mut orchestrator, "banana\n").await;
    assert!(output.contains("Unrecognised input 'banana'"));
}

#[tokio::test]
async fn test_restart_clears_board() {
    let mut orchestrator = Orchestrator::new(&fast_config());
    let output = play(&mut orchestrator, "0\n").await;
    assert!(output.contains("Computer plays"));

    let output = play(&mut orchestrator, "restart\n").await;
    assert!(output.contains("New game."));
    let session = orchestrator.session();
    let session = session.lock().await;
    assert_eq!(session.board().occupied(), 0);
    assert_eq!(session.epoch(), 1);
}
