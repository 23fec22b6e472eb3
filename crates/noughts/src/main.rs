//! Noughts - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{BestMoveReport, Cli, Command, GameConfig, Orchestrator, analyze, render_analysis};
use noughts_engine::{Board, audit_opening};
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, delay_ms } => run_play(&config, delay_ms).await,
        Command::BestMove { board, json } => {
            init_stderr_tracing();
            run_best_move(&board, json)
        }
        Command::Analyze { board } => {
            init_stderr_tracing();
            run_analyze(&board);
            Ok(())
        }
        Command::Audit => {
            init_stderr_tracing();
            run_audit()
        }
    }
}

/// Run an interactive game on stdin/stdout
async fn run_play(config_path: &Path, delay_ms: Option<u64>) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?;
    if let Some(delay_ms) = delay_ms {
        config = config.with_thinking_delay_ms(delay_ms);
    }

    // Log to file so the board is not interleaved with log lines
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(delay_ms = *config.thinking_delay_ms(), "Starting noughts");

    let mut orchestrator = Orchestrator::new(&config);
    orchestrator
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Goodbye");
    Ok(())
}

#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, json: bool) -> Result<()> {
    let report = BestMoveReport::new(board);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn run_analyze(board: &Board) {
    print!("{}", render_analysis(board, &analyze(board)));
}

fn run_audit() -> Result<()> {
    let report = audit_opening();
    println!("Games:         {}", report.games());
    println!("Computer wins: {}", report.computer_wins);
    println!("Draws:         {}", report.draws);
    println!("Human wins:    {}", report.human_wins);

    if !report.computer_never_loses() {
        anyhow::bail!("The computer lost {} games", report.human_wins);
    }
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
