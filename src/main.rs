use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tictactoe_rewind::{
    args::Args,
    logging,
    replay::replay,
    ui::{UiConfig, run_ui},
    view::GameView,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = match args.log_dir.clone() {
        Some(dir) => dir,
        None => logging::default_log_dir()?,
    };
    let _guard = logging::init(&log_dir)?;
    info!(log_dir = %log_dir.display(), "Starting tictactoe-rewind");

    if args.is_replay() {
        return print_replay(&args);
    }

    let config = UiConfig {
        show_clock: !args.no_clock,
        descending: args.descending,
    };
    let tick_period = args.tick_period();

    tokio::task::spawn_blocking(move || run_ui(config, tick_period))
        .await
        .context("UI thread panicked")?
}

fn print_replay(args: &Args) -> Result<()> {
    let moves: Vec<usize> = args.moves.iter().map(|&m| m as usize).collect();
    let state = replay(&moves, args.jump, args.descending)?;
    let view = GameView::from_state(&state);

    if args.json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize game view")?;
        println!("{json}");
    } else {
        print!("{view}");
    }

    Ok(())
}
