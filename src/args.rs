use std::{path::PathBuf, time::Duration};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tictactoe-rewind", about = "Tic-tac-toe with move history and time travel")]
pub struct Args {
    /// Cell indices (0-8, row-major) to replay without opening the UI
    #[arg(long, num_args = 1.., value_parser = clap::value_parser!(u8).range(0..=8))]
    pub moves: Vec<u8>,

    /// After replaying, jump back to this step
    #[arg(long, requires = "moves")]
    pub jump: Option<usize>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Print the replayed game as JSON
    #[arg(long, requires = "moves")]
    pub json: bool,

    /// Clock refresh period in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(50..))]
    pub tick_ms: u64,

    /// Hide the clock panel
    #[arg(long)]
    pub no_clock: bool,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn is_replay(&self) -> bool {
        !self.moves.is_empty()
    }
}
