mod app;
mod handlers;
mod rendering;
#[cfg(test)]
mod tests;
mod types;

pub use app::App;
pub use types::{Focus, LogBuffer, UiConfig};

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};

use crate::clock::ClockTicker;

/// Entry point for running the UI.
///
/// Must be called from within a tokio runtime when the clock is shown.
pub fn run_ui(config: UiConfig, tick_period: Duration) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(config, logs);

    let ticker = config
        .show_clock
        .then(|| ClockTicker::start(tick_period));

    let mut stdout = stdout();
    enter_or_rollback(
        || {
            enable_raw_mode()?;
            execute!(stdout, EnterAlternateScreen)
        },
        disable_raw_mode,
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal, ticker);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Runs terminal setup, undoing it with `rollback` if any step fails.
pub(in crate::ui) fn enter_or_rollback(
    enter: impl FnOnce() -> io::Result<()>,
    rollback: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    if let Err(e) = enter() {
        rollback()?;
        return Err(e.into());
    }
    Ok(())
}
