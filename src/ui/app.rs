use std::{fmt::Display, io::Stdout, time::Duration};

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    clock::{ClockState, ClockTicker},
    game::GameState,
};

use super::types::{Focus, LogBuffer, UiConfig};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application state container.
pub struct App {
    pub(in crate::ui) game: GameState,
    pub(in crate::ui) cursor: usize,
    pub(in crate::ui) focus: Focus,
    pub(in crate::ui) selected_step: usize,
    pub(in crate::ui) clock: Option<ClockState>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(config: UiConfig, logs: LogBuffer) -> Self {
        let game = if config.descending {
            GameState::new().toggle_move_order()
        } else {
            GameState::new()
        };

        Self {
            game,
            cursor: 4,
            focus: Focus::Board,
            selected_step: 0,
            clock: config.show_clock.then(|| ClockState::new(Local::now())),
            logs,
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut ticker: Option<ClockTicker>,
    ) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            if let Some(now) = ticker.as_mut().and_then(ClockTicker::drain) {
                self.on_tick(now);
            }

            terminal.draw(|f| self.draw(f))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    break;
                }
            }
        }

        if let Some(mut ticker) = ticker {
            ticker.stop();
        }
        Ok(())
    }

    pub(in crate::ui) fn on_tick(&mut self, now: DateTime<Local>) {
        if let Some(clock) = self.clock.as_mut() {
            clock.apply_tick(now);
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}
