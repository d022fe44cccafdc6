//! Wall clock panel, independent from the game.
//!
//! [`ClockTicker`] owns the periodic timer. It is acquired with
//! [`ClockTicker::start`] and released by [`ClockTicker::stop`] or on drop.
//! [`ClockState`] holds what the panel displays.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info};

pub const CLOCK_HEADING: &str = "Clock is ticking.";
const TIME_FORMAT: &str = "%-I:%M:%S %p";

#[derive(Debug, Clone)]
pub struct ClockState {
    now: DateTime<Local>,
    ticks: u64,
}

impl ClockState {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now, ticks: 0 }
    }

    pub fn apply_tick(&mut self, now: DateTime<Local>) {
        self.now = now;
        self.ticks += 1;
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn time_text(&self) -> String {
        format!("It is {}", self.now.format(TIME_FORMAT))
    }
}

/// Periodic timer task feeding wall-clock readings over a channel.
pub struct ClockTicker {
    handle: JoinHandle<()>,
    rx: UnboundedReceiver<DateTime<Local>>,
    stopped: bool,
}

impl ClockTicker {
    /// Spawns the timer on the current tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick resolves immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(Local::now()).is_err() {
                    break;
                }
            }
        });

        info!(period_ms = period.as_millis() as u64, "Clock started");
        Self {
            handle,
            rx,
            stopped: false,
        }
    }

    /// Takes every pending reading and returns the most recent one.
    pub fn drain(&mut self) -> Option<DateTime<Local>> {
        let mut latest = None;
        while let Ok(now) = self.rx.try_recv() {
            latest = Some(now);
        }
        if latest.is_some() {
            debug!("Clock tick");
        }
        latest
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.handle.abort();
            info!("Clock stopped");
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
