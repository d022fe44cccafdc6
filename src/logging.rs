//! File-backed tracing setup. The terminal belongs to the UI, so log output
//! never goes to stdout or stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "tictactoe-rewind.log";

/// Platform data directory for log files.
pub fn default_log_dir() -> Result<PathBuf> {
    let mut path = dirs::data_dir().context("Unable to determine data directory for your platform")?;
    path.push("tictactoe-rewind");
    path.push("logs");
    Ok(path)
}

/// Installs the global subscriber writing to a daily rolling file in `dir`.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// until the program exits.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");

        let guard = init(&dir);

        assert!(guard.is_ok());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_default_log_dir_suffix() {
        if let Ok(dir) = default_log_dir() {
            assert!(dir.ends_with("tictactoe-rewind/logs"));
        }
    }
}
