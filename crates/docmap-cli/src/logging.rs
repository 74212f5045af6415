//! Diagnostic logging setup.
//!
//! Load failures, dropped fetch results and drag anomalies are reported
//! through `tracing`. The explore command owns the terminal, so its log goes
//! to a file unless one is given explicitly.

use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

pub const TUI_LOG_FILE: &str = "docmap.log";

/// Default log location while the terminal is in raw mode
pub fn default_tui_log_path() -> PathBuf {
    std::env::temp_dir().join(TUI_LOG_FILE)
}

/// `RUST_LOG` wins over `--log-level` when it is set and valid.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Install the global subscriber. `file` of `None` logs to stderr.
pub fn init(level: LogLevel, file: Option<&Path>) -> Result<()> {
    let (writer, ansi) = match file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(handle)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    // A second init (tests driving `run` twice) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tui_log_path_is_in_temp_dir() {
        let path = default_tui_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(TUI_LOG_FILE));
    }

    #[test]
    fn test_init_creates_log_file() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("nested-ok.log");
        init(LogLevel::Info, Some(&path))?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_init_reports_unwritable_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("docmap.log");
        let err = init(LogLevel::Info, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
