//! File logging
//!
//! The terminal belongs to the UI, so logs go to a daily-rotated file under
//! the user config directory (e.g. `~/.config/artist-review/logs/` on Linux).
//! `RUST_LOG` overrides the default `info` filter.

use std::path::PathBuf;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn log_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("artist-review").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the global subscriber, returning the log directory
pub fn init() -> PathBuf {
    let log_dir = log_dir();

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "artist-review.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: logging was already initialized");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "artist-review starting");
    log_dir
}
