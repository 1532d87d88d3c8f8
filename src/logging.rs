//! Tracing setup
//!
//! Events go to a log file rather than the terminal so the TUI is never
//! overwritten. `RUST_LOG` overrides the default `info` filter.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "wordle_game.log";

/// Install a file-backed subscriber; keep the guard alive until exit to flush logs
///
/// # Errors
///
/// Returns an I/O error if the log directory cannot be created.
pub fn init_tracing(log_dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(non_blocking_file);

    // try_init: a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    Ok(guard)
}
