//! Logging setup
//!
//! Uses `tracing` with a `tracing-subscriber` fmt layer. While the TUI owns
//! the terminal, log lines go to a file; CLI commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};

/// Where log output is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the log filter
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug for this crate;
/// otherwise the settings file's `log_filter` applies.
pub fn build_filter(settings: &Settings, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("mpesa_dashboard=debug")
        } else {
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
        }
    })
}

/// Install the global subscriber
pub fn init(target: &LogTarget, filter: EnvFilter) -> DashboardResult<()> {
    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| DashboardError::Io(format!("Failed to open log file: {}", e)))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };

    installed.map_err(|e| DashboardError::Config(format!("Failed to initialize logging: {}", e)))
}
