//! Tracing subscriber setup.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file, without ANSI colors. Used while the TUI owns the screen.
    File,
    /// Standard error.
    Stderr,
}

/// Installs the global subscriber for `target`.
///
/// `RUST_LOG` overrides the configured filter. Installing twice is not an
/// error; the first subscriber stays in place.
pub fn init_tracing(config: &AppConfig, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match target {
        LogTarget::File => {
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init()
                .ok();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
    }

    Ok(())
}
