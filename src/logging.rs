//! Tracing setup. The terminal belongs to the dashboard, so log lines go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber writing to `config.log_file`.
///
/// An unparsable `log_level` falls back to `info`. Calling this twice is harmless;
/// only the first subscriber is kept.
pub fn init_logging(config: &AppConfig) -> AppResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|source| AppError::LogFile {
            path: config.log_file.display().to_string(),
            source,
        })?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .try_init();

    tracing::info!(api = %config.api_base_url, "logging initialised");
    Ok(())
}
