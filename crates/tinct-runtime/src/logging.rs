#![forbid(unsafe_code)]

//! Subscriber setup for hosts that do not install their own.
//!
//! Filtering follows the `TINCT_LOG` environment variable using
//! `tracing-subscriber`'s `EnvFilter` syntax, e.g.
//! `TINCT_LOG=tinct_runtime=debug`. Without it only `info` and above are shown.

use std::fmt;

use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "TINCT_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Output format of [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human oriented.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON.
    #[cfg(feature = "tracing-json")]
    Json,
}

/// Filter from `TINCT_LOG`, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Build a subscriber without installing it.
pub fn build(format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    match format {
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
        #[cfg(feature = "tracing-json")]
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

/// Install a subscriber as the process-wide default.
///
/// Fails if one is already installed.
pub fn init(format: LogFormat) -> Result<(), LoggingError> {
    tracing::subscriber::set_global_default(build(format)).map_err(LoggingError)
}

/// A global subscriber was already installed.
#[derive(Debug)]
pub struct LoggingError(SetGlobalDefaultError);

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to install log subscriber: {}", self.0)
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
