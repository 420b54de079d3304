//! Log subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the level follows the verbosity flags.
//! Logs always go to stderr so stdout stays parseable.

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log line format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Default filter directive for a verbosity level
#[must_use]
pub const fn default_directive(verbosity: Verbosity, verbose: u8) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "info",
        Verbosity::Debug if verbose >= 3 => "trace",
        Verbosity::Debug => "debug",
    }
}

/// Install the global subscriber
pub fn init(verbosity: Verbosity, verbose: u8, format: LogFormat) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };
    result.map_err(|e| CliError::config(format!("cannot install log subscriber: {e}")))
}
