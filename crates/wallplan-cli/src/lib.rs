//! Wallplan CLI Library
//!
//! Command-line interface over the Wallplan planning library.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, DesignArgs, PlanArgs, WallArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogFormat;
pub use output::{OutputFormat, ProgressReporter};
