//! Config command handler

use super::load_config;
use crate::commands::ConfigArgs;
use crate::error::CliResult;
use crate::output::OutputFormat;
use serde::Serialize;
use wallplan::WallConfig;

/// Resolved configuration with its derived quantities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigReport {
    /// The configuration as loaded
    pub config: WallConfig,
    /// Full-brick height plus bed joint (mm)
    pub course_height: u32,
    /// Courses in the wall
    pub rows: usize,
    /// Courses in one stride
    pub rows_per_stride: usize,
}

/// Pair a configuration with its derived quantities
#[must_use]
pub fn config_report(config: WallConfig) -> ConfigReport {
    ConfigReport {
        course_height: config.course_height(),
        rows: config.rows(),
        rows_per_stride: config.rows_per_stride(),
        config,
    }
}

/// Render the report as YAML followed by commented derived values
pub fn render_config_text(report: &ConfigReport) -> CliResult<String> {
    let yaml = report.config.to_yaml()?;
    Ok(format!(
        "{yaml}# course height: {}mm\n# rows: {}\n# rows per stride: {}\n",
        report.course_height, report.rows, report.rows_per_stride
    ))
}

/// Execute the config command
pub fn execute_config(args: &ConfigArgs) -> CliResult<()> {
    let report = config_report(load_config(args.config.as_deref())?);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_config_text(&report)?),
    }
    Ok(())
}
