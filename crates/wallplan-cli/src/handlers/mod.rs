//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure report builders and renderers
//! - Tests

pub mod config;
pub mod design;
pub mod plan;

pub use config::{config_report, execute_config, ConfigReport};
pub use design::{design_report, execute_design, render_design_text, DesignReport};
pub use plan::{execute_plan, render_plan_text, PlanReport};

use crate::commands::WallArgs;
use crate::error::{CliError, CliResult};
use std::fs;
use std::path::Path;
use tracing::debug;
use wallplan::{BondStrategy, Seed, WallConfig};

/// Load a wall configuration file, or the validated defaults when no path
/// is given
pub fn load_config(path: Option<&Path>) -> CliResult<WallConfig> {
    let Some(path) = path else {
        let config = WallConfig::default();
        config.validate()?;
        return Ok(config);
    };
    debug!(path = %path.display(), "loading wall configuration");
    let yaml = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(WallConfig::from_yaml(&yaml)?)
}

/// Bond selected on the command line, seeded for the wild bond
pub fn resolve_bond(args: &WallArgs) -> CliResult<BondStrategy> {
    let bond: BondStrategy = args.bond.parse()?;
    Ok(bond.with_seed(Seed::from_u64(args.seed)))
}

/// Seed shown in reports; only the wild bond has one
#[must_use]
pub const fn bond_seed(bond: BondStrategy) -> Option<u64> {
    match bond {
        BondStrategy::Wild(seed) => Some(seed.value()),
        _ => None,
    }
}
