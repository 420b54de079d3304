//! Design command handler

use super::{bond_seed, load_config, resolve_bond};
use crate::commands::DesignArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{OutputFormat, ProgressReporter};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use wallplan::WallDesign;

/// One course of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLine {
    /// Row index, 0 = bottom
    pub row: usize,
    /// Brick symbols, left to right
    pub symbols: Vec<String>,
}

/// Printable summary of a wall design
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignReport {
    /// Bond name
    pub bond: String,
    /// Wild-bond seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of courses
    pub rows: usize,
    /// Number of bricks
    pub bricks: usize,
    /// Courses, top row first
    pub courses: Vec<CourseLine>,
    /// Brick count per symbol
    pub counts: BTreeMap<String, usize>,
}

/// Summarize a design, top row first as the wall is seen
#[must_use]
pub fn design_report(design: &WallDesign) -> DesignReport {
    let courses = (0..design.row_count())
        .rev()
        .map(|row| CourseLine {
            row,
            symbols: design.course(row).symbols().to_vec(),
        })
        .collect();
    DesignReport {
        bond: design.bond().name().to_string(),
        seed: bond_seed(design.bond()),
        rows: design.row_count(),
        bricks: design.len(),
        courses,
        counts: design.symbol_counts(),
    }
}

/// Render a design report as text
#[must_use]
pub fn render_design_text(report: &DesignReport) -> String {
    let mut out = String::new();
    let _ = write!(out, "Wall: {} bond", report.bond);
    if let Some(seed) = report.seed {
        let _ = write!(out, " (seed {seed})");
    }
    let _ = writeln!(out, ", {} rows, {} bricks", report.rows, report.bricks);

    let width = report.rows.saturating_sub(1).to_string().len();
    for course in &report.courses {
        let _ = writeln!(
            out,
            "row {:>width$} | {}",
            course.row,
            course.symbols.join(" ")
        );
    }

    let counts: Vec<String> = report
        .counts
        .iter()
        .map(|(symbol, count)| format!("{symbol}={count}"))
        .collect();
    let _ = writeln!(out, "Bricks: {}", counts.join(" "));
    out
}

/// Execute the design command
pub fn execute_design(config: &CliConfig, args: &DesignArgs) -> CliResult<()> {
    let wall_config = load_config(args.wall.config.as_deref())?;
    let bond = resolve_bond(&args.wall)?;
    let design = WallDesign::generate(&wall_config, bond)?;
    let report = design_report(&design);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print!("{}", render_design_text(&report));
            let reporter =
                ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());
            reporter.success(&format!("{} bricks in {} courses", report.bricks, report.rows));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use wallplan::{BondStrategy, Seed, WallConfig};

    fn small_design(bond: BondStrategy) -> WallDesign {
        let config = WallConfig::default()
            .with_wall_length(430)
            .with_wall_height(124)
            .with_stride(430, 124);
        WallDesign::generate(&config, bond).unwrap()
    }

    #[test]
    fn test_report_lists_top_row_first() {
        let report = design_report(&small_design(BondStrategy::Stretcher));
        assert_eq!(report.rows, 2);
        assert_eq!(report.bricks, 5);
        assert_eq!(report.courses[0].row, 1);
        assert_eq!(report.courses[0].symbols, ["H", "F", "H"]);
        assert_eq!(report.courses[1].symbols, ["F", "F"]);
        assert_eq!(report.counts["F"], 3);
        assert_eq!(report.seed, None);
    }

    #[test]
    fn test_render_text() {
        let text = render_design_text(&design_report(&small_design(BondStrategy::Stretcher)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Wall: stretcher bond, 2 rows, 5 bricks");
        assert_eq!(lines[1], "row 1 | H F H");
        assert_eq!(lines[2], "row 0 | F F");
        assert_eq!(lines[3], "Bricks: F=3 H=2");
    }

    #[test]
    fn test_wild_report_carries_seed() {
        let report = design_report(&small_design(BondStrategy::Wild(Seed::from_u64(5))));
        assert_eq!(report.bond, "wild");
        assert_eq!(report.seed, Some(5));
        assert!(render_design_text(&report).starts_with("Wall: wild bond (seed 5)"));
    }

    #[test]
    fn test_report_serializes() {
        let report = design_report(&small_design(BondStrategy::Stretcher));
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["bond"], "stretcher");
        assert!(json.get("seed").is_none());
        assert_eq!(json["courses"][1]["symbols"][0], "F");
    }
}
