//! Plan command handler

use super::{bond_seed, load_config, resolve_bond};
use crate::commands::PlanArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, ProgressReporter};
use serde::Serialize;
use std::fmt::Write;
use wallplan::{
    BrickId, BuildSession, BuildState, Progress, StrideBuild, StridePartitioner, WallDesign,
};

/// Planned and executed strides of one wall
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    /// Bond name
    pub bond: String,
    /// Wild-bond seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Strides in execution order with their placements
    pub strides: Vec<StrideBuild>,
    /// Bricks no stride reaches
    pub uncovered: Vec<BrickId>,
    /// Final progress
    pub progress: Progress,
}

fn join_ids(ids: &[BrickId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a plan report as text
#[must_use]
pub fn render_plan_text(report: &PlanReport, with_orders: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "Plan: {} bond", report.bond);
    if let Some(seed) = report.seed {
        let _ = write!(out, " (seed {seed})");
    }
    let _ = writeln!(out, ", {} strides", report.strides.len());

    for stride in &report.strides {
        let _ = writeln!(
            out,
            "Stride {} @ {}: {} bricks",
            stride.index + 1,
            stride.origin,
            stride.order.len()
        );
        if with_orders {
            let _ = writeln!(out, "  {}", join_ids(&stride.order));
        }
    }
    if !report.uncovered.is_empty() {
        let _ = writeln!(out, "Uncovered: {}", join_ids(&report.uncovered));
    }
    let _ = writeln!(out, "{}", report.progress);
    out
}

/// Plan strides for a design, then run them in order
#[must_use]
pub fn plan_and_build(
    design: &WallDesign,
    spacing: Option<usize>,
    reporter: &mut ProgressReporter,
) -> PlanReport {
    let mut partitioner = StridePartitioner::new(design);
    if let Some(spacing) = spacing {
        partitioner = partitioner.with_spacing(spacing);
    }
    let plan = partitioner.plan(&mut BuildState::new());

    reporter.start_progress(design.len() as u64, "bricks");
    let mut session = BuildSession::new(design, &plan);
    let mut strides = Vec::with_capacity(plan.len());
    while let Some(build) = session.next_stride() {
        reporter.update(session.progress());
        strides.push(build);
    }
    reporter.finish();

    PlanReport {
        bond: design.bond().name().to_string(),
        seed: bond_seed(design.bond()),
        strides,
        uncovered: plan.uncovered,
        progress: session.progress(),
    }
}

/// Execute the plan command
pub fn execute_plan(config: &CliConfig, args: &PlanArgs) -> CliResult<()> {
    if args.spacing == Some(0) {
        return Err(CliError::invalid_argument("--spacing must be at least 1"));
    }
    let wall_config = load_config(args.wall.config.as_deref())?;
    let bond = resolve_bond(&args.wall)?;
    let design = WallDesign::generate(&wall_config, bond)?;

    let quiet = config.verbosity.is_quiet() || args.format == OutputFormat::Json;
    let mut reporter = ProgressReporter::new(config.color.should_color(), quiet);
    let report = plan_and_build(&design, args.spacing, &mut reporter);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!(
            "{}",
            render_plan_text(&report, args.orders || config.verbosity.is_verbose())
        ),
    }

    if report.uncovered.is_empty() {
        reporter.success(&format!(
            "{} strides cover all {} bricks",
            report.strides.len(),
            report.progress.total
        ));
    } else {
        reporter.warning(&format!(
            "{} bricks are not reachable from any stride",
            report.uncovered.len()
        ));
    }
    Ok(())
}
