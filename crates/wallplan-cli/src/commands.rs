//! CLI command definitions

use crate::logging::LogFormat;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Wallplan: masonry bond layout and stride build planning
#[derive(Parser, Debug)]
#[command(name = "wallplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay out every course of the wall
    Design(DesignArgs),

    /// Partition the wall into strides and sequence each one
    Plan(PlanArgs),

    /// Show the resolved wall configuration
    Config(ConfigArgs),
}

/// Wall source shared by design and plan
#[derive(Args, Debug, Clone)]
pub struct WallArgs {
    /// Wall configuration file (YAML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bond pattern: stretcher, english_cross or wild
    #[arg(short, long, default_value = "stretcher")]
    pub bond: String,

    /// Seed for the wild bond
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

/// Arguments for the design command
#[derive(Parser, Debug)]
pub struct DesignArgs {
    /// Wall source
    #[command(flatten)]
    pub wall: WallArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the plan command
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Wall source
    #[command(flatten)]
    pub wall: WallArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Override the candidate row spacing
    #[arg(long)]
    pub spacing: Option<usize>,

    /// List every placement of every stride
    #[arg(long)]
    pub orders: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Wall configuration file (YAML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_design_defaults() {
            let cli = Cli::parse_from(["wallplan", "design"]);
            let Commands::Design(args) = cli.command else {
                panic!("expected Design command");
            };
            assert_eq!(args.wall.bond, "stretcher");
            assert_eq!(args.wall.seed, 0);
            assert!(args.wall.config.is_none());
            assert_eq!(args.format, OutputFormat::Text);
        }

        #[test]
        fn test_parse_design_with_bond_and_seed() {
            let cli = Cli::parse_from([
                "wallplan", "design", "--bond", "wild", "--seed", "42", "-f", "json",
            ]);
            let Commands::Design(args) = cli.command else {
                panic!("expected Design command");
            };
            assert_eq!(args.wall.bond, "wild");
            assert_eq!(args.wall.seed, 42);
            assert_eq!(args.format, OutputFormat::Json);
        }

        #[test]
        fn test_parse_plan_options() {
            let cli = Cli::parse_from([
                "wallplan", "plan", "-c", "wall.yaml", "--spacing", "2", "--orders",
            ]);
            let Commands::Plan(args) = cli.command else {
                panic!("expected Plan command");
            };
            assert_eq!(args.wall.config, Some(PathBuf::from("wall.yaml")));
            assert_eq!(args.spacing, Some(2));
            assert!(args.orders);
        }

        #[test]
        fn test_parse_config_command() {
            let cli = Cli::parse_from(["wallplan", "config"]);
            assert!(matches!(cli.command, Commands::Config(_)));
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from([
                "wallplan",
                "plan",
                "-vv",
                "--color",
                "never",
                "--log-format",
                "json",
            ]);
            assert_eq!(cli.verbose, 2);
            assert!(!cli.quiet);
            assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);
            assert_eq!(cli.log_format, LogFormat::Json);
        }

        #[test]
        fn test_invalid_format_rejected() {
            let result = Cli::try_parse_from(["wallplan", "design", "--format", "xml"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_subcommand_required() {
            assert!(Cli::try_parse_from(["wallplan"]).is_err());
        }
    }
}
