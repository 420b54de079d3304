//! Wallplan CLI: lay out masonry walls and plan their build
//!
//! ## Usage
//!
//! ```bash
//! wallplan design --bond english_cross        # Print every course
//! wallplan plan --bond wild --seed 7 -f json  # Strides and build orders
//! wallplan config -c wall.yaml                # Resolved configuration
//! ```

use clap::Parser;
use std::process::ExitCode;
use wallplan_cli::{
    handlers::{execute_config, execute_design, execute_plan},
    logging, Cli, CliConfig, CliResult, Commands, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity, cli.verbose, cli.log_format)?;
    let config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.clone().into());

    match cli.command {
        Commands::Design(args) => execute_design(&config, &args),
        Commands::Plan(args) => execute_plan(&config, &args),
        Commands::Config(args) => execute_config(&args),
    }
}
