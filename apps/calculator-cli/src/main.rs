//! Calculator CLI
//!
//! Terminal front end for the calculator engine: pick an operation, enter up
//! to two numbers, get a result.
//!
//! # Usage
//!
//! ```bash
//! calculator eval Add 5 3          # 8
//! calculator eval Square 4         # 16
//! calculator eval Divide 5 0       # alert on stderr, exit status 1
//! calculator --json examples
//! calculator --config calculator.yaml check
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod config;
mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::render::Renderer;

/// Simple calculator
///
/// Choose an operation and enter numbers to calculate.
#[derive(Parser)]
#[command(name = "calculator")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operation
    Eval(commands::EvalArgs),
    /// Evaluate the built-in example rows
    Examples,
    /// List operations and the operands each one uses
    Operations,
    /// Validate configuration and print it
    Check,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init_logging(&config.logging, cli.verbose)?;
    tracing::debug!(
        division_by_zero = ?config.calculator.division_by_zero,
        precision = ?config.calculator.precision,
        "configuration loaded"
    );

    let client = calculator::wire_client();
    let renderer = Renderer::new(&config.calculator, cli.json);

    match cli.command {
        Commands::Eval(args) => Ok(args.run(client.as_ref(), &renderer).await),
        Commands::Examples => commands::examples(client.as_ref(), &renderer).await,
        Commands::Operations => {
            commands::operations(cli.json);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            println!("Configuration is valid");
            println!("{}", config.to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
