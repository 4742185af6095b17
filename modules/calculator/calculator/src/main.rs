//! Binary for the calculator module.
//!
//! Configuration is loaded from:
//! 1. built-in defaults
//! 2. --config CLI argument
//! 3. `CALCULATOR__*` environment variables
//! 4. remaining CLI flags (`--json`, `-v`)

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use calculator::cli::{self, Cli, Commands};
use calculator::config::{AppConfig, OutputFormat};
use calculator::{Service, logging};

/// Exit status for rejected operands (zero divisor, negative exponent, negative radicand).
const EXIT_INVALID_ARGUMENT: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&cli.overrides());

    if !logging::init_logging(&config.logging) {
        eprintln!("warning: a global tracing subscriber was already installed");
    }
    tracing::debug!(?config, "effective configuration");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(ExitCode::SUCCESS);
    }

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::from(EXIT_INVALID_ARGUMENT))
        }
        Some(Commands::Check) => {
            println!("Configuration is valid");
            println!("{}", config.to_yaml()?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Calc(calculation)) => {
            let service = Service::new();
            let operation = calculation.operation();
            let result = cli::execute(&calculation, &service);
            let rendered = cli::render(operation, &result, config.output.format)?;

            if result.is_ok() {
                println!("{rendered}");
                return Ok(ExitCode::SUCCESS);
            }
            match config.output.format {
                OutputFormat::Plain => eprintln!("{rendered}"),
                OutputFormat::Json => println!("{rendered}"),
            }
            Ok(ExitCode::from(EXIT_INVALID_ARGUMENT))
        }
    }
}
