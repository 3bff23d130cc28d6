//! modgen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or configuration
//! - 4: Template or write error

use std::process::ExitCode;

use clap::Parser;
use modgen_config::ConfigError;
use modgen_templates::GenerateError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_CONFIG: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Targets are prefix-matched, so `modgen` covers every workspace crate.
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,modgen={level}")));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args).await,
        Commands::Generate(args) => commands::generate::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Map an error to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<ConfigError>().is_some() {
        ExitCodes::INVALID_CONFIG
    } else if e.downcast_ref::<GenerateError>().is_some() {
        ExitCodes::TEMPLATE_ERROR
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
