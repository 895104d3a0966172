// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! beacon - inspect events and evaluate resource specifications

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod error;
mod input;
mod output;

use anyhow::Result;
use beacon_core::SystemClock;
use clap::{Parser, Subcommand};
use commands::{label, matches, receive, roles, validate, Outcome};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// Exit code when a command runs but finds nothing
const EXIT_NOT_FOUND: u8 = 1;
/// Exit code for invalid input, config or usage
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(
    name = "beacon",
    version,
    about = "Beacon - event validation and resource matching"
)]
struct Cli {
    /// Config file (defaults to ./beacon.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an event against the configured limits
    Validate(validate::ValidateArgs),
    /// Test whether a resource specification matches an event
    Match(matches::MatchArgs),
    /// Resolve a label on an event's resources
    Label(label::LabelArgs),
    /// Summarize related resources by role
    Roles(roles::RolesArgs),
    /// Stamp an event as received and print it
    Receive(receive::ReceiveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::from(EXIT_NOT_FOUND),
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref()).map_err(CliError::config)?;
    let limits = config.limits;
    tracing::debug!(?limits, "using event limits");

    match cli.command {
        Commands::Validate(args) => validate::handle(args, &limits, cli.format),
        Commands::Match(args) => matches::handle(args, &limits, cli.format),
        Commands::Label(args) => label::handle(args, &limits, cli.format),
        Commands::Roles(args) => roles::handle(args, &limits, cli.format),
        Commands::Receive(args) => receive::handle(args, &limits, &SystemClock),
    }
}

/// Log to stderr, filtered by `BEACON_LOG` (default: warn)
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("BEACON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
