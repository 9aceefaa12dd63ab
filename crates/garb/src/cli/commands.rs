//! # CLI Layer
//!
//! This module is **one possible UI client** for garb; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: Route library `tracing` events to stderr
//! 3. **Context Setup**: Resolve configuration and load the catalog
//! 4. **Dispatch**: Route commands to the API facade
//! 5. **Output Formatting**: Render the returned `CmdResult`

use super::render::{render, OutputMode};
use super::setup::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use garbapp::api::GarbApi;
use garbapp::commands::CmdResult;
use garbapp::init::initialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.config.as_deref(), cli.catalog.clone())
        .context("could not start garb")?;
    debug!(garments = ctx.api.catalog().len(), "ready");

    let result = dispatch(&ctx.api, &cli.command)?;
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    print!("{}", render(&result, mode)?);
    Ok(())
}

fn dispatch(api: &GarbApi, command: &Commands) -> garbapp::error::Result<CmdResult> {
    match command {
        Commands::Search(args) => api.search(&args.to_form(), args.sort.into()),
        Commands::Brands => api.brands(),
        Commands::Values { kind } => api.values(kind),
        Commands::Check => api.check(),
    }
}

/// `RUST_LOG` wins; otherwise warnings, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
