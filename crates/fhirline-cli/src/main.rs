//! fhirline - FHIR NDJSON toolkit
//!
//! Lists and converts bulk-export NDJSON into Parquet with inferred wide
//! schemas, and fetches resources from FHIR servers.

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fhirline_core::{init_logging, stop_flag, Verbosity};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "fhirline")]
#[command(about = "FHIR NDJSON listing, schema inference, and Parquet conversion")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./fhirline.toml or ~/.config/fhirline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List NDJSON files and their resource types
    Ls(cmd::ls::LsArgs),
    /// Print the schema inferred for a resource type
    Schema(cmd::schema::SchemaArgs),
    /// Convert NDJSON files to Parquet, one set of parts per resource type
    Convert(cmd::convert::ConvertArgs),
    /// Fetch a resource from a FHIR server
    Get(cmd::get::GetArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let progress = Arc::new(fhirline_core::ProgressContext::new());

    // On a terminal the bars show activity, so logs drop to warn
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = is_tty && !cli.debug;
    init_logging(Verbosity::from_flags(quiet, cli.debug), multi)
        .context("Failed to initialize logging")?;

    setup_signal_handler()?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Ls(args) => cmd::ls::run(args),
        Command::Schema(args) => cmd::schema::run(args),
        Command::Convert(args) => cmd::convert::run(args, &config, &progress),
        Command::Get(args) => cmd::get::run(args, &config),
        Command::Config => cmd::config::run(&config),
    }
}

fn setup_signal_handler() -> Result<()> {
    // First signal: finish the current batch and stop
    // Second signal: exit immediately
    for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        // SAFETY: AtomicBool::swap and low_level::exit are async-signal-safe
        let registered = unsafe {
            signal_hook::low_level::register(signal, || {
                if stop_flag().swap(true, Ordering::Relaxed) {
                    signal_hook::low_level::exit(130);
                }
            })
        };
        registered.with_context(|| format!("Failed to register handler for signal {signal}"))?;
    }
    Ok(())
}
