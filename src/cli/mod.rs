//! Command-line interface for targetmap.
//!
//! Each command lives in its own module with its own argument struct and
//! `execute()` method:
//!
//! - `extract`: parse a target-definition file and write the component map
//! - `list`: display a component map as a table or JSON
//! - `register`: replay a component map as registration calls on stdout
//! - `validate`: check a component map against the schema and invariants
//!
//! Global options (`--verbose`, `--quiet`, `--config`) apply to every
//! subcommand. A typical packaging run is:
//!
//! ```bash
//! # at packaging time
//! targetmap extract lib/cmake/absl/abslTargets.cmake \
//!     --namespace absl --platform linux --output lib/components.json
//!
//! # at metadata-read time, possibly a different process
//! targetmap register lib/components.json
//! ```

mod extract;
mod list;
mod register;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "targetmap",
    about = "Extract CMake imported-target metadata into a package component map",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file (defaults to ./targetmap.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Extract a component map from a target-definition file
    Extract(extract::ExtractCommand),
    /// List the components recorded in a component map
    List(list::ListCommand),
    /// Replay a component map as registration calls on stdout
    Register(register::RegisterCommand),
    /// Validate a component map against its schema and invariants
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::discover()?,
        };

        match self.command {
            Commands::Extract(cmd) => cmd.execute(&config, self.quiet),
            Commands::List(cmd) => cmd.execute(),
            Commands::Register(cmd) => cmd.execute(),
            Commands::Validate(cmd) => cmd.execute(self.quiet),
        }
    }

    /// Wire `--verbose`/`--quiet` into the tracing subscriber. `RUST_LOG`
    /// still wins when neither flag is given.
    fn init_logging(&self) {
        let filter = if self.quiet {
            EnvFilter::new("error")
        } else if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init();
    }
}
