//! Extract a component map from a target-definition file.
//!
//! This is the packaging-time half of the workflow: read the export text
//! the build tool generated during install, build the component graph, and
//! persist it next to the packaged artifacts.
//!
//! ```bash
//! targetmap extract abslTargets.cmake --namespace absl --platform linux
//! targetmap extract abslTargets.cmake -o lib/components.json   # with targetmap.toml
//! ```

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::extractor::{self, Naming, Platform};

/// Command to extract a component map from a target-definition file.
#[derive(Args)]
pub struct ExtractCommand {
    /// Path to the generated target-definition file (e.g. abslTargets.cmake)
    input: PathBuf,

    /// Where to write the component map
    #[arg(short, long, default_value = "components.json")]
    output: PathBuf,

    /// Platform whose system-library table is active
    #[arg(short, long, value_enum)]
    platform: Option<Platform>,

    /// Namespace qualifier carried by the package's own targets (e.g. `absl`)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Prefix for generated component names (defaults to the namespace)
    #[arg(long)]
    prefix: Option<String>,
}

impl ExtractCommand {
    pub fn execute(self, config: &Config, quiet: bool) -> Result<()> {
        let namespace = self
            .namespace
            .or_else(|| config.package.namespace.clone())
            .ok_or_else(|| {
                anyhow!(
                    "no namespace configured\n\
                     Pass --namespace or set package.namespace in {}",
                    Config::FILE_NAME
                )
            })?;
        let prefix = self.prefix.or_else(|| config.package.prefix.clone());
        let platform = self.platform.or(config.package.platform).ok_or_else(|| {
            anyhow!(
                "no platform configured\n\
                 Pass --platform or set package.platform in {}",
                Config::FILE_NAME
            )
        })?;

        // A missing or unreadable source is fatal: extraction from nothing
        // would persist an empty graph and silently unregister every
        // component downstream.
        let source = fs::read_to_string(&self.input).with_context(|| {
            format!("Cannot read target-definition file: {}", self.input.display())
        })?;

        let naming = Naming::new(&namespace, prefix.as_deref());
        let map = extractor::extract(&source, platform, &naming);

        if map.is_empty() {
            tracing::warn!(
                input = %self.input.display(),
                "no target statements recognized in input"
            );
        }

        map.save(&self.output)?;

        if !quiet {
            println!(
                "{} {} component{} ({}) -> {}",
                "Extracted".green().bold(),
                map.len(),
                if map.len() == 1 { "" } else { "s" },
                platform,
                self.output.display()
            );
        }

        Ok(())
    }
}
