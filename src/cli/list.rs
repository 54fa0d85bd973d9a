//! List the components recorded in a component map.
//!
//! ```bash
//! targetmap list                        # table view of ./components.json
//! targetmap list lib/components.json --format json
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::components::ComponentMap;

/// Command to display a component map.
#[derive(Args)]
pub struct ListCommand {
    /// Path to the component map
    #[arg(default_value = "components.json")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned columns, one component per row
    Table,
    /// The raw record, pretty-printed
    Json,
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        let map = ComponentMap::load(&self.path)?;

        match self.format {
            OutputFormat::Json => {
                let text =
                    serde_json::to_string_pretty(&map).context("Failed to render component map")?;
                println!("{text}");
            }
            OutputFormat::Table => print_table(&map),
        }

        Ok(())
    }
}

fn print_table(map: &ComponentMap) {
    if map.is_empty() {
        println!("No components recorded.");
        return;
    }

    let name_width = map.names().map(str::len).max().unwrap_or(4).max("NAME".len());
    let target_width = map
        .iter()
        .map(|(_, c)| c.cmake_target.len())
        .max()
        .unwrap_or(6)
        .max("TARGET".len());

    println!(
        "{:<name_width$}  {:<target_width$}  {:>4}  {:>7}  {}",
        "NAME".bold(),
        "TARGET".bold(),
        "LIBS".bold(),
        "DEFINES".bold(),
        "REQUIRES".bold(),
    );

    for (name, component) in map.iter() {
        println!(
            "{:<name_width$}  {:<target_width$}  {:>4}  {:>7}  {}",
            name,
            component.cmake_target,
            component.libs.len(),
            component.defines.len(),
            component.requires.join(", "),
        );
    }

    println!(
        "\n{} component{}",
        map.len(),
        if map.len() == 1 { "" } else { "s" }
    );
}
