//! Validate a component map without registering anything.
//!
//! Loading already enforces the schema (unknown fields and wrong shapes are
//! fatal); on top of that the command checks the graph invariants: every
//! requirement resolves to a component in the map. Useful as a packaging
//! pipeline gate before the record ships.
//!
//! ```bash
//! targetmap validate lib/components.json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::components::ComponentMap;

/// Command to validate a component map.
#[derive(Args)]
pub struct ValidateCommand {
    /// Path to the component map
    #[arg(default_value = "components.json")]
    path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, quiet: bool) -> Result<()> {
        let map = ComponentMap::load(&self.path)?;
        map.validate()?;

        if !quiet {
            println!(
                "{} {} ({} component{})",
                "Valid".green().bold(),
                self.path.display(),
                map.len(),
                if map.len() == 1 { "" } else { "s" }
            );
        }

        Ok(())
    }
}
