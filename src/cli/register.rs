//! Replay a component map as registration calls.
//!
//! Emits one JSON object per line on stdout, in record order, for the
//! surrounding packaging system to consume. Ordering matters: downstream
//! dependency resolution is first-declared-wins.
//!
//! ```bash
//! targetmap register lib/components.json
//! ```

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::components::ComponentMap;
use crate::registry::{JsonLinesRegistrar, register_components};

/// Command to emit registration calls from a component map.
#[derive(Args)]
pub struct RegisterCommand {
    /// Path to the component map
    #[arg(default_value = "components.json")]
    path: PathBuf,
}

impl RegisterCommand {
    pub fn execute(self) -> Result<()> {
        let map = ComponentMap::load(&self.path)?;
        map.validate()?;

        let stdout = std::io::stdout();
        let mut registrar = JsonLinesRegistrar::new(stdout.lock());
        register_components(&map, &mut registrar)?;

        std::io::stdout().flush()?;
        Ok(())
    }
}
