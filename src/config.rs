//! Optional project configuration (`targetmap.toml`).
//!
//! The extraction parameters that rarely change between invocations (the
//! upstream namespace, the component-name prefix, the default platform)
//! can live in a small TOML file next to the packaging recipe instead of
//! being repeated on every command line. CLI flags always override file
//! values.
//!
//! ```toml
//! [package]
//! namespace = "absl"
//! prefix = "absl"
//! platform = "linux"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::TargetmapError;
use crate::extractor::Platform;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Package naming defaults
    #[serde(default)]
    pub package: PackageConfig,
}

/// The `[package]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Namespace qualifier carried by the package's own targets,
    /// with or without the trailing `::` (e.g. `"absl"`).
    pub namespace: Option<String>,
    /// Prefix for generated component names; defaults to the namespace.
    pub prefix: Option<String>,
    /// Default platform tag when `--platform` is not given.
    pub platform: Option<Platform>,
}

impl Config {
    /// Conventional file name searched in the working directory.
    pub const FILE_NAME: &'static str = "targetmap.toml";

    /// Load configuration from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read configuration file: {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|e| TargetmapError::ConfigError {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load `targetmap.toml` from the working directory if present,
    /// otherwise return defaults. Only an explicit `--config` path makes a
    /// missing file an error.
    pub fn discover() -> Result<Self> {
        let path = Path::new(Self::FILE_NAME);
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }
}
