//! Loading and saving the component map.
//!
//! The record is written exactly once per packaging run (atomically, so an
//! interrupted run never leaves a truncated file) and read at most once by
//! each downstream process. Both directions are strict: a missing file and
//! a schema mismatch are fatal, because registering a partial graph would
//! corrupt downstream dependency resolution.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::TargetmapError;
use crate::utils::fs::atomic_write;

use super::ComponentMap;

impl ComponentMap {
    /// Load a component map from disk.
    ///
    /// # Errors
    ///
    /// - [`TargetmapError::ComponentMapNotFound`] if the file does not
    ///   exist; there is no meaningful empty default for a record that a
    ///   later process depends on.
    /// - [`TargetmapError::ComponentMapParseError`] for JSON syntax errors
    ///   and schema mismatches (unknown fields, wrong value types). No
    ///   coercion is attempted.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TargetmapError::ComponentMapNotFound {
                file: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).with_context(|| {
            format!("Cannot read component map: {}", path.display())
        })?;

        let map: Self = serde_json::from_str(&content)
            .map_err(|e| TargetmapError::ComponentMapParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| {
                format!(
                    "Invalid component map: {}\n\
                     The file may be corrupted or hand-edited; re-run 'targetmap extract' \
                     to regenerate it",
                    path.display()
                )
            })?;

        Ok(map)
    }

    /// Save the component map to disk as pretty-printed JSON.
    ///
    /// Key order is the map's insertion order; 4-space indentation keeps the
    /// record human-diffable. The write goes through a temp file and rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).context("Failed to serialize component map")?;
        buf.push(b'\n');

        atomic_write(path, &buf)
            .with_context(|| format!("Cannot write component map: {}", path.display()))?;

        Ok(())
    }
}
