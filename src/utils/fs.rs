//! File system helpers.
//!
//! The component map is written exactly once per packaging run and read by a
//! later process, so the write must never leave a half-serialized file behind.
//! [`atomic_write`] goes through a temporary file in the same directory and
//! renames it into place.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create a directory and all parent directories if they don't exist.
///
/// Succeeds silently if the directory already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\
                 Check directory permissions and path validity",
                path.display()
            )
        })?;
    }
    Ok(())
}

/// Write a file atomically by writing to a temporary file and renaming.
///
/// The temporary file lives next to the target (same filesystem) so the
/// final rename is atomic on all supported platforms. The parent directory
/// is created if needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            format!("Failed to create temp file: {}", temp_path.display())
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all()
            .with_context(|| format!("Failed to sync temp file: {}", temp_path.display()))?;
    }

    fs::rename(&temp_path, path).with_context(|| {
        format!(
            "Failed to move temp file into place: {} -> {}",
            temp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}
