//! Error handling for targetmap.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for failures callers may want to match on
//! 2. **User-friendly messages** with enough context to act on from the CLI
//!
//! Per-statement anomalies during extraction are *not* errors: the export
//! file is semi-structured output from a trusted build tool, and a statement
//! that does not parse is skipped (logged at `debug`). Only file-level and
//! schema-level failures become [`TargetmapError`] values, because a partial
//! or mis-shapen component map must never reach the packaging system.
//!
//! Most call sites return `anyhow::Result` and attach context with
//! `.with_context(...)`; the typed variants below are the root causes that
//! survive down-casting when a caller needs to distinguish them.

use thiserror::Error;

/// The main error type for targetmap operations.
#[derive(Error, Debug)]
pub enum TargetmapError {
    /// The component map file does not exist.
    ///
    /// Unlike a package manager's lockfile there is no sensible empty
    /// default: a missing map means the extraction step never ran, and
    /// registering nothing would silently break every downstream dependent.
    #[error("component map not found: {file}")]
    ComponentMapNotFound {
        /// Path that was looked up
        file: String,
    },

    /// The component map file exists but is not valid against the schema.
    ///
    /// Covers both JSON syntax errors and shape mismatches (unknown fields,
    /// wrong value types). No coercion is attempted; registration requires
    /// exact field semantics.
    #[error("failed to parse component map: {file}")]
    ComponentMapParseError {
        /// Path of the offending file
        file: String,
        /// Underlying parser message
        reason: String,
    },

    /// A loaded component map violates an internal invariant, e.g. a
    /// `requires` entry naming a component that is not in the map.
    #[error("invalid component map: {reason}")]
    ComponentMapInvalid {
        /// Description of the violated invariant
        reason: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("invalid configuration file: {file}")]
    ConfigError {
        /// Path of the configuration file
        file: String,
        /// Underlying parser message
        reason: String,
    },

    /// IO error wrapper for std IO operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
