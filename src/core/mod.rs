//! Core types shared across targetmap.
//!
//! Currently this is the error type; the extractor, component map, and
//! registry modules all surface failures through [`TargetmapError`] wrapped
//! in `anyhow` context.

pub mod error;

pub use error::TargetmapError;
