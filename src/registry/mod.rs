//! Registration replay against the packaging system's metadata API.
//!
//! At metadata-read time the packaging system needs one registration call
//! per component, carrying everything the extractor recorded. The actual
//! API lives in another process, so the seam is the [`Registrar`] trait:
//! [`register_components`] walks a loaded map in record order and hands
//! each component to the registrar.
//!
//! Call order is load-bearing. Downstream dependency resolution applies
//! first-declared-wins semantics to ambiguous overrides, so registration
//! order must equal the record's key order, which in turn is the
//! extractor's first-encounter order.
//!
//! [`JsonLinesRegistrar`] is the shipped implementation: one JSON object
//! per line on a writer, the process-boundary form of the call.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::components::{Component, ComponentMap};

/// The parameter bundle of one registration call.
///
/// Borrows from the loaded map; every field is always present in the call
/// (empty lists are passed as empty, not omitted; the metadata API has no
/// notion of an absent parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Registration<'a> {
    /// Package-scoped component name
    pub name: &'a str,
    /// Original build-system target name for native-tool interop
    pub cmake_target: &'a str,
    /// Library artifacts
    pub libs: &'a [String],
    /// Compile definitions
    pub defines: &'a [String],
    /// Platform system libraries
    pub system_libs: &'a [String],
    /// macOS frameworks
    pub frameworks: &'a [String],
    /// Names of required components
    pub requires: &'a [String],
}

impl<'a> Registration<'a> {
    pub fn new(name: &'a str, component: &'a Component) -> Self {
        Self {
            name,
            cmake_target: &component.cmake_target,
            libs: &component.libs,
            defines: &component.defines,
            system_libs: &component.system_libs,
            frameworks: &component.frameworks,
            requires: &component.requires,
        }
    }
}

/// Sink for registration calls.
pub trait Registrar {
    fn register(&mut self, registration: &Registration<'_>) -> Result<()>;
}

/// Emit one registration call per component, in record order.
pub fn register_components(map: &ComponentMap, registrar: &mut dyn Registrar) -> Result<()> {
    for (name, component) in map.iter() {
        registrar
            .register(&Registration::new(name, component))
            .with_context(|| format!("Failed to register component '{name}'"))?;
    }
    tracing::debug!(components = map.len(), "registration pass complete");
    Ok(())
}

/// Registrar writing one JSON object per line.
pub struct JsonLinesRegistrar<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesRegistrar<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Registrar for JsonLinesRegistrar<W> {
    fn register(&mut self, registration: &Registration<'_>) -> Result<()> {
        let line = serde_json::to_string(registration).context("Failed to serialize registration")?;
        writeln!(self.writer, "{line}").context("Failed to write registration")?;
        Ok(())
    }
}
