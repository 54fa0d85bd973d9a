//! The component map: the durable record of a package's target graph.
//!
//! A *component* is one named unit of packaged build output: the artifacts
//! it produces, its compile definitions, the platform system libraries and
//! frameworks it links, and the other components it requires. The
//! *component map* is the full graph, keyed by component name, ordered by
//! first encounter during extraction.
//!
//! The map plays the same role a lockfile plays for a package manager: it is
//! generated once per packaging run, persisted next to the packaged
//! artifacts as `components.json`, and reloaded read-only by a later process
//! to drive registration against the packaging system's metadata API.
//!
//! # File format
//!
//! ```json
//! {
//!     "absl_base": {
//!         "cmake_target": "base",
//!         "libs": ["absl_base"],
//!         "defines": ["ABSL_LOW_LEVEL_ALLOC_MISSING"],
//!         "system_libs": ["pthread"],
//!         "requires": ["absl_config"]
//!     },
//!     "absl_config": {
//!         "cmake_target": "config"
//!     }
//! }
//! ```
//!
//! List-valued fields are present only when non-empty; a component that
//! never gained a field round-trips with the field absent, never `null`.
//! Key order is insertion order and is significant: downstream dependency
//! resolution applies first-declared-wins semantics, so both serialization
//! and registration preserve it.
//!
//! # Exactness
//!
//! The loader reconstructs the map exactly, duplicate list entries
//! included. The source format does not deduplicate, and consumers may rely
//! on repeated entries, so neither does this module. Unknown fields in the
//! file are a schema error, not something to coerce past.

mod io;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TargetmapError;

/// One named unit of packaged build output.
///
/// Field order here fixes the field order in the serialized record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Component {
    /// Namespace-stripped target identifier, kept for interop with
    /// system-native tooling (e.g. `base` for `absl::base`).
    pub cmake_target: String,

    /// Library artifact names this component produces. Contains exactly the
    /// component's own name when the target was declared STATIC or SHARED;
    /// empty for interface/header-only targets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libs: Vec<String>,

    /// Compile definitions, in encounter order, duplicates preserved.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defines: Vec<String>,

    /// Platform system libraries resolved from external link dependencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_libs: Vec<String>,

    /// macOS frameworks resolved from external link dependencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<String>,

    /// Names of other components this one transitively links against.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
}

impl Component {
    /// New component with the given back-reference target and no other
    /// attributes (the placeholder shape used on first reference).
    pub fn new(cmake_target: impl Into<String>) -> Self {
        Self {
            cmake_target: cmake_target.into(),
            ..Self::default()
        }
    }
}

/// The full component graph, keyed by component name in first-insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentMap {
    components: IndexMap<String, Component>,
}

impl ComponentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of components in the map.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the map holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up a component by name.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// Mutable handle for `name`, creating a placeholder with the given
    /// `cmake_target` on first encounter. Repeated statements for the same
    /// target always land on the one existing record.
    pub fn entry(&mut self, name: &str, cmake_target: &str) -> &mut Component {
        self.components
            .entry(name.to_string())
            .or_insert_with(|| Component::new(cmake_target))
    }

    /// Components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.components.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// Component names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Check internal consistency: every component carries a back-reference
    /// target, and every `requires` entry names a component in the map.
    ///
    /// Extraction upholds this by construction (placeholders are created on
    /// first reference); the check matters for maps loaded from disk, where
    /// a hand-edited or truncated record could otherwise reach the
    /// packaging system.
    pub fn validate(&self) -> Result<(), TargetmapError> {
        for (name, component) in &self.components {
            if component.cmake_target.is_empty() {
                return Err(TargetmapError::ComponentMapInvalid {
                    reason: format!("component '{name}' has an empty cmake_target"),
                });
            }
            for required in &component.requires {
                if !self.components.contains_key(required) {
                    return Err(TargetmapError::ComponentMapInvalid {
                        reason: format!(
                            "component '{name}' requires '{required}', which is not in the map"
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
