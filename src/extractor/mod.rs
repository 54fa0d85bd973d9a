//! Target-metadata extraction from build-tool export text.
//!
//! The external build tool emits a target-definition file describing every
//! imported library target and its interface properties. This module makes
//! one linear pass over that text and assembles the [`ComponentMap`]:
//!
//! 1. [`Scanner`] yields `add_library` / `set_target_properties` statements
//!    in textual order.
//! 2. The subject identifier of each statement is renamed through
//!    [`Naming`] (namespace qualifier stripped, package prefix prepended).
//! 3. Library declarations with link type `STATIC` or `SHARED` record an
//!    artifact; interface and alias markers record none.
//! 4. Property assignments append compile definitions and classify link
//!    dependencies: namespaced tokens become graph-internal requirements
//!    (placeholder components created on first reference), everything else
//!    resolves against the active [`Platform`] table or is dropped.
//!
//! Extraction is best-effort over semi-structured tool output: statements
//! missing a subject token are skipped, and unrecognized external
//! dependency tokens are dropped, both logged at `debug` and neither fatal.
//! Re-running over unchanged text yields an equal map.

mod platform;
mod scanner;

pub use platform::{Platform, SystemDependency};
pub use scanner::{Scanner, StatementKind, TargetStatement};

use crate::components::ComponentMap;

/// Recognized property keys inside a `set_target_properties` block.
const LINK_LIBRARIES: &str = "INTERFACE_LINK_LIBRARIES";
const INCLUDE_DIRECTORIES: &str = "INTERFACE_INCLUDE_DIRECTORIES";
const COMPILE_DEFINITIONS: &str = "INTERFACE_COMPILE_DEFINITIONS";

/// Link-type markers that produce a library artifact.
const ARTIFACT_LINK_TYPES: [&str; 2] = ["STATIC", "SHARED"];

/// Naming scheme mapping namespaced target identifiers to component names.
///
/// A subject `absl::base` under `Naming::new("absl", None)` becomes
/// component name `absl_base` with `cmake_target` `base`. The prefix is
/// independent of the namespace so a package may scope its components
/// differently from the upstream namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    qualifier: String,
    prefix: String,
}

impl Naming {
    /// Build a naming scheme from a namespace (with or without the trailing
    /// `::`) and an optional component prefix defaulting to the namespace.
    pub fn new(namespace: &str, prefix: Option<&str>) -> Self {
        let namespace = namespace.trim_end_matches(':');
        Self {
            qualifier: format!("{namespace}::"),
            prefix: prefix.unwrap_or(namespace).to_string(),
        }
    }

    /// Whether a link-dependency token refers into the package's own graph.
    fn is_internal(&self, token: &str) -> bool {
        token.starts_with(&self.qualifier)
    }

    /// `ns::foo` -> `foo`
    fn strip(&self, target: &str) -> String {
        target.replace(&self.qualifier, "")
    }

    /// `foo` -> `<prefix>_foo`
    fn component_name(&self, stripped: &str) -> String {
        format!("{}_{}", self.prefix, stripped)
    }
}

/// Extract the component graph from target-definition text.
///
/// Statements are processed in textual order; later statements for an
/// already-seen subject augment its record (append-with-duplicates, never
/// replace). The result is internally consistent: every `requires` entry
/// names a component present in the map.
pub fn extract(source: &str, platform: Platform, naming: &Naming) -> ComponentMap {
    let mut map = ComponentMap::new();

    for statement in Scanner::new(source) {
        let args = statement.raw_args.trim_start();
        let Some(subject) = args.split_whitespace().next() else {
            tracing::debug!(kind = ?statement.kind, "skipping statement without a subject token");
            continue;
        };
        let remainder = &args[subject.len()..];

        let cmake_target = naming.strip(subject);
        let name = naming.component_name(&cmake_target);

        match statement.kind {
            StatementKind::DeclareLibrary => {
                let link_type = remainder.split_whitespace().next().unwrap_or("");
                let component = map.entry(&name, &cmake_target);
                if ARTIFACT_LINK_TYPES.contains(&link_type) {
                    component.libs = vec![name.clone()];
                }
                tracing::debug!(subject, component = %name, link_type, "declared library");
            }
            StatementKind::SetProperties => {
                apply_properties(&mut map, &name, &cmake_target, remainder, platform, naming);
            }
        }
    }

    map
}

/// Apply one properties block to the component `name`, creating it and any
/// newly referenced requirement placeholders as needed.
fn apply_properties(
    map: &mut ComponentMap,
    name: &str,
    cmake_target: &str,
    block: &str,
    platform: Platform,
    naming: &Naming,
) {
    map.entry(name, cmake_target);

    if let Some(value) = property_value(block, COMPILE_DEFINITIONS) {
        let defines = list_items(value);
        map.entry(name, cmake_target).defines.extend(defines);
    }

    // Recognized but discarded: include directories point into the install
    // prefix and have no counterpart in the component record.
    let _ = property_value(block, INCLUDE_DIRECTORIES);

    if let Some(value) = property_value(block, LINK_LIBRARIES) {
        let mut requires = Vec::new();
        let mut system_libs = Vec::new();
        let mut frameworks = Vec::new();

        for dependency in list_items(value) {
            if naming.is_internal(&dependency) {
                let stripped = naming.strip(&dependency);
                let required = naming.component_name(&stripped);
                map.entry(&required, &stripped);
                requires.push(required);
            } else {
                match platform.resolve_external(&dependency) {
                    Some(SystemDependency::Library(lib)) => system_libs.push(lib.to_string()),
                    Some(SystemDependency::Framework(fw)) => frameworks.push(fw.to_string()),
                    None => tracing::debug!(
                        %platform,
                        dependency = %dependency,
                        "dropping unrecognized external dependency"
                    ),
                }
            }
        }

        let component = map.entry(name, cmake_target);
        component.requires.extend(requires);
        component.system_libs.extend(system_libs);
        component.frameworks.extend(frameworks);
    }
}

/// Locate a recognized property key in a block and return its value: the
/// rest of the first non-blank line after the key. Keys are matched at word
/// boundaries so `INTERFACE_LINK_LIBRARIES` never fires inside a longer
/// identifier.
fn property_value<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    let bytes = block.as_bytes();
    let mut search = 0;
    while let Some(rel) = block[search..].find(key) {
        let start = search + rel;
        let end = start + key.len();
        let bounded_before = start == 0 || !is_ident_byte(bytes[start - 1]);
        let bounded_after = end >= block.len() || !is_ident_byte(bytes[end]);
        if bounded_before && bounded_after {
            let value = block[end..].trim_start().lines().next().unwrap_or("");
            return Some(value.trim_end());
        }
        search = end;
    }
    None
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split a property value on the `;` list separator, quote characters
/// stripped, empty items (e.g. from a trailing separator) skipped.
fn list_items(value: &str) -> Vec<String> {
    value
        .replace('"', "")
        .split(';')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
