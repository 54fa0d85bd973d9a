//! Platform tags and external-dependency resolution tables.
//!
//! Link-dependency tokens that do not carry the package namespace are
//! free-form strings chosen by the upstream build tool (`Threads::Threads`,
//! `-lrt`, import-library names, framework names). Each platform owns a
//! fixed lookup table mapping those tokens to the system-library or
//! framework names the packaging system understands. Tokens matched by no
//! table entry are dropped by the caller; new upstream releases may
//! introduce names the tables don't know, and absence downstream is
//! harmless degradation.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Import libraries recognized in link-dependency tokens on Windows.
const WINDOWS_IMPORT_LIBS: &[&str] = &["bcrypt", "advapi32", "dbghelp"];

/// Frameworks recognized in link-dependency tokens on macOS.
const MACOS_FRAMEWORKS: &[&str] = &["CoreFoundation"];

/// Target platform supplied by the surrounding build environment.
///
/// Selects which system-library/framework table is active during
/// extraction. The set is closed: the packaging workflow only ever runs on
/// these three platform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux-family systems
    Linux,
    /// Windows-family systems
    Windows,
    /// macOS
    Macos,
}

/// A resolved external dependency: either a system library or a framework.
///
/// Frameworks only exist on macOS; the other platforms never produce the
/// [`Framework`](SystemDependency::Framework) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemDependency {
    /// Platform system library, e.g. `pthread` or `bcrypt`
    Library(&'static str),
    /// macOS framework, e.g. `CoreFoundation`
    Framework(&'static str),
}

impl Platform {
    /// Resolve an external link-dependency token against this platform's
    /// lookup table.
    ///
    /// Returns `None` for unrecognized tokens; the caller drops those
    /// silently (best-effort policy, see module docs).
    pub fn resolve_external(self, token: &str) -> Option<SystemDependency> {
        match self {
            Self::Linux => {
                if token == "Threads::Threads" {
                    Some(SystemDependency::Library("pthread"))
                } else if token.contains("-lrt") {
                    Some(SystemDependency::Library("rt"))
                } else {
                    None
                }
            }
            Self::Windows => WINDOWS_IMPORT_LIBS
                .iter()
                .copied()
                .find(|lib| token.contains(lib))
                .map(SystemDependency::Library),
            Self::Macos => MACOS_FRAMEWORKS
                .iter()
                .copied()
                .find(|fw| token.contains(fw))
                .map(SystemDependency::Framework),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Macos => "macos",
        };
        write!(f, "{tag}")
    }
}
