//! targetmap - republish a build tool's target graph as package metadata.
//!
//! When a C++ library is packaged, its build system installs a generated
//! target-definition file describing every imported library target: link
//! type, compile definitions, and transitive link dependencies. targetmap
//! reads that text, renames the targets into a package-scoped component
//! graph, and persists the graph as `components.json`, the durable record
//! a packaging system later replays to register each component with its
//! requirements.
//!
//! # Architecture
//!
//! Two halves, run at packaging time and at metadata-read time:
//!
//! - [`extractor`] - scans the export text for library-declaration and
//!   property-assignment statements and assembles the component graph.
//!   Best-effort by design: malformed statements are skipped, unrecognized
//!   external dependencies dropped.
//! - [`components`] + [`registry`] - the graph itself, its exact
//!   round-tripping JSON record, and the ordered registration replay
//!   against the packaging system's metadata API.
//!
//! Supporting modules:
//!
//! - [`cli`] - `extract` / `list` / `register` / `validate` subcommands
//! - [`config`] - optional `targetmap.toml` with naming defaults
//! - [`core`] - the [`core::TargetmapError`] error type
//! - [`utils`] - atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use targetmap::components::ComponentMap;
//! use targetmap::extractor::{self, Naming, Platform};
//!
//! # fn example() -> anyhow::Result<()> {
//! let source = std::fs::read_to_string("abslTargets.cmake")?;
//! let naming = Naming::new("absl", None);
//! let map = extractor::extract(&source, Platform::Linux, &naming);
//! map.save(std::path::Path::new("components.json"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod extractor;
pub mod registry;
pub mod utils;
