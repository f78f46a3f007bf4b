//! Location catalog and rule resolution engine
//!
//! Given the host's static catalog of locations (content types, taxonomies,
//! settings screens, ...) and a field group's administrator-authored
//! condition tree, this crate answers one question: *which schema types does
//! this group attach to?*
//!
//! Resolution is pure and synchronous — no caching, no I/O. Rebuilding the
//! answer after a field group edit is just calling [`resolve_types`] again.

pub mod catalog;
pub mod engine;

pub use catalog::{LocationCatalog, LocationEntry};
pub use engine::{resolve_locations_preview, resolve_types};
