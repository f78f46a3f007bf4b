//! Field group and field definition data model
//!
//! `fieldgraph-fields` is the schema-only data model for administrator-defined
//! field groups: named, ordered sets of typed fields plus the location rules
//! deciding which schema types they attach to. It owns no storage and renders
//! no forms — field values are read through a host-supplied [`ContentStore`],
//! and the admin surface lives elsewhere.
//!
//! The other fieldgraph crates build on this one: `fieldgraph-locations`
//! evaluates each group's [`ConditionTree`] against a location catalog, and
//! `fieldgraph-schema` turns the results into schema type registrations.

pub mod config;
pub mod content;
pub mod error;
pub mod types;

pub use config::FieldConfig;
pub use content::{ContentRef, ContentStore, ExecutionContext, MemoryContentStore};
pub use error::{FieldsError, Result};
pub use types::{Condition, ConditionTree, FieldDefinition, FieldGroup, Operator};
