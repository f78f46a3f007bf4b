//! Schema generation from field groups
//!
//! `fieldgraph-schema` turns administrator-defined field groups into schema
//! type registrations. A build pass resolves each group's locations (via
//! `fieldgraph-locations`), derives schema identifiers, runs every field
//! through its [`FieldTypePlugin`], and emits [`SchemaTypeRegistration`]
//! values plus [`Diagnostic`]s for whatever had to be rejected or omitted.
//!
//! The pass is a pure fold: nothing is registered globally, repeated builds
//! from the same input are identical, and misconfiguration degrades to
//! diagnostics instead of failing the schema.

pub mod builder;
pub mod diagnostics;
pub mod field_types;
pub mod names;
pub mod plugin;
pub mod registry;

pub use builder::{
    BuildOutput, FieldBuildContext, SchemaBuilder, SchemaFieldRegistration, SchemaTypeRegistration,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use field_types::register_builtin_field_types;
pub use plugin::{
    FieldResolver, FieldTypePlugin, ProducedField, SchemaFieldSpec, SchemaTypeRef,
    SettingDescriptor,
};
pub use registry::FieldTypeRegistry;
