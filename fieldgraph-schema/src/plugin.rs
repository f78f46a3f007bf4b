//! Field type plugin contract.
//!
//! Each CMS field type (text, image, user reference, ...) is translated
//! into schema field(s) by a plugin implementing [`FieldTypePlugin`].
//! Plugins are registered once at host startup and consulted by the build
//! pass for every field definition of that type.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use fieldgraph_fields::{ContentRef, ExecutionContext, FieldDefinition, FieldsError};

use crate::builder::FieldBuildContext;

/// Reference to a schema type, with list and non-null wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SchemaTypeRef {
    Named(String),
    List(Box<SchemaTypeRef>),
    NonNull(Box<SchemaTypeRef>),
}

impl SchemaTypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: SchemaTypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: SchemaTypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for SchemaTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Resolves one field's value at query-execution time.
///
/// `Send + Sync` so async hosts can call resolvers from any runtime; the
/// contract itself is synchronous. The only error a resolver surfaces is a
/// malformed content reference, reported field-level by the host.
pub trait FieldResolver: Send + Sync {
    fn resolve(
        &self,
        content: &ContentRef,
        cx: &ExecutionContext,
    ) -> Result<Value, FieldsError>;
}

/// A concrete schema field produced by a plugin.
#[derive(Clone)]
pub struct SchemaFieldSpec {
    pub type_ref: SchemaTypeRef,
    /// Custom resolver; the build pass falls back to the stored-value
    /// resolver when absent
    pub resolver: Option<Arc<dyn FieldResolver>>,
    /// Fields that manage their own nullability (connections) opt out of
    /// non-null wrapping
    pub non_null_exempt: bool,
}

impl SchemaFieldSpec {
    pub fn of(type_ref: SchemaTypeRef) -> Self {
        Self {
            type_ref,
            resolver: None,
            non_null_exempt: false,
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn FieldResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn exempt_from_non_null(mut self) -> Self {
        self.non_null_exempt = true;
        self
    }
}

impl fmt::Debug for SchemaFieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaFieldSpec")
            .field("type_ref", &self.type_ref)
            .field("has_resolver", &self.resolver.is_some())
            .field("non_null_exempt", &self.non_null_exempt)
            .finish()
    }
}

/// What a plugin contributes for one field definition.
#[derive(Debug)]
pub enum ProducedField {
    /// A concrete field on the owning type
    Field(SchemaFieldSpec),
    /// The field registers its own top-level connection with the host and
    /// contributes nothing to the owning type directly
    Connection,
    /// The field declines to be represented in the schema
    Omit,
}

/// Descriptor for one admin-UI setting a field type exposes.
///
/// Consumed only by the external admin UI; the core never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingDescriptor {
    pub name: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Visibility condition, e.g. show only when another setting is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl SettingDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            default: None,
            condition: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Translates one CMS field type into schema field(s) and a resolver.
pub trait FieldTypePlugin: Send + Sync {
    /// Stable field-type identifier (the `type` key in field definitions).
    fn key(&self) -> &str;

    /// Produce the schema field for one definition. Composite plugins may
    /// synthesize nested types through the context.
    fn produce_schema_field(
        &self,
        field: &FieldDefinition,
        cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField;

    /// Settings this field type exposes in the admin UI.
    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        Vec::new()
    }
}
