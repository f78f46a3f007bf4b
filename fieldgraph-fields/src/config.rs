//! FieldConfig — uniform read/resolve adapter over one field instance.
//!
//! Field type plugins build resolvers against this contract instead of
//! poking at raw field configuration. Resolution delegates to the host's
//! [`ContentStore`]; the adapter applies no field-type-specific
//! interpretation.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::content::{ContentRef, ContentStore, ExecutionContext};
use crate::error::Result;
use crate::types::FieldDefinition;

/// One field definition bound to its owning group and schema type, plus the
/// storage accessor its resolver reads through.
#[derive(Clone)]
pub struct FieldConfig {
    field: FieldDefinition,
    group_key: String,
    owner_type_name: String,
    store: Arc<dyn ContentStore>,
}

impl FieldConfig {
    pub fn new(
        field: FieldDefinition,
        group_key: impl Into<String>,
        owner_type_name: impl Into<String>,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            field,
            group_key: group_key.into(),
            owner_type_name: owner_type_name.into(),
            store,
        }
    }

    /// Declared field name (pre-normalization).
    pub fn field_name(&self) -> &str {
        &self.field.name
    }

    /// Name of the schema type this field is registered on.
    pub fn owning_type_name(&self) -> &str {
        &self.owner_type_name
    }

    /// Key of the owning field group.
    pub fn group_key(&self) -> &str {
        &self.group_key
    }

    /// The full field definition.
    pub fn field(&self) -> &FieldDefinition {
        &self.field
    }

    /// The opaque per-field settings bag.
    pub fn raw_settings(&self) -> &Map<String, Value> {
        &self.field.settings
    }

    /// One setting by name.
    pub fn setting(&self, name: &str) -> Option<&Value> {
        self.field.settings.get(name)
    }

    /// Read this field's raw stored value for a content object.
    ///
    /// An absent value is `Value::Null`, never an error. A parsed
    /// [`ContentRef`] is well-formed by construction, so this cannot fail.
    pub fn resolve_field(&self, content: &ContentRef, _cx: &ExecutionContext) -> Value {
        let value = self
            .store
            .read(content, &self.field.key)
            .unwrap_or(Value::Null);
        debug!(
            field = %self.field.key,
            content = %content,
            absent = value.is_null(),
            "resolved field value"
        );
        value
    }

    /// Like [`resolve_field`](Self::resolve_field) but parsing a raw
    /// `kind:id` reference first. A malformed reference is the only error.
    pub fn resolve_field_raw(&self, reference: &str, cx: &ExecutionContext) -> Result<Value> {
        let content = ContentRef::parse(reference)?;
        Ok(self.resolve_field(&content, cx))
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("field", &self.field.key)
            .field("group", &self.group_key)
            .field("owner_type", &self.owner_type_name)
            .finish()
    }
}
