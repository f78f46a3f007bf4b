//! Core field group and field definition types.
//!
//! All types serialize to/from JSON via serde, matching the shape of
//! administrator-exported field group definitions. A field group is a named,
//! ordered set of typed fields plus a location condition tree deciding which
//! schema types the group attaches to.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldsError, Result};

/// Comparison operator in a location condition.
///
/// Serializes as the wire form administrators author: `"=="` / `"!="`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "==")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
}

/// A single location condition: (param, operator, value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub param: String,
    pub operator: Operator,
    pub value: String,
}

impl Condition {
    /// Condition matching locations where `param` equals `value`.
    pub fn equals(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            operator: Operator::Equals,
            value: value.into(),
        }
    }

    /// Condition excluding locations where `param` equals `value`.
    pub fn not_equals(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            operator: Operator::NotEquals,
            value: value.into(),
        }
    }
}

/// Location rules as AND-of-ORs: the outer list is OR-groups, each inner
/// list is AND-conditions that must all hold for the group to match.
///
/// An empty tree matches nothing. "All locations" requires an explicit
/// wildcard condition in the catalog — it is never implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionTree {
    pub groups: Vec<Vec<Condition>>,
}

impl ConditionTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one OR-group of AND-conditions.
    pub fn or_group(mut self, conditions: Vec<Condition>) -> Self {
        self.groups.push(conditions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// One typed field within a field group.
///
/// `settings` is an opaque bag interpreted only by the field's type plugin.
/// `sub_fields` holds nested definitions for composite types (group,
/// repeater); children are owned by value, so the structure is a tree by
/// construction and ancestor cycles are unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Stable key, unique within the owning group (e.g. `field_64a1b2`)
    pub key: String,
    /// Declared name; normalized into the schema field name
    pub name: String,
    /// Field-type identifier, looked up in the plugin registry
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub non_null: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields: Vec<FieldDefinition>,
}

impl FieldDefinition {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            field_type: field_type.into(),
            settings: Map::new(),
            non_null: false,
            sub_fields: Vec::new(),
        }
    }

    /// Set one entry in the settings bag.
    pub fn with_setting(mut self, name: impl Into<String>, value: Value) -> Self {
        self.settings.insert(name.into(), value);
        self
    }

    /// Mark the field as non-null in the generated schema.
    pub fn required(mut self) -> Self {
        self.non_null = true;
        self
    }

    /// Attach nested sub-field definitions (composite types only).
    pub fn with_sub_fields(mut self, sub_fields: Vec<FieldDefinition>) -> Self {
        self.sub_fields = sub_fields;
        self
    }

    /// Read one setting by name.
    pub fn setting(&self, name: &str) -> Option<&Value> {
        self.settings.get(name)
    }
}

fn default_true() -> bool {
    true
}

/// An administrator-defined field group: identity, ordered fields, and the
/// rules deciding which schema types it attaches to.
///
/// Read-only to the schema core; authored and persisted elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    /// Stable key (e.g. `group_64a1b2`)
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub location: ConditionTree,
    /// When set, `manual_type_names` wins and `location` is ignored
    #[serde(default)]
    pub manual_types: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manual_type_names: Vec<String>,
    #[serde(default = "default_true")]
    pub show_in_schema: bool,
    /// Explicit schema type name; derived from `title` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_type_name: Option<String>,
    /// Explicit field name used when attaching the group to a location type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_field_name: Option<String>,
}

impl FieldGroup {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            fields: Vec::new(),
            location: ConditionTree::new(),
            manual_types: false,
            manual_type_names: Vec::new(),
            show_in_schema: true,
            schema_type_name: None,
            schema_field_name: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldDefinition>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_location(mut self, location: ConditionTree) -> Self {
        self.location = location;
        self
    }

    /// Bypass rule evaluation and attach to the given schema types directly.
    pub fn with_manual_types(mut self, type_names: Vec<String>) -> Self {
        self.manual_types = true;
        self.manual_type_names = type_names;
        self
    }

    pub fn hidden_from_schema(mut self) -> Self {
        self.show_in_schema = false;
        self
    }

    pub fn with_schema_type_name(mut self, name: impl Into<String>) -> Self {
        self.schema_type_name = Some(name.into());
        self
    }

    pub fn with_schema_field_name(mut self, name: impl Into<String>) -> Self {
        self.schema_field_name = Some(name.into());
        self
    }

    /// Validate identity and field key uniqueness (recursively through
    /// composite sub-fields).
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(FieldsError::EmptyGroupKey);
        }
        if self.title.is_empty() {
            return Err(FieldsError::EmptyTitle {
                group: self.key.clone(),
            });
        }
        let mut seen = std::collections::HashSet::new();
        validate_fields(&self.key, &self.fields, &mut seen)
    }
}

fn validate_fields<'a>(
    group: &str,
    fields: &'a [FieldDefinition],
    seen: &mut std::collections::HashSet<&'a str>,
) -> Result<()> {
    for field in fields {
        if field.key.is_empty() {
            return Err(FieldsError::EmptyFieldKey {
                group: group.to_string(),
            });
        }
        if field.name.is_empty() {
            return Err(FieldsError::EmptyFieldName {
                group: group.to_string(),
                key: field.key.clone(),
            });
        }
        if !seen.insert(&field.key) {
            return Err(FieldsError::DuplicateFieldKey {
                group: group.to_string(),
                key: field.key.clone(),
            });
        }
        validate_fields(group, &field.sub_fields, seen)?;
    }
    Ok(())
}
