//! Scalar field types: one stored value, one schema scalar.
//!
//! All of these rely on the default stored-value resolver, so they produce
//! a bare [`SchemaFieldSpec`] with no resolver of their own.

use serde_json::json;

use fieldgraph_fields::FieldDefinition;

use crate::builder::FieldBuildContext;
use crate::plugin::{
    FieldTypePlugin, ProducedField, SchemaFieldSpec, SchemaTypeRef, SettingDescriptor,
};

/// Single-line text, resolving to `String`.
pub struct TextField;

impl FieldTypePlugin for TextField {
    fn key(&self) -> &str {
        "text"
    }

    fn produce_schema_field(
        &self,
        _field: &FieldDefinition,
        _cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::named("String")))
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor::new("placeholder", "text"),
            SettingDescriptor::new("max_length", "number"),
        ]
    }
}

/// Multi-line text, resolving to `String`.
pub struct TextareaField;

impl FieldTypePlugin for TextareaField {
    fn key(&self) -> &str {
        "textarea"
    }

    fn produce_schema_field(
        &self,
        _field: &FieldDefinition,
        _cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::named("String")))
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor::new("placeholder", "text"),
            SettingDescriptor::new("rows", "number").with_default(json!(8)),
        ]
    }
}

/// Numeric input, resolving to `Float`.
pub struct NumberField;

impl FieldTypePlugin for NumberField {
    fn key(&self) -> &str {
        "number"
    }

    fn produce_schema_field(
        &self,
        _field: &FieldDefinition,
        _cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::named("Float")))
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor::new("min", "number"),
            SettingDescriptor::new("max", "number"),
            SettingDescriptor::new("step", "number"),
        ]
    }
}

/// On/off toggle, resolving to `Boolean`.
pub struct TrueFalseField;

impl FieldTypePlugin for TrueFalseField {
    fn key(&self) -> &str {
        "true_false"
    }

    fn produce_schema_field(
        &self,
        _field: &FieldDefinition,
        _cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::named("Boolean")))
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![SettingDescriptor::new("default_value", "boolean").with_default(json!(false))]
    }
}

/// Choice list. Resolves to `String`, or `[String]` when the `multiple`
/// setting is on.
pub struct SelectField;

impl FieldTypePlugin for SelectField {
    fn key(&self) -> &str {
        "select"
    }

    fn produce_schema_field(
        &self,
        field: &FieldDefinition,
        _cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        let multiple = field
            .setting("multiple")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let type_ref = if multiple {
            SchemaTypeRef::list(SchemaTypeRef::named("String"))
        } else {
            SchemaTypeRef::named("String")
        };
        ProducedField::Field(SchemaFieldSpec::of(type_ref))
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor::new("choices", "textarea"),
            SettingDescriptor::new("multiple", "boolean").with_default(json!(false)),
            SettingDescriptor::new("allow_null", "boolean")
                .with_default(json!(false))
                .with_condition("multiple == false"),
        ]
    }
}
