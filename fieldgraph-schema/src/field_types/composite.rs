//! Composite field types: sub-fields rolled into a synthesized object type.
//!
//! The nested type is named `{OwnerType}{FieldName}` so two composites with
//! the same field name on different owners never collide. Synthesis failures
//! (no usable name, no sub-fields) are reported through the build context
//! and the field is omitted.

use fieldgraph_fields::FieldDefinition;

use crate::builder::FieldBuildContext;
use crate::plugin::{
    FieldTypePlugin, ProducedField, SchemaFieldSpec, SchemaTypeRef, SettingDescriptor,
};

/// A named bundle of sub-fields, resolving to one nested object.
pub struct GroupField;

impl FieldTypePlugin for GroupField {
    fn key(&self) -> &str {
        "group"
    }

    fn produce_schema_field(
        &self,
        field: &FieldDefinition,
        cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        match cx.synthesize_type(field) {
            Some(type_name) => {
                ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::named(type_name)))
            }
            None => ProducedField::Omit,
        }
    }
}

/// A repeatable bundle of sub-fields, resolving to a list of nested objects.
pub struct RepeaterField;

impl FieldTypePlugin for RepeaterField {
    fn key(&self) -> &str {
        "repeater"
    }

    fn produce_schema_field(
        &self,
        field: &FieldDefinition,
        cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        match cx.synthesize_type(field) {
            Some(type_name) => ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::list(
                SchemaTypeRef::named(type_name),
            ))),
            None => ProducedField::Omit,
        }
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor::new("min_rows", "number"),
            SettingDescriptor::new("max_rows", "number"),
        ]
    }
}
