//! User reference field.
//!
//! A user field is modeled as a connection the host wires up itself, so the
//! plugin contributes nothing to the owning type directly. Connections carry
//! their own nullability, which is why no non-null wrapping applies here.

use serde_json::json;

use fieldgraph_fields::FieldDefinition;

use crate::builder::FieldBuildContext;
use crate::plugin::{FieldTypePlugin, ProducedField, SettingDescriptor};

pub struct UserField;

impl FieldTypePlugin for UserField {
    fn key(&self) -> &str {
        "user"
    }

    fn produce_schema_field(
        &self,
        _field: &FieldDefinition,
        _cx: &mut FieldBuildContext<'_, '_>,
    ) -> ProducedField {
        ProducedField::Connection
    }

    fn admin_settings(&self) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor::new("multiple", "boolean").with_default(json!(false)),
            SettingDescriptor::new("role", "select"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fieldgraph_fields::{FieldDefinition, FieldGroup, MemoryContentStore};
    use fieldgraph_locations::LocationCatalog;

    use crate::builder::SchemaBuilder;
    use crate::field_types::register_builtin_field_types;
    use crate::registry::FieldTypeRegistry;

    #[test]
    fn user_field_contributes_no_direct_field() {
        let catalog = LocationCatalog::new(Vec::new());
        let mut registry = FieldTypeRegistry::new();
        register_builtin_field_types(&mut registry);
        let builder = SchemaBuilder::new(&catalog, &registry, Arc::new(MemoryContentStore::new()));

        let group = FieldGroup::new("group_meta", "Meta")
            .with_fields(vec![
                FieldDefinition::new("field_author", "reviewer", "user"),
                FieldDefinition::new("field_note", "note", "text"),
            ])
            .with_manual_types(vec!["Page".into()]);
        let output = builder.build(&[group]);

        let meta = output.type_named("Meta").unwrap();
        assert!(meta.field("reviewer").is_none());
        assert!(meta.field("note").is_some());
        // Being a connection is not an omission worth reporting
        assert!(output.diagnostics.is_empty());
    }
}
