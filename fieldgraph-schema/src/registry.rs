//! Field type plugin registry.
//!
//! Populated once at host startup, then handed to the build pass as a
//! read-only snapshot — `register` needs `&mut self`, so the borrow checker
//! enforces that no registration happens mid-build.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::plugin::FieldTypePlugin;

/// Mapping from field-type key to its plugin.
#[derive(Default)]
pub struct FieldTypeRegistry {
    plugins: IndexMap<String, Arc<dyn FieldTypePlugin>>,
    diagnostics: Vec<Diagnostic>,
}

impl FieldTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin under its key.
    ///
    /// Re-registering a key overwrites (callers may intentionally replace a
    /// built-in), but the event is recorded as a warning diagnostic — a
    /// silent override would be indistinguishable from a plugin clash.
    pub fn register(&mut self, plugin: Arc<dyn FieldTypePlugin>) {
        let key = plugin.key().to_string();
        if self.plugins.insert(key.clone(), plugin).is_some() {
            warn!(field_type = %key, "field type registered more than once; last registration wins");
            self.diagnostics.push(Diagnostic::warning(
                DiagnosticKind::DuplicateRegistration,
                format!("field type '{key}' was registered more than once; last registration wins"),
            ));
        } else {
            debug!(field_type = %key, "registered field type");
        }
    }

    /// Look up a plugin by field-type key. `None` is a normal outcome —
    /// unsupported field types degrade to an omitted field, not a failure.
    pub fn lookup(&self, key: &str) -> Option<Arc<dyn FieldTypePlugin>> {
        self.plugins.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.plugins.contains_key(key)
    }

    /// Registered field-type keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Diagnostics recorded during registration; the build pass folds these
    /// into its output.
    pub fn startup_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::{ProducedField, SchemaFieldSpec, SchemaTypeRef};
    use fieldgraph_fields::FieldDefinition;

    struct FakePlugin {
        key: &'static str,
    }

    impl FieldTypePlugin for FakePlugin {
        fn key(&self) -> &str {
            self.key
        }

        fn produce_schema_field(
            &self,
            _field: &FieldDefinition,
            _cx: &mut crate::builder::FieldBuildContext<'_, '_>,
        ) -> ProducedField {
            ProducedField::Field(SchemaFieldSpec::of(SchemaTypeRef::named("String")))
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = FieldTypeRegistry::new();
        registry.register(Arc::new(FakePlugin { key: "text" }));

        assert!(registry.contains("text"));
        assert!(registry.lookup("text").is_some());
        assert!(registry.lookup("image").is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.startup_diagnostics().is_empty());
    }

    #[test]
    fn duplicate_registration_warns_and_overwrites() {
        let mut registry = FieldTypeRegistry::new();
        registry.register(Arc::new(FakePlugin { key: "text" }));
        registry.register(Arc::new(FakePlugin { key: "text" }));

        assert_eq!(registry.len(), 1);
        let diags = registry.startup_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::DuplicateRegistration);
        assert!(diags[0].message.contains("text"));
    }

    #[test]
    fn keys_in_registration_order() {
        let mut registry = FieldTypeRegistry::new();
        registry.register(Arc::new(FakePlugin { key: "text" }));
        registry.register(Arc::new(FakePlugin { key: "number" }));
        registry.register(Arc::new(FakePlugin { key: "select" }));

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["text", "number", "select"]);
    }
}
