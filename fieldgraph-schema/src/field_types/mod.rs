//! Built-in field type plugins.
//!
//! These cover the stock field types every host gets out of the box. Hosts
//! extend the set by registering their own [`FieldTypePlugin`] values; a
//! field whose type has no plugin degrades to an omitted field with a
//! diagnostic, never a failure.
//!
//! [`FieldTypePlugin`]: crate::plugin::FieldTypePlugin

mod composite;
mod scalar;
mod user;

pub use composite::{GroupField, RepeaterField};
pub use scalar::{NumberField, SelectField, TextField, TextareaField, TrueFalseField};
pub use user::UserField;

use std::sync::Arc;

use crate::registry::FieldTypeRegistry;

/// Register every built-in field type.
pub fn register_builtin_field_types(registry: &mut FieldTypeRegistry) {
    registry.register(Arc::new(TextField));
    registry.register(Arc::new(TextareaField));
    registry.register(Arc::new(NumberField));
    registry.register(Arc::new(TrueFalseField));
    registry.register(Arc::new(SelectField));
    registry.register(Arc::new(GroupField));
    registry.register(Arc::new(RepeaterField));
    registry.register(Arc::new(UserField));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_register_cleanly() {
        let mut registry = FieldTypeRegistry::new();
        register_builtin_field_types(&mut registry);

        for key in [
            "text",
            "textarea",
            "number",
            "true_false",
            "select",
            "group",
            "repeater",
            "user",
        ] {
            assert!(registry.contains(key), "missing built-in '{key}'");
        }
        assert!(registry.startup_diagnostics().is_empty());
    }
}
