//! Error types for the field group data model

use thiserror::Error;

/// Result type for field group operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur when validating or resolving field groups
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Field group has an empty key
    #[error("field group key cannot be empty")]
    EmptyGroupKey,

    /// Field group has an empty title
    #[error("field group '{group}' has an empty title")]
    EmptyTitle { group: String },

    /// Field key appears more than once within one group
    #[error("duplicate field key '{key}' in field group '{group}'")]
    DuplicateFieldKey { group: String, key: String },

    /// Field has an empty key
    #[error("field group '{group}' contains a field with an empty key")]
    EmptyFieldKey { group: String },

    /// Field has an empty name
    #[error("field '{key}' in group '{group}' has an empty name")]
    EmptyFieldName { group: String, key: String },

    /// Content reference could not be parsed
    #[error("malformed content reference: {reference}")]
    MalformedContentReference { reference: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldsError::DuplicateFieldKey {
            group: "group_hero".into(),
            key: "field_headline".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate field key 'field_headline' in field group 'group_hero'"
        );
    }

    #[test]
    fn test_malformed_reference_display() {
        let err = FieldsError::MalformedContentReference {
            reference: "not-a-ref".into(),
        };
        assert!(err.to_string().contains("not-a-ref"));
    }
}
