//! Build-pass diagnostics.
//!
//! Misconfigured field groups must not take down the whole generated
//! schema, so conflicts and omissions are reported as data instead of
//! errors. The admin UI presents these to the administrator; the core never
//! writes to user-facing channels itself.

use serde::{Deserialize, Serialize};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// What went wrong (or is worth knowing) during a build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A schema type name could not be derived, or is reserved
    InvalidTypeName,
    /// Two field groups produced the same type name with different fields
    TypeNameConflict,
    /// Two fields produced the same schema field name on one type
    FieldNameConflict,
    /// A declared field name cannot become a valid schema identifier
    InvalidFieldName,
    /// A field references a field type with no registered plugin
    UnsupportedFieldType,
    /// A field-type key was registered more than once
    DuplicateRegistration,
    /// A composite field carries no sub-fields
    EmptyComposite,
    /// A field group's rules resolved to no locations
    EmptyResolution,
}

/// One diagnostic emitted by the registry or the build pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    /// Key of the field group the diagnostic is about, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_group: Option<String>,
}

impl Diagnostic {
    pub fn info(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, kind, message)
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, message)
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, message)
    }

    fn new(severity: Severity, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            field_group: None,
        }
    }

    /// Attach the field group this diagnostic is about.
    pub fn for_group(mut self, key: impl Into<String>) -> Self {
        self.field_group = Some(key.into());
        self
    }
}
