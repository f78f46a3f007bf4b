//! Content references and the storage accessor contract.
//!
//! The schema core never touches storage directly — resolvers read field
//! values through a host-supplied [`ContentStore`], keyed by content
//! reference and field key.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldsError, Result};

/// Reference to one stored content object, e.g. a post or a user profile.
///
/// Wire form is `kind:id` (`post:42`, `user:7`). A reference that parses
/// is well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentRef {
    pub kind: String,
    pub id: String,
}

impl ContentRef {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Parse a `kind:id` reference. Both parts must be non-empty.
    pub fn parse(reference: &str) -> Result<Self> {
        match reference.split_once(':') {
            Some((kind, id)) if !kind.is_empty() && !id.is_empty() => {
                Ok(Self::new(kind, id))
            }
            _ => Err(FieldsError::MalformedContentReference {
                reference: reference.to_string(),
            }),
        }
    }
}

impl FromStr for ContentRef {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Read accessor over the host's content storage.
///
/// `None` means the value is absent — never an error. The core applies no
/// interpretation to the raw value; that is the field type plugin's job.
pub trait ContentStore: Send + Sync {
    fn read(&self, content: &ContentRef, field_key: &str) -> Option<Value>;
}

/// Request-scoped data bag threaded from the host to resolvers.
///
/// Opaque to the core; hosts stash whatever their execution model needs
/// (current user, locale, loader handles serialized as JSON, ...).
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    data: Map<String, Value>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// In-memory [`ContentStore`] for tests and examples.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    values: RwLock<HashMap<(ContentRef, String), Value>>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, content: ContentRef, field_key: impl Into<String>, value: Value) {
        self.values
            .write()
            .expect("content store lock poisoned")
            .insert((content, field_key.into()), value);
    }
}

impl ContentStore for MemoryContentStore {
    fn read(&self, content: &ContentRef, field_key: &str) -> Option<Value> {
        self.values
            .read()
            .expect("content store lock poisoned")
            .get(&(content.clone(), field_key.to_string()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_well_formed_reference() {
        let r = ContentRef::parse("post:42").unwrap();
        assert_eq!(r.kind, "post");
        assert_eq!(r.id, "42");
        assert_eq!(r.to_string(), "post:42");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert!(matches!(
            ContentRef::parse("post42"),
            Err(FieldsError::MalformedContentReference { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!(ContentRef::parse(":42").is_err());
        assert!(ContentRef::parse("post:").is_err());
        assert!(ContentRef::parse("").is_err());
    }

    #[test]
    fn parse_keeps_extra_colons_in_id() {
        let r = ContentRef::parse("term:category:news").unwrap();
        assert_eq!(r.kind, "term");
        assert_eq!(r.id, "category:news");
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryContentStore::new();
        let content = ContentRef::new("post", "1");
        store.insert(content.clone(), "field_headline", json!("Hello"));

        assert_eq!(store.read(&content, "field_headline"), Some(json!("Hello")));
        assert_eq!(store.read(&content, "field_missing"), None);
    }

    #[test]
    fn execution_context_data_bag() {
        let mut cx = ExecutionContext::new();
        cx.insert("locale", json!("en_US"));
        assert_eq!(cx.get("locale"), Some(&json!("en_US")));
        assert!(cx.get("user").is_none());
    }
}
