//! Static catalog of known locations.
//!
//! The host application supplies the catalog once at startup: every place a
//! field group can attach to (a content type, a taxonomy, a settings
//! screen), the (param, value) pair that selects it, and the schema type and
//! interface names it corresponds to. The core never mutates it.

use std::collections::HashMap;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One catalog row: a location, its matching rule input, and the schema
/// names it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Stable location identifier (e.g. `page`, `category`, `user_profile`)
    pub id: String,
    /// Param name conditions match against (e.g. `post_type`)
    pub match_param: String,
    /// Param value that selects this location
    pub match_value: String,
    /// Schema type name(s) this location corresponds to
    pub schema_type_names: Vec<String>,
    /// Interface(s) those types declare
    #[serde(default)]
    pub interface_names: Vec<String>,
}

impl LocationEntry {
    pub fn new(
        id: impl Into<String>,
        match_param: impl Into<String>,
        match_value: impl Into<String>,
        schema_type_names: Vec<String>,
        interface_names: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            match_param: match_param.into(),
            match_value: match_value.into(),
            schema_type_names,
            interface_names,
        }
    }
}

/// Immutable, indexed view over the host's location entries.
#[derive(Debug, Default)]
pub struct LocationCatalog {
    entries: Vec<LocationEntry>,
    by_param: HashMap<String, Vec<usize>>,
    by_id: HashMap<String, usize>,
}

impl LocationCatalog {
    pub fn new(entries: Vec<LocationEntry>) -> Self {
        let mut by_param: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_id = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_param
                .entry(entry.match_param.clone())
                .or_default()
                .push(idx);
            by_id.insert(entry.id.clone(), idx);
        }
        Self {
            entries,
            by_param,
            by_id,
        }
    }

    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: &str) -> Option<&LocationEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// Location ids whose (param, value) equals the given pair, in catalog
    /// order. Unknown params yield the empty set.
    pub fn locations_matching(&self, param: &str, value: &str) -> IndexSet<String> {
        self.param_entries(param)
            .filter(|e| e.match_value == value)
            .map(|e| e.id.clone())
            .collect()
    }

    /// Location ids sharing the param but with a *different* value, in
    /// catalog order. Seeds a leading `!=` condition.
    pub fn locations_differing(&self, param: &str, value: &str) -> IndexSet<String> {
        self.param_entries(param)
            .filter(|e| e.match_value != value)
            .map(|e| e.id.clone())
            .collect()
    }

    /// Flatten location ids into their schema type names, deduped in
    /// first-seen order.
    pub fn types_for_locations<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a String>,
    ) -> IndexSet<String> {
        let mut types = IndexSet::new();
        for id in ids {
            if let Some(entry) = self.entry(id) {
                types.extend(entry.schema_type_names.iter().cloned());
            }
        }
        types
    }

    /// Reverse mapping: every interface declared by locations producing the
    /// given schema type, deduped in catalog order.
    pub fn interfaces_for_type(&self, type_name: &str) -> IndexSet<String> {
        let mut interfaces = IndexSet::new();
        for entry in &self.entries {
            if entry.schema_type_names.iter().any(|t| t == type_name) {
                interfaces.extend(entry.interface_names.iter().cloned());
            }
        }
        interfaces
    }

    fn param_entries(&self, param: &str) -> impl Iterator<Item = &LocationEntry> {
        self.by_param
            .get(param)
            .map(|v| v.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.entries[idx])
    }
}
