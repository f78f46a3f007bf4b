//! The type registry build pass.
//!
//! A build pass is a pure, ordered fold over field groups: resolve each
//! group's locations, derive its schema type name, run every field through
//! its type plugin, and emit immutable [`SchemaTypeRegistration`] values
//! plus diagnostics. Conflicts reject the offending piece, never the whole
//! schema, and nothing is registered globally — aborting a pass leaves no
//! partial state behind.

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use tracing::{debug, warn};

use fieldgraph_fields::{
    ContentRef, ContentStore, ExecutionContext, FieldConfig, FieldDefinition, FieldGroup,
    FieldsError,
};
use fieldgraph_locations::{engine, LocationCatalog};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::names;
use crate::plugin::{FieldResolver, ProducedField, SchemaTypeRef};
use crate::registry::FieldTypeRegistry;

/// One field on a registered schema type. The registration map key is the
/// schema field name.
#[derive(Clone)]
pub struct SchemaFieldRegistration {
    pub type_ref: SchemaTypeRef,
    pub resolver: Option<Arc<dyn FieldResolver>>,
}

impl fmt::Debug for SchemaFieldRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaFieldRegistration")
            .field("type_ref", &self.type_ref)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

// Resolvers are opaque; registrations compare by shape only.
impl PartialEq for SchemaFieldRegistration {
    fn eq(&self, other: &Self) -> bool {
        self.type_ref == other.type_ref
    }
}

/// One emitted schema type: name, implemented interfaces, ordered fields,
/// and the field groups it traces back to. Immutable once emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTypeRegistration {
    pub name: String,
    pub implements: IndexSet<String>,
    pub fields: IndexMap<String, SchemaFieldRegistration>,
    pub source_groups: Vec<String>,
}

impl SchemaTypeRegistration {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implements: IndexSet::new(),
            fields: IndexMap::new(),
            source_groups: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&SchemaFieldRegistration> {
        self.fields.get(name)
    }
}

/// Result of one build pass, consumed by the host schema-serving process
/// (`types`) and the admin UI (`diagnostics`).
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub types: Vec<SchemaTypeRegistration>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    pub fn type_named(&self, name: &str) -> Option<&SchemaTypeRegistration> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == crate::diagnostics::Severity::Error)
    }
}

/// Builds schema registrations from field groups.
///
/// Holds read-only snapshots of the catalog and plugin registry; each call
/// to [`build`](Self::build) is independent and idempotent.
pub struct SchemaBuilder<'a> {
    catalog: &'a LocationCatalog,
    registry: &'a FieldTypeRegistry,
    store: Arc<dyn ContentStore>,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(
        catalog: &'a LocationCatalog,
        registry: &'a FieldTypeRegistry,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            catalog,
            registry,
            store,
        }
    }

    /// Run one full build pass over the given field groups.
    ///
    /// Groups are processed in ascending key order so repeated builds from
    /// identical input produce identical output, ordering included.
    pub fn build(&self, groups: &[FieldGroup]) -> BuildOutput {
        let mut pass = BuildPass {
            catalog: self.catalog,
            registry: self.registry,
            store: Arc::clone(&self.store),
            types: IndexMap::new(),
            staged: IndexMap::new(),
            diagnostics: self.registry.startup_diagnostics().to_vec(),
        };

        let mut ordered: Vec<&FieldGroup> = groups.iter().collect();
        ordered.sort_by(|a, b| a.key.cmp(&b.key));
        for group in ordered {
            pass.process_group(group);
        }

        debug!(
            types = pass.types.len(),
            diagnostics = pass.diagnostics.len(),
            "schema build pass complete"
        );
        BuildOutput {
            types: pass.types.into_values().collect(),
            diagnostics: pass.diagnostics,
        }
    }
}

/// All intermediate state of one build pass. Dropped wholesale on abort.
struct BuildPass<'a> {
    catalog: &'a LocationCatalog,
    registry: &'a FieldTypeRegistry,
    store: Arc<dyn ContentStore>,
    types: IndexMap<String, SchemaTypeRegistration>,
    /// Nested types synthesized for the group currently being processed,
    /// committed only once the owning group type registers
    staged: IndexMap<String, SchemaTypeRegistration>,
    diagnostics: Vec<Diagnostic>,
}

impl BuildPass<'_> {
    fn process_group(&mut self, group: &FieldGroup) {
        let resolved = engine::resolve_types(self.catalog, group);
        if resolved.is_empty() {
            // Hidden or field-less groups are skipped without comment; a
            // visible group whose rules match nothing is worth reporting
            if group.show_in_schema && !group.fields.is_empty() {
                self.diagnostics.push(
                    Diagnostic::info(
                        DiagnosticKind::EmptyResolution,
                        format!(
                            "field group '{}' resolves to no locations and was not registered",
                            group.key
                        ),
                    )
                    .for_group(&group.key),
                );
            }
            return;
        }

        let raw_type_name = group.schema_type_name.as_deref().unwrap_or(&group.title);
        let Some(type_name) = names::schema_type_name(raw_type_name) else {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::InvalidTypeName,
                    format!(
                        "cannot derive a schema type name for field group '{}' from '{raw_type_name}'",
                        group.key
                    ),
                )
                .for_group(&group.key),
            );
            return;
        };
        if names::is_reserved_type_name(&type_name) {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::InvalidTypeName,
                    format!(
                        "field group '{}' claims reserved schema type name '{type_name}'",
                        group.key
                    ),
                )
                .for_group(&group.key),
            );
            return;
        }

        let raw_field_name = group.schema_field_name.as_deref().unwrap_or(&group.title);
        let Some(group_field_name) = names::schema_field_name(raw_field_name) else {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::InvalidFieldName,
                    format!(
                        "cannot derive a schema field name for field group '{}' from '{raw_field_name}'",
                        group.key
                    ),
                )
                .for_group(&group.key),
            );
            return;
        };

        // The group's own object type, fields run through their plugins
        let mut fields = IndexMap::new();
        for field in &group.fields {
            self.process_field(&group.key, &type_name, field, &mut fields);
        }
        if !self.register_type(type_name.clone(), IndexSet::new(), fields, &group.key) {
            // A rejected group must not leave its nested types behind
            self.staged.clear();
            return;
        }
        self.commit_staged();

        // Attach the group as a field on every resolved location type
        for location_type in &resolved {
            self.attach_group_field(location_type, &group_field_name, &type_name, group);
        }
    }

    /// Add `field_name: GroupType` to a location type, wiring the implements
    /// edges the catalog declares for it. Merging is additive across groups;
    /// only same-named fields conflict.
    fn attach_group_field(
        &mut self,
        location_type: &str,
        field_name: &str,
        group_type: &str,
        group: &FieldGroup,
    ) {
        let interfaces = self.catalog.interfaces_for_type(location_type);
        let entry = self
            .types
            .entry(location_type.to_string())
            .or_insert_with(|| SchemaTypeRegistration::new(location_type));
        entry.implements.extend(interfaces);
        if !entry.source_groups.contains(&group.key) {
            entry.source_groups.push(group.key.clone());
        }

        if entry.fields.contains_key(field_name) {
            warn!(
                field = field_name,
                type_name = location_type,
                group = %group.key,
                "schema field name collision; earlier definition wins"
            );
            self.diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::FieldNameConflict,
                    format!(
                        "field '{field_name}' on type '{location_type}' is already registered; earlier definition wins"
                    ),
                )
                .for_group(&group.key),
            );
            return;
        }

        // No resolver: hosts pass the content object through so sub-field
        // resolvers receive the same content reference
        entry.fields.insert(
            field_name.to_string(),
            SchemaFieldRegistration {
                type_ref: SchemaTypeRef::named(group_type),
                resolver: None,
            },
        );
    }

    /// Register a complete object type, detecting name clashes. Returns
    /// `false` when the name is taken by a materially different type.
    fn register_type(
        &mut self,
        name: String,
        implements: IndexSet<String>,
        fields: IndexMap<String, SchemaFieldRegistration>,
        group_key: &str,
    ) -> bool {
        match self.types.get_mut(&name) {
            Some(existing) => {
                if fields_equal(&existing.fields, &fields) {
                    existing.implements.extend(implements);
                    if !existing.source_groups.iter().any(|g| g == group_key) {
                        existing.source_groups.push(group_key.to_string());
                    }
                    true
                } else {
                    let first = existing
                        .source_groups
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "<location catalog>".to_string());
                    warn!(type_name = %name, group = group_key, "schema type name conflict");
                    self.diagnostics.push(
                        Diagnostic::error(
                            DiagnosticKind::TypeNameConflict,
                            format!(
                                "schema type '{name}' is already registered by '{first}' with a different field set"
                            ),
                        )
                        .for_group(group_key),
                    );
                    false
                }
            }
            None => {
                let mut registration = SchemaTypeRegistration::new(name.clone());
                registration.implements = implements;
                registration.fields = fields;
                registration.source_groups.push(group_key.to_string());
                self.types.insert(name, registration);
                true
            }
        }
    }

    /// Stage a synthesized nested type for the group currently being
    /// processed. Conflict detection spans committed and staged
    /// registrations, but nothing reaches the output until
    /// [`commit_staged`](Self::commit_staged).
    fn stage_type(
        &mut self,
        name: String,
        fields: IndexMap<String, SchemaFieldRegistration>,
        group_key: &str,
    ) -> bool {
        let conflict = self
            .types
            .get(&name)
            .or_else(|| self.staged.get(&name))
            .filter(|existing| !fields_equal(&existing.fields, &fields))
            .map(|existing| {
                existing
                    .source_groups
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "<location catalog>".to_string())
            });
        if let Some(first) = conflict {
            warn!(type_name = %name, group = group_key, "schema type name conflict");
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::TypeNameConflict,
                    format!(
                        "schema type '{name}' is already registered by '{first}' with a different field set"
                    ),
                )
                .for_group(group_key),
            );
            return false;
        }

        let entry = self
            .staged
            .entry(name.clone())
            .or_insert_with(|| SchemaTypeRegistration::new(name));
        entry.fields = fields;
        if !entry.source_groups.iter().any(|g| g == group_key) {
            entry.source_groups.push(group_key.to_string());
        }
        true
    }

    /// Fold the current group's staged nested types into the output.
    fn commit_staged(&mut self) {
        let staged = std::mem::take(&mut self.staged);
        for (name, registration) in staged {
            match self.types.get_mut(&name) {
                Some(existing) => {
                    existing.implements.extend(registration.implements);
                    for key in registration.source_groups {
                        if !existing.source_groups.contains(&key) {
                            existing.source_groups.push(key);
                        }
                    }
                }
                None => {
                    self.types.insert(name, registration);
                }
            }
        }
    }

    /// Run one field definition through its plugin and add the result to
    /// the owning type's field map.
    fn process_field(
        &mut self,
        group_key: &str,
        owner_type: &str,
        field: &FieldDefinition,
        out: &mut IndexMap<String, SchemaFieldRegistration>,
    ) {
        let Some(schema_name) = names::schema_field_name(&field.name) else {
            self.diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::InvalidFieldName,
                    format!(
                        "field '{}' has no valid schema field name and was omitted from type '{owner_type}'",
                        field.key
                    ),
                )
                .for_group(group_key),
            );
            return;
        };

        // Collision check comes first so a losing field never runs its
        // plugin and cannot synthesize nested types
        if out.contains_key(&schema_name) {
            self.diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::FieldNameConflict,
                    format!(
                        "field '{schema_name}' on type '{owner_type}' is already registered; earlier definition wins"
                    ),
                )
                .for_group(group_key),
            );
            return;
        }

        let Some(plugin) = self.registry.lookup(&field.field_type) else {
            self.diagnostics.push(
                Diagnostic::warning(
                    DiagnosticKind::UnsupportedFieldType,
                    format!(
                        "field '{}' uses unregistered field type '{}' and was omitted from type '{owner_type}'",
                        field.name, field.field_type
                    ),
                )
                .for_group(group_key),
            );
            return;
        };

        let config = FieldConfig::new(
            field.clone(),
            group_key,
            owner_type,
            Arc::clone(&self.store),
        );
        let default_resolver: Arc<dyn FieldResolver> = Arc::new(StoredFieldResolver {
            config: config.clone(),
        });

        let mut cx = FieldBuildContext {
            pass: self,
            owner_type_name: owner_type.to_string(),
            group_key: group_key.to_string(),
            config,
        };
        let produced = plugin.produce_schema_field(field, &mut cx);

        match produced {
            // A connection field registers itself with the host; an omitted
            // field simply isn't represented. Neither is a diagnostic.
            ProducedField::Connection | ProducedField::Omit => {}
            ProducedField::Field(spec) => {
                let mut type_ref = spec.type_ref;
                if field.non_null && !spec.non_null_exempt && !type_ref.is_non_null() {
                    type_ref = SchemaTypeRef::non_null(type_ref);
                }
                out.insert(
                    schema_name,
                    SchemaFieldRegistration {
                        type_ref,
                        resolver: spec.resolver.or(Some(default_resolver)),
                    },
                );
            }
        }
    }
}

fn fields_equal(
    a: &IndexMap<String, SchemaFieldRegistration>,
    b: &IndexMap<String, SchemaFieldRegistration>,
) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|((n1, f1), (n2, f2))| n1 == n2 && f1.type_ref == f2.type_ref)
}

/// Default resolver: the field's raw stored value, read through its config.
struct StoredFieldResolver {
    config: FieldConfig,
}

impl FieldResolver for StoredFieldResolver {
    fn resolve(&self, content: &ContentRef, cx: &ExecutionContext) -> Result<Value, FieldsError> {
        Ok(self.config.resolve_field(content, cx))
    }
}

/// Handed to plugins while their field is being built: the field's config,
/// the owning type, and the hook for synthesizing nested composite types.
pub struct FieldBuildContext<'p, 'a> {
    pass: &'p mut BuildPass<'a>,
    owner_type_name: String,
    group_key: String,
    config: FieldConfig,
}

impl FieldBuildContext<'_, '_> {
    /// Name of the schema type the field is being registered on.
    pub fn owner_type_name(&self) -> &str {
        &self.owner_type_name
    }

    /// Key of the owning field group.
    pub fn group_key(&self) -> &str {
        &self.group_key
    }

    /// The field's config, for building custom resolvers.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The host's storage accessor.
    pub fn content_store(&self) -> Arc<dyn ContentStore> {
        Arc::clone(&self.pass.store)
    }

    /// Record a diagnostic from plugin code.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.pass.diagnostics.push(diagnostic);
    }

    /// Synthesize a nested object type for a composite field, named
    /// `{OwnerType}{PascalCase(field name)}`, running its sub-fields
    /// through the same pipeline. The type is staged and only registered
    /// once the owning group type does. Returns the nested type's name, or
    /// `None` (with a diagnostic) when nothing could be staged.
    pub fn synthesize_type(&mut self, field: &FieldDefinition) -> Option<String> {
        let Some(suffix) = names::schema_type_name(&field.name) else {
            let diagnostic = Diagnostic::warning(
                DiagnosticKind::InvalidFieldName,
                format!(
                    "cannot derive a nested type name for composite field '{}'",
                    field.key
                ),
            )
            .for_group(&self.group_key);
            self.pass.diagnostics.push(diagnostic);
            return None;
        };
        if field.sub_fields.is_empty() {
            let diagnostic = Diagnostic::warning(
                DiagnosticKind::EmptyComposite,
                format!(
                    "composite field '{}' has no sub-fields and was omitted",
                    field.name
                ),
            )
            .for_group(&self.group_key);
            self.pass.diagnostics.push(diagnostic);
            return None;
        }

        let child_name = format!("{}{}", self.owner_type_name, suffix);
        let group_key = self.group_key.clone();
        let mut fields = IndexMap::new();
        for sub in &field.sub_fields {
            self.pass
                .process_field(&group_key, &child_name, sub, &mut fields);
        }
        if self.pass.stage_type(child_name.clone(), fields, &group_key) {
            Some(child_name)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_types::register_builtin_field_types;
    use fieldgraph_fields::{Condition, ConditionTree, MemoryContentStore};
    use fieldgraph_locations::LocationEntry;

    fn page_catalog() -> LocationCatalog {
        LocationCatalog::new(vec![LocationEntry::new(
            "page",
            "post_type",
            "page",
            vec!["Page".into()],
            vec!["ContentNode".into()],
        )])
    }

    fn builtin_registry() -> FieldTypeRegistry {
        let mut registry = FieldTypeRegistry::new();
        register_builtin_field_types(&mut registry);
        registry
    }

    fn page_group(key: &str, title: &str) -> FieldGroup {
        FieldGroup::new(key, title)
            .with_fields(vec![FieldDefinition::new("field_a", "headline", "text")])
            .with_location(
                ConditionTree::new().or_group(vec![Condition::equals("post_type", "page")]),
            )
    }

    fn build(groups: &[FieldGroup]) -> BuildOutput {
        let catalog = page_catalog();
        let registry = builtin_registry();
        let builder = SchemaBuilder::new(&catalog, &registry, Arc::new(MemoryContentStore::new()));
        builder.build(groups)
    }

    #[test]
    fn group_type_and_location_type_emitted() {
        let output = build(&[page_group("group_hero", "Hero")]);

        let hero = output.type_named("Hero").expect("Hero type registered");
        assert!(hero.field("headline").is_some());
        assert_eq!(hero.source_groups, vec!["group_hero"]);

        let page = output.type_named("Page").expect("Page type registered");
        assert!(page.implements.contains("ContentNode"));
        let hero_field = page.field("hero").expect("hero field on Page");
        assert_eq!(hero_field.type_ref, SchemaTypeRef::named("Hero"));
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn explicit_type_name_overrides_title() {
        let group = page_group("group_hero", "Hero").with_schema_type_name("Banner");
        let output = build(&[group]);
        assert!(output.type_named("Banner").is_some());
        assert!(output.type_named("Hero").is_none());
    }

    #[test]
    fn reserved_type_name_is_error() {
        let group = page_group("group_q", "Query");
        let output = build(&[group]);
        assert!(output.type_named("Query").is_none());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::InvalidTypeName);
        assert!(output.has_errors());
    }

    #[test]
    fn underivable_type_name_is_error() {
        let group = page_group("group_nums", "123");
        let output = build(&[group]);
        assert!(output.types.is_empty());
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::InvalidTypeName);
    }

    #[test]
    fn empty_resolution_reports_info() {
        let group = FieldGroup::new("group_orphan", "Orphan")
            .with_fields(vec![FieldDefinition::new("field_a", "a", "text")]);
        let output = build(&[group]);
        assert!(output.types.is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, DiagnosticKind::EmptyResolution);
        assert_eq!(
            output.diagnostics[0].severity,
            crate::diagnostics::Severity::Info
        );
    }

    #[test]
    fn hidden_group_is_silently_skipped() {
        let group = page_group("group_hidden", "Hidden").hidden_from_schema();
        let output = build(&[group]);
        assert!(output.types.is_empty());
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn non_null_wraps_produced_type() {
        let group = FieldGroup::new("group_hero", "Hero")
            .with_fields(vec![
                FieldDefinition::new("field_a", "headline", "text").required()
            ])
            .with_location(
                ConditionTree::new().or_group(vec![Condition::equals("post_type", "page")]),
            );
        let output = build(&[group]);
        let hero = output.type_named("Hero").unwrap();
        assert_eq!(
            hero.field("headline").unwrap().type_ref,
            SchemaTypeRef::non_null(SchemaTypeRef::named("String"))
        );
    }

    #[test]
    fn duplicate_field_names_keep_earlier() {
        let group = FieldGroup::new("group_hero", "Hero")
            .with_fields(vec![
                FieldDefinition::new("field_a", "headline", "text"),
                FieldDefinition::new("field_b", "headline", "number"),
            ])
            .with_location(
                ConditionTree::new().or_group(vec![Condition::equals("post_type", "page")]),
            );
        let output = build(&[group]);
        let hero = output.type_named("Hero").unwrap();
        // Earlier definition (text → String) wins
        assert_eq!(
            hero.field("headline").unwrap().type_ref,
            SchemaTypeRef::named("String")
        );
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::FieldNameConflict
        );
    }

    #[test]
    fn two_groups_merge_additively_on_location_type() {
        let output = build(&[
            page_group("group_a", "Alpha"),
            page_group("group_b", "Beta"),
        ]);
        let page = output.type_named("Page").unwrap();
        assert!(page.field("alpha").is_some());
        assert!(page.field("beta").is_some());
        assert_eq!(page.source_groups, vec!["group_a", "group_b"]);
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn default_resolver_reads_stored_value() {
        let catalog = page_catalog();
        let registry = builtin_registry();
        let store = Arc::new(MemoryContentStore::new());
        let content = ContentRef::new("post", "7");
        store.insert(content.clone(), "field_a", serde_json::json!("Welcome"));

        let builder = SchemaBuilder::new(&catalog, &registry, store);
        let output = builder.build(&[page_group("group_hero", "Hero")]);

        let hero = output.type_named("Hero").unwrap();
        let resolver = hero.field("headline").unwrap().resolver.as_ref().unwrap();
        let value = resolver
            .resolve(&content, &ExecutionContext::new())
            .unwrap();
        assert_eq!(value, serde_json::json!("Welcome"));
    }

    #[test]
    fn rejected_group_discards_synthesized_types() {
        let first = page_group("group_author_a", "Author");
        let second = FieldGroup::new("group_author_b", "Author")
            .with_fields(vec![
                FieldDefinition::new("field_handle", "handle", "text"),
                FieldDefinition::new("field_cta", "cta", "group").with_sub_fields(vec![
                    FieldDefinition::new("field_label", "label", "text"),
                ]),
            ])
            .with_location(
                ConditionTree::new().or_group(vec![Condition::equals("post_type", "page")]),
            );
        let output = build(&[first, second]);

        // The earlier group's shape survives, the later one is rejected
        let author = output.type_named("Author").unwrap();
        assert!(author.field("headline").is_some());
        assert!(author.field("handle").is_none());
        assert_eq!(author.source_groups, vec!["group_author_a"]);

        // And its nested type must not leak into the output as an orphan
        assert!(output.type_named("AuthorCta").is_none());
        assert!(output
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::TypeNameConflict));
    }

    #[test]
    fn colliding_composite_field_registers_no_nested_type() {
        let group = FieldGroup::new("group_hero", "Hero")
            .with_fields(vec![
                FieldDefinition::new("field_a", "banner", "text"),
                FieldDefinition::new("field_b", "banner", "group").with_sub_fields(vec![
                    FieldDefinition::new("field_label", "label", "text"),
                ]),
            ])
            .with_location(
                ConditionTree::new().or_group(vec![Condition::equals("post_type", "page")]),
            );
        let output = build(&[group]);

        let hero = output.type_named("Hero").unwrap();
        assert_eq!(
            hero.field("banner").unwrap().type_ref,
            SchemaTypeRef::named("String")
        );
        assert!(output.type_named("HeroBanner").is_none());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].kind,
            DiagnosticKind::FieldNameConflict
        );
    }

    #[test]
    fn build_leaves_builder_reusable() {
        let catalog = page_catalog();
        let registry = builtin_registry();
        let builder = SchemaBuilder::new(&catalog, &registry, Arc::new(MemoryContentStore::new()));
        let groups = vec![page_group("group_hero", "Hero")];

        let first = builder.build(&groups);
        let second = builder.build(&groups);
        assert_eq!(first.types, second.types);
        assert_eq!(first.diagnostics, second.diagnostics);
    }
}
