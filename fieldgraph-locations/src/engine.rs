//! Location rule resolution engine.
//!
//! Evaluates a field group's condition tree against the location catalog to
//! produce the ordered, duplicate-free set of schema type names the group
//! attaches to. Pure over its inputs: repeated evaluation of the same group
//! against the same catalog yields the same set, in the same order.

use indexmap::IndexSet;
use tracing::debug;

use fieldgraph_fields::{FieldGroup, Operator};

use crate::catalog::LocationCatalog;

/// Resolve the schema types a field group must attach to.
///
/// Groups hidden from the schema or carrying no fields resolve to the empty
/// set regardless of their rules. A group with `manual_types` set uses its
/// explicit type list and skips rule evaluation entirely.
pub fn resolve_types(catalog: &LocationCatalog, group: &FieldGroup) -> IndexSet<String> {
    if !group.show_in_schema || group.fields.is_empty() {
        return IndexSet::new();
    }
    let types = evaluate(catalog, group);
    debug!(group = %group.key, types = ?types, "resolved field group locations");
    types
}

/// Admin-UI preview: resolve a group's rules without the visibility and
/// empty-fields gating, so rules can be previewed on an unsaved group.
pub fn resolve_locations_preview(catalog: &LocationCatalog, group: &FieldGroup) -> Vec<String> {
    evaluate(catalog, group).into_iter().collect()
}

fn evaluate(catalog: &LocationCatalog, group: &FieldGroup) -> IndexSet<String> {
    if group.manual_types {
        return group.manual_type_names.iter().cloned().collect();
    }

    // Union of AND-group results, in rule order
    let mut matched: IndexSet<String> = IndexSet::new();
    for conditions in &group.location.groups {
        matched.extend(evaluate_and_group(catalog, conditions));
    }

    catalog.types_for_locations(matched.iter())
}

/// Intersect the conditions of one AND-group over the catalog.
///
/// `Equals` contributes the locations matching its (param, value); a leading
/// `NotEquals` seeds from locations sharing the param with a different
/// value, and a later one subtracts matching locations from the accumulated
/// candidates. An empty AND-group matches nothing.
fn evaluate_and_group(
    catalog: &LocationCatalog,
    conditions: &[fieldgraph_fields::Condition],
) -> IndexSet<String> {
    let mut candidates: Option<IndexSet<String>> = None;

    for condition in conditions {
        match condition.operator {
            Operator::Equals => {
                let matching = catalog.locations_matching(&condition.param, &condition.value);
                candidates = Some(match candidates {
                    None => matching,
                    Some(acc) => acc.intersection(&matching).cloned().collect(),
                });
            }
            Operator::NotEquals => {
                candidates = Some(match candidates {
                    None => catalog.locations_differing(&condition.param, &condition.value),
                    Some(acc) => {
                        let excluded =
                            catalog.locations_matching(&condition.param, &condition.value);
                        acc.difference(&excluded).cloned().collect()
                    }
                });
            }
        }
    }

    candidates.unwrap_or_default()
}
