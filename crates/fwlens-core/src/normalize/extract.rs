//! Shape-tolerant extraction of reference sets.
//!
//! Every referenced-object field resolves to an ordered set of unique,
//! non-empty display names, whichever raw shape the source system used.

use crate::model::raw::{NamedEntity, ObjectRef, RefShape, MEMBER_KEYS};

/// Resolve one referenced-object field into its display-name set.
///
/// - absent → empty set
/// - collection → all present member arrays, concatenated
/// - bare entity → one-element set
///
/// Names are trimmed; entries trimming to empty are dropped; duplicates keep
/// first-seen order, which makes the result deterministic for a given input.
pub fn extract_names(reference: Option<&ObjectRef>) -> Vec<String> {
    let Some(reference) = reference else {
        return Vec::new();
    };
    match reference.shape() {
        RefShape::Collection(collection) => {
            let mut names = Vec::new();
            for key in MEMBER_KEYS {
                if let Some(members) = collection.members(key) {
                    names.extend(members.iter().map(resolve_name));
                }
            }
            unique_names(names)
        }
        RefShape::Entity(entity) => unique_names(vec![resolve_entity_name(entity)]),
    }
}

/// Display name of one member entry: `name`, falling back to `value`, then
/// `url`, then empty. Trimmed.
fn resolve_name(entity: &NamedEntity) -> String {
    first_non_empty(&[&entity.name, &entity.value, &entity.url])
}

/// Display name of a bare entity-shaped reference.
fn resolve_entity_name(entity: &ObjectRef) -> String {
    first_non_empty(&[&entity.name, &entity.value, &entity.url])
}

fn first_non_empty(candidates: &[&Option<String>]) -> String {
    for candidate in candidates {
        if let Some(text) = candidate.as_deref() {
            if !text.is_empty() {
                return text.trim().to_string();
            }
        }
    }
    String::new()
}

/// Drop empties and duplicates, keeping first-seen order.
fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for name in names {
        if !name.is_empty() && !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
