//! Pure filter and option-list recomputation over canonical rows.
//!
//! Consumers re-run these functions whenever the filter configuration
//! changes; there is no incremental state.

use crate::model::row::RuleRow;

/// Filter configuration over canonical rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleFilters {
    /// Case-insensitive free-text search over names, comments, networks,
    /// applications and URLs. Empty means no text filter.
    pub search: String,
    pub policy_id: Option<String>,
    pub action: Option<String>,
    pub enabled_only: bool,
}

/// A policy choice for selection lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyOption {
    pub id: String,
    pub name: String,
}

/// Apply the filter configuration to a row sequence.
pub fn apply_filters(rows: &[RuleRow], filters: &RuleFilters) -> Vec<RuleRow> {
    let search = filters.search.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            if let Some(policy_id) = &filters.policy_id {
                if &row.policy_id != policy_id {
                    return false;
                }
            }
            if let Some(action) = &filters.action {
                if &row.action != action {
                    return false;
                }
            }
            if filters.enabled_only && !row.enabled {
                return false;
            }
            search.is_empty() || matches_search(row, &search)
        })
        .cloned()
        .collect()
}

fn matches_search(row: &RuleRow, search: &str) -> bool {
    row.policy_name.to_lowercase().contains(search)
        || row.rule_name.to_lowercase().contains(search)
        || row
            .comments
            .iter()
            .any(|comment| comment.text.to_lowercase().contains(search))
        || matches_list(&row.source_networks, search)
        || matches_list(&row.destination_networks, search)
        || matches_list(&row.applications, search)
        || matches_list(&row.urls, search)
}

fn matches_list(values: &[String], search: &str) -> bool {
    values.iter().any(|value| value.to_lowercase().contains(search))
}

/// Unique policies referenced by the rows, sorted by display name.
///
/// A policy with an empty name falls back to its id for display.
pub fn policy_options(rows: &[RuleRow]) -> Vec<PolicyOption> {
    let mut options: Vec<PolicyOption> = Vec::new();
    for row in rows {
        if !options.iter().any(|option| option.id == row.policy_id) {
            let name = if row.policy_name.is_empty() {
                row.policy_id.clone()
            } else {
                row.policy_name.clone()
            };
            options.push(PolicyOption {
                id: row.policy_id.clone(),
                name,
            });
        }
    }
    options.sort_by(|a, b| a.name.cmp(&b.name));
    options
}

/// Unique non-empty actions present in the rows, sorted.
pub fn action_options(rows: &[RuleRow]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();
    for row in rows {
        if !row.action.is_empty() && !actions.contains(&row.action) {
            actions.push(row.action.clone());
        }
    }
    actions.sort();
    actions
}
