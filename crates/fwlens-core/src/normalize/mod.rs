//! Normalizer: raw policy export → canonical rule rows.
//!
//! Flattens the policy→rules nesting into one row per rule; a policy with N
//! rules produces N rows sharing that policy's identity and defaults. Pure
//! function of the raw document: no I/O, no side effects, and it never fails
//! on malformed or partial input — every field has a defined default.

pub mod extract;

use crate::model::raw::{PolicySummary, RawComment, RawPolicyExport, RawRule};
use crate::model::row::{RuleComment, RuleRow, TriState};
use extract::extract_names;

/// Placeholder for a policy or rule the export left unnamed.
const UNNAMED: &str = "Sin nombre";

/// Flatten an export document into the ordered sequence of canonical rows.
pub fn flatten_policies(export: &[RawPolicyExport]) -> Vec<RuleRow> {
    let orphan_policy = PolicySummary::default();
    let mut rows = Vec::new();
    for entry in export {
        let policy = entry.policy.as_ref().unwrap_or(&orphan_policy);
        let rules = entry.rules.as_deref().unwrap_or(&[]);
        for rule in rules {
            rows.push(transform_rule(policy, rule));
        }
    }
    tracing::debug!(
        policies = export.len(),
        rows = rows.len(),
        "normalized policy export"
    );
    rows
}

/// Build one canonical row from a policy summary and one of its rules.
fn transform_rule(policy: &PolicySummary, rule: &RawRule) -> RuleRow {
    RuleRow {
        policy_id: text_or_empty(&policy.id),
        policy_name: text_or_placeholder(&policy.name),
        policy_description: text_or_empty(&policy.description),
        rule_id: text_or_empty(&rule.id),
        rule_name: text_or_placeholder(&rule.name),
        section: text_or_empty(&rule.section.as_ref().and_then(|s| s.name.clone())),
        index: rule.rule_index.unwrap_or(0),

        policy_default_action: text_or_empty(&policy.default_action),
        policy_default_log_begin: TriState::from_raw(policy.log_begin),
        policy_default_log_end: TriState::from_raw(policy.log_end),
        policy_default_enable_syslog: TriState::from_raw(policy.enable_syslog),
        policy_default_send_events_to_fmc: TriState::from_raw(policy.send_events_to_fmc),

        action: text_or_empty(&rule.action).to_uppercase(),
        enabled: rule.enabled.unwrap_or(false),

        source_zones: extract_names(rule.source_zones.as_ref()),
        destination_zones: extract_names(rule.destination_zones.as_ref()),
        source_networks: extract_names(rule.source_networks.as_ref()),
        destination_networks: extract_names(rule.destination_networks.as_ref()),
        source_dynamic_objects: extract_names(rule.source_dynamic_objects.as_ref()),
        destination_dynamic_objects: extract_names(rule.destination_dynamic_objects.as_ref()),
        source_ports: extract_names(rule.source_ports.as_ref()),
        destination_ports: extract_names(rule.destination_ports.as_ref()),
        applications: extract_names(rule.applications.as_ref()),
        urls: extract_names(rule.urls.as_ref()),
        variable_set: extract_names(rule.variable_set.as_ref()),
        ips_policy: extract_names(rule.ips_policy.as_ref()),
        file_policy: extract_names(rule.file_policy.as_ref()),
        time_ranges: extract_names(rule.time_range_objects.as_ref()),
        security_group_tags: extract_names(rule.source_security_group_tags.as_ref()),
        snmp_alerts: extract_names(rule.snmp_config.as_ref()),

        log_begin: TriState::from_raw(rule.log_begin),
        log_end: TriState::from_raw(rule.log_end),
        log_files: TriState::from_raw(rule.log_files),
        enable_syslog: TriState::from_raw(rule.enable_syslog),
        send_events_to_fmc: TriState::from_raw(rule.send_events_to_fmc),

        comments: normalize_comments(rule.comment_history_list.as_deref().unwrap_or(&[])),
    }
}

/// Resolve the comment history into structured entries.
///
/// Text is the raw comment trimmed (empty when not a string). User is
/// `createdBy` trimmed, falling back to the nested user name. Date is
/// `createdOn` when a string, else `date`. An entry survives only when at
/// least one part is non-empty.
fn normalize_comments(history: &[RawComment]) -> Vec<RuleComment> {
    history
        .iter()
        .map(|entry| RuleComment {
            text: entry
                .comment
                .as_deref()
                .map(|text| text.trim().to_string())
                .unwrap_or_default(),
            user: non_empty(
                entry
                    .created_by
                    .as_deref()
                    .or_else(|| entry.user.as_ref().and_then(|u| u.name.as_deref()))
                    .map(str::trim),
            ),
            date: non_empty(entry.created_on.as_deref().or(entry.date.as_deref())),
        })
        .filter(|comment| !comment.is_blank())
        .collect()
}

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// The placeholder covers only an absent name; an explicit empty string
// passes through (and an empty rule name leaves the identity key bare).
fn text_or_placeholder(value: &Option<String>) -> String {
    match value {
        Some(name) => name.clone(),
        None => UNNAMED.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|text| !text.is_empty()).map(str::to_string)
}
