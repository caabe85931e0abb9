//! Change computation between two canonical row sequences.

use crate::diff::fields::{serialize_field, FIELD_DEFINITIONS};
use crate::diff::fingerprint::compute_fingerprint;
use crate::model::report::{ChangeReport, DiffSummary, FieldChange, ModifiedRule};
use crate::model::row::RuleRow;
use std::collections::BTreeMap;

/// Compare two canonical row sequences and produce the change report.
///
/// `current` and `baseline` are matched by identity key
/// (`policyId::ruleId-or-ruleName`). A key present only on the current side
/// is an addition; only on the baseline side, a removal; present on both, a
/// field-by-field comparison over the fixed [`FIELD_DEFINITIONS`] table.
///
/// Duplicate keys within one side silently last-write-win in that side's
/// lookup; the summary totals still count every input row. Output collections
/// are emitted in key order, so the report is deterministic regardless of
/// input ordering.
///
/// Side labels are left empty; attach them with
/// [`ChangeReport::with_labels`].
pub fn diff_rule_sets(current: &[RuleRow], baseline: &[RuleRow]) -> ChangeReport {
    let current_map: BTreeMap<String, &RuleRow> = current
        .iter()
        .map(|row| (row.identity_key(), row))
        .collect();
    let baseline_map: BTreeMap<String, &RuleRow> = baseline
        .iter()
        .map(|row| (row.identity_key(), row))
        .collect();

    let mut added: Vec<RuleRow> = Vec::new();
    let mut removed: Vec<RuleRow> = Vec::new();
    let mut modified: Vec<ModifiedRule> = Vec::new();

    for (key, row) in &current_map {
        let Some(baseline_row) = baseline_map.get(key) else {
            added.push((*row).clone());
            continue;
        };
        let changes = field_changes(baseline_row, row);
        if !changes.is_empty() {
            modified.push(ModifiedRule {
                key: key.clone(),
                policy_id: row.policy_id.clone(),
                policy_name: row.policy_name.clone(),
                rule_id: row.rule_id.clone(),
                rule_name: row.rule_name.clone(),
                baseline: (*baseline_row).clone(),
                current: (*row).clone(),
                changes,
            });
        }
    }

    for (key, row) in &baseline_map {
        if !current_map.contains_key(key) {
            removed.push((*row).clone());
        }
    }

    let report = ChangeReport {
        summary: DiffSummary {
            total_current_rules: current.len(),
            total_baseline_rules: baseline.len(),
            added_rules: added.len(),
            removed_rules: removed.len(),
            modified_rules: modified.len(),
        },
        added,
        removed,
        modified,
        baseline_hash: compute_fingerprint(baseline),
        current_hash: compute_fingerprint(current),
        baseline_label: String::new(),
        current_label: String::new(),
    };
    tracing::debug!(
        added = report.summary.added_rules,
        removed = report.summary.removed_rules,
        modified = report.summary.modified_rules,
        "computed rule diff"
    );
    report
}

/// Field-by-field comparison over the fixed table; a field changed iff its
/// serialized display forms differ.
fn field_changes(baseline: &RuleRow, current: &RuleRow) -> Vec<FieldChange> {
    let mut changes = Vec::new();
    for field in FIELD_DEFINITIONS {
        let previous = serialize_field(baseline, field);
        let now = serialize_field(current, field);
        if previous != now {
            changes.push(FieldChange {
                field: field.name().to_string(),
                label: field.label().to_string(),
                previous,
                current: now,
            });
        }
    }
    changes
}
