//! Rolling-checksum fingerprints for whole-snapshot change detection.
//!
//! The fingerprint is computed over a reduced projection of each row
//! (identity, action, enabled, section, index, the four high-churn reference
//! sets, and comments) serialized to a canonical JSON string and folded with
//! a 31-multiplier rolling checksum over the string's code points. It is
//! order-sensitive and non-cryptographic: two fingerprints that differ prove
//! the sequences differ, while equal fingerprints are only a strong hint.
//! Never repurpose it as a content-addressing or integrity primitive.

use crate::model::row::RuleRow;
use serde_json::{json, Value};

/// Compute the fingerprint of a row sequence.
///
/// Deterministic: the same rows in the same order always produce the same
/// token. Reordering rows changes the token.
pub fn compute_fingerprint(rows: &[RuleRow]) -> String {
    let projection: Vec<Value> = rows.iter().map(project_row).collect();
    let canonical = Value::Array(projection).to_string();
    let mut hash: i32 = 0;
    for code_point in canonical.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(code_point as i32);
    }
    format!("{:08x}", hash as u32)
}

/// Reduced projection of one row: the fields whose churn matters for quick
/// snapshot-level equality checks.
fn project_row(row: &RuleRow) -> Value {
    let rule_ref = if row.rule_id.is_empty() {
        &row.rule_name
    } else {
        &row.rule_id
    };
    json!([
        row.policy_id,
        rule_ref,
        row.action,
        row.enabled,
        row.section,
        row.index,
        row.source_networks,
        row.destination_networks,
        row.applications,
        row.urls,
        row.comments
            .iter()
            .map(|comment| json!([comment.text, comment.user, comment.date]))
            .collect::<Vec<_>>(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(policy_id: &str, rule_id: &str) -> RuleRow {
        RuleRow {
            policy_id: policy_id.to_string(),
            rule_id: rule_id.to_string(),
            rule_name: format!("rule-{rule_id}"),
            action: "ALLOW".to_string(),
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_fingerprint_is_fixed_width_hex() {
        let token = compute_fingerprint(&[row("p1", "r1")]);
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_stable_across_recomputation() {
        let rows = vec![row("p1", "r1"), row("p1", "r2")];
        assert_eq!(compute_fingerprint(&rows), compute_fingerprint(&rows));
    }

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        let forward = vec![row("p1", "r1"), row("p1", "r2")];
        let reversed = vec![row("p1", "r2"), row("p1", "r1")];
        assert_ne!(compute_fingerprint(&forward), compute_fingerprint(&reversed));
    }

    #[test]
    fn test_fingerprint_tracks_content_changes() {
        let before = vec![row("p1", "r1")];
        let mut after = before.clone();
        after[0].enabled = false;
        assert_ne!(compute_fingerprint(&before), compute_fingerprint(&after));
    }

    #[test]
    fn test_empty_sequence_has_a_fingerprint() {
        // "[]" folded: h = (0*31+'[')*31+']' = 91*31+93
        assert_eq!(compute_fingerprint(&[]), format!("{:08x}", 91 * 31 + 93));
    }
}
