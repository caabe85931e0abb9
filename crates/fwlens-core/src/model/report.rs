//! Change report output types.
//!
//! All types serialize with the camelCase names of the report contract.
//! Collections are emitted in identity-key order so that identical inputs
//! always produce byte-identical serialized reports.

use crate::model::row::RuleRow;
use serde::{Deserialize, Serialize};

/// The diff engine's structured output: added/removed/modified rows plus
/// summary counts, fingerprints, and caller-supplied side labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReport {
    pub summary: DiffSummary,
    /// Rows whose identity key exists only on the current side
    pub added: Vec<RuleRow>,
    /// Rows whose identity key exists only on the baseline side
    pub removed: Vec<RuleRow>,
    /// Rows present on both sides with at least one field-level change
    pub modified: Vec<ModifiedRule>,
    /// Fingerprint of the baseline row sequence
    pub baseline_hash: String,
    /// Fingerprint of the current row sequence
    pub current_hash: String,
    /// Free-text label for the baseline side, supplied by the caller
    pub baseline_label: String,
    /// Free-text label for the current side, supplied by the caller
    pub current_label: String,
}

impl ChangeReport {
    /// Attach the caller's side labels. The engine itself leaves them empty.
    pub fn with_labels(
        mut self,
        baseline_label: impl Into<String>,
        current_label: impl Into<String>,
    ) -> Self {
        self.baseline_label = baseline_label.into();
        self.current_label = current_label.into();
        self
    }

    /// True when the two sides matched exactly.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

/// Exact counts over both input sequences and the three change collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub total_current_rules: usize,
    pub total_baseline_rules: usize,
    pub added_rules: usize,
    pub removed_rules: usize,
    pub modified_rules: usize,
}

/// One rule present on both sides with field-level differences.
///
/// Carries both full rows so consumers can render either side without a
/// second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedRule {
    /// Identity key shared by both rows
    pub key: String,
    pub policy_id: String,
    pub policy_name: String,
    pub rule_id: String,
    pub rule_name: String,
    pub baseline: RuleRow,
    pub current: RuleRow,
    /// Per-field changes, in the fixed field-table order
    pub changes: Vec<FieldChange>,
}

/// One changed field: wire name, display label, and both serialized forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub field: String,
    pub label: String,
    pub previous: String,
    pub current: String,
}
