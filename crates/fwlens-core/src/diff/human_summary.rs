//! Human-readable summary renderer for change reports.

use crate::model::report::ChangeReport;

/// Render a Markdown summary of a [`ChangeReport`].
///
/// Intended for review workflows; informational only, the structured report
/// stays the contract.
pub fn render_human_summary(report: &ChangeReport) -> String {
    let mut out = String::new();

    out.push_str("## Rule Change Report\n\n");

    if !report.baseline_label.is_empty() || !report.current_label.is_empty() {
        out.push_str(&format!(
            "**Baseline**: {}  \n**Current**: {}\n\n",
            label_or_dash(&report.baseline_label),
            label_or_dash(&report.current_label),
        ));
    }

    out.push_str(&format!(
        "| | Rules | Fingerprint |\n\
         |---|---|---|\n\
         | Baseline | {} | `{}` |\n\
         | Current | {} | `{}` |\n\n",
        report.summary.total_baseline_rules,
        report.baseline_hash,
        report.summary.total_current_rules,
        report.current_hash,
    ));

    out.push_str(&format!(
        "**Added**: {}  \n**Removed**: {}  \n**Modified**: {}\n\n",
        report.summary.added_rules, report.summary.removed_rules, report.summary.modified_rules,
    ));

    if report.is_unchanged() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    if !report.added.is_empty() {
        out.push_str("### Added Rules\n\n");
        for row in &report.added {
            out.push_str(&format!("- `{}` ({})\n", row.identity_key(), row.rule_name));
        }
        out.push('\n');
    }

    if !report.removed.is_empty() {
        out.push_str("### Removed Rules\n\n");
        for row in &report.removed {
            out.push_str(&format!("- `{}` ({})\n", row.identity_key(), row.rule_name));
        }
        out.push('\n');
    }

    if !report.modified.is_empty() {
        out.push_str("### Modified Rules\n\n");
        for entry in &report.modified {
            out.push_str(&format!("- `{}` ({})\n", entry.key, entry.rule_name));
            for change in &entry.changes {
                out.push_str(&format!(
                    "  - **{}**: `{}` → `{}`\n",
                    change.label, change.previous, change.current
                ));
            }
        }
        out.push('\n');
    }

    out
}

fn label_or_dash(label: &str) -> &str {
    if label.is_empty() {
        "-"
    } else {
        label
    }
}
