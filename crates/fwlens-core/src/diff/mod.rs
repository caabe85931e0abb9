//! Diff engine for canonical rule rows.
//!
//! Compares two row sequences (current vs. baseline) and produces a
//! structured, deterministic change report plus content fingerprints.
//!
//! ## Entry point
//!
//! ```ignore
//! use fwlens_core::diff::diff_rule_sets;
//!
//! let report = diff_rule_sets(&current_rows, &baseline_rows)
//!     .with_labels("export-jan.json", "export-feb.json");
//! let summary = fwlens_core::diff::render_human_summary(&report);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical reports; output
//!   collections are emitted in identity-key order.
//! - **Statelessness**: each call is an independent pure computation.
//! - **Display-form comparison**: two fields differ iff their serialized
//!   display representations differ (see `fields`).

pub mod engine;
pub mod fields;
pub mod fingerprint;
pub mod human_summary;

pub use engine::diff_rule_sets;
pub use fields::{serialize_field, RuleField, FIELD_DEFINITIONS};
pub use fingerprint::compute_fingerprint;
pub use human_summary::render_human_summary;
