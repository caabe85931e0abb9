//! FWLens Core - Normalization and diff engine for firewall policy exports
//!
//! This crate provides the foundational data structures and operations for
//! FWLens, including:
//! - A loosely-typed raw model for exported policy/rule documents
//! - The normalizer: raw export → canonical flat rule rows
//! - The diff engine: two row sets → structured change report
//! - Rolling-checksum fingerprints for whole-snapshot change detection
//! - Pure filter/option-list recomputation over canonical rows
//!
//! Both the normalizer and the diff engine are pure, synchronous functions of
//! their inputs. Malformed or partial input never fails normalization: every
//! missing or mistyped field degrades to a documented default.

pub mod diff;
pub mod errors;
pub mod filter;
pub mod model;
pub mod normalize;

// Re-export commonly used types
pub use diff::{compute_fingerprint, diff_rule_sets, render_human_summary};
pub use errors::{LensError, LensErrorKind, Result};
pub use model::{ChangeReport, RawPolicyExport, RuleRow, TriState};
pub use normalize::flatten_policies;
