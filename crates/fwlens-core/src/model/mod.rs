//! Data model for FWLens.
//!
//! Three layers, consumed in sequence:
//! - `raw`: the loosely-typed export document as retrieved from the source
//!   system (every field optional, lenient deserialization)
//! - `row`: the canonical flat rule row, the sole contract between the
//!   normalizer and the diff engine (every field total)
//! - `report`: the diff engine's structured change report

pub mod raw;
pub mod report;
pub mod row;

pub use raw::{
    MemberKey, NamedEntity, ObjectRef, PolicySummary, RawPolicyExport, RawRule, RefShape,
};
pub use report::{ChangeReport, DiffSummary, FieldChange, ModifiedRule};
pub use row::{RuleComment, RuleRow, TriState};
