//! Canonical rule row - the contract between normalizer and diff engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A three-valued boolean: explicitly true, explicitly false, or unknown.
///
/// Unknown means the source field was absent or not actually a boolean. It is
/// a first-class state, never silently coerced to `No`: a policy that stopped
/// exporting a flag is not the same as a policy that disabled it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    /// Normalize a strictly-typed raw boolean: only an actual boolean is
    /// kept, anything else is `Unknown`.
    pub fn from_raw(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unknown,
        }
    }

    /// Display token used in change reports ("N/D" = no disponible).
    pub fn display_token(&self) -> &'static str {
        match self {
            TriState::Yes => "Sí",
            TriState::No => "No",
            TriState::Unknown => "N/D",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TriState::Unknown)
    }
}

// On the wire a tri-state is `true`/`false`/`null`, matching the row shape
// consumers of the original export tooling already parse.
impl Serialize for TriState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TriState::Yes => serializer.serialize_bool(true),
            TriState::No => serializer.serialize_bool(false),
            TriState::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for TriState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<bool>::deserialize(deserializer)?;
        Ok(TriState::from_raw(value))
    }
}

/// A structured rule comment, kept only when at least one part is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleComment {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RuleComment {
    /// True when text, user and date are all empty/absent.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.user.is_none() && self.date.is_none()
    }
}

/// The canonical flat representation of one firewall rule plus its owning
/// policy's identity and defaults.
///
/// Every field is total: normalization substitutes defaults for anything the
/// raw document omitted, so consumers never see an optional field at this
/// layer. Reference sets are deduplicated, contain no empty strings, and keep
/// first-seen order (deterministic for a given input).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRow {
    // Identity
    pub policy_id: String,
    pub policy_name: String,
    pub policy_description: String,
    pub rule_id: String,
    pub rule_name: String,
    pub section: String,
    /// Position of the rule inside its policy; metadata only, never part of
    /// the identity key.
    pub index: i64,

    // Policy-level defaults
    pub policy_default_action: String,
    pub policy_default_log_begin: TriState,
    pub policy_default_log_end: TriState,
    pub policy_default_enable_syslog: TriState,
    #[serde(rename = "policyDefaultSendEventsToFMC")]
    pub policy_default_send_events_to_fmc: TriState,

    // Rule classification
    /// Always upper-case; empty when the export carried no action.
    pub action: String,
    pub enabled: bool,

    // Reference sets
    pub source_zones: Vec<String>,
    pub destination_zones: Vec<String>,
    pub source_networks: Vec<String>,
    pub destination_networks: Vec<String>,
    pub source_dynamic_objects: Vec<String>,
    pub destination_dynamic_objects: Vec<String>,
    pub source_ports: Vec<String>,
    pub destination_ports: Vec<String>,
    pub applications: Vec<String>,
    pub urls: Vec<String>,
    pub variable_set: Vec<String>,
    pub ips_policy: Vec<String>,
    pub file_policy: Vec<String>,
    pub time_ranges: Vec<String>,
    pub security_group_tags: Vec<String>,
    pub snmp_alerts: Vec<String>,

    // Logging flags
    pub log_begin: TriState,
    pub log_end: TriState,
    pub log_files: TriState,
    pub enable_syslog: TriState,
    #[serde(rename = "sendEventsToFMC")]
    pub send_events_to_fmc: TriState,

    pub comments: Vec<RuleComment>,
}

impl RuleRow {
    /// The identity key used to match rows between two snapshots:
    /// `policyId::ruleId`, falling back to the rule name when the export
    /// carried no rule id.
    pub fn identity_key(&self) -> String {
        let rule_ref = if self.rule_id.is_empty() {
            &self.rule_name
        } else {
            &self.rule_id
        };
        format!("{}::{}", self.policy_id, rule_ref)
    }
}
