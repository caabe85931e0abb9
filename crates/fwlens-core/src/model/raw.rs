//! Raw export document model.
//!
//! Mirrors the JSON emitted by the source firewall manager: a sequence of
//! policy entries, each holding a policy summary and its rules. Shapes vary
//! by source-system version, so every field is optional and deserialized
//! leniently: a mistyped value degrades to absent instead of failing the
//! whole document. The normalizer substitutes defaults later; nothing in
//! this layer rejects input.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field tolerantly: any value that does not match the target
/// type becomes `None` rather than a deserialization error.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One entry of the export document: a policy summary plus its rules.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPolicyExport {
    #[serde(deserialize_with = "lenient")]
    pub policy: Option<PolicySummary>,
    #[serde(deserialize_with = "lenient")]
    pub rules: Option<Vec<RawRule>>,
}

/// Policy-level identity and defaults.
///
/// The default action and flag fields describe the policy's fallback
/// behavior; rules inherit them as row-level metadata during normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicySummary {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub default_action: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub log_begin: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub log_end: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub enable_syslog: Option<bool>,
    #[serde(rename = "sendEventsToFMC", deserialize_with = "lenient")]
    pub send_events_to_fmc: Option<bool>,
}

/// One rule as exported, with all of its optional substructures.
///
/// Boolean flags deliberately deserialize only from an actual JSON boolean;
/// strings, numbers and nulls all land as `None` and normalize to the
/// tri-state unknown later, never to `false`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRule {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub rule_index: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub section: Option<RawSection>,

    #[serde(deserialize_with = "lenient")]
    pub source_zones: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub destination_zones: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub source_networks: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub destination_networks: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub source_dynamic_objects: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub destination_dynamic_objects: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub source_ports: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub destination_ports: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub applications: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub urls: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub variable_set: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub ips_policy: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub file_policy: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub time_range_objects: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub source_security_group_tags: Option<ObjectRef>,
    #[serde(deserialize_with = "lenient")]
    pub snmp_config: Option<ObjectRef>,

    #[serde(deserialize_with = "lenient")]
    pub log_begin: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub log_end: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub log_files: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub enable_syslog: Option<bool>,
    #[serde(rename = "sendEventsToFMC", deserialize_with = "lenient")]
    pub send_events_to_fmc: Option<bool>,

    #[serde(deserialize_with = "lenient")]
    pub comment_history_list: Option<Vec<RawComment>>,
}

/// Section wrapper: the export nests the label under `section.name`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSection {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// One entry of a rule's comment history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawComment {
    #[serde(deserialize_with = "lenient")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_by: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_on: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub user: Option<RawCommentUser>,
}

/// Nested user record some export versions attach to a comment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCommentUser {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// A single referenced object inside a member array (or a bare entity).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamedEntity {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// The closed set of member-array keys a collection-shaped reference may
/// expose. Which keys appear varies by field and source-system version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKey {
    Items,
    Objects,
    Applications,
}

/// All member-array keys, in probe order.
pub const MEMBER_KEYS: [MemberKey; 3] = [MemberKey::Items, MemberKey::Objects, MemberKey::Applications];

/// A referenced-object substructure, polymorphic over two shapes.
///
/// A collection exposes one or more of the member arrays in [`MEMBER_KEYS`];
/// a bare entity exposes `name`/`value`/`url` directly. Both shapes share one
/// struct so that either deserializes without probing untyped JSON; the
/// [`ObjectRef::shape`] classification makes the variant explicit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectRef {
    #[serde(deserialize_with = "lenient")]
    pub items: Option<Vec<NamedEntity>>,
    #[serde(deserialize_with = "lenient")]
    pub objects: Option<Vec<NamedEntity>>,
    #[serde(deserialize_with = "lenient")]
    pub applications: Option<Vec<NamedEntity>>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// Classified shape of an [`ObjectRef`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefShape<'a> {
    /// Exposes at least one member array
    Collection(&'a ObjectRef),
    /// Exposes entity fields directly (or nothing at all)
    Entity(&'a ObjectRef),
}

impl ObjectRef {
    /// Get the member array stored under the given key, if present.
    pub fn members(&self, key: MemberKey) -> Option<&[NamedEntity]> {
        match key {
            MemberKey::Items => self.items.as_deref(),
            MemberKey::Objects => self.objects.as_deref(),
            MemberKey::Applications => self.applications.as_deref(),
        }
    }

    /// Classify this substructure as collection-shaped or entity-shaped.
    ///
    /// The key set is closed: a substructure is a collection iff any of the
    /// known member arrays is present, regardless of which.
    pub fn shape(&self) -> RefShape<'_> {
        if MEMBER_KEYS.iter().any(|key| self.members(*key).is_some()) {
            RefShape::Collection(self)
        } else {
            RefShape::Entity(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_field_tolerates_type_mismatch() {
        // `enabled` as a string must land as None, not fail the document
        let rule: RawRule =
            serde_json::from_value(json!({"id": "r1", "enabled": "yes", "ruleIndex": "3"}))
                .unwrap();
        assert_eq!(rule.id.as_deref(), Some("r1"));
        assert_eq!(rule.enabled, None);
        assert_eq!(rule.rule_index, None);
    }

    #[test]
    fn test_shape_classification() {
        let collection: ObjectRef =
            serde_json::from_value(json!({"objects": [{"name": "net1"}]})).unwrap();
        assert!(matches!(collection.shape(), RefShape::Collection(_)));

        let entity: ObjectRef = serde_json::from_value(json!({"name": "vs-default"})).unwrap();
        assert!(matches!(entity.shape(), RefShape::Entity(_)));

        // Empty member array still classifies as a collection
        let empty: ObjectRef = serde_json::from_value(json!({"items": []})).unwrap();
        assert!(matches!(empty.shape(), RefShape::Collection(_)));
    }

    #[test]
    fn test_send_events_field_uses_exported_casing() {
        let rule: RawRule =
            serde_json::from_value(json!({"sendEventsToFMC": true})).unwrap();
        assert_eq!(rule.send_events_to_fmc, Some(true));
    }
}
