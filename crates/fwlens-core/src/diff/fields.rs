//! Diff-relevant field table and display serialization.
//!
//! The table order is fixed and defines the order in which changes are
//! reported: policy defaults first, then rule action/status/section/index,
//! then the sixteen reference sets, then the five logging flags, then
//! comments last. Identity fields (ids, names) are deliberately absent: they
//! feed the identity key, so diffing them would only echo the key match.

use crate::model::row::{RuleComment, RuleRow, TriState};

/// Placeholder rendered for an empty set or comment list.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// One diff-relevant field of the canonical row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    PolicyDefaultAction,
    PolicyDefaultLogBegin,
    PolicyDefaultLogEnd,
    PolicyDefaultEnableSyslog,
    PolicyDefaultSendEventsToFmc,
    Action,
    Enabled,
    Section,
    Index,
    SourceZones,
    DestinationZones,
    SourceNetworks,
    DestinationNetworks,
    SourceDynamicObjects,
    DestinationDynamicObjects,
    SourcePorts,
    DestinationPorts,
    Applications,
    Urls,
    VariableSet,
    IpsPolicy,
    FilePolicy,
    TimeRanges,
    SecurityGroupTags,
    SnmpAlerts,
    LogBegin,
    LogEnd,
    LogFiles,
    EnableSyslog,
    SendEventsToFmc,
    Comments,
}

/// The fixed, ordered diff field table.
pub const FIELD_DEFINITIONS: [RuleField; 31] = [
    RuleField::PolicyDefaultAction,
    RuleField::PolicyDefaultLogBegin,
    RuleField::PolicyDefaultLogEnd,
    RuleField::PolicyDefaultEnableSyslog,
    RuleField::PolicyDefaultSendEventsToFmc,
    RuleField::Action,
    RuleField::Enabled,
    RuleField::Section,
    RuleField::Index,
    RuleField::SourceZones,
    RuleField::DestinationZones,
    RuleField::SourceNetworks,
    RuleField::DestinationNetworks,
    RuleField::SourceDynamicObjects,
    RuleField::DestinationDynamicObjects,
    RuleField::SourcePorts,
    RuleField::DestinationPorts,
    RuleField::Applications,
    RuleField::Urls,
    RuleField::VariableSet,
    RuleField::IpsPolicy,
    RuleField::FilePolicy,
    RuleField::TimeRanges,
    RuleField::SecurityGroupTags,
    RuleField::SnmpAlerts,
    RuleField::LogBegin,
    RuleField::LogEnd,
    RuleField::LogFiles,
    RuleField::EnableSyslog,
    RuleField::SendEventsToFmc,
    RuleField::Comments,
];

impl RuleField {
    /// Wire name of the field (camelCase, matching the row contract).
    pub fn name(&self) -> &'static str {
        match self {
            RuleField::PolicyDefaultAction => "policyDefaultAction",
            RuleField::PolicyDefaultLogBegin => "policyDefaultLogBegin",
            RuleField::PolicyDefaultLogEnd => "policyDefaultLogEnd",
            RuleField::PolicyDefaultEnableSyslog => "policyDefaultEnableSyslog",
            RuleField::PolicyDefaultSendEventsToFmc => "policyDefaultSendEventsToFMC",
            RuleField::Action => "action",
            RuleField::Enabled => "enabled",
            RuleField::Section => "section",
            RuleField::Index => "index",
            RuleField::SourceZones => "sourceZones",
            RuleField::DestinationZones => "destinationZones",
            RuleField::SourceNetworks => "sourceNetworks",
            RuleField::DestinationNetworks => "destinationNetworks",
            RuleField::SourceDynamicObjects => "sourceDynamicObjects",
            RuleField::DestinationDynamicObjects => "destinationDynamicObjects",
            RuleField::SourcePorts => "sourcePorts",
            RuleField::DestinationPorts => "destinationPorts",
            RuleField::Applications => "applications",
            RuleField::Urls => "urls",
            RuleField::VariableSet => "variableSet",
            RuleField::IpsPolicy => "ipsPolicy",
            RuleField::FilePolicy => "filePolicy",
            RuleField::TimeRanges => "timeRanges",
            RuleField::SecurityGroupTags => "securityGroupTags",
            RuleField::SnmpAlerts => "snmpAlerts",
            RuleField::LogBegin => "logBegin",
            RuleField::LogEnd => "logEnd",
            RuleField::LogFiles => "logFiles",
            RuleField::EnableSyslog => "enableSyslog",
            RuleField::SendEventsToFmc => "sendEventsToFMC",
            RuleField::Comments => "comments",
        }
    }

    /// Human label shown in change reports (the product's display locale).
    pub fn label(&self) -> &'static str {
        match self {
            RuleField::PolicyDefaultAction => "Accion por defecto",
            RuleField::PolicyDefaultLogBegin => "Log inicio por defecto",
            RuleField::PolicyDefaultLogEnd => "Log fin por defecto",
            RuleField::PolicyDefaultEnableSyslog => "Syslog por defecto",
            RuleField::PolicyDefaultSendEventsToFmc => "Eventos FMC por defecto",
            RuleField::Action => "Acción",
            RuleField::Enabled => "Estado",
            RuleField::Section => "Sección",
            RuleField::Index => "Índice",
            RuleField::SourceZones => "Zonas origen",
            RuleField::DestinationZones => "Zonas destino",
            RuleField::SourceNetworks => "Redes origen",
            RuleField::DestinationNetworks => "Redes destino",
            RuleField::SourceDynamicObjects => "Objetos dinámicos origen",
            RuleField::DestinationDynamicObjects => "Objetos dinámicos destino",
            RuleField::SourcePorts => "Puertos origen",
            RuleField::DestinationPorts => "Puertos destino",
            RuleField::Applications => "Aplicaciones",
            RuleField::Urls => "URLs",
            RuleField::VariableSet => "Variable set",
            RuleField::IpsPolicy => "IPS",
            RuleField::FilePolicy => "File policy",
            RuleField::TimeRanges => "Time ranges",
            RuleField::SecurityGroupTags => "Security group tags",
            RuleField::SnmpAlerts => "SNMP alerts",
            RuleField::LogBegin => "Log inicio",
            RuleField::LogEnd => "Log fin",
            RuleField::LogFiles => "Log archivos",
            RuleField::EnableSyslog => "Syslog",
            RuleField::SendEventsToFmc => "Eventos FMC",
            RuleField::Comments => "Comentarios",
        }
    }
}

/// Serialize one field of a row to its display form.
///
/// Two fields are considered changed iff their serialized forms differ;
/// comparison happens on this representation, not on structural equality.
pub fn serialize_field(row: &RuleRow, field: RuleField) -> String {
    match field {
        RuleField::PolicyDefaultAction => row.policy_default_action.clone(),
        RuleField::PolicyDefaultLogBegin => row.policy_default_log_begin.display_token().to_string(),
        RuleField::PolicyDefaultLogEnd => row.policy_default_log_end.display_token().to_string(),
        RuleField::PolicyDefaultEnableSyslog => {
            row.policy_default_enable_syslog.display_token().to_string()
        }
        RuleField::PolicyDefaultSendEventsToFmc => row
            .policy_default_send_events_to_fmc
            .display_token()
            .to_string(),
        RuleField::Action => row.action.clone(),
        RuleField::Enabled => {
            let state = if row.enabled { TriState::Yes } else { TriState::No };
            state.display_token().to_string()
        }
        RuleField::Section => row.section.clone(),
        RuleField::Index => row.index.to_string(),
        RuleField::SourceZones => serialize_names(&row.source_zones),
        RuleField::DestinationZones => serialize_names(&row.destination_zones),
        RuleField::SourceNetworks => serialize_names(&row.source_networks),
        RuleField::DestinationNetworks => serialize_names(&row.destination_networks),
        RuleField::SourceDynamicObjects => serialize_names(&row.source_dynamic_objects),
        RuleField::DestinationDynamicObjects => serialize_names(&row.destination_dynamic_objects),
        RuleField::SourcePorts => serialize_names(&row.source_ports),
        RuleField::DestinationPorts => serialize_names(&row.destination_ports),
        RuleField::Applications => serialize_names(&row.applications),
        RuleField::Urls => serialize_names(&row.urls),
        RuleField::VariableSet => serialize_names(&row.variable_set),
        RuleField::IpsPolicy => serialize_names(&row.ips_policy),
        RuleField::FilePolicy => serialize_names(&row.file_policy),
        RuleField::TimeRanges => serialize_names(&row.time_ranges),
        RuleField::SecurityGroupTags => serialize_names(&row.security_group_tags),
        RuleField::SnmpAlerts => serialize_names(&row.snmp_alerts),
        RuleField::LogBegin => row.log_begin.display_token().to_string(),
        RuleField::LogEnd => row.log_end.display_token().to_string(),
        RuleField::LogFiles => row.log_files.display_token().to_string(),
        RuleField::EnableSyslog => row.enable_syslog.display_token().to_string(),
        RuleField::SendEventsToFmc => row.send_events_to_fmc.display_token().to_string(),
        RuleField::Comments => serialize_comments(&row.comments),
    }
}

fn serialize_names(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        values.join(", ")
    }
}

/// Render comments as `text (user - date)` entries joined by ` | `, omitting
/// absent sub-parts.
fn serialize_comments(comments: &[RuleComment]) -> String {
    if comments.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    comments
        .iter()
        .map(|comment| {
            let mut parts: Vec<String> = Vec::new();
            if !comment.text.is_empty() {
                parts.push(comment.text.clone());
            }
            let meta: Vec<&str> = [comment.user.as_deref(), comment.date.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            if !meta.is_empty() {
                parts.push(format!("({})", meta.join(" - ")));
            }
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_serializes_to_placeholder() {
        let row = RuleRow::default();
        assert_eq!(serialize_field(&row, RuleField::SourceNetworks), "-");
    }

    #[test]
    fn test_names_join_with_comma_space() {
        let row = RuleRow {
            applications: vec!["HTTP".to_string(), "SSH".to_string()],
            ..Default::default()
        };
        assert_eq!(serialize_field(&row, RuleField::Applications), "HTTP, SSH");
    }

    #[test]
    fn test_tri_state_tokens() {
        let row = RuleRow {
            log_begin: TriState::Yes,
            log_end: TriState::No,
            ..Default::default()
        };
        assert_eq!(serialize_field(&row, RuleField::LogBegin), "Sí");
        assert_eq!(serialize_field(&row, RuleField::LogEnd), "No");
        assert_eq!(serialize_field(&row, RuleField::LogFiles), "N/D");
    }

    #[test]
    fn test_comment_rendering_omits_absent_parts() {
        let row = RuleRow {
            comments: vec![
                RuleComment {
                    text: "opened".to_string(),
                    user: Some("admin".to_string()),
                    date: Some("2025-01-01".to_string()),
                },
                RuleComment {
                    text: "follow-up".to_string(),
                    user: None,
                    date: None,
                },
                RuleComment {
                    text: String::new(),
                    user: Some("auditor".to_string()),
                    date: None,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            serialize_field(&row, RuleField::Comments),
            "opened (admin - 2025-01-01) | follow-up | (auditor)"
        );
    }

    #[test]
    fn test_display_labels_match_report_contract() {
        // Stored reports depend on these exact tokens
        assert_eq!(RuleField::PolicyDefaultAction.label(), "Accion por defecto");
        assert_eq!(RuleField::Action.label(), "Acción");
        assert_eq!(RuleField::Enabled.label(), "Estado");
        assert_eq!(RuleField::Comments.label(), "Comentarios");
    }

    #[test]
    fn test_field_table_order_and_bounds() {
        assert_eq!(FIELD_DEFINITIONS.len(), 31);
        assert_eq!(FIELD_DEFINITIONS[0], RuleField::PolicyDefaultAction);
        assert_eq!(
            FIELD_DEFINITIONS[FIELD_DEFINITIONS.len() - 1],
            RuleField::Comments
        );
        // Identity fields never appear in the table
        assert!(FIELD_DEFINITIONS
            .iter()
            .all(|field| !matches!(field.name(), "policyId" | "ruleId" | "ruleName")));
    }
}
