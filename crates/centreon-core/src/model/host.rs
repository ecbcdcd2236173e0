use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::coerce::{Choice, NotificationOption, StalkingOption, UNSET};

/// A custom macro defined directly on a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MacroSpec {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub is_password: bool,
    #[serde(default)]
    pub description: String,
}

/// `centreon_host`: a monitored host with its parameters and relationships.
///
/// Integer parameters use -1 for "unset, inherit the remote default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct HostResource {
    // ── Primary record ──
    pub name: String,
    pub alias: String,
    pub address: String,
    /// Poller the host is monitored from.
    pub instance: String,
    pub activate: bool,

    // ── Check settings ──
    pub check_command: String,
    pub check_command_arguments: String,
    pub check_period: String,
    pub max_check_attempts: i64,
    pub check_interval: i64,
    pub retry_check_interval: i64,
    pub active_checks_enabled: Choice,
    pub passive_checks_enabled: Choice,
    pub check_freshness: Choice,
    pub freshness_threshold: i64,
    pub obsess_over_host: Choice,
    pub acknowledgement_timeout: i64,
    pub process_perf_data: String,

    // ── Event handler ──
    pub event_handler_enabled: Choice,
    pub event_handler: String,
    pub event_handler_arguments: String,

    // ── Flapping ──
    pub flap_detection_enabled: Choice,
    pub flap_detection_options: String,
    pub low_flap_threshold: i64,
    pub high_flap_threshold: i64,

    // ── Notifications ──
    pub notifications_enabled: Choice,
    pub notification_interval: i64,
    pub notification_period: String,
    pub first_notification_delay: i64,
    pub recovery_notification_delay: i64,
    pub contact_additive_inheritance: bool,
    pub cg_additive_inheritance: bool,
    /// Never notify. Mutually exclusive with `notification_options`.
    pub notification_none: bool,
    pub notification_options: BTreeSet<NotificationOption>,

    // ── Retention and stalking ──
    pub retain_status_information: Choice,
    pub retain_nonstatus_information: Choice,
    pub stalking_options: BTreeSet<StalkingOption>,

    // ── SNMP ──
    pub snmp_community: String,
    pub snmp_version: String,
    pub timezone: String,

    // ── Extended info ──
    pub notes: String,
    pub notes_url: String,
    pub action_url: String,
    pub icon_image: String,
    pub icon_image_alt: String,
    pub statusmap_image: String,
    pub coords2d: String,
    pub coords3d: String,

    // ── Relationships ──
    /// Applied in order; later templates override earlier ones.
    pub templates: Vec<String>,
    #[serde(rename = "macro")]
    pub macros: BTreeSet<MacroSpec>,
    pub linked_contacts: BTreeSet<String>,
    pub linked_contact_groups: BTreeSet<String>,
    pub hostgroups: BTreeSet<String>,
    pub parents: BTreeSet<String>,
}

impl Default for HostResource {
    fn default() -> Self {
        Self {
            name: String::new(),
            alias: String::new(),
            address: String::new(),
            instance: String::new(),
            activate: true,
            check_command: String::new(),
            check_command_arguments: String::new(),
            check_period: String::new(),
            max_check_attempts: UNSET,
            check_interval: UNSET,
            retry_check_interval: UNSET,
            active_checks_enabled: Choice::Default,
            passive_checks_enabled: Choice::Default,
            check_freshness: Choice::Default,
            freshness_threshold: UNSET,
            obsess_over_host: Choice::Default,
            acknowledgement_timeout: UNSET,
            process_perf_data: String::new(),
            event_handler_enabled: Choice::Default,
            event_handler: String::new(),
            event_handler_arguments: String::new(),
            flap_detection_enabled: Choice::Default,
            flap_detection_options: String::new(),
            low_flap_threshold: UNSET,
            high_flap_threshold: UNSET,
            notifications_enabled: Choice::Default,
            notification_interval: UNSET,
            notification_period: String::new(),
            first_notification_delay: UNSET,
            recovery_notification_delay: UNSET,
            contact_additive_inheritance: false,
            cg_additive_inheritance: false,
            notification_none: false,
            notification_options: BTreeSet::new(),
            retain_status_information: Choice::Default,
            retain_nonstatus_information: Choice::Default,
            stalking_options: BTreeSet::new(),
            snmp_community: String::new(),
            snmp_version: String::new(),
            timezone: String::new(),
            notes: String::new(),
            notes_url: String::new(),
            action_url: String::new(),
            icon_image: String::new(),
            icon_image_alt: String::new(),
            statusmap_image: String::new(),
            coords2d: String::new(),
            coords3d: String::new(),
            templates: Vec::new(),
            macros: BTreeSet::new(),
            linked_contacts: BTreeSet::new(),
            linked_contact_groups: BTreeSet::new(),
            hostgroups: BTreeSet::new(),
            parents: BTreeSet::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimal_document_takes_schema_defaults() {
        let host: HostResource = serde_json::from_value(serde_json::json!({
            "name": "srv1",
            "alias": "Server1",
            "address": "10.0.0.1",
            "instance": "poller1"
        }))
        .unwrap();

        assert!(host.activate);
        assert_eq!(host.max_check_attempts, UNSET);
        assert_eq!(host.active_checks_enabled, Choice::Default);
        assert!(host.macros.is_empty());
    }

    #[test]
    fn schema_names_on_the_wire() {
        let host: HostResource = serde_json::from_value(serde_json::json!({
            "name": "srv1",
            "check_freshness": "yes",
            "notification_options": ["recovery", "down"],
            "stalking_options": ["up"],
            "macro": [{ "name": "SNMPCOMMUNITY", "value": "public" }]
        }))
        .unwrap();

        assert_eq!(host.check_freshness, Choice::Yes);
        assert_eq!(
            host.notification_options,
            BTreeSet::from([NotificationOption::Down, NotificationOption::Recovery])
        );
        assert_eq!(host.stalking_options, BTreeSet::from([StalkingOption::Up]));
        let m = host.macros.first().unwrap();
        assert!(!m.is_password);
        assert_eq!(m.description, "");
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let res: Result<HostResource, _> =
            serde_json::from_value(serde_json::json!({ "check_freshness": "maybe" }));
        assert!(res.is_err());
    }
}
