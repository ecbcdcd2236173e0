// CLAPI response types
//
// Every list-style CLAPI verb answers `{"result": [...]}`. Records are
// flat string maps on the wire; some Centreon versions emit ids and
// numeric parameters as JSON numbers, so string fields go through a
// lenient deserializer.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard CLAPI response envelope.
///
/// A missing or `null` `result` decodes as an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ClapiResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub result: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string, number, bool, or null and keep its textual form.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(serde_json::Value::deserialize(deserializer)?))
}

fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

// ── Command ──────────────────────────────────────────────────────────

/// A check/notification command (`CMD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub command_type: String,
    #[serde(default)]
    pub line: String,
}

// ── Host ─────────────────────────────────────────────────────────────

/// Primary host record as listed by `show`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub address: String,
    /// `"1"` or `"0"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub activate: String,
}

/// One row of a `getparam` answer: wire parameter name to value.
///
/// Kept as a map because the requested parameter list drives its shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostParams(HashMap<String, String>);

impl HostParams {
    /// Value of `param`, or `""` when the API did not return it.
    pub fn get(&self, param: &str) -> &str {
        self.0.get(param).map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for HostParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(k, v)| (k, value_to_string(v)))
                .collect(),
        ))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HostParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Poller (monitoring instance) a host is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Custom macro on a host. Inherited template macros carry a `source`
/// other than `"direct"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMacro {
    #[serde(rename = "macro name", default)]
    pub name: String,
    #[serde(rename = "macro value", default)]
    pub value: String,
    /// `"1"` or `"0"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub is_password: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
}

impl HostMacro {
    /// Provenance value for macros defined on the host itself.
    pub const SOURCE_DIRECT: &'static str = "direct";

    pub fn is_direct(&self) -> bool {
        self.source == Self::SOURCE_DIRECT
    }
}

/// `{id, name}` reference returned by every host relationship listing
/// (templates, parents, contacts, contact groups, host groups).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedObject {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// ── Timeperiod ───────────────────────────────────────────────────────

/// A timeperiod (`TP`) with one schedule string per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeperiod {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub sunday: String,
    #[serde(default)]
    pub monday: String,
    #[serde(default)]
    pub tuesday: String,
    #[serde(default)]
    pub wednesday: String,
    #[serde(default)]
    pub thursday: String,
    #[serde(default)]
    pub friday: String,
    #[serde(default)]
    pub saturday: String,
}

/// Exception of a timeperiod, keyed by its day specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeperiodException {
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub timerange: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn envelope_accepts_missing_and_null_result() {
        let empty: ClapiResponse<Command> = serde_json::from_str("{}").unwrap();
        assert!(empty.result.is_empty());

        let null: ClapiResponse<Command> = serde_json::from_str(r#"{"result":null}"#).unwrap();
        assert!(null.result.is_empty());
    }

    fn decode_envelope<T: serde::de::DeserializeOwned>(body: &str) -> Vec<T> {
        serde_json::from_str::<ClapiResponse<T>>(body).unwrap().result
    }

    #[test]
    fn envelope_decodes_for_any_record_type() {
        let commands: Vec<Command> =
            decode_envelope(r#"{"result":[{"id":"7","name":"check_ping","type":"check","line":"x"}]}"#);
        assert_eq!(commands[0].name, "check_ping");

        let links: Vec<LinkedObject> = decode_envelope(r#"{"result":null}"#);
        assert!(links.is_empty());
    }

    #[test]
    fn numeric_ids_are_kept_as_text() {
        let resp: ClapiResponse<Host> = serde_json::from_str(
            r#"{"result":[{"id":14,"name":"srv1","alias":"Server1","address":"10.0.0.1","activate":"1"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.result[0].id, "14");
        assert_eq!(resp.result[0].activate, "1");
    }

    #[test]
    fn host_params_normalize_values() {
        let params: HostParams = serde_json::from_str(
            r#"{"name":"srv1","max_check_attempts":3,"notes":null,"2d_coords":"1,2"}"#,
        )
        .unwrap();
        assert_eq!(params.get("max_check_attempts"), "3");
        assert_eq!(params.get("notes"), "");
        assert_eq!(params.get("2d_coords"), "1,2");
        assert_eq!(params.get("missing"), "");
    }

    #[test]
    fn macro_wire_names() {
        let m: HostMacro = serde_json::from_str(
            r#"{"macro name":"SNMPCOMMUNITY","macro value":"public","is_password":"0","description":"","source":"direct"}"#,
        )
        .unwrap();
        assert_eq!(m.name, "SNMPCOMMUNITY");
        assert!(m.is_direct());
    }
}
