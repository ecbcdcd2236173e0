// Host parameter table
//
// Every scalar host field that is written with `setparam` and read back
// with `getparam`, with its wire name and coercion. Create walks the whole
// table; update walks it and only sends what changed; read requests every
// entry that `show` does not already return.

use crate::coerce::{Choice, decode_bool, decode_int, encode_bool, encode_int};
use crate::model::HostResource;

/// Coercion family of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Sent as-is.
    Raw,
    /// `"1"` / `"0"`.
    Bool,
    /// `"0"` / `"1"` / `"2"` for no / yes / default.
    Choice,
    /// Decimal, or `""` for the -1 sentinel.
    Int,
}

/// One row of the host parameter table.
#[derive(Clone, Copy)]
pub struct HostParam {
    /// Field name in [`HostResource`] and the declarative schema.
    pub field: &'static str,
    /// Parameter name understood by CLAPI `setparam`/`getparam`.
    pub wire: &'static str,
    pub kind: ParamKind,
    /// Part of the record returned by `show`; not fetched with `getparam`.
    pub primary: bool,
    encode: fn(&HostResource) -> String,
    decode: fn(&mut HostResource, &str),
}

impl HostParam {
    pub fn encode(&self, host: &HostResource) -> String {
        (self.encode)(host)
    }

    pub fn decode(&self, host: &mut HostResource, raw: &str) {
        (self.decode)(host, raw);
    }

    /// Whether the wire value differs between two records.
    pub fn changed(&self, prior: &HostResource, desired: &HostResource) -> bool {
        self.encode(prior) != self.encode(desired)
    }
}

impl std::fmt::Debug for HostParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostParam")
            .field("field", &self.field)
            .field("wire", &self.wire)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Typed field value with its wire coercion.
trait ParamValue: Sized {
    fn to_wire(&self) -> String;
    fn from_wire(raw: &str) -> Self;
}

impl ParamValue for String {
    fn to_wire(&self) -> String {
        self.clone()
    }
    fn from_wire(raw: &str) -> Self {
        raw.to_owned()
    }
}

impl ParamValue for bool {
    fn to_wire(&self) -> String {
        encode_bool(*self).to_owned()
    }
    fn from_wire(raw: &str) -> Self {
        decode_bool(raw)
    }
}

impl ParamValue for Choice {
    fn to_wire(&self) -> String {
        self.wire().to_owned()
    }
    fn from_wire(raw: &str) -> Self {
        Choice::from_wire(raw)
    }
}

impl ParamValue for i64 {
    fn to_wire(&self) -> String {
        encode_int(*self)
    }
    fn from_wire(raw: &str) -> Self {
        decode_int(raw)
    }
}

macro_rules! host_params {
    (@wire $field:ident) => { stringify!($field) };
    (@wire $field:ident $wire:literal) => { $wire };
    (@primary) => { false };
    (@primary primary) => { true };
    ($( $field:ident $(as $wire:literal)? : $kind:ident $([$primary:ident])? ),* $(,)?) => {
        /// Scalar host parameters. Identity fields come first so a rename
        /// is applied before any other parameter is addressed by name.
        pub static HOST_PARAMS: &[HostParam] = &[
            $(
                HostParam {
                    field: stringify!($field),
                    wire: host_params!(@wire $field $($wire)?),
                    kind: ParamKind::$kind,
                    primary: host_params!(@primary $($primary)?),
                    encode: |h| ParamValue::to_wire(&h.$field),
                    decode: |h, raw| h.$field = ParamValue::from_wire(raw),
                },
            )*
        ];
    };
}

host_params! {
    name: Raw [primary],
    alias: Raw [primary],
    address: Raw [primary],
    activate: Bool [primary],
    acknowledgement_timeout: Int,
    action_url: Raw,
    active_checks_enabled: Choice,
    cg_additive_inheritance: Bool,
    check_command: Raw,
    check_command_arguments: Raw,
    check_freshness: Choice,
    check_interval: Int,
    check_period: Raw,
    contact_additive_inheritance: Bool,
    coords2d as "2d_coords": Raw,
    coords3d as "3d_coords": Raw,
    event_handler: Raw,
    event_handler_arguments: Raw,
    event_handler_enabled: Choice,
    first_notification_delay: Int,
    flap_detection_enabled: Choice,
    flap_detection_options: Raw,
    freshness_threshold: Int,
    high_flap_threshold: Int,
    icon_image: Raw,
    icon_image_alt: Raw,
    low_flap_threshold: Int,
    max_check_attempts: Int,
    notes: Raw,
    notes_url: Raw,
    notification_interval: Int,
    notification_period: Raw,
    notifications_enabled: Choice,
    obsess_over_host: Choice,
    passive_checks_enabled: Choice,
    process_perf_data: Raw,
    recovery_notification_delay: Int,
    retain_nonstatus_information: Choice,
    retain_status_information: Choice,
    retry_check_interval: Int,
    snmp_community: Raw,
    snmp_version: Raw,
    statusmap_image: Raw,
    timezone: Raw,
}

/// Option-set parameters, written outside the table.
pub const NOTIFICATION_OPTIONS: &str = "notification_options";
pub const STALKING_OPTIONS: &str = "stalking_options";

/// Parameters fetched by the batched `getparam` on read.
pub fn read_params() -> Vec<&'static str> {
    HOST_PARAMS
        .iter()
        .filter(|p| !p.primary)
        .map(|p| p.wire)
        .chain([NOTIFICATION_OPTIONS, STALKING_OPTIONS])
        .collect()
}
