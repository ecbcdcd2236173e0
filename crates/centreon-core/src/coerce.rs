// Wire coercions
//
// CLAPI stores every host parameter as a string. These functions are the
// only place typed field values are turned into wire strings and back.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

// ── Booleans ─────────────────────────────────────────────────────────

pub fn encode_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// `"1"` is true; anything else, including `""`, is false.
pub fn decode_bool(raw: &str) -> bool {
    raw == "1"
}

// ── Choices ──────────────────────────────────────────────────────────

/// Three-state setting: explicitly off, explicitly on, or inherited.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Choice {
    No,
    Yes,
    #[default]
    Default,
}

impl Choice {
    pub fn wire(self) -> &'static str {
        match self {
            Self::No => "0",
            Self::Yes => "1",
            Self::Default => "2",
        }
    }

    /// Inverse of [`wire`](Self::wire). Blank or unknown values read as
    /// `Default`, i.e. the host inherits the setting.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "0" => Self::No,
            "1" => Self::Yes,
            _ => Self::Default,
        }
    }
}

// ── Integers ─────────────────────────────────────────────────────────

/// Locally, -1 means "unset"; it is sent as an empty string.
pub const UNSET: i64 = -1;

pub fn encode_int(value: i64) -> String {
    if value == UNSET {
        String::new()
    } else {
        value.to_string()
    }
}

/// Blank or non-numeric values read as [`UNSET`].
pub fn decode_int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(UNSET)
}

// ── Option sets ──────────────────────────────────────────────────────

/// A named flag encoded as a single character in a comma-joined list.
///
/// Variants are declared in the wire order `o,d,u,r,f,s`, so iterating
/// a `BTreeSet` of them yields the encoding order.
pub trait OptionFlag: Copy + Ord + IntoEnumIterator {
    fn flag(self) -> char;
}

/// Host states that trigger a notification. There is no `up` flag; an
/// `o` read from the server is ignored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationOption {
    Down,
    Unreachable,
    Recovery,
    Flapping,
    DowntimeScheduled,
}

impl OptionFlag for NotificationOption {
    fn flag(self) -> char {
        match self {
            Self::Down => 'd',
            Self::Unreachable => 'u',
            Self::Recovery => 'r',
            Self::Flapping => 'f',
            Self::DowntimeScheduled => 's',
        }
    }
}

/// Host states that are logged whenever they are observed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StalkingOption {
    Up,
    Down,
    Unreachable,
}

impl OptionFlag for StalkingOption {
    fn flag(self) -> char {
        match self {
            Self::Up => 'o',
            Self::Down => 'd',
            Self::Unreachable => 'u',
        }
    }
}

/// Sentinel `notification_options` value meaning "never notify".
pub const NOTIFICATION_NONE: &str = "n";

pub fn encode_options<T: OptionFlag>(options: &BTreeSet<T>) -> String {
    let flags: Vec<String> = options.iter().map(|o| o.flag().to_string()).collect();
    flags.join(",")
}

/// Each flag is detected independently; unknown characters are ignored.
pub fn decode_options<T: OptionFlag>(raw: &str) -> BTreeSet<T> {
    T::iter().filter(|o| raw.contains(o.flag())).collect()
}
