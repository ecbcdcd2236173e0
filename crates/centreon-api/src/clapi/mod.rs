// CLAPI domain clients
//
// One thin client per Centreon object type. Each verb maps onto a single
// CLAPI call whose `values` is a semicolon-joined positional field list in
// the column order the remote API expects.

use std::fmt;

use crate::error::Error;

pub mod commands;
pub mod hosts;
pub mod models;
pub mod timeperiods;

pub use commands::Commands;
pub use hosts::Hosts;
pub use timeperiods::Timeperiods;

/// CLAPI object type, sent as the `object` field of every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClapiObject {
    Command,
    Host,
    Timeperiod,
}

impl ClapiObject {
    /// Wire code of the object type.
    pub fn code(self) -> &'static str {
        match self {
            Self::Command => "CMD",
            Self::Host => "HOST",
            Self::Timeperiod => "TP",
        }
    }
}

impl fmt::Display for ClapiObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Command => "command",
            Self::Host => "host",
            Self::Timeperiod => "timeperiod",
        })
    }
}

/// Join positional fields with the CLAPI separator.
pub(crate) fn values(fields: &[&str]) -> String {
    fields.join(";")
}

/// Fail with a precondition error unless every named argument is non-empty.
///
/// `args` pairs an argument name with its value; the message lists all
/// names, matching how the API documents the call.
pub(crate) fn require(operation: &'static str, args: &[(&str, &str)]) -> Result<(), Error> {
    if args.iter().all(|(_, value)| !value.is_empty()) {
        return Ok(());
    }

    let names: Vec<&str> = args.iter().map(|(name, _)| *name).collect();
    let message = match names.as_slice() {
        [single] => format!("{single} parameter cannot be empty"),
        [init @ .., last] => format!("{} or {last} parameters cannot be empty", init.join(", ")),
        [] => "parameters cannot be empty".to_owned(),
    };
    Err(Error::precondition(operation, message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn values_are_semicolon_joined() {
        assert_eq!(values(&["srv1", "alias", ""]), "srv1;alias;");
    }

    #[test]
    fn require_accepts_filled_arguments() {
        assert!(require("Setparam", &[("name", "srv1"), ("param", "alias")]).is_ok());
    }

    #[test]
    fn require_lists_argument_names() {
        let err = require("Setparam", &[("name", "srv1"), ("param", "")]).unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(
            err.to_string(),
            "name or param parameters cannot be empty when calling Setparam"
        );

        let err = require("Get", &[("name", "")]).unwrap_err();
        assert_eq!(err.to_string(), "name parameter cannot be empty when calling Get");
    }

    #[test]
    fn object_codes() {
        assert_eq!(ClapiObject::Command.code(), "CMD");
        assert_eq!(ClapiObject::Host.code(), "HOST");
        assert_eq!(ClapiObject::Timeperiod.code(), "TP");
        assert_eq!(ClapiObject::Host.to_string(), "host");
    }
}
