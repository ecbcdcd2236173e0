use serde::{Deserialize, Serialize};

/// `centreon_command`: a check or notification command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResource {
    pub name: String,
    /// Centreon command type (`check`, `notif`, `misc`, `discovery`).
    #[serde(rename = "type")]
    pub command_type: String,
    pub line: String,
}
