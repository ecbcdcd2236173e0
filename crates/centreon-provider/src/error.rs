//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use centreon_config::ConfigError;
use centreon_core::{ApiError, CoreError, Provider};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Centreon API")]
    #[diagnostic(
        code(centreon::connection_failed),
        help(
            "Check that the Centreon web server is reachable at the configured URL\n\
             (--url or CENTREON_URL). For self-signed certificates use --insecure (-k)."
        )
    )]
    ConnectionFailed { source: ApiError },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(centreon::auth_failed),
        help("Verify --user/--password or CENTREON_USER/CENTREON_PASSWORD.")
    )]
    AuthFailed { source: ApiError },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Unknown resource type '{name}'")]
    #[diagnostic(
        code(centreon::unknown_type),
        help("Registered types: {available}")
    )]
    UnknownResourceType { name: String, available: String },

    #[error("{entity} '{name}' not found")]
    #[diagnostic(code(centreon::not_found))]
    NotFound { entity: String, name: String },

    #[error(transparent)]
    #[diagnostic(code(centreon::api_error))]
    Api(ApiError),

    #[error(transparent)]
    #[diagnostic(code(centreon::provider))]
    Core(CoreError),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(centreon::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid {resource_type} document: {message}")]
    #[diagnostic(
        code(centreon::invalid_state),
        help("Check the document's field names and value types.")
    )]
    InvalidState {
        resource_type: String,
        message: String,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found")]
    #[diagnostic(code(centreon::no_config), help("Expected at: {path}"))]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(centreon::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Unable to read {path}")]
    #[diagnostic(code(centreon::io))]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(centreon::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::UnknownResourceType { .. }
            | Self::Validation { .. }
            | Self::InvalidState { .. }
            | Self::NoConfig { .. }
            | Self::Json(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library errors → CliError ────────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            e @ ApiError::Authentication { .. } => Self::AuthFailed { source: e },
            e @ (ApiError::Transport { .. } | ApiError::Tls(_)) => {
                Self::ConnectionFailed { source: e }
            }
            ApiError::NotFound { object, name } => Self::NotFound {
                entity: object.to_string(),
                name,
            },
            other => Self::Api(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(api) => api.into(),
            CoreError::Validation { field, reason } => Self::Validation { field, reason },
            CoreError::InvalidState {
                resource_type,
                message,
            } => Self::InvalidState {
                resource_type: resource_type.into(),
                message,
            },
            CoreError::UnknownResourceType(name) => Self::UnknownResourceType {
                name,
                available: Provider::resource_types().join(", "),
            },
            CoreError::NotFound { entity, name } => Self::NotFound {
                entity: entity.into(),
                name,
            },
            other => Self::Core(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other @ ConfigError::Figment(_) => Self::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_a_usage_error() {
        let err: CliError = CoreError::Validation {
            field: "address".into(),
            reason: "expected an IP address".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert_eq!(err.to_string(), "Invalid value for address: expected an IP address");
    }

    #[test]
    fn authentication_failures_map_to_auth_exit_code() {
        let err: CliError = CoreError::Api(ApiError::Authentication {
            message: "login failed (HTTP 401)".into(),
        })
        .into();
        assert!(matches!(err, CliError::AuthFailed { .. }));
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn missing_parent_is_not_found() {
        let err: CliError = CoreError::NotFound {
            entity: "timeperiod",
            name: "workhours".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "timeperiod 'workhours' not found");
    }

    #[test]
    fn unknown_type_lists_registered_types() {
        let err: CliError = CoreError::UnknownResourceType("centreon_service".into()).into();
        let CliError::UnknownResourceType { available, .. } = &err else {
            panic!("unexpected variant: {err:?}");
        };
        assert!(available.contains("centreon_host"));
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
