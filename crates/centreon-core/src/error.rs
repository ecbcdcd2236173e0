// ── Core error types ──
//
// Errors surfaced by the resource adapters. API failures pass through
// unchanged; everything else is detected locally before or between
// remote calls.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Any failure of a CLAPI call, surfaced as-is.
    #[error(transparent)]
    Api(#[from] centreon_api::Error),

    // ── Schema errors ────────────────────────────────────────────────
    /// A desired-state field failed validation. No remote call was made.
    #[error("invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A JSON document could not be decoded into the resource's record.
    #[error("invalid {resource_type} state: {message}")]
    InvalidState {
        resource_type: &'static str,
        message: String,
    },

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    // ── Identity errors ──────────────────────────────────────────────
    #[error("unable to extract timeperiod name and exception days from id {id}")]
    InvalidId { id: String },

    /// A parent object required by the operation does not exist.
    #[error("{entity} with this {entity} {name} not found")]
    NotFound { entity: &'static str, name: String },

    // ── Remote state ─────────────────────────────────────────────────
    #[error("Unable to get parameters of host {host}")]
    MissingParameters { host: String },
}

impl CoreError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` when the API reported that an exact-name lookup failed.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(e) => e.is_not_found(),
            Self::NotFound { .. } => true,
            _ => false,
        }
    }
}
