use thiserror::Error;

use crate::clapi::ClapiObject;

/// Top-level error type for the `centreon-api` crate.
///
/// Covers every failure mode of a CLAPI call: local argument checks,
/// authentication, transport, non-2xx responses, and response decoding.
/// `centreon-core` surfaces these unchanged.
#[derive(Debug, Error)]
pub enum Error {
    // ── Local checks ────────────────────────────────────────────────
    /// A required argument was empty. Detected before any request is sent.
    #[error("{message} when calling {operation}")]
    Precondition {
        operation: &'static str,
        message: String,
    },

    /// `get` found no record with the exact requested name.
    #[error("{object} {name} not found")]
    NotFound { object: ClapiObject, name: String },

    // ── Authentication ──────────────────────────────────────────────
    /// Login was rejected or returned no usable token.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, body read, etc.)
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// URL parsing error.
    #[error("URL not correctly formatted: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Any response outside `[200, 300)`, redirects included.
    #[error("API error: {status}")]
    Api { status: reqwest::StatusCode },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The request body could not be encoded.
    #[error("Unable to create JSON with this body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response decoded but did not have the expected shape.
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    pub(crate) fn precondition(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Precondition {
            operation,
            message: message.into(),
        }
    }

    /// Returns `true` if this is a "not found" error from `get`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the call was refused locally without touching the network.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition { .. })
    }

    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            _ => None,
        }
    }
}
