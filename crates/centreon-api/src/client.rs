// Centreon CLAPI client
//
// Wraps the generic `Transport` with the single configuration endpoint the
// Centreon web API exposes: every CLAPI verb is a POST of
// `{action, object, values}` to `/centreon/api/index.php`, preceded by a
// login. Entity-specific verbs live in `clapi/*` as thin domain clients.

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::clapi::models::ClapiResponse;
use crate::clapi::{ClapiObject, Commands, Hosts, Timeperiods};
use crate::error::Error;
use crate::session::Credentials;
use crate::transport::{RequestBody, RequestInput, Transport, TransportConfig};

/// Path of the Centreon REST entry point on the configured base URL.
pub const API_PATH: &str = "/centreon/api/index.php";

/// Header carrying the token obtained at login.
pub const AUTH_TOKEN_HEADER: &str = "centreon-auth-token";

const CONFIG_QUERY: &[(&str, &str)] = &[("action", "action"), ("object", "centreon_clapi")];

/// JSON body of one CLAPI call. `values` is omitted when empty.
#[derive(Debug, Serialize)]
struct ClapiRequest<'a> {
    action: &'a str,
    object: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<&'a str>,
}

/// Client for the Centreon configuration API.
///
/// Stateless between calls apart from the HTTP connection pool: each
/// configuration call performs its own login round trip first.
#[derive(Debug, Clone)]
pub struct CentreonClient {
    transport: Transport,
    credentials: Credentials,
}

impl CentreonClient {
    /// Create a client from a base URL (e.g. `https://centreon.example.com`).
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::new(base_url, transport)?,
            credentials,
        })
    }

    /// Parse `base_url` and create a client.
    pub fn from_url(
        base_url: &str,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Self::new(Url::parse(base_url)?, credentials, transport)
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            transport: Transport::with_client(http, base_url),
            credentials,
        }
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Domain clients ───────────────────────────────────────────────

    pub fn commands(&self) -> Commands<'_> {
        Commands::new(self)
    }

    pub fn hosts(&self) -> Hosts<'_> {
        Hosts::new(self)
    }

    pub fn timeperiods(&self) -> Timeperiods<'_> {
        Timeperiods::new(self)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Log in, then send one CLAPI call and return the raw body.
    pub(crate) async fn clapi(
        &self,
        action: &'static str,
        object: ClapiObject,
        values: &str,
    ) -> Result<Bytes, Error> {
        if action.is_empty() {
            return Err(Error::precondition(
                "clapi",
                "action is mandatory to send request to centreon API",
            ));
        }

        let headers = self.config_headers().await?;

        debug!(action, object = object.code(), "CLAPI call");

        let request = ClapiRequest {
            action,
            object: object.code(),
            values: (!values.is_empty()).then_some(values),
        };

        let input = RequestInput {
            method: Method::POST,
            path: API_PATH,
            query: CONFIG_QUERY,
            headers: &headers,
            body: Some(RequestBody::Json(serde_json::to_value(&request)?)),
        };

        self.transport.execute(input).await
    }

    /// Send a CLAPI call and decode the `{"result": [...]}` envelope.
    pub(crate) async fn clapi_list<T: DeserializeOwned>(
        &self,
        action: &'static str,
        object: ClapiObject,
        values: &str,
    ) -> Result<Vec<T>, Error> {
        let body = self.clapi(action, object, values).await?;

        let envelope: ClapiResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            let text = String::from_utf8_lossy(&body).into_owned();
            Error::Deserialization {
                message: format!("{action} {}: {e}", object.code()),
                body: text,
            }
        })?;

        Ok(envelope.result)
    }
}
