// Shared transport for the Centreon web API.
//
// Builds the `reqwest::Client` (TLS policy, pool tuning, no redirect
// following) and executes a single request against the stored base URL.
// Everything Centreon-specific (login, CLAPI envelope) lives in `client`.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, redirect};
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;

/// TLS verification mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Accept any certificate (self-signed or internal deployments).
    DangerAcceptInvalid,
}

impl TlsMode {
    /// Map the provider's `allow_unverified_ssl` flag onto a mode.
    pub fn from_allow_unverified(allow: bool) -> Self {
        if allow {
            Self::DangerAcceptInvalid
        } else {
            Self::System
        }
    }
}

/// Transport configuration for building the HTTP client.
///
/// The timeouts and pool size are fixed per client; there is no per-call
/// override.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Dial timeout. reqwest has no separate TLS handshake timeout, so this
    /// bounds the handshake as well.
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub tcp_keepalive: Duration,
    pub max_idle_connections: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            connect_timeout: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(15),
            tcp_keepalive: Duration::from_secs(30),
            max_idle_connections: 10,
        }
    }
}

impl TransportConfig {
    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// Redirects are never followed: Centreon answers failed authentication
    /// with a redirect, and it must reach the caller as a non-2xx status.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("centreon-api/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect::Policy::none())
            .connect_timeout(self.connect_timeout)
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.max_idle_connections)
            .tcp_keepalive(self.tcp_keepalive);

        if self.tls == TlsMode::DangerAcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

/// Request body encodings understood by [`Transport::execute`].
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// URL-encoded form values.
    Form(Vec<(String, String)>),
    /// Any JSON value, sent pretty-printed.
    Json(serde_json::Value),
}

/// Parameters of one HTTP call.
#[derive(Debug)]
pub struct RequestInput<'a> {
    pub method: Method,
    pub path: &'a str,
    pub query: &'a [(&'a str, &'a str)],
    pub headers: &'a HeaderMap,
    pub body: Option<RequestBody>,
}

/// Generic HTTP executor bound to one base URL.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    pub fn new(base_url: Url, config: &TransportConfig) -> Result<Self, Error> {
        let http = config.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Wrap a pre-built `reqwest::Client` (tests, custom TLS roots).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The base URL with its path and query overwritten.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query);
        }
        url
    }

    /// Execute one request and return the raw response body.
    ///
    /// Provided headers replace any default set by the body encoding.
    /// Responses outside `[200, 300)` become [`Error::Api`] without looking
    /// at the body.
    pub async fn execute(&self, input: RequestInput<'_>) -> Result<Bytes, Error> {
        let url = self.endpoint(input.path, input.query);
        trace!(method = %input.method, %url, "sending request");

        let mut builder = self.http.request(input.method, url);
        builder = match input.body {
            Some(RequestBody::Form(values)) => builder.form(&values),
            Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec_pretty(&value)?),
            None => builder,
        };
        builder = builder.headers(input.headers.clone());

        let resp = builder.send().await.map_err(|source| Error::Transport {
            context: "Unable to execute http request",
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "request rejected");
            return Err(Error::Api { status });
        }

        resp.bytes().await.map_err(|source| Error::Transport {
            context: "Unable to read http response",
            source,
        })
    }
}
