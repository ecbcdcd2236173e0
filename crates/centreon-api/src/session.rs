// Centreon API authentication
//
// Form-encoded login against the API endpoint. The returned `authToken`
// is attached as the `centreon-auth-token` header on the configuration
// call that triggered the login. Nothing is cached: every CLAPI call logs
// in again, so token lifetime on the server never matters.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::client::{API_PATH, AUTH_TOKEN_HEADER, CentreonClient};
use crate::error::Error;
use crate::transport::{RequestBody, RequestInput};

/// Username/password pair used for every login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "authToken", default)]
    auth_token: String,
}

impl CentreonClient {
    /// Authenticate and return a fresh token.
    ///
    /// `POST {API_PATH}?action=authenticate` with `username`/`password`
    /// as form values; the response is `{"authToken": "..."}`.
    pub async fn login(&self) -> Result<SecretString, Error> {
        let credentials = self.credentials();
        debug!(user = %credentials.username, "logging in");

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; param=value"),
        );

        let input = RequestInput {
            method: Method::POST,
            path: API_PATH,
            query: &[("action", "authenticate")],
            headers: &headers,
            body: Some(RequestBody::Form(vec![
                ("username".into(), credentials.username.clone()),
                ("password".into(), credentials.password.expose_secret().to_owned()),
            ])),
        };

        let body = self
            .transport()
            .execute(input)
            .await
            .map_err(|e| match e {
                Error::Api { status } => Error::Authentication {
                    message: format!("login failed (HTTP {status})"),
                },
                other => other,
            })?;

        let login: LoginResponse =
            serde_json::from_slice(&body).map_err(|e| Error::Deserialization {
                message: format!("invalid login response: {e}"),
                body: String::from_utf8_lossy(&body).into_owned(),
            })?;

        if login.auth_token.is_empty() {
            return Err(Error::Authentication {
                message: "login response carried no authToken".into(),
            });
        }

        debug!("login successful");
        Ok(SecretString::from(login.auth_token))
    }

    /// Headers for one configuration call, carrying a freshly obtained token.
    pub(crate) async fn config_headers(&self) -> Result<HeaderMap, Error> {
        let token = self.login().await?;

        let mut token_value =
            HeaderValue::from_str(token.expose_secret()).map_err(|_| Error::Authentication {
                message: "authToken is not a valid header value".into(),
            })?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTH_TOKEN_HEADER, token_value);
        Ok(headers)
    }
}
