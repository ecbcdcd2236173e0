// ── Runtime connection configuration ──
//
// Describes how to reach one Centreon web instance. Never touches disk:
// `centreon-config` resolves files and environment and hands a
// `ProviderConfig` in.

use centreon_api::{Credentials, TlsMode, TransportConfig};
use secrecy::SecretString;
use url::Url;

/// Connection settings for one Centreon instance.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the web application (e.g. `https://centreon.example.com`).
    pub url: Url,
    /// Skip TLS certificate verification.
    pub allow_unverified_ssl: bool,
    pub user: String,
    pub password: SecretString,
}

impl ProviderConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.user.clone(), self.password.clone())
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig::default().with_tls(TlsMode::from_allow_unverified(self.allow_unverified_ssl))
    }
}
