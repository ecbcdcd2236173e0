//! CLI configuration: flag overrides on top of `centreon_config` loading.

use centreon_config::{Overrides, load};
use centreon_core::ProviderConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Connection flags that were actually given on the command line.
fn overrides(global: &GlobalOpts) -> Overrides {
    Overrides {
        url: global.url.clone(),
        allow_unverified_ssl: global.insecure.then_some(true),
        user: global.user.clone(),
        password: global.password.clone(),
    }
}

/// Resolve connection settings: defaults, config file, `CENTREON_*`
/// environment, then flags.
///
/// The default config file is optional; an explicit `--config` must exist.
pub fn resolve(global: &GlobalOpts) -> Result<ProviderConfig, CliError> {
    if let Some(path) = global.config.as_deref() {
        if !path.is_file() {
            return Err(CliError::NoConfig {
                path: path.display().to_string(),
            });
        }
    }

    let config = load(global.config.as_deref(), &overrides(global))?;
    tracing::debug!(url = %config.url, user = %config.user, "resolved connection settings");
    Ok(config.into_provider_config()?)
}
