// ── Provider registry ──
//
// Dispatches lifecycle calls by resource type name over JSON documents.
// Documents are decoded into the adapter's typed record here and nowhere
// else.

use centreon_api::CentreonClient;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::CoreError;
use crate::resource::{
    CommandAdapter, HostAdapter, Managed, Resource, TimeperiodAdapter, TimeperiodExceptionAdapter,
};

/// Registered resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum ResourceKind {
    #[strum(serialize = "centreon_command")]
    Command,
    #[strum(serialize = "centreon_timeperiod")]
    Timeperiod,
    #[strum(serialize = "centreon_host")]
    Host,
    #[strum(serialize = "centreon_timeperiod_exception")]
    TimeperiodException,
}

impl ResourceKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Command => CommandAdapter::TYPE_NAME,
            Self::Timeperiod => TimeperiodAdapter::TYPE_NAME,
            Self::Host => HostAdapter::TYPE_NAME,
            Self::TimeperiodException => TimeperiodExceptionAdapter::TYPE_NAME,
        }
    }

    /// Resolve a registered type name.
    pub fn from_type_name(name: &str) -> Result<Self, CoreError> {
        name.parse()
            .map_err(|_| CoreError::UnknownResourceType(name.to_owned()))
    }
}

/// Entry point used by drivers: a configured client plus the adapters.
#[derive(Debug, Clone)]
pub struct Provider {
    client: CentreonClient,
}

impl Provider {
    /// Build the HTTP client from connection settings. No request is sent.
    pub fn connect(config: &ProviderConfig) -> Result<Self, CoreError> {
        let client = CentreonClient::new(
            config.url.clone(),
            config.credentials(),
            &config.transport(),
        )?;
        Ok(Self { client })
    }

    pub fn with_client(client: CentreonClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &CentreonClient {
        &self.client
    }

    /// Names of every registered resource type.
    pub fn resource_types() -> Vec<&'static str> {
        ResourceKind::iter().map(|k| k.type_name()).collect()
    }

    pub async fn create(
        &self,
        kind: ResourceKind,
        desired: Value,
    ) -> Result<Option<Managed<Value>>, CoreError> {
        debug!(%kind, "create");
        match kind {
            ResourceKind::Command => create(&CommandAdapter, &self.client, desired).await,
            ResourceKind::Timeperiod => create(&TimeperiodAdapter, &self.client, desired).await,
            ResourceKind::Host => create(&HostAdapter, &self.client, desired).await,
            ResourceKind::TimeperiodException => {
                create(&TimeperiodExceptionAdapter, &self.client, desired).await
            }
        }
    }

    pub async fn read(
        &self,
        kind: ResourceKind,
        id: &str,
    ) -> Result<Option<Managed<Value>>, CoreError> {
        debug!(%kind, id, "read");
        match kind {
            ResourceKind::Command => read(&CommandAdapter, &self.client, id).await,
            ResourceKind::Timeperiod => read(&TimeperiodAdapter, &self.client, id).await,
            ResourceKind::Host => read(&HostAdapter, &self.client, id).await,
            ResourceKind::TimeperiodException => {
                read(&TimeperiodExceptionAdapter, &self.client, id).await
            }
        }
    }

    pub async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        prior: Value,
        desired: Value,
    ) -> Result<Option<Managed<Value>>, CoreError> {
        debug!(%kind, id, "update");
        match kind {
            ResourceKind::Command => update(&CommandAdapter, &self.client, id, prior, desired).await,
            ResourceKind::Timeperiod => {
                update(&TimeperiodAdapter, &self.client, id, prior, desired).await
            }
            ResourceKind::Host => update(&HostAdapter, &self.client, id, prior, desired).await,
            ResourceKind::TimeperiodException => {
                update(&TimeperiodExceptionAdapter, &self.client, id, prior, desired).await
            }
        }
    }

    pub async fn delete(&self, kind: ResourceKind, id: &str) -> Result<(), CoreError> {
        debug!(%kind, id, "delete");
        match kind {
            ResourceKind::Command => CommandAdapter.delete(&self.client, id).await,
            ResourceKind::Timeperiod => TimeperiodAdapter.delete(&self.client, id).await,
            ResourceKind::Host => HostAdapter.delete(&self.client, id).await,
            ResourceKind::TimeperiodException => {
                TimeperiodExceptionAdapter.delete(&self.client, id).await
            }
        }
    }

    pub async fn exists(&self, kind: ResourceKind, id: &str) -> Result<bool, CoreError> {
        debug!(%kind, id, "exists");
        match kind {
            ResourceKind::Command => CommandAdapter.exists(&self.client, id).await,
            ResourceKind::Timeperiod => TimeperiodAdapter.exists(&self.client, id).await,
            ResourceKind::Host => HostAdapter.exists(&self.client, id).await,
            ResourceKind::TimeperiodException => {
                TimeperiodExceptionAdapter.exists(&self.client, id).await
            }
        }
    }
}

// ── JSON boundary ────────────────────────────────────────────────────

fn decode<R: Resource>(document: Value) -> Result<R::State, CoreError> {
    serde_json::from_value(document).map_err(|e| CoreError::InvalidState {
        resource_type: R::TYPE_NAME,
        message: e.to_string(),
    })
}

fn encode<R: Resource>(
    managed: Option<Managed<R::State>>,
) -> Result<Option<Managed<Value>>, CoreError> {
    managed
        .map(|m| -> Result<Managed<Value>, CoreError> {
            let state = serde_json::to_value(&m.state).map_err(|e| CoreError::InvalidState {
                resource_type: R::TYPE_NAME,
                message: e.to_string(),
            })?;
            Ok(Managed::new(m.id, state))
        })
        .transpose()
}

async fn create<R: Resource>(
    adapter: &R,
    client: &CentreonClient,
    desired: Value,
) -> Result<Option<Managed<Value>>, CoreError> {
    let desired = decode::<R>(desired)?;
    encode::<R>(adapter.create(client, &desired).await?)
}

async fn read<R: Resource>(
    adapter: &R,
    client: &CentreonClient,
    id: &str,
) -> Result<Option<Managed<Value>>, CoreError> {
    encode::<R>(adapter.read(client, id).await?)
}

async fn update<R: Resource>(
    adapter: &R,
    client: &CentreonClient,
    id: &str,
    prior: Value,
    desired: Value,
) -> Result<Option<Managed<Value>>, CoreError> {
    let prior = decode::<R>(prior)?;
    let desired = decode::<R>(desired)?;
    encode::<R>(adapter.update(client, id, &prior, &desired).await?)
}
