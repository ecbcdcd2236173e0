// ── Resource adapters ──
//
// One adapter per declarative resource type. Each implements the
// create/read/update/delete/exists lifecycle by composing domain-client
// calls. Every step is awaited in order and the first error aborts the
// rest; a failed create or update may leave partially applied remote state.

use std::future::Future;

use centreon_api::CentreonClient;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CoreError;

mod command;
mod host;
mod timeperiod;
mod timeperiod_exception;

pub use command::CommandAdapter;
pub use host::HostAdapter;
pub use timeperiod::TimeperiodAdapter;
pub use timeperiod_exception::TimeperiodExceptionAdapter;

/// A record that exists remotely, with the identity it is addressed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Managed<T> {
    pub id: String,
    pub state: T,
}

impl<T> Managed<T> {
    pub fn new(id: impl Into<String>, state: T) -> Self {
        Self {
            id: id.into(),
            state,
        }
    }
}

/// Lifecycle contract of one resource type.
///
/// `read`, `create` and `update` return `None` when the record is gone
/// remotely; the caller must then drop its identity.
pub trait Resource: Send + Sync {
    type State: Serialize + DeserializeOwned + Send + Sync;

    /// Registered type name (e.g. `centreon_host`).
    const TYPE_NAME: &'static str;

    fn create(
        &self,
        client: &CentreonClient,
        desired: &Self::State,
    ) -> impl Future<Output = Result<Option<Managed<Self::State>>, CoreError>> + Send;

    fn read(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> impl Future<Output = Result<Option<Managed<Self::State>>, CoreError>> + Send;

    fn update(
        &self,
        client: &CentreonClient,
        id: &str,
        prior: &Self::State,
        desired: &Self::State,
    ) -> impl Future<Output = Result<Option<Managed<Self::State>>, CoreError>> + Send;

    /// Remove the record. Absent records are treated as already deleted.
    fn delete(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn exists(
        &self,
        client: &CentreonClient,
        id: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Treat an exact-name lookup miss as "gone" instead of an error.
pub(crate) fn absent_on_not_found<T>(
    result: Result<T, centreon_api::Error>,
) -> Result<Option<T>, CoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Remote elements that are not desired, in remote order.
pub(crate) fn stale<'a, I>(current: I, desired: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    current
        .into_iter()
        .filter(|c| !desired.contains(c))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_keeps_remote_only_elements() {
        let current = ["ops", "dba", "noc"];
        assert_eq!(stale(current, &["noc", "sre"]), vec!["ops", "dba"]);
        assert!(stale(current, &["ops", "dba", "noc"]).is_empty());
    }
}
