// centreon-core: Typed resource records and reconciliation adapters on top of centreon-api.

pub mod coerce;
pub mod config;
pub mod error;
pub mod model;
pub mod params;
pub mod provider;
pub mod resource;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use centreon_api::Error as ApiError;
pub use coerce::{Choice, NotificationOption, StalkingOption};
pub use config::ProviderConfig;
pub use error::CoreError;
pub use model::{
    CommandResource, ExceptionId, HostResource, MacroSpec, TimeperiodExceptionResource,
    TimeperiodResource,
};
pub use provider::{Provider, ResourceKind};
pub use resource::{
    CommandAdapter, HostAdapter, Managed, Resource, TimeperiodAdapter, TimeperiodExceptionAdapter,
};
