// ── Resource records ──
//
// Strongly typed desired/current state for each resource type. JSON field
// names are the declarative schema names; missing optional fields take
// their schema default.

mod command;
mod host;
mod timeperiod;
mod timeperiod_exception;

pub use command::CommandResource;
pub use host::{HostResource, MacroSpec};
pub use timeperiod::TimeperiodResource;
pub use timeperiod_exception::{ExceptionId, TimeperiodExceptionResource};
