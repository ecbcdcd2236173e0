// centreon-api: Async Rust client for the Centreon web configuration API (CLAPI)

pub mod clapi;
pub mod client;
pub mod error;
pub mod session;
pub mod transport;

pub use clapi::models;
pub use clapi::{ClapiObject, Commands, Hosts, Timeperiods};
pub use client::CentreonClient;
pub use error::Error;
pub use session::Credentials;
pub use transport::{TlsMode, TransportConfig};
