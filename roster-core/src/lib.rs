//! roster-core: shared vocabulary for the Roster admin directory.

pub mod config;
pub mod errors;
pub mod page;
pub mod service;

pub use config::{RosterConfig, RosterConfigSnapshot};
pub use errors::{ErrorKind, RosterError, RosterResult};
pub use page::PageResult;
pub use service::{RosterService, ServiceCapabilities, ServiceMethodKind};
