mod client;
mod employee;
mod subscription;

pub use client::{Client, ClientStatus};
pub use employee::{Employee, EmployeeStatus};
pub use subscription::{Subscription, SubscriptionStatus};

use roster_query::Queryable;

/// A storable row: queryable, validatable and identified by a stable id.
pub trait Record: Queryable + validator::Validate + Clone + Send + Sync + 'static {
    /// Service name used in logs and error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

pub(crate) fn default_true() -> bool {
    true
}
