//! # roster-directory
//!
//! The Roster admin directory: client and employee tables backed by seeded
//! in-memory services, plus per-client subscriptions.
//!
//! ```rust,no_run
//! use roster_core::RosterService;
//! use roster_directory::{Directory, ListParams};
//! use roster_query::{FilterQuery, ListQuery};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let dir = Directory::new()?;
//! let page = dir
//!     .clients()
//!     .find(ListParams::from(ListQuery {
//!         filter: FilterQuery::new().search("madrid"),
//!         ..ListQuery::default()
//!     }))
//!     .await?;
//! assert_eq!(page.total_items, 2);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod debounce;
pub mod forms;
pub mod models;
pub mod seed;
pub mod services;

pub use app::Directory;
pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE_MS};
pub use forms::{client_from_form, employee_from_form, subscription_from_form};
pub use models::{
    Client, ClientStatus, Employee, EmployeeStatus, Record, Subscription, SubscriptionStatus,
};
pub use services::{
    ClientsService, EmployeesService, ListParams, MemoryAdapter, Paging, SubscriptionParams,
    SubscriptionsService,
};
