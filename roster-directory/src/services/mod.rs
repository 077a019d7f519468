pub mod clients;
pub mod employees;
pub mod memory;
pub mod params;
pub mod subscriptions;

pub use clients::ClientsService;
pub use employees::EmployeesService;
pub use memory::MemoryAdapter;
pub use params::{ListParams, Paging, SubscriptionParams};
pub use subscriptions::SubscriptionsService;
