use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use roster_core::errors::RosterResult;
use roster_core::{RosterConfig, RosterConfigSnapshot, ServiceCapabilities};
use roster_query::{Collation, DEFAULT_LOCALE, DEFAULT_PAGE_SIZE};
use tracing::info;

use crate::debounce::{SearchDebouncer, DEFAULT_DEBOUNCE_MS};
use crate::models::{Client, Employee, Subscription};
use crate::seed;
use crate::services::params::DEFAULT_MAX_PAGE_SIZE;
use crate::services::{ClientsService, EmployeesService, Paging, SubscriptionsService};

struct DirectoryInner {
    config: RwLock<RosterConfig>,
    paging: Paging,
    clients: Arc<ClientsService>,
    employees: Arc<EmployeesService>,
    subscriptions: Arc<SubscriptionsService>,
}

/// The admin directory: configuration plus the clients, employees and
/// subscriptions services.
///
/// Services read their settings once, when the directory is built. Cloning
/// is cheap and shares the same stores.
#[derive(Clone)]
pub struct Directory {
    inner: Arc<DirectoryInner>,
}

fn apply_defaults(config: &mut RosterConfig) {
    config.set_default("paginate.default", DEFAULT_PAGE_SIZE.to_string());
    config.set_default("paginate.max", DEFAULT_MAX_PAGE_SIZE.to_string());
    config.set_default("search.debounce_ms", DEFAULT_DEBOUNCE_MS.to_string());
    config.set_default("collation.locale", DEFAULT_LOCALE);
    config.set_default("directory.read_only", "false");
}

impl Directory {
    /// Seeded directory with default settings.
    pub fn new() -> RosterResult<Self> {
        Self::with_config(RosterConfig::new())
    }

    /// Seeded directory; keys already in `config` win over the defaults.
    pub fn with_config(config: RosterConfig) -> RosterResult<Self> {
        Self::with_records(config, seed::clients(), seed::employees(), seed::subscriptions())
    }

    pub fn with_records(
        mut config: RosterConfig,
        clients: Vec<Client>,
        employees: Vec<Employee>,
        subscriptions: Vec<Subscription>,
    ) -> RosterResult<Self> {
        apply_defaults(&mut config);
        let snapshot = config.snapshot();

        let locale = snapshot
            .get_string("collation.locale")
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let collation = Arc::new(Collation::new(&locale)?);
        let paging = Paging::from_config(&snapshot)?;
        let capabilities = if snapshot.get_bool("directory.read_only").unwrap_or(false) {
            ServiceCapabilities::read_only()
        } else {
            ServiceCapabilities::standard_crud()
        };

        info!(
            clients = clients.len(),
            employees = employees.len(),
            subscriptions = subscriptions.len(),
            locale = collation.locale(),
            page_size = paging.default,
            max_page_size = paging.max,
            "directory ready"
        );

        Ok(Self {
            inner: Arc::new(DirectoryInner {
                clients: Arc::new(ClientsService::new(
                    clients,
                    capabilities.clone(),
                    paging,
                    collation.clone(),
                )),
                employees: Arc::new(EmployeesService::new(
                    employees,
                    capabilities.clone(),
                    paging,
                    collation.clone(),
                )),
                subscriptions: Arc::new(SubscriptionsService::new(
                    subscriptions,
                    capabilities,
                    paging,
                    collation,
                )),
                config: RwLock::new(config),
                paging,
            }),
        })
    }

    pub fn clients(&self) -> Arc<ClientsService> {
        Arc::clone(&self.inner.clients)
    }

    pub fn employees(&self) -> Arc<EmployeesService> {
        Arc::clone(&self.inner.employees)
    }

    pub fn subscriptions(&self) -> Arc<SubscriptionsService> {
        Arc::clone(&self.inner.subscriptions)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.config.read().get(key).map(str::to_string)
    }

    pub fn config_snapshot(&self) -> RosterConfigSnapshot {
        self.inner.config.read().snapshot()
    }

    /// Page-size settings the services were built with.
    pub fn paging(&self) -> Paging {
        self.inner.paging
    }

    /// A fresh debouncer for one search box.
    pub fn debouncer(&self) -> SearchDebouncer {
        let ms = self
            .config_snapshot()
            .get_u64("search.debounce_ms")
            .unwrap_or(DEFAULT_DEBOUNCE_MS);
        SearchDebouncer::new(Duration::from_millis(ms))
    }
}
