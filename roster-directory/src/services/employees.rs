use std::sync::Arc;

use async_trait::async_trait;
use roster_core::errors::RosterResult;
use roster_core::{PageResult, RosterService, ServiceCapabilities};
use roster_query::Collation;

use super::memory::MemoryAdapter;
use super::params::{ListParams, Paging};
use crate::models::Employee;

pub struct EmployeesService {
    pub adapter: MemoryAdapter<Employee>,
}

impl EmployeesService {
    pub fn new(
        rows: Vec<Employee>,
        capabilities: ServiceCapabilities,
        paging: Paging,
        collation: Arc<Collation>,
    ) -> Self {
        Self {
            adapter: MemoryAdapter::new(
                rows,
                "Employee not found",
                "Employee validation failed",
                capabilities,
                paging,
                collation,
            ),
        }
    }
}

#[async_trait]
impl RosterService<Employee, ListParams> for EmployeesService {
    fn capabilities(&self) -> ServiceCapabilities {
        self.adapter.capabilities.clone()
    }

    async fn find(&self, params: ListParams) -> RosterResult<PageResult<Employee>> {
        self.adapter._find(params.query).await
    }

    async fn get(&self, id: &str, _params: ListParams) -> RosterResult<Employee> {
        self.adapter._get(id).await
    }

    async fn create(&self, data: Employee, _params: ListParams) -> RosterResult<Employee> {
        self.adapter._create(data).await
    }

    async fn update(&self, id: &str, data: Employee, _params: ListParams) -> RosterResult<Employee> {
        self.adapter._update(id, data).await
    }

    async fn remove(&self, id: &str, _params: ListParams) -> RosterResult<Employee> {
        self.adapter._remove(id).await
    }
}
