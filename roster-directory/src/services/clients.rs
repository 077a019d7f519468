use std::sync::Arc;

use async_trait::async_trait;
use roster_core::errors::RosterResult;
use roster_core::{PageResult, RosterService, ServiceCapabilities};
use roster_query::Collation;

use super::memory::MemoryAdapter;
use super::params::{ListParams, Paging};
use crate::models::Client;

pub struct ClientsService {
    pub adapter: MemoryAdapter<Client>,
}

impl ClientsService {
    pub fn new(
        rows: Vec<Client>,
        capabilities: ServiceCapabilities,
        paging: Paging,
        collation: Arc<Collation>,
    ) -> Self {
        Self {
            adapter: MemoryAdapter::new(
                rows,
                "Client not found",
                "Client validation failed",
                capabilities,
                paging,
                collation,
            ),
        }
    }
}

#[async_trait]
impl RosterService<Client, ListParams> for ClientsService {
    fn capabilities(&self) -> ServiceCapabilities {
        self.adapter.capabilities.clone()
    }

    async fn find(&self, params: ListParams) -> RosterResult<PageResult<Client>> {
        self.adapter._find(params.query).await
    }

    async fn get(&self, id: &str, _params: ListParams) -> RosterResult<Client> {
        self.adapter._get(id).await
    }

    async fn create(&self, data: Client, _params: ListParams) -> RosterResult<Client> {
        self.adapter._create(data).await
    }

    async fn update(&self, id: &str, data: Client, _params: ListParams) -> RosterResult<Client> {
        self.adapter._update(id, data).await
    }

    async fn remove(&self, id: &str, _params: ListParams) -> RosterResult<Client> {
        self.adapter._remove(id).await
    }
}
