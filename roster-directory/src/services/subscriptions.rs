use std::sync::Arc;

use async_trait::async_trait;
use roster_core::errors::{RosterError, RosterResult};
use roster_core::{PageResult, RosterService, ServiceCapabilities};
use roster_query::Collation;

use super::memory::MemoryAdapter;
use super::params::{Paging, SubscriptionParams};
use crate::models::Subscription;

/// Subscriptions of one client at a time; the scope comes from
/// `SubscriptionParams::client_id` and is never taken from the payload.
pub struct SubscriptionsService {
    pub adapter: MemoryAdapter<Subscription>,
}

impl SubscriptionsService {
    pub fn new(
        rows: Vec<Subscription>,
        capabilities: ServiceCapabilities,
        paging: Paging,
        collation: Arc<Collation>,
    ) -> Self {
        Self {
            adapter: MemoryAdapter::new(
                rows,
                "Subscription not found",
                "Subscription validation failed",
                capabilities,
                paging,
                collation,
            ),
        }
    }

    async fn owned(&self, id: &str, client_id: &str) -> RosterResult<Subscription> {
        let found = self.adapter._get(id).await?;
        if found.client_id != client_id {
            return Err(RosterError::not_found(format!("Subscription not found: {id}")).into_anyhow());
        }
        Ok(found)
    }
}

#[async_trait]
impl RosterService<Subscription, SubscriptionParams> for SubscriptionsService {
    fn capabilities(&self) -> ServiceCapabilities {
        self.adapter.capabilities.clone()
    }

    async fn find(&self, params: SubscriptionParams) -> RosterResult<PageResult<Subscription>> {
        let mut q = params.list.query;
        q.filter.filters.insert("clientId".to_string(), params.client_id);
        self.adapter._find(q).await
    }

    async fn get(&self, id: &str, params: SubscriptionParams) -> RosterResult<Subscription> {
        self.owned(id, &params.client_id).await
    }

    async fn create(
        &self,
        mut data: Subscription,
        params: SubscriptionParams,
    ) -> RosterResult<Subscription> {
        data.client_id = params.client_id;
        self.adapter._create(data).await
    }

    async fn update(
        &self,
        id: &str,
        mut data: Subscription,
        params: SubscriptionParams,
    ) -> RosterResult<Subscription> {
        data.client_id = params.client_id.clone();
        let client_id = params.client_id;
        self.adapter
            ._update_if(id, data, move |row| row.client_id == client_id)
            .await
    }

    async fn remove(&self, id: &str, params: SubscriptionParams) -> RosterResult<Subscription> {
        let client_id = params.client_id;
        self.adapter
            ._remove_if(id, move |row| row.client_id == client_id)
            .await
    }
}
