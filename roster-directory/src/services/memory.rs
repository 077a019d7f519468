use std::sync::Arc;

use roster_core::errors::{RosterError, RosterResult};
use roster_core::{PageResult, ServiceCapabilities, ServiceMethodKind};
use roster_query::{query, Collation, ListQuery};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use super::params::Paging;
use crate::models::Record;

/// Ordered in-memory store behind one service.
///
/// Rows keep insertion order, which is the order the pipeline sees when no
/// sort is requested. Writes check capabilities first and validate second,
/// so a read-only service never reports field errors.
pub struct MemoryAdapter<R: Record> {
    rows: RwLock<Vec<R>>,
    pub not_found_prefix: &'static str,
    pub invalid_message: &'static str,
    pub capabilities: ServiceCapabilities,
    pub paging: Paging,
    collation: Arc<Collation>,
}

impl<R: Record> MemoryAdapter<R> {
    pub fn new(
        rows: Vec<R>,
        not_found_prefix: &'static str,
        invalid_message: &'static str,
        capabilities: ServiceCapabilities,
        paging: Paging,
        collation: Arc<Collation>,
    ) -> Self {
        Self {
            rows: RwLock::new(rows),
            not_found_prefix,
            invalid_message,
            capabilities,
            paging,
            collation,
        }
    }

    fn allow(&self, method: ServiceMethodKind) -> RosterResult<()> {
        self.capabilities.ensure(R::KIND, method).inspect_err(|_| {
            warn!(service = R::KIND, method = method.as_str(), "rejected call");
        })
    }

    fn not_found(&self, id: &str) -> anyhow::Error {
        RosterError::not_found(format!("{}: {id}", self.not_found_prefix)).into_anyhow()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    pub async fn _find(&self, mut q: ListQuery) -> RosterResult<PageResult<R>> {
        self.allow(ServiceMethodKind::Find)?;

        if q.page_size > self.paging.max {
            warn!(
                service = R::KIND,
                requested = q.page_size,
                max = self.paging.max,
                "page size clamped"
            );
            q.page_size = self.paging.max;
        }

        let rows = self.rows.read().await;
        query(rows.as_slice(), &q, &self.collation)
    }

    pub async fn _get(&self, id: &str) -> RosterResult<R> {
        self.allow(ServiceMethodKind::Get)?;

        let rows = self.rows.read().await;
        rows.iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    pub async fn _create(&self, mut data: R) -> RosterResult<R> {
        self.allow(ServiceMethodKind::Create)?;
        roster_schema::check(&data, self.invalid_message)?;

        if data.id().is_empty() {
            data.set_id(Uuid::new_v4().to_string());
        }

        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id() == data.id()) {
            return Err(
                RosterError::conflict(format!("{} already exists: {}", R::KIND, data.id()))
                    .into_anyhow(),
            );
        }

        rows.push(data.clone());
        info!(service = R::KIND, id = data.id(), "created");
        Ok(data)
    }

    pub async fn _update(&self, id: &str, data: R) -> RosterResult<R> {
        self._update_if(id, data, |_| true).await
    }

    /// Replace row `id` if `owns` accepts the stored row; a rejected row
    /// reads as missing. The check and the write share one write guard.
    pub async fn _update_if<F>(&self, id: &str, mut data: R, owns: F) -> RosterResult<R>
    where
        F: Fn(&R) -> bool + Send,
    {
        self.allow(ServiceMethodKind::Update)?;
        roster_schema::check(&data, self.invalid_message)?;

        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.id() == id && owns(&**r))
            .ok_or_else(|| self.not_found(id))?;

        data.set_id(id.to_string());
        *slot = data.clone();
        info!(service = R::KIND, id, "updated");
        Ok(data)
    }

    pub async fn _remove(&self, id: &str) -> RosterResult<R> {
        self._remove_if(id, |_| true).await
    }

    /// Remove row `id` if `owns` accepts it, under one write guard.
    pub async fn _remove_if<F>(&self, id: &str, owns: F) -> RosterResult<R>
    where
        F: Fn(&R) -> bool + Send,
    {
        self.allow(ServiceMethodKind::Remove)?;

        let mut rows = self.rows.write().await;
        let idx = rows
            .iter()
            .position(|r| r.id() == id && owns(r))
            .ok_or_else(|| self.not_found(id))?;

        let removed = rows.remove(idx);
        info!(service = R::KIND, id, "removed");
        Ok(removed)
    }
}
