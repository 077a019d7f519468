use async_trait::async_trait;

use crate::errors::{RosterError, RosterResult};
use crate::page::PageResult;

/// Standard service methods, similar to Feathers:
/// find, get, create, update, remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceMethodKind {
    Find,
    Get,
    Create,
    Update,
    Remove,
}

impl ServiceMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMethodKind::Find => "find",
            ServiceMethodKind::Get => "get",
            ServiceMethodKind::Create => "create",
            ServiceMethodKind::Update => "update",
            ServiceMethodKind::Remove => "remove",
        }
    }
}

/// Capabilities describe which methods a service exposes to its caller.
///
/// Only administrators may create, edit or delete records; everybody else
/// gets a `read_only` service.
#[derive(Debug, Clone)]
pub struct ServiceCapabilities {
    pub allowed_methods: Vec<ServiceMethodKind>,
}

impl ServiceCapabilities {
    /// Full CRUD.
    pub fn standard_crud() -> Self {
        use ServiceMethodKind::*;
        Self {
            allowed_methods: vec![Find, Get, Create, Update, Remove],
        }
    }

    pub fn read_only() -> Self {
        use ServiceMethodKind::*;
        Self {
            allowed_methods: vec![Find, Get],
        }
    }

    pub fn allows(&self, method: ServiceMethodKind) -> bool {
        self.allowed_methods.contains(&method)
    }

    /// Fail with `MethodNotAllowed` unless `method` is exposed.
    pub fn ensure(&self, service: &str, method: ServiceMethodKind) -> RosterResult<()> {
        if self.allows(method) {
            Ok(())
        } else {
            Err(RosterError::method_not_allowed(format!(
                "{service}.{} is not available",
                method.as_str()
            ))
            .into_anyhow())
        }
    }
}

/// Core Roster service trait, inspired by FeathersJS:
///
/// - `find`   → filtered, sorted, paginated list
/// - `get`    → fetch one by id
/// - `create` → create one
/// - `update` → full replace
/// - `remove` → delete one
///
/// All methods default to "Method not implemented", so a service can
/// override only what it actually supports.
#[async_trait]
pub trait RosterService<R, P = ()>: Send + Sync
where
    R: Send + 'static,
    P: Send + 'static,
{
    fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities::standard_crud()
    }

    async fn find(&self, _params: P) -> RosterResult<PageResult<R>> {
        Err(RosterError::not_implemented("Method not implemented: find").into_anyhow())
    }

    async fn get(&self, _id: &str, _params: P) -> RosterResult<R> {
        Err(RosterError::not_implemented("Method not implemented: get").into_anyhow())
    }

    async fn create(&self, _data: R, _params: P) -> RosterResult<R> {
        Err(RosterError::not_implemented("Method not implemented: create").into_anyhow())
    }

    /// Fully replace an existing record. The stored id always wins.
    async fn update(&self, _id: &str, _data: R, _params: P) -> RosterResult<R> {
        Err(RosterError::not_implemented("Method not implemented: update").into_anyhow())
    }

    async fn remove(&self, _id: &str, _params: P) -> RosterResult<R> {
        Err(RosterError::not_implemented("Method not implemented: remove").into_anyhow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    struct Nothing;

    #[async_trait]
    impl RosterService<String> for Nothing {
        fn capabilities(&self) -> ServiceCapabilities {
            ServiceCapabilities::read_only()
        }
    }

    #[tokio::test]
    async fn unimplemented_methods_report_not_implemented() {
        let err = Nothing.get("1", ()).await.unwrap_err();
        assert_eq!(RosterError::kind_of(&err), ErrorKind::NotImplemented);
    }

    #[test]
    fn read_only_rejects_writes() {
        let caps = Nothing.capabilities();
        assert!(caps.ensure("clients", ServiceMethodKind::Find).is_ok());

        let err = caps.ensure("clients", ServiceMethodKind::Remove).unwrap_err();
        let roster = RosterError::from_anyhow(&err).unwrap();
        assert_eq!(roster.kind, ErrorKind::MethodNotAllowed);
        assert_eq!(roster.message, "clients.remove is not available");
    }
}
