//! Console rendering for the `roster-directory` binary.

use std::collections::HashMap;
use std::fmt::Write;

use roster_core::errors::{ErrorKind, RosterError, RosterResult};
use roster_core::{PageResult, RosterService};
use tracing::warn;

use crate::app::Directory;
use crate::services::ListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Clients,
    Employees,
}

impl Table {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "clients" => Some(Table::Clients),
            "employees" => Some(Table::Employees),
            _ => None,
        }
    }
}

/// Split CLI args into an optional leading table name and `key=value`
/// query pairs. Args without `=` are ignored.
pub fn parse_args<I>(args: I) -> (Option<Table>, HashMap<String, String>)
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let table = args.peek().and_then(|a| Table::parse(a));
    if table.is_some() {
        args.next();
    }

    let pairs = args
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect();
    (table, pairs)
}

pub fn footer<R>(page: &PageResult<R>) -> String {
    format!(
        "Mostrando {}-{} de {} resultados (página {} de {})",
        page.first_item(),
        page.last_item(),
        page.total_items,
        page.page,
        page.total_pages.max(1)
    )
}

/// Render the requested table, or both when `table` is `None`.
///
/// With both tables, a query naming a field only one of them has skips the
/// other table with a note instead of failing the run.
pub async fn render(
    dir: &Directory,
    table: Option<Table>,
    pairs: &HashMap<String, String>,
) -> RosterResult<String> {
    let params = ListParams::from_query(pairs, &dir.paging())?;
    let tables = match table {
        Some(t) => vec![t],
        None => vec![Table::Clients, Table::Employees],
    };

    let mut out = String::new();
    for t in tables {
        let rendered = match t {
            Table::Clients => clients(dir, params.clone()).await,
            Table::Employees => employees(dir, params.clone()).await,
        };
        match rendered {
            Ok(text) => out.push_str(&text),
            Err(err) if table.is_none() && RosterError::kind_of(&err) == ErrorKind::UnknownField => {
                warn!(table = ?t, error = %err, "table skipped");
                let _ = writeln!(out, "{t:?}: omitido ({err})\n");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(out)
}

async fn clients(dir: &Directory, params: ListParams) -> RosterResult<String> {
    let page = dir.clients().find(params).await?;
    let mut out = String::from("Clientes\n");
    for c in &page.items {
        let _ = writeln!(
            out,
            "  {:<18} {:<14} {:<30} {:<10} {}",
            c.name,
            c.client_id,
            c.company,
            c.location,
            c.badge().unwrap_or("-")
        );
    }
    let _ = writeln!(out, "{}\n", footer(&page));
    Ok(out)
}

async fn employees(dir: &Directory, params: ListParams) -> RosterResult<String> {
    let page = dir.employees().find(params).await?;
    let mut out = String::from("Empleados\n");
    for e in &page.items {
        let _ = writeln!(
            out,
            "  {:<20} {:<13} {:<15} {:<10} {}",
            e.name,
            e.employee_id,
            e.department,
            e.location,
            e.badge().unwrap_or("-")
        );
    }
    let _ = writeln!(out, "{}\n", footer(&page));
    Ok(out)
}

/// JSON body printed when a run fails.
pub fn error_json(err: anyhow::Error) -> serde_json::Value {
    RosterError::normalize(err).to_json()
}
