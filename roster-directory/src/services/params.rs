use std::collections::HashMap;

use roster_core::errors::{RosterError, RosterResult};
use roster_core::RosterConfigSnapshot;
use roster_query::{FilterQuery, ListQuery, SortDirection, SortSpec, DEFAULT_PAGE_SIZE};

pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// `paginate.default` / `paginate.max`, read once per directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub default: usize,
    pub max: usize,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            default: DEFAULT_PAGE_SIZE,
            max: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl Paging {
    /// Read `paginate.default` / `paginate.max`; unset keys take the
    /// defaults, a set key must be an integer >= 1.
    pub fn from_config(config: &RosterConfigSnapshot) -> RosterResult<Self> {
        let fallback = Self::default();
        Ok(Self {
            default: page_setting(config, "paginate.default", fallback.default)?,
            max: page_setting(config, "paginate.max", fallback.max)?,
        })
    }
}

fn page_setting(config: &RosterConfigSnapshot, key: &str, fallback: usize) -> RosterResult<usize> {
    match config.get(key) {
        None => Ok(fallback),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(RosterError::invalid_argument(format!(
                "{key} must be an integer >= 1, got '{raw}'"
            ))
            .into_anyhow()),
        },
    }
}

/// Params for `find` on the clients/employees services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub query: ListQuery,
}

impl From<ListQuery> for ListParams {
    fn from(query: ListQuery) -> Self {
        Self { query }
    }
}

fn parse_number(key: &str, raw: &str) -> RosterResult<usize> {
    raw.parse::<usize>().map_err(|_| {
        RosterError::invalid_argument(format!("{key} must be a positive integer, got '{raw}'"))
            .into_anyhow()
    })
}

impl ListParams {
    /// Build from a Feathers-style query map:
    /// `search`, `$sort`, `$dir`, `$page`, `$limit`; every other key is a
    /// categorical filter on the field of that name.
    pub fn from_query(query: &HashMap<String, String>, paging: &Paging) -> RosterResult<Self> {
        let mut filter = FilterQuery::new();
        let mut sort_field = None;
        let mut direction = SortDirection::Asc;
        let mut page = 1;
        let mut page_size = paging.default;

        for (key, value) in query {
            match key.as_str() {
                "search" => filter.search_text = value.clone(),
                "$sort" => sort_field = Some(value.clone()),
                "$dir" => direction = SortDirection::parse(value)?,
                "$page" => page = parse_number(key, value)?,
                "$limit" => page_size = parse_number(key, value)?,
                _ => {
                    filter.filters.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(Self {
            query: ListQuery {
                filter,
                sort: sort_field.map(|field| SortSpec { field, direction }),
                page,
                page_size,
            },
        })
    }
}

/// Params for the per-client subscriptions service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionParams {
    pub client_id: String,
    pub list: ListParams,
}

impl SubscriptionParams {
    pub fn for_client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            list: ListParams::default(),
        }
    }

    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.list = query.into();
        self
    }
}
