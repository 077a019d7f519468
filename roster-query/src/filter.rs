//! Filter stage: free-text search AND independent categorical filters.

use std::collections::BTreeMap;

use roster_core::errors::RosterResult;

use crate::field::{ensure_known, FieldValue, Queryable};

/// Sentinel categorical value meaning "no restriction".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub search_text: String,
    /// Field name → expected raw value (or [`ALL`]).
    pub filters: BTreeMap<String, String>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// True when the query lets every record through.
    pub fn is_unrestricted(&self) -> bool {
        self.search_text.is_empty() && self.filters.values().all(|v| v == ALL)
    }
}

fn matches_search<R: Queryable>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    R::SEARCH_FIELDS.iter().any(|name| match record.field(name) {
        Some(FieldValue::Text(text)) => text.to_lowercase().contains(needle),
        _ => false,
    })
}

/// One categorical test. Text fields compare exactly (case-sensitive);
/// boolean fields read "active"/"true" and "inactive"/"false".
fn matches_value(value: Option<FieldValue<'_>>, expected: &str) -> bool {
    if expected == ALL {
        return true;
    }
    match value {
        Some(FieldValue::Text(text)) => text == expected,
        Some(FieldValue::Flag(flag)) => match expected {
            "active" | "true" => flag,
            "inactive" | "false" => !flag,
            _ => false,
        },
        None => false,
    }
}

/// Keep the records that pass the search and every categorical filter,
/// in their input order.
pub fn filter<'a, R: Queryable>(records: &'a [R], query: &FilterQuery) -> RosterResult<Vec<&'a R>> {
    for field in query.filters.keys() {
        ensure_known::<R>(field)?;
    }

    if query.is_unrestricted() {
        return Ok(records.iter().collect());
    }

    let needle = query.search_text.to_lowercase();

    Ok(records
        .iter()
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| {
            query
                .filters
                .iter()
                .all(|(field, expected)| matches_value(record.field(field), expected))
        })
        .collect())
}
