use roster_core::errors::{RosterError, RosterResult};

/// A record field as the pipeline sees it.
///
/// Dates are display strings ("2 Sep, 2025") and compare as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

/// Read-only, name-based field access for a record variant.
///
/// `FIELDS` is the closed set of names `field` understands; anything else is
/// an `UnknownField` error at the stage boundary. `field` may still return
/// `None` for a known but optional field that this record leaves empty.
pub trait Queryable {
    const FIELDS: &'static [&'static str];

    /// Fields the free-text search looks into.
    const SEARCH_FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

pub(crate) fn ensure_known<R: Queryable>(name: &str) -> RosterResult<()> {
    if R::FIELDS.contains(&name) {
        Ok(())
    } else {
        Err(RosterError::unknown_field(format!(
            "unknown field '{name}' (expected one of: {})",
            R::FIELDS.join(", ")
        ))
        .into_anyhow())
    }
}
