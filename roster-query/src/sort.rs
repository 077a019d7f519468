//! Sort stage: single field, type-aware, stable.

use std::cmp::Ordering;

use roster_core::errors::{RosterError, RosterResult};

use crate::collation::Collation;
use crate::field::{ensure_known, FieldValue, Queryable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(raw: &str) -> RosterResult<Self> {
        match raw {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(RosterError::invalid_argument(format!(
                "sort direction must be 'asc' or 'desc', got '{other}'"
            ))
            .into_anyhow()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Text uses the collator, flags put `false` first, any other pairing
/// (mismatched kinds or a missing optional value) is a tie.
pub fn compare_values(
    a: Option<FieldValue<'_>>,
    b: Option<FieldValue<'_>>,
    collation: &Collation,
) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => collation.compare(a, b),
        (Some(FieldValue::Flag(a)), Some(FieldValue::Flag(b))) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Order `records` by `spec`. Descending negates the ascending comparison,
/// so ties keep their input order in both directions.
pub fn sort<'a, R: Queryable>(
    mut records: Vec<&'a R>,
    spec: &SortSpec,
    collation: &Collation,
) -> RosterResult<Vec<&'a R>> {
    ensure_known::<R>(&spec.field)?;

    records.sort_by(|a, b| {
        let ord = compare_values(a.field(&spec.field), b.field(&spec.field), collation);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    Ok(records)
}

/// The sort stage as the pipeline runs it. Without a spec the ordering is
/// the identity, so records keep their store order.
pub fn order<'a, R: Queryable>(
    records: Vec<&'a R>,
    spec: Option<&SortSpec>,
    collation: &Collation,
) -> RosterResult<Vec<&'a R>> {
    match spec {
        Some(spec) => sort(records, spec, collation),
        None => Ok(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_sort_false_first() {
        let c = Collation::new("es").unwrap();
        assert_eq!(
            compare_values(Some(FieldValue::Flag(false)), Some(FieldValue::Flag(true)), &c),
            Ordering::Less
        );
    }

    #[test]
    fn mismatched_kinds_tie() {
        let c = Collation::new("es").unwrap();
        assert_eq!(
            compare_values(Some(FieldValue::Text("a")), Some(FieldValue::Flag(true)), &c),
            Ordering::Equal
        );
        assert_eq!(compare_values(None, Some(FieldValue::Text("a")), &c), Ordering::Equal);
    }

    struct Name(&'static str);

    impl Queryable for Name {
        const FIELDS: &'static [&'static str] = &["name"];
        const SEARCH_FIELDS: &'static [&'static str] = &["name"];

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            (name == "name").then_some(FieldValue::Text(self.0))
        }
    }

    #[test]
    fn order_without_spec_is_identity() {
        let c = Collation::new("es").unwrap();
        let rows = [Name("Zoe"), Name("Ángel"), Name("Bea")];
        let refs: Vec<&Name> = rows.iter().collect();

        let kept = order(refs.clone(), None, &c).unwrap();
        assert_eq!(kept.iter().map(|n| n.0).collect::<Vec<_>>(), vec!["Zoe", "Ángel", "Bea"]);

        let sorted = order(refs, Some(&SortSpec::asc("name")), &c).unwrap();
        assert_eq!(sorted.iter().map(|n| n.0).collect::<Vec<_>>(), vec!["Ángel", "Bea", "Zoe"]);
    }

    #[test]
    fn direction_round_trip() {
        assert_eq!(SortDirection::parse("desc").unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled().as_str(), "asc");
        assert!(SortDirection::parse("up").is_err());
    }
}
