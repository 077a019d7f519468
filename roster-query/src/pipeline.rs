use roster_core::errors::RosterResult;
use roster_core::PageResult;
use tracing::debug;

use crate::collation::Collation;
use crate::field::Queryable;
use crate::filter::{filter, FilterQuery};
use crate::paginate::paginate;
use crate::sort::{order, SortSpec};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything one pipeline run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: FilterQuery,
    /// `None` keeps store order.
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: FilterQuery::default(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// filter → sort → paginate over `store`, cloning only the rows on the
/// requested page.
pub fn query<R>(store: &[R], q: &ListQuery, collation: &Collation) -> RosterResult<PageResult<R>>
where
    R: Queryable + Clone,
{
    let matched = filter(store, &q.filter)?;
    let matched_count = matched.len();

    let ordered = order(matched, q.sort.as_ref(), collation)?;

    let page = paginate(&ordered, q.page, q.page_size)?;

    debug!(
        records = store.len(),
        matched = matched_count,
        page = page.page,
        total_pages = page.total_pages,
        sort = q.sort.as_ref().map(|s| s.field.as_str()).unwrap_or("-"),
        "list query"
    );

    Ok(page.map(|r| r.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use tracing_test::traced_test;

    #[derive(Debug, Clone, PartialEq)]
    struct City(&'static str);

    impl Queryable for City {
        const FIELDS: &'static [&'static str] = &["name"];
        const SEARCH_FIELDS: &'static [&'static str] = &["name"];

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            (name == "name").then_some(FieldValue::Text(self.0))
        }
    }

    #[traced_test]
    #[test]
    fn each_run_is_logged() {
        let store = vec![City("Sevilla"), City("Bilbao"), City("Madrid")];
        let collation = Collation::new("es").unwrap();
        let q = ListQuery {
            sort: Some(SortSpec::asc("name")),
            ..ListQuery::default()
        };

        let page = query(&store, &q, &collation).unwrap();
        assert_eq!(page.items, vec![City("Bilbao"), City("Madrid"), City("Sevilla")]);
        assert!(logs_contain("list query"));
        assert!(logs_contain("matched=3"));
    }
}
