//! Caller-owned list state.
//!
//! A table keeps one `ListState`, feeds it user interactions as
//! [`ListAction`]s and calls [`query`](crate::query) with
//! [`ListState::to_query`] after each one.

use std::collections::BTreeMap;

use crate::filter::{FilterQuery, ALL};
use crate::pipeline::{ListQuery, DEFAULT_PAGE_SIZE};
use crate::sort::{SortDirection, SortSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Search(String),
    Filter { field: String, value: String },
    ClearFilters,
    /// Sort-header click.
    SortBy(String),
    SetPageSize(usize),
    NextPage { total_pages: usize },
    PrevPage,
    GoTo(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Search(text) => {
                self.search = text;
                self.page = 1;
            }
            ListAction::Filter { field, value } => {
                if value == ALL {
                    self.filters.remove(&field);
                } else {
                    self.filters.insert(field, value);
                }
                self.page = 1;
            }
            ListAction::ClearFilters => {
                self.filters.clear();
                self.page = 1;
            }
            ListAction::SortBy(field) => {
                self.sort = Some(match self.sort.take() {
                    Some(current) if current.field == field => SortSpec {
                        field,
                        direction: current.direction.toggled(),
                    },
                    _ => SortSpec {
                        field,
                        direction: SortDirection::Asc,
                    },
                });
            }
            ListAction::SetPageSize(size) => {
                self.page_size = size;
                self.page = 1;
            }
            ListAction::NextPage { total_pages } => {
                if self.page < total_pages {
                    self.page += 1;
                }
            }
            ListAction::PrevPage => {
                if self.page > 1 {
                    self.page -= 1;
                }
            }
            ListAction::GoTo(page) => self.page = page,
        }
    }

    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            filter: FilterQuery {
                search_text: self.search.clone(),
                filters: self.filters.clone(),
            },
            sort: self.sort.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sort_header_toggles_then_resets_on_new_field() {
        let mut state = ListState::default();
        state.apply(ListAction::SortBy("name".into()));
        assert_eq!(state.sort, Some(SortSpec::asc("name")));

        state.apply(ListAction::SortBy("name".into()));
        assert_eq!(state.sort, Some(SortSpec::desc("name")));

        state.apply(ListAction::SortBy("location".into()));
        assert_eq!(state.sort, Some(SortSpec::asc("location")));
    }

    #[test]
    fn narrowing_resets_page() {
        let mut state = ListState::with_page_size(2);
        state.apply(ListAction::GoTo(3));

        state.apply(ListAction::Search("mad".into()));
        assert_eq!(state.page, 1);

        state.apply(ListAction::GoTo(2));
        state.apply(ListAction::Filter {
            field: "isActive".into(),
            value: "active".into(),
        });
        assert_eq!(state.page, 1);

        state.apply(ListAction::GoTo(2));
        state.apply(ListAction::SetPageSize(25));
        assert_eq!((state.page, state.page_size), (1, 25));
    }

    #[test]
    fn all_removes_the_filter() {
        let mut state = ListState::default();
        state.apply(ListAction::Filter {
            field: "status".into(),
            value: "cliente-activo".into(),
        });
        state.apply(ListAction::Filter {
            field: "status".into(),
            value: ALL.into(),
        });
        assert!(state.filters.is_empty());
    }

    #[test]
    fn page_buttons_clamp() {
        let mut state = ListState::default();
        state.apply(ListAction::PrevPage);
        assert_eq!(state.page, 1);

        state.apply(ListAction::NextPage { total_pages: 2 });
        state.apply(ListAction::NextPage { total_pages: 2 });
        assert_eq!(state.page, 2);

        state.apply(ListAction::NextPage { total_pages: 0 });
        assert_eq!(state.page, 2);
    }

    #[test]
    fn query_mirrors_state() {
        let mut state = ListState::default();
        state.apply(ListAction::Search("ana".into()));
        state.apply(ListAction::SortBy("name".into()));

        let q = state.to_query();
        assert_eq!(q.filter.search_text, "ana");
        assert_eq!(q.sort, Some(SortSpec::asc("name")));
        assert_eq!((q.page, q.page_size), (1, DEFAULT_PAGE_SIZE));
    }
}
