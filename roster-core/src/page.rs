//! Paginated find results.

/// One page of a filtered, sorted list plus the counts the pagination
/// controls need. Produced fresh on every query; callers own any state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageResult<R> {
    pub items: Vec<R>,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based page that was requested.
    pub page: usize,
    pub page_size: usize,
}

impl<R> PageResult<R> {
    /// 1-based index of the first row on this page, 0 when the page is empty.
    pub fn first_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last row on this page, 0 when the page is empty.
    pub fn last_item(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_item() + self.items.len() - 1
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<T, F>(self, f: F) -> PageResult<T>
    where
        F: FnMut(R) -> T,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageResult;

    fn page(items: Vec<u32>, total_items: usize, page: usize, page_size: usize) -> PageResult<u32> {
        PageResult {
            items,
            total_items,
            total_pages: total_items.div_ceil(page_size),
            page,
            page_size,
        }
    }

    #[test]
    fn display_range_on_middle_page() {
        let p = page(vec![4, 5, 6], 8, 2, 3);
        assert_eq!((p.first_item(), p.last_item()), (4, 6));
        assert!(p.has_prev());
        assert!(p.has_next());
    }

    #[test]
    fn display_range_on_short_last_page() {
        let p = page(vec![7, 8], 8, 3, 3);
        assert_eq!((p.first_item(), p.last_item()), (7, 8));
        assert!(!p.has_next());
    }

    #[test]
    fn empty_page_reports_zero_range() {
        let p = page(vec![], 0, 1, 10);
        assert_eq!((p.first_item(), p.last_item()), (0, 0));
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_prev());
        assert!(!p.has_next());
    }

    #[test]
    fn map_keeps_counts() {
        let p = page(vec![1, 2], 5, 1, 2).map(|n| n * 10);
        assert_eq!(p.items, vec![10, 20]);
        assert_eq!(p.total_pages, 3);
    }
}
