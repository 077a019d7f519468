//! Paginate stage.
//!
//! The stage never clamps: a page past the end yields no items. Clamping
//! the requested page belongs to the caller's [`ListState`](crate::ListState).

use roster_core::errors::RosterResult;
use roster_core::{bail_roster, PageResult};

pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> RosterResult<PageResult<T>> {
    if page == 0 {
        bail_roster!(invalid_argument, "page must be >= 1, got {}", page);
    }
    if page_size == 0 {
        bail_roster!(invalid_argument, "page size must be >= 1, got {}", page_size);
    }

    let total_items = records.len();
    let total_pages = total_items.div_ceil(page_size);

    let items = match (page - 1).checked_mul(page_size) {
        Some(start) if start < total_items => {
            let end = start.saturating_add(page_size).min(total_items);
            records[start..end].to_vec()
        }
        _ => Vec::new(),
    };

    Ok(PageResult {
        items,
        total_items,
        total_pages,
        page,
        page_size,
    })
}
