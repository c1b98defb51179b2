use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a filtered, ordered result set.
///
/// `page_index` is 1-based. A requested page outside `[1, total_pages]`
/// is clamped by [`PaginatedList::clamp_page`] rather than producing an
/// empty page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

impl<T> PaginatedList<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_index: u32, page_size: u32) -> Self {
        Self {
            items,
            page_index,
            total_pages: Self::total_pages_for(total_count, page_size),
            total_count,
        }
    }

    /// `max(1, ceil(total_count / page_size))`. An empty result set still
    /// has one (empty) page.
    pub fn total_pages_for(total_count: u64, page_size: u32) -> u32 {
        total_count.div_ceil(u64::from(page_size.max(1))).max(1) as u32
    }

    /// Coerce a caller-supplied page number into `[1, total_pages]`.
    /// Missing, zero, and negative values all land on the first page.
    pub fn clamp_page(requested: Option<i64>, total_pages: u32) -> u32 {
        let page = requested.unwrap_or(1).max(1) as u64;
        page.min(u64::from(total_pages)) as u32
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index < self.total_pages
    }
}
