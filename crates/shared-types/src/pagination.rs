use serde::{Deserialize, Serialize};

pub const ITEMS_PER_PAGE: u64 = 10;

/// `max(1, ceil(total / ITEMS_PER_PAGE))`. A missing total counts as zero.
pub fn total_pages_for(total: Option<u64>) -> u32 {
    let total = total.unwrap_or(0);
    let pages = total.div_ceil(ITEMS_PER_PAGE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// 1-based page cursor over the filtered motion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * ITEMS_PER_PAGE
    }

    /// Move to `target` if it lies in `[1, total_pages]`. Returns whether the
    /// page actually changed.
    pub fn go_to(&mut self, target: i64) -> bool {
        if target < 1 || target > i64::from(self.total_pages) {
            return false;
        }
        let target = target as u32;
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Recompute the page count from the server's total. The current page is
    /// left alone; it is only ever moved by `go_to` or `reset`.
    pub fn apply_total(&mut self, total: Option<u64>) {
        self.total_pages = total_pages_for(total);
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
