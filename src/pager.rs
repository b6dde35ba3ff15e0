use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const DEFAULT_MAX_VISIBLE_PAGE_LINKS: usize = 10;

/// Snapshot of the pager's derived state. Pages are 1-based;
/// `window_start`/`window_end` are 0-based page indices (end exclusive)
/// bounding the slice of page links currently visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub rows_per_page: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub window_start: usize,
    pub window_end: usize,
    pub max_visible_page_links: usize,
}

/// 1-based inclusive row range of the active page, for the
/// results-summary message ("Showing from {start} to {end} of {total}").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Pagination engine. Owns the current page and the sliding window of
/// visible page links; everything else is recomputed from the dataset
/// length on every sync, never patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    rows_per_page: usize,
    max_visible_page_links: usize,
    dataset_len: usize,
    total_pages: usize,
    current_page: usize,
    window_start: usize,
    window_end: usize,
}

impl Pager {
    pub fn new(rows_per_page: usize, max_visible_page_links: usize) -> Result<Self, ConfigError> {
        if rows_per_page == 0 {
            return Err(ConfigError::InvalidRowsPerPage);
        }
        if max_visible_page_links == 0 {
            return Err(ConfigError::InvalidMaxVisiblePageLinks);
        }
        Ok(Self {
            rows_per_page,
            max_visible_page_links,
            dataset_len: 0,
            total_pages: 0,
            current_page: 1,
            window_start: 0,
            window_end: max_visible_page_links,
        })
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn max_visible_page_links(&self) -> usize {
        self.max_visible_page_links
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset_len
    }

    /// Recomputes page counts for a (possibly changed) dataset length.
    /// If the dataset shrank below the current page, the pager snaps
    /// back to page 1 — a full reset, not a clamp to the new last page.
    pub fn sync_dataset_len(&mut self, len: usize) {
        self.dataset_len = len;
        self.total_pages = Self::page_count(len, self.rows_per_page);
        if self.current_page > self.total_pages {
            if self.total_pages > 0 {
                log::debug!(
                    "dataset shrank below page {}, snapping back to page 1",
                    self.current_page
                );
            }
            self.first();
        }
    }

    fn page_count(len: usize, rows_per_page: usize) -> usize {
        if len == 0 {
            0
        } else {
            len.div_ceil(rows_per_page)
        }
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<(), ConfigError> {
        if rows_per_page == 0 {
            return Err(ConfigError::InvalidRowsPerPage);
        }
        self.rows_per_page = rows_per_page;
        self.total_pages = Self::page_count(self.dataset_len, rows_per_page);
        self.first();
        Ok(())
    }

    pub fn set_max_visible_page_links(&mut self, max_links: usize) -> Result<(), ConfigError> {
        if max_links == 0 {
            return Err(ConfigError::InvalidMaxVisiblePageLinks);
        }
        self.max_visible_page_links = max_links;
        self.first();
        Ok(())
    }

    /// Jump to page 1 and reset the link window to the front.
    pub fn first(&mut self) {
        self.current_page = 1;
        self.window_start = 0;
        self.window_end = self.max_visible_page_links;
    }

    /// Jump to the last page, window ending on it.
    pub fn last(&mut self) {
        if self.total_pages == 0 {
            return;
        }
        self.current_page = self.total_pages;
        self.window_start = self
            .total_pages
            .saturating_sub(self.max_visible_page_links - 1);
        self.window_end = self.total_pages;
    }

    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.go_to(self.current_page - 1);
        }
    }

    pub fn next(&mut self) {
        if self.total_pages > 0 && self.current_page != self.total_pages {
            self.go_to(self.current_page + 1);
        }
    }

    /// Activate `page` (1-based). Pages outside `[1, total_pages]` snap
    /// to page 1. The link window slides only when the page leaves the
    /// visible slice: before it, the page becomes the rightmost visible
    /// link; past it, the leftmost. Re-entering the current page leaves
    /// the state untouched.
    pub fn go_to(&mut self, page: usize) {
        if page == 0 || page > self.total_pages {
            log::debug!("page {page} out of range, snapping to page 1");
            self.first();
            return;
        }
        self.current_page = page;
        let index = page - 1;
        if index < self.window_start {
            self.window_start = page.saturating_sub(self.max_visible_page_links);
            self.window_end = index + 1;
        } else if let Some(last_visible) = self.last_visible_page_index() {
            if index > last_visible {
                self.window_start = index;
                self.window_end = index + self.max_visible_page_links;
            }
        }
    }

    /// Last page index inside the visible window, read without
    /// disturbing the window itself.
    fn last_visible_page_index(&self) -> Option<usize> {
        let end = self.window_end.min(self.total_pages);
        if end > self.window_start {
            Some(end - 1)
        } else {
            None
        }
    }

    /// 0-based page indices to draw as links, clamped to real pages.
    pub fn visible_pages(&self) -> Range<usize> {
        self.window_start.min(self.total_pages)..self.window_end.min(self.total_pages)
    }

    /// Dataset indices of the rows on the active page.
    pub fn row_window(&self) -> Range<usize> {
        if self.dataset_len == 0 {
            return 0..0;
        }
        let start = (self.current_page - 1) * self.rows_per_page;
        start..(start + self.rows_per_page).min(self.dataset_len)
    }

    pub fn results_range(&self) -> ResultsRange {
        let window = self.row_window();
        ResultsRange {
            start: if self.dataset_len == 0 { 0 } else { window.start + 1 },
            end: window.end,
            total: self.dataset_len,
        }
    }

    pub fn state(&self) -> PaginationState {
        PaginationState {
            rows_per_page: self.rows_per_page,
            current_page: self.current_page,
            total_pages: self.total_pages,
            window_start: self.window_start,
            window_end: self.window_end,
            max_visible_page_links: self.max_visible_page_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(len: usize, rows_per_page: usize, max_links: usize) -> Pager {
        let mut pager = Pager::new(rows_per_page, max_links).unwrap();
        pager.sync_dataset_len(len);
        pager
    }

    #[test]
    fn test_rejects_zero_rows_per_page() {
        assert_eq!(Pager::new(0, 10), Err(ConfigError::InvalidRowsPerPage));
        assert_eq!(
            Pager::new(10, 0),
            Err(ConfigError::InvalidMaxVisiblePageLinks)
        );
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(pager(0, 10, 10).total_pages(), 0);
        assert_eq!(pager(1, 10, 10).total_pages(), 1);
        assert_eq!(pager(10, 10, 10).total_pages(), 1);
        assert_eq!(pager(11, 10, 10).total_pages(), 2);
        assert_eq!(pager(27, 10, 10).total_pages(), 3);
        assert_eq!(pager(100, 10, 10).total_pages(), 10);
    }

    #[test]
    fn test_row_window_full_and_partial_pages() {
        // 27 rows at 10 per page: pages of 10, 10, 7
        let mut pager = pager(27, 10, 10);
        assert_eq!(pager.row_window(), 0..10);

        pager.go_to(2);
        assert_eq!(pager.row_window(), 10..20);

        pager.go_to(3);
        assert_eq!(pager.row_window(), 20..27);
        assert_eq!(pager.row_window().len(), 7);
    }

    #[test]
    fn test_empty_dataset_has_no_pages_and_empty_window() {
        let pager = pager(0, 10, 10);
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.row_window(), 0..0);
        assert_eq!(pager.visible_pages(), 0..0);
    }

    #[test]
    fn test_go_to_same_page_is_idempotent() {
        let mut pager = pager(200, 10, 5);
        pager.go_to(12);
        let before = pager.state();
        pager.go_to(12);
        assert_eq!(pager.state(), before);
        pager.go_to(12);
        assert_eq!(pager.state(), before);
    }

    #[test]
    fn test_shrink_snaps_back_to_first_page() {
        let mut pager = pager(100, 10, 10);
        pager.go_to(10);
        assert_eq!(pager.current_page(), 10);

        // 50 rows leaves 5 pages; policy is a full reset to page 1,
        // not a clamp to the new last page.
        pager.sync_dataset_len(50);
        assert_eq!(pager.total_pages(), 5);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.visible_pages(), 0..5);
    }

    #[test]
    fn test_shrink_within_range_keeps_current_page() {
        let mut pager = pager(100, 10, 10);
        pager.go_to(4);
        pager.sync_dataset_len(50);
        assert_eq!(pager.current_page(), 4);
    }

    #[test]
    fn test_window_slides_when_target_leaves_visible_range() {
        let mut pager = pager(200, 10, 5);
        assert_eq!(pager.visible_pages(), 0..5);

        pager.go_to(12);
        assert_eq!(pager.visible_pages(), 11..16);

        // jumping backwards out of the window puts the target at the
        // right edge instead
        pager.go_to(8);
        assert_eq!(pager.visible_pages(), 3..8);
        assert_eq!(pager.current_page(), 8);
    }

    #[test]
    fn test_window_slides_backward_with_clamp_at_zero() {
        let mut pager = pager(200, 10, 5);
        pager.last();
        assert_eq!(pager.current_page(), 20);

        pager.go_to(3);
        assert_eq!(pager.visible_pages(), 0..3);
    }

    #[test]
    fn test_window_unchanged_when_target_already_visible() {
        let mut pager = pager(200, 10, 5);
        pager.go_to(3);
        assert_eq!(pager.visible_pages(), 0..5);
        pager.go_to(5);
        assert_eq!(pager.visible_pages(), 0..5);
    }

    #[test]
    fn test_first_and_last_set_window_edges() {
        let mut pager = pager(200, 10, 10);
        pager.last();
        assert_eq!(pager.current_page(), 20);
        assert_eq!(pager.visible_pages(), 11..20);

        pager.first();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.visible_pages(), 0..10);
    }

    #[test]
    fn test_last_clamps_window_on_short_page_counts() {
        let mut pager = pager(27, 10, 10);
        pager.last();
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.visible_pages(), 0..3);
    }

    #[test]
    fn test_previous_and_next_are_noops_at_edges() {
        let mut pager = pager(27, 10, 10);
        pager.previous();
        assert_eq!(pager.current_page(), 1);

        pager.last();
        pager.next();
        assert_eq!(pager.current_page(), 3);

        pager.previous();
        assert_eq!(pager.current_page(), 2);
        pager.next();
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_out_of_range_page_snaps_to_first() {
        let mut pager = pager(27, 10, 10);
        pager.go_to(2);
        pager.go_to(99);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.visible_pages(), 0..3);

        pager.go_to(0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_results_range_matches_row_window() {
        let mut pager = pager(27, 10, 10);
        assert_eq!(
            pager.results_range(),
            ResultsRange { start: 1, end: 10, total: 27 }
        );

        pager.go_to(3);
        assert_eq!(
            pager.results_range(),
            ResultsRange { start: 21, end: 27, total: 27 }
        );

        pager.sync_dataset_len(0);
        assert_eq!(
            pager.results_range(),
            ResultsRange { start: 0, end: 0, total: 0 }
        );
    }

    #[test]
    fn test_set_rows_per_page_recomputes_and_resets() {
        let mut pager = pager(100, 10, 10);
        pager.go_to(7);
        pager.set_rows_per_page(25).unwrap();
        assert_eq!(pager.total_pages(), 4);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.set_rows_per_page(0), Err(ConfigError::InvalidRowsPerPage));
    }

    #[test]
    fn test_exact_division_yields_no_extra_page() {
        let pager = pager(30, 10, 10);
        assert_eq!(pager.total_pages(), 3);
    }
}
