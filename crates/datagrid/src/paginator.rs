//! Pagination control for the table.
//!
//! Holds caller-owned pagination metadata (1-based current page, total
//! pages, total document count, page size), computes the sliding window of
//! visible page numbers and the "X–Y of Z" range summary, and renders the
//! pager line. Page *transitions* are only ever requested of the caller;
//! the control never grows or shrinks the page count itself.
//!
//! # Example
//!
//! ```rust
//! use datagrid::paginator::Paginator;
//!
//! let paginator = Paginator::new()
//!     .limit(10)
//!     .total_docs(95)
//!     .total_pages(10)
//!     .page(7);
//!
//! assert_eq!(paginator.visible_pages(), vec![5, 6, 7, 8, 9]);
//! let summary = paginator.range_summary().unwrap();
//! assert_eq!((summary.start, summary.end, summary.total), (61, 70, 95));
//! ```

use serde::{Deserialize, Serialize};

/// Width of the sliding window of visible page numbers.
pub const PAGE_WINDOW: usize = 5;

/// The "showing X–Y of Z" figures for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// 1-based index of the first document on the page.
    pub start: usize,
    /// 1-based index of the last document on the page.
    pub end: usize,
    /// Total document count.
    pub total: usize,
}

/// Pagination model with a 1-based current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginator {
    page: usize,
    total_pages: usize,
    total_docs: usize,
    limit: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a paginator on page 1 of 1 with no documents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            total_docs: 0,
            limit: 10,
        }
    }

    /// Sets the page size (builder pattern).
    #[must_use]
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = n.max(1);
        self
    }

    /// Sets the total number of pages (builder pattern).
    #[must_use]
    pub fn total_pages(mut self, n: usize) -> Self {
        self.total_pages = n.max(1);
        self.page = self.page.min(self.total_pages);
        self
    }

    /// Sets the total document count (builder pattern).
    #[must_use]
    pub fn total_docs(mut self, n: usize) -> Self {
        self.total_docs = n;
        self
    }

    /// Sets the current page, clamped to the valid range (builder pattern).
    #[must_use]
    pub fn page(mut self, n: usize) -> Self {
        self.set_page(n);
        self
    }

    /// Returns the current page (1-based).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn get_total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the total document count.
    #[must_use]
    pub fn get_total_docs(&self) -> usize {
        self.total_docs
    }

    /// Returns the page size.
    #[must_use]
    pub fn get_limit(&self) -> usize {
        self.limit
    }

    /// Sets the current page, clamping to `[1, total_pages]`.
    pub fn set_page(&mut self, n: usize) {
        self.page = n.clamp(1, self.total_pages);
    }

    /// Replaces the caller-owned metadata, keeping the page in range.
    pub fn set_metadata(&mut self, total_pages: usize, total_docs: usize, limit: usize) {
        self.total_pages = total_pages.max(1);
        self.total_docs = total_docs;
        self.limit = limit.max(1);
        self.page = self.page.min(self.total_pages);
    }

    /// Derives and sets the total pages from the document count.
    ///
    /// Returns the computed page count.
    pub fn set_total_pages_from_docs(&mut self, docs: usize) -> usize {
        self.total_docs = docs;
        self.total_pages = (docs.div_ceil(self.limit)).max(1);
        self.page = self.page.min(self.total_pages);
        self.total_pages
    }

    /// Returns whether `n` is a reachable page.
    #[must_use]
    pub fn is_valid_page(&self, n: usize) -> bool {
        (1..=self.total_pages).contains(&n)
    }

    /// Moves to the previous page, stopping at page 1.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns whether the current page is the first.
    #[must_use]
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns whether the current page is the last.
    #[must_use]
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    /// Computes the sliding window of visible page numbers.
    ///
    /// At most [`PAGE_WINDOW`] contiguous numbers, centered on the current
    /// page where possible and shifted to stay within `[1, total_pages]` at
    /// either end.
    #[must_use]
    pub fn visible_pages(&self) -> Vec<usize> {
        let count = PAGE_WINDOW.min(self.total_pages);
        let mut start = self.page.saturating_sub(PAGE_WINDOW / 2).max(1);
        if start + count - 1 > self.total_pages {
            start = self.total_pages - count + 1;
        }
        (start..start + count).collect()
    }

    /// Computes the "showing X–Y of Z" summary.
    ///
    /// Returns `None` when there are no documents: an empty result set has
    /// no meaningful range, so the summary line is suppressed rather than
    /// rendered as an inverted 1–0 span.
    #[must_use]
    pub fn range_summary(&self) -> Option<RangeSummary> {
        if self.total_docs == 0 {
            return None;
        }
        Some(RangeSummary {
            start: (self.page - 1) * self.limit + 1,
            end: (self.page * self.limit).min(self.total_docs),
            total: self.total_docs,
        })
    }

    /// Renders the pager line.
    ///
    /// The current page is bracketed; the previous/next arrows drop out at
    /// the first/last page; the range summary follows when present.
    #[must_use]
    pub fn view(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.on_first_page() {
            parts.push("‹".to_string());
        }
        for p in self.visible_pages() {
            if p == self.page {
                parts.push(format!("[{p}]"));
            } else {
                parts.push(p.to_string());
            }
        }
        if !self.on_last_page() {
            parts.push("›".to_string());
        }

        let mut line = parts.join(" ");
        if let Some(summary) = self.range_summary() {
            line.push_str(&format!(
                "  {}–{} of {}",
                summary.start, summary.end, summary.total
            ));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginator_new() {
        let p = Paginator::new();
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.get_total_pages(), 1);
        assert_eq!(p.get_total_docs(), 0);
        assert_eq!(p.get_limit(), 10);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut p = Paginator::new().total_pages(5);
        p.set_page(3);
        assert_eq!(p.current_page(), 3);
        p.set_page(0);
        assert_eq!(p.current_page(), 1);
        p.set_page(99);
        assert_eq!(p.current_page(), 5);
    }

    #[test]
    fn test_prev_next_stop_at_bounds() {
        let mut p = Paginator::new().total_pages(3);

        assert!(p.on_first_page());
        p.prev_page();
        assert_eq!(p.current_page(), 1);

        p.next_page();
        p.next_page();
        assert_eq!(p.current_page(), 3);
        assert!(p.on_last_page());
        p.next_page();
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_visible_pages_centered() {
        let p = Paginator::new().total_pages(20).page(7);
        assert_eq!(p.visible_pages(), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_visible_pages_small_total() {
        let p = Paginator::new().total_pages(3).page(1);
        assert_eq!(p.visible_pages(), vec![1, 2, 3]);
    }

    #[test]
    fn test_visible_pages_at_edges() {
        let p = Paginator::new().total_pages(20).page(1);
        assert_eq!(p.visible_pages(), vec![1, 2, 3, 4, 5]);

        let p = Paginator::new().total_pages(20).page(20);
        assert_eq!(p.visible_pages(), vec![16, 17, 18, 19, 20]);

        let p = Paginator::new().total_pages(20).page(19);
        assert_eq!(p.visible_pages(), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_range_summary() {
        let p = Paginator::new()
            .limit(10)
            .total_docs(95)
            .total_pages(10)
            .page(3);
        let summary = p.range_summary().unwrap();
        assert_eq!(summary.start, 21);
        assert_eq!(summary.end, 30);
        assert_eq!(summary.total, 95);
    }

    #[test]
    fn test_range_summary_partial_last_page() {
        let p = Paginator::new()
            .limit(10)
            .total_docs(95)
            .total_pages(10)
            .page(10);
        let summary = p.range_summary().unwrap();
        assert_eq!(summary.start, 91);
        assert_eq!(summary.end, 95);
    }

    #[test]
    fn test_range_summary_suppressed_at_zero_docs() {
        let p = Paginator::new().limit(10).total_docs(0);
        assert_eq!(p.range_summary(), None);
    }

    #[test]
    fn test_set_total_pages_from_docs() {
        let mut p = Paginator::new().limit(10);
        assert_eq!(p.set_total_pages_from_docs(25), 3);
        assert_eq!(p.set_total_pages_from_docs(20), 2);
        assert_eq!(p.set_total_pages_from_docs(0), 1);
    }

    #[test]
    fn test_metadata_update_keeps_page_in_range() {
        let mut p = Paginator::new().total_pages(10).page(9);
        p.set_metadata(4, 40, 10);
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn test_view_marks_current_page() {
        let p = Paginator::new()
            .limit(10)
            .total_docs(195)
            .total_pages(20)
            .page(7);
        let view = p.view();
        assert!(view.contains("[7]"));
        assert!(view.contains('‹'));
        assert!(view.contains('›'));
        assert!(view.contains("61–70 of 195"));
    }

    #[test]
    fn test_view_drops_arrows_at_bounds() {
        let p = Paginator::new().total_pages(3).page(1);
        let view = p.view();
        assert!(!view.contains('‹'));
        assert!(view.contains('›'));

        let p = Paginator::new().total_pages(3).page(3);
        let view = p.view();
        assert!(view.contains('‹'));
        assert!(!view.contains('›'));
    }

    #[test]
    fn test_view_single_page_no_arrows_no_summary() {
        let p = Paginator::new();
        assert_eq!(p.view(), "[1]");
    }
}
