//! Client-side pagination arithmetic.
//!
//! Everything here is recomputed from the list length on each read, so a
//! window can never go stale after the list changes.

use std::ops::Range;

/// Page size used when the configuration does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Position of the 1-based page cursor over a list of `total` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl PageWindow {
    pub fn new(total: usize, page_size: usize, page: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    /// `ceil(total / page_size)`; zero for an empty list.
    pub fn last_page(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Index range of the current page, clipped to the list length.
    ///
    /// A page past the end of the list yields an empty range.
    pub fn bounds(&self) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.total);
        start.min(end)..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Page after a "next" click.
    pub fn next(&self) -> usize {
        if self.has_next() {
            self.page + 1
        } else {
            self.page
        }
    }

    /// Page after a "previous" click.
    pub fn previous(&self) -> usize {
        if self.has_previous() {
            self.page - 1
        } else {
            self.page
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_records_in_pages_of_five() {
        let items: Vec<usize> = (1..=12).collect();

        let first = PageWindow::new(items.len(), 5, 1);
        assert_eq!(first.slice(&items), &[1, 2, 3, 4, 5]);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = PageWindow::new(items.len(), 5, first.next());
        assert_eq!(second.slice(&items), &[6, 7, 8, 9, 10]);
        assert!(second.has_previous());
        assert!(second.has_next());

        let third = PageWindow::new(items.len(), 5, second.next());
        assert_eq!(third.slice(&items), &[11, 12]);
        assert!(!third.has_next());
        assert_eq!(third.next(), 3);
        assert_eq!(third.last_page(), 3);
    }

    #[test]
    fn test_no_wraparound() {
        let window = PageWindow::new(3, 5, 1);
        assert_eq!(window.previous(), 1);
        assert_eq!(window.next(), 1);
    }

    #[test]
    fn test_empty_list() {
        let window = PageWindow::new(0, 5, 1);
        assert_eq!(window.last_page(), 0);
        assert_eq!(window.bounds(), 0..0);
        assert!(!window.has_next());
        assert!(!window.has_previous());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        // The cursor is not pulled back when the list shrinks.
        let items = [1, 2, 3, 4, 5];
        let window = PageWindow::new(items.len(), 5, 2);
        assert!(window.slice(&items).is_empty());
        assert!(window.has_previous());
        assert!(!window.has_next());
    }
}
