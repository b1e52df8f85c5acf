//! Page slicing and navigation for the participants table.

use crate::error::{LeaderboardError, Result};
use serde::Serialize;
use std::ops::Range;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A pagination button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    Number(usize),
}

/// Current page of a fixed-size paginated list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
}

/// Rendered state of the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageControls {
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
    pub pages: Vec<PageButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(LeaderboardError::InvalidPageSize);
        }
        Ok(Self {
            page_size,
            current: 1,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Move to another page of a list of `len` rows.
    ///
    /// Out-of-range moves are clamped; prev on the first page and next on
    /// the last page do nothing.
    pub fn navigate(&mut self, nav: PageNav, len: usize) {
        let last = self.total_pages(len).max(1);
        self.current = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.current.saturating_sub(1).max(1),
            PageNav::Next => (self.current + 1).min(last),
            PageNav::Last => last,
            PageNav::Number(n) => n.clamp(1, last),
        };
    }

    /// Index range of `page` within a list of `len` rows.
    pub fn page_range(&self, page: usize, len: usize) -> Range<usize> {
        let start = page.saturating_sub(1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// 1-based leaderboard position of a row on `page`.
    pub fn position(&self, page: usize, index: usize) -> usize {
        (page - 1) * self.page_size + index + 1
    }

    pub fn controls(&self, len: usize) -> PageControls {
        let total = self.total_pages(len);
        let at_first = self.current <= 1;
        let at_last = self.current >= total;

        PageControls {
            first_enabled: !at_first,
            prev_enabled: !at_first,
            next_enabled: !at_last,
            last_enabled: !at_last,
            pages: (1..=total)
                .map(|number| PageButton {
                    number,
                    active: number == self.current,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Paginator::new(0).is_err());
    }

    #[test]
    fn test_last_page_size() {
        let pager = Paginator::new(10).unwrap();

        for n in 1..=35usize {
            let total = pager.total_pages(n);
            let last = pager.page_range(total, n);
            assert_eq!(last.len(), n - 10 * ((n - 1) / 10));
            assert_eq!(last.end, n);
        }
    }

    #[test]
    fn test_pages_concatenate_to_list() {
        let pager = Paginator::new(10).unwrap();
        let items: Vec<usize> = (0..27).collect();

        let mut joined = Vec::new();
        for page in 1..=pager.total_pages(items.len()) {
            joined.extend_from_slice(&items[pager.page_range(page, items.len())]);
        }
        assert_eq!(joined, items);
        assert!(pager.page_range(4, items.len()).is_empty());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut pager = Paginator::new(10).unwrap();
        let len = 25;

        pager.navigate(PageNav::Prev, len);
        assert_eq!(pager.current_page(), 1);

        pager.navigate(PageNav::Last, len);
        assert_eq!(pager.current_page(), 3);

        pager.navigate(PageNav::Next, len);
        assert_eq!(pager.current_page(), 3);

        pager.navigate(PageNav::Number(99), len);
        assert_eq!(pager.current_page(), 3);

        pager.navigate(PageNav::Number(0), len);
        assert_eq!(pager.current_page(), 1);

        pager.navigate(PageNav::Next, len);
        pager.navigate(PageNav::Prev, len);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_positions() {
        let pager = Paginator::new(10).unwrap();
        assert_eq!(pager.position(1, 0), 1);
        assert_eq!(pager.position(2, 0), 11);
        assert_eq!(pager.position(3, 4), 25);
    }

    #[test]
    fn test_controls() {
        let mut pager = Paginator::new(10).unwrap();
        let controls = pager.controls(21);

        assert!(!controls.first_enabled);
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
        assert_eq!(controls.pages.len(), 3);
        assert!(controls.pages[0].active);

        pager.navigate(PageNav::Last, 21);
        let controls = pager.controls(21);
        assert!(controls.prev_enabled);
        assert!(!controls.last_enabled);
        assert!(controls.pages[2].active);
    }

    #[test]
    fn test_empty_list() {
        let mut pager = Paginator::new(10).unwrap();

        pager.navigate(PageNav::Next, 0);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(0), 0);
        assert!(pager.page_range(1, 0).is_empty());

        let controls = pager.controls(0);
        assert!(controls.pages.is_empty());
        assert!(!controls.next_enabled);
    }
}
