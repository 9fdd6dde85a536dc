//! Pagination State
//!
//! Page bookkeeping for the basic list.

use std::ops::Range;

/// Options offered by the size changer
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based
    current: usize,
    page_size: usize,
    /// Fixed total; `None` follows the data length
    total: Option<usize>,
}

impl Pagination {
    pub fn new(page_size: usize, total: Option<usize>) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self, len: usize) -> usize {
        self.total.unwrap_or(len)
    }

    pub fn page_count(&self, len: usize) -> usize {
        self.total(len).div_ceil(self.page_size).max(1)
    }

    /// Clamp to `1..=page_count`
    pub fn go_to(&mut self, page: usize, len: usize) {
        self.current = page.clamp(1, self.page_count(len));
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.current.saturating_sub(1), len);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.current + 1, len);
    }

    /// Change the page size, keeping the current page in range
    pub fn set_page_size(&mut self, page_size: usize, len: usize) {
        self.page_size = page_size.max(1);
        self.go_to(self.current, len);
    }

    /// Parse a quick-jumper entry; invalid input leaves the page unchanged
    pub fn jump(&mut self, input: &str, len: usize) {
        if let Ok(page) = input.trim().parse::<usize>() {
            self.go_to(page, len);
        }
    }

    /// Slice of a `len`-long list to render.
    ///
    /// The data is sliced only when it extends past the page offset;
    /// otherwise the whole list is shown (the store already paged it).
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = (self.current - 1) * self.page_size;
        if len > start {
            start..(start + self.page_size).min(len)
        } else {
            0..len
        }
    }
}

/// One slot in the pager's page list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Pages shown around `current`; short ranges are listed in full
pub fn page_items(current: usize, page_count: usize) -> Vec<PageItem> {
    const WINDOW: usize = 2;
    if page_count <= 2 * WINDOW + 5 {
        return (1..=page_count).map(PageItem::Page).collect();
    }
    let mut start = current.saturating_sub(WINDOW).max(2);
    let mut end = (current + WINDOW).min(page_count - 1);
    // keep the window width constant near the edges
    if current <= WINDOW + 2 {
        end = 2 * WINDOW + 3;
    }
    if current + WINDOW + 1 >= page_count {
        start = page_count - 2 * WINDOW - 2;
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < page_count - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(page_count));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_total_page_count() {
        let p = Pagination::new(5, Some(50));
        assert_eq!(p.page_count(5), 10);
        assert_eq!(p.total(5), 50);
    }

    #[test]
    fn test_total_follows_length() {
        let p = Pagination::new(5, None);
        assert_eq!(p.page_count(12), 3);
        assert_eq!(p.page_count(0), 1);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut p = Pagination::new(5, Some(50));
        p.go_to(0, 5);
        assert_eq!(p.current(), 1);
        p.go_to(99, 5);
        assert_eq!(p.current(), 10);
        p.prev(5);
        assert_eq!(p.current(), 9);
        p.next(5);
        p.next(5);
        assert_eq!(p.current(), 10);
    }

    #[test]
    fn test_set_page_size_keeps_page_in_range() {
        let mut p = Pagination::new(5, Some(50));
        p.go_to(10, 5);
        p.set_page_size(20, 5);
        assert_eq!(p.current(), 3);
        assert_eq!(p.page_size(), 20);
    }

    #[test]
    fn test_jump_ignores_garbage() {
        let mut p = Pagination::new(5, Some(50));
        p.jump(" 4 ", 5);
        assert_eq!(p.current(), 4);
        p.jump("four", 5);
        assert_eq!(p.current(), 4);
    }

    #[test]
    fn test_visible_range() {
        let mut p = Pagination::new(5, None);
        assert_eq!(p.visible_range(12), 0..5);
        p.go_to(3, 12);
        assert_eq!(p.visible_range(12), 10..12);

        // store-paged data shorter than the offset is shown whole
        let mut p = Pagination::new(5, Some(50));
        p.go_to(4, 5);
        assert_eq!(p.visible_range(5), 0..5);
    }

    #[test]
    fn test_page_items_short_range() {
        let items = page_items(1, 9);
        assert_eq!(items.len(), 9);
        assert!(!items.contains(&PageItem::Ellipsis));
    }

    #[test]
    fn test_page_items_windowed() {
        use PageItem::*;
        assert_eq!(
            page_items(1, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(20, 20),
            vec![Page(1), Ellipsis, Page(14), Page(15), Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }
}
