//! Page-link model for the pagination control.
//!
//! Windowing follows the classic paginator layout: the first and last
//! `margin_pages` are always linked, a window of `page_range` pages is kept
//! around the selected page, and every gap collapses into one break (`...`).

/// Pages always linked at each end.
pub const MARGIN_PAGES_DISPLAYED: u32 = 1;

/// Size of the window around the selected page.
pub const PAGE_RANGE_DISPLAYED: u32 = 5;

pub const PREVIOUS_LABEL: &str = "previous";
pub const NEXT_LABEL: &str = "next";
pub const BREAK_LABEL: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// 1-based page number.
    Page(u32),
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: u64,
    limit: u32,
    page: u32,
    margin_pages: u32,
    page_range: u32,
}

impl Pagination {
    /// `page` is 1-based and clamped into `1..=page_count`.
    pub fn new(total: u64, limit: u32, page: u32) -> Self {
        Self {
            total,
            limit: limit.max(1),
            page,
            margin_pages: MARGIN_PAGES_DISPLAYED,
            page_range: PAGE_RANGE_DISPLAYED,
        }
    }

    pub fn with_margin_pages(mut self, margin_pages: u32) -> Self {
        self.margin_pages = margin_pages;
        self
    }

    pub fn with_page_range(mut self, page_range: u32) -> Self {
        self.page_range = page_range;
        self
    }

    /// The control is hidden while the backend reports no records.
    pub fn is_visible(&self) -> bool {
        self.total != 0
    }

    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn current(&self) -> u32 {
        self.page.clamp(1, self.page_count().max(1))
    }

    pub fn previous(&self) -> Option<u32> {
        let current = self.current();
        (self.is_visible() && current > 1).then(|| current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        let current = self.current();
        (current < self.page_count()).then(|| current + 1)
    }

    pub fn items(&self) -> Vec<PageItem> {
        let page_count = self.page_count();
        if page_count <= self.page_range {
            return (1..=page_count).map(PageItem::Page).collect();
        }

        // Window bounds are fractional for odd ranges, as in the layout this
        // reproduces: a range of 5 spans 2.5 pages on each side.
        let selected = f64::from(self.current() - 1);
        let count = f64::from(page_count);
        let range = f64::from(self.page_range);

        let (left, right) = if selected > count - range / 2.0 {
            let right = count - selected;
            (range - right, right)
        } else if selected < range / 2.0 {
            (selected, range - selected)
        } else {
            (range / 2.0, range / 2.0)
        };

        let mut items = Vec::new();
        for index in 0..page_count {
            let page = index + 1;
            let in_margin =
                page <= self.margin_pages || page > page_count.saturating_sub(self.margin_pages);
            let position = f64::from(index);
            let in_window = position >= selected - left && position <= selected + right;

            if in_margin || in_window {
                items.push(PageItem::Page(page));
            } else if items.last() != Some(&PageItem::Break) {
                items.push(PageItem::Break);
            }
        }
        items
    }
}
