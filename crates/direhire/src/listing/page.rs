use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// 1-based page cursor with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Pulls `current` back into `[1, total_pages(item_count)]`.
    pub fn clamp(&mut self, item_count: usize) {
        self.current = self.current.clamp(1, self.total_pages(item_count));
    }

    pub fn clamped(mut self, item_count: usize) -> Self {
        self.clamp(item_count);
        self
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Slice of `items` for the (clamped) page in `state`.
pub fn compute_page<'a, T>(items: &'a [T], state: &PageState) -> &'a [T] {
    let state = state.clamped(items.len());
    let page_size = state.page_size.max(1);
    let start = (state.current - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
