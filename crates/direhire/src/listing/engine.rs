use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::WorkerRecord;
use super::filter::{FilterDimension, FilterState, PriceBounds};
use super::page::{compute_page, PageState, DEFAULT_PAGE_SIZE};
use super::sort::SortKey;

/// Tunables for a listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSettings {
    pub page_size: usize,
    pub price_bounds: PriceBounds,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            price_bounds: PriceBounds::default(),
        }
    }
}

/// Filters then stably sorts `records`. Pure; the input order breaks ties.
pub fn compute_filtered_sorted<'a>(
    records: &'a [WorkerRecord],
    filters: &FilterState,
    sort: SortKey,
) -> Vec<&'a WorkerRecord> {
    filtered_sorted_indices(records, filters, sort)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

fn filtered_sorted_indices(
    records: &[WorkerRecord],
    filters: &FilterState,
    sort: SortKey,
) -> Vec<usize> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.admits(record))
        .map(|(index, _)| index)
        .collect();
    indices.sort_by(|a, b| sort.compare(&records[*a], &records[*b]));
    indices
}

/// Page of results plus the counts the listing header and pager render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub workers: Vec<WorkerRecord>,
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub active_filter_count: usize,
    pub sort: SortKey,
    pub filters: FilterState,
}

/// Stateful listing: owns the record collection and the user's
/// filter/sort/page state, recomputing eagerly after every event so the
/// page cursor never points past the filtered result.
#[derive(Debug, Clone)]
pub struct ListingEngine {
    records: Vec<WorkerRecord>,
    filters: FilterState,
    sort: SortKey,
    page: PageState,
    visible: Vec<usize>,
}

impl ListingEngine {
    pub fn new(records: Vec<WorkerRecord>, settings: ListingSettings) -> Self {
        let mut engine = Self {
            records,
            filters: FilterState::new(settings.price_bounds),
            sort: SortKey::default(),
            page: PageState::new(settings.page_size),
            visible: Vec::new(),
        };
        engine.refresh();
        engine
    }

    pub fn records(&self) -> &[WorkerRecord] {
        &self.records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn toggle_filter(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        self.filters.toggle(dimension, value);
        self.refresh();
    }

    pub fn select_filter(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        self.filters.select(dimension, value);
        self.refresh();
    }

    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.filters.set_price_range(min, max);
        self.refresh();
    }

    /// Clears every selection and the price window; the sort key is kept.
    pub fn clear_all_filters(&mut self) {
        self.filters.clear_all();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.refresh();
    }

    /// Jumps to `page`, clamped into the available range.
    pub fn set_page(&mut self, page: usize) {
        self.page.current = page;
        self.page.clamp(self.visible.len());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.current.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.current.saturating_sub(1));
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    pub fn total_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.visible.len())
    }

    /// Every record passing the filters, in display order.
    pub fn filtered(&self) -> Vec<&WorkerRecord> {
        self.visible
            .iter()
            .map(|index| &self.records[*index])
            .collect()
    }

    pub fn view(&self) -> ListingView {
        let workers = compute_page(&self.visible, &self.page)
            .iter()
            .map(|index| self.records[*index].clone())
            .collect();

        ListingView {
            workers,
            total_count: self.total_count(),
            total_pages: self.total_pages(),
            current_page: self.page.current,
            page_size: self.page.page_size,
            active_filter_count: self.active_filter_count(),
            sort: self.sort,
            filters: self.filters.clone(),
        }
    }

    fn refresh(&mut self) {
        self.visible = filtered_sorted_indices(&self.records, &self.filters, self.sort);
        self.page.clamp(self.visible.len());
        debug!(
            matched = self.visible.len(),
            total = self.records.len(),
            page = self.page.current,
            sort = self.sort.key(),
            "listing recomputed"
        );
    }
}
