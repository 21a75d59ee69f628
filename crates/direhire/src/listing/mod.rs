//! Worker listing engine: filter, sort and paginate an in-memory collection
//! of worker records for the storefront grid.

pub mod domain;
mod engine;
pub mod filter;
mod import;
pub mod options;
pub mod page;
mod query;
pub mod sort;

#[cfg(test)]
mod tests;

pub use domain::{
    AvailabilityWindow, ExperienceTier, WorkType, WorkerId, WorkerRecord, SERVICE_SLUGS,
};
pub use engine::{compute_filtered_sorted, ListingEngine, ListingSettings, ListingView};
pub use filter::{FilterDimension, FilterState, PriceBounds, PriceRange};
pub use import::{CatalogImportError, WorkerCatalogImporter};
pub use options::{filter_groups, sort_options, FilterGroup, FilterOption, SortOption};
pub use page::{compute_page, PageState, DEFAULT_PAGE_SIZE};
pub use query::ListingQuery;
pub use sort::{sort_records, SortKey};
