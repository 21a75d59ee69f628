use super::common::*;
use crate::listing::domain::ExperienceTier;
use crate::listing::{
    compute_filtered_sorted, sort_records, FilterDimension, FilterState, ListingEngine,
    ListingSettings, PriceBounds, SortKey,
};

#[test]
fn default_filters_keep_every_record() {
    let records = storefront();
    let filters = FilterState::default();

    for sort in SortKey::ALL {
        let result = compute_filtered_sorted(&records, &filters, sort);
        let mut returned = ids(result);
        returned.sort_unstable();
        assert_eq!(returned, vec!["1", "2", "3", "4", "5", "6"], "sort {sort:?}");
    }
}

#[test]
fn rating_sort_keeps_tie_order() {
    let records = storefront();
    let result =
        compute_filtered_sorted(&records, &FilterState::default(), SortKey::RatingDescending);
    assert_eq!(ids(result.iter().copied()), vec!["2", "1", "6", "3", "4", "5"]);
}

#[test]
fn rating_sort_is_idempotent() {
    let records = storefront();
    let mut once =
        compute_filtered_sorted(&records, &FilterState::default(), SortKey::RatingDescending);
    let before = ids(once.iter().copied());
    sort_records(&mut once, SortKey::RatingDescending);
    assert_eq!(ids(once.iter().copied()), before);
}

#[test]
fn price_and_review_sorts() {
    let records = storefront();
    let filters = FilterState::default();

    let ascending = compute_filtered_sorted(&records, &filters, SortKey::PriceAscending);
    assert_eq!(ids(ascending), vec!["4", "5", "6", "1", "3", "2"]);

    let descending = compute_filtered_sorted(&records, &filters, SortKey::PriceDescending);
    assert_eq!(ids(descending), vec!["2", "3", "1", "6", "5", "4"]);

    let reviews = compute_filtered_sorted(&records, &filters, SortKey::ReviewCountDescending);
    assert_eq!(ids(reviews), vec!["2", "4", "1", "6", "3", "5"]);
}

#[test]
fn availability_first_preserves_input_order() {
    let records = storefront();
    let result =
        compute_filtered_sorted(&records, &FilterState::default(), SortKey::AvailabilityFirst);
    assert_eq!(ids(result), vec!["1", "2", "4", "5", "6", "3"]);
}

#[test]
fn six_records_fit_one_page() {
    let engine = ListingEngine::new(storefront(), settings());
    let view = engine.view();

    assert_eq!(view.workers.len(), 6);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_count, 6);
}

#[test]
fn default_window_keeps_rates_outside_the_bound() {
    let mut records = storefront();
    records[0].hourly_rate = 0;
    records[1].hourly_rate = 650;

    let result =
        compute_filtered_sorted(&records, &FilterState::default(), SortKey::RatingDescending);
    assert_eq!(result.len(), records.len());

    let mut engine = ListingEngine::new(records, settings());
    assert_eq!(engine.total_count(), 6);
    assert_eq!(engine.active_filter_count(), 0);

    engine.set_price_range(10, 500);
    assert_eq!(engine.total_count(), 6);

    engine.set_price_range(10, 499);
    assert_eq!(engine.total_count(), 4);
    assert_eq!(engine.active_filter_count(), 1);

    engine.clear_all_filters();
    assert_eq!(engine.total_count(), 6);
}

#[test]
fn price_window_filters_inclusively() {
    let mut records = storefront();
    records.truncate(2);
    records[0].hourly_rate = 85;
    records[1].hourly_rate = 150;

    let mut filters = FilterState::default();
    filters.set_price_range(50, 100);
    let result = compute_filtered_sorted(&records, &filters, SortKey::RatingDescending);
    assert_eq!(ids(result), vec!["1"]);
}

#[test]
fn minimum_rating_means_at_least() {
    let mut records = storefront();
    records.truncate(3);
    records[0].rating = 4.8;
    records[1].rating = 4.5;
    records[2].rating = 3.9;

    let mut filters = FilterState::default();
    filters.toggle(FilterDimension::MinimumRating, "4");
    let result = compute_filtered_sorted(&records, &filters, SortKey::RatingDescending);
    assert_eq!(ids(result), vec!["1", "2"]);
}

#[test]
fn dimensions_combine_with_and_values_with_or() {
    let mut engine = ListingEngine::new(storefront(), settings());
    engine.toggle_filter(FilterDimension::ServiceType, "cleaner");
    engine.toggle_filter(FilterDimension::ServiceType, "painter");
    engine.toggle_filter(FilterDimension::ServiceType, "carpenter");
    engine.toggle_filter(FilterDimension::Experience, ExperienceTier::Intermediate.key());

    assert_eq!(ids(engine.filtered()), vec!["4", "5"]);
    assert_eq!(engine.active_filter_count(), 4);
}

#[test]
fn clearing_restores_identity_and_zero_count() {
    let records = storefront();
    let mut engine = ListingEngine::new(records.clone(), settings());
    let unfiltered: Vec<String> = ids(engine.filtered())
        .into_iter()
        .map(str::to_string)
        .collect();

    engine.toggle_filter(FilterDimension::ServiceType, "plumber");
    engine.toggle_filter(FilterDimension::ServiceType, "mason");
    engine.toggle_filter(FilterDimension::Availability, "today");
    assert_eq!(engine.active_filter_count(), 3);
    engine.set_sort(SortKey::PriceAscending);

    engine.clear_all_filters();
    assert_eq!(engine.active_filter_count(), 0);
    assert_eq!(engine.sort(), SortKey::PriceAscending);

    engine.set_sort(SortKey::RatingDescending);
    assert_eq!(ids(engine.filtered()), unfiltered);
    let cleared = compute_filtered_sorted(&records, engine.filters(), SortKey::RatingDescending);
    assert_eq!(ids(cleared), unfiltered);
}

#[test]
fn shrinking_result_reclamps_page() {
    let mut engine = ListingEngine::new(bulk(20), settings());
    assert_eq!(engine.total_pages(), 4);

    engine.set_page(4);
    assert_eq!(engine.page().current, 4);
    assert_eq!(engine.view().workers.len(), 2);

    engine.toggle_filter(FilterDimension::ServiceType, "driver");
    assert_eq!(engine.total_count(), 10);
    assert_eq!(engine.page().current, 2);
    assert_eq!(engine.view().workers.len(), 4);

    engine.toggle_filter(FilterDimension::ServiceType, "driver");
    engine.toggle_filter(FilterDimension::ServiceType, "unknown-trade");
    let view = engine.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 1);
    assert!(view.workers.is_empty());
}

#[test]
fn page_navigation_stays_in_range() {
    let mut engine = ListingEngine::new(bulk(13), settings());
    engine.previous_page();
    assert_eq!(engine.page().current, 1);

    engine.next_page();
    engine.next_page();
    engine.next_page();
    assert_eq!(engine.page().current, 3);
    assert_eq!(engine.view().workers.len(), 1);

    engine.set_page(0);
    assert_eq!(engine.page().current, 1);
}

#[test]
fn pages_partition_the_filtered_list() {
    let mut engine = ListingEngine::new(bulk(29), settings());
    engine.set_sort(SortKey::PriceDescending);
    let expected: Vec<String> = engine
        .filtered()
        .iter()
        .map(|record| record.id.0.clone())
        .collect();

    let mut seen = Vec::new();
    for page in 1..=engine.total_pages() {
        engine.set_page(page);
        let view = engine.view();
        assert!(view.workers.len() <= view.page_size);
        seen.extend(view.workers.into_iter().map(|record| record.id.0));
    }
    assert_eq!(seen, expected);
}

#[test]
fn custom_settings_drive_page_size_and_bounds() {
    let settings = ListingSettings {
        page_size: 4,
        price_bounds: PriceBounds::new(20, 200),
    };
    let mut engine = ListingEngine::new(bulk(25), settings);

    // rates run 10..=250, wider than the 20..=200 bound
    assert_eq!(engine.total_count(), 25);
    assert_eq!(engine.total_pages(), 7);
    assert_eq!(engine.active_filter_count(), 0);

    engine.set_price_range(0, 1_000);
    assert_eq!(engine.total_count(), 25);
    assert_eq!(engine.active_filter_count(), 0);

    engine.set_price_range(50, 60);
    assert_eq!(ids(engine.filtered()), vec!["bulk-4", "bulk-5"]);
    assert_eq!(engine.total_pages(), 1);
    assert_eq!(engine.active_filter_count(), 1);
}
