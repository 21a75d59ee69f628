use direhire::listing::{
    compute_filtered_sorted, FilterDimension, FilterState, ListingEngine, ListingQuery,
    ListingSettings, SortKey, WorkerCatalogImporter, WorkerRecord,
};

fn catalog() -> Vec<WorkerRecord> {
    let data = include_bytes!("fixtures/workers.csv");
    WorkerCatalogImporter::from_reader(&data[..]).expect("fixture catalog imports")
}

fn ids<'a>(records: impl IntoIterator<Item = &'a WorkerRecord>) -> Vec<&'a str> {
    records
        .into_iter()
        .map(|record| record.id.0.as_str())
        .collect()
}

#[test]
fn default_view_pages_by_six() {
    let engine = ListingEngine::new(catalog(), ListingSettings::default());
    let view = engine.view();

    assert_eq!(view.total_count, 8);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.current_page, 1);
    assert_eq!(ids(&view.workers), vec!["2", "1", "6", "3", "4", "5"]);
    assert_eq!(view.active_filter_count, 0);
}

#[test]
fn unfiltered_catalog_is_returned_whole() {
    let records = catalog();
    let filters = FilterState::default();
    let visible = compute_filtered_sorted(&records, &filters, SortKey::AvailabilityFirst);

    assert_eq!(visible.len(), records.len());
    assert_eq!(ids(visible), vec!["1", "2", "4", "5", "6", "7", "3", "8"]);
}

#[test]
fn paging_past_the_end_is_clamped() {
    let mut engine = ListingEngine::new(catalog(), ListingSettings::default());
    engine.next_page();
    engine.next_page();

    let view = engine.view();
    assert_eq!(view.current_page, 2);
    assert_eq!(ids(&view.workers), vec!["7", "8"]);

    engine.toggle_filter(FilterDimension::WorkType, "remote");
    let view = engine.view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(ids(&view.workers), vec!["3", "8"]);
}

#[test]
fn dimensions_combine_with_and() {
    let mut engine = ListingEngine::new(catalog(), ListingSettings::default());
    engine.toggle_filter(FilterDimension::Experience, "expert");
    engine.toggle_filter(FilterDimension::Availability, "today");

    assert_eq!(ids(engine.filtered()), vec!["2", "1", "6"]);
    assert_eq!(engine.active_filter_count(), 2);
}

#[test]
fn price_window_and_rating_floor_with_price_sort() {
    let query = ListingQuery {
        min_rating: vec![4.5],
        price_min: Some(40),
        price_max: Some(90),
        sort: SortKey::PriceAscending,
        ..ListingQuery::default()
    };
    let view = query.evaluate(catalog(), ListingSettings::default());

    assert_eq!(ids(&view.workers), vec!["4", "5", "6", "1", "3"]);
    assert_eq!(view.active_filter_count, 2);
}

#[test]
fn clearing_filters_keeps_the_sort() {
    let mut engine = ListingEngine::new(catalog(), ListingSettings::default());
    engine.set_sort(SortKey::ReviewCountDescending);
    engine.toggle_filter(FilterDimension::ServiceType, "tutor");
    engine.set_price_range(20, 30);
    assert_eq!(engine.total_count(), 1);

    engine.clear_all_filters();

    assert_eq!(engine.total_count(), 8);
    assert_eq!(engine.active_filter_count(), 0);
    assert_eq!(engine.sort(), SortKey::ReviewCountDescending);
    assert_eq!(ids(&engine.view().workers)[0], "2");
}
