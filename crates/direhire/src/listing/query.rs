use serde::{Deserialize, Serialize};

use super::domain::WorkerRecord;
use super::engine::{ListingEngine, ListingSettings, ListingView};
use super::filter::FilterDimension;
use super::sort::SortKey;

/// Stateless listing request: a full filter/sort/page selection evaluated in
/// one shot, as sent by the search endpoint and the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub work_types: Vec<String>,
    #[serde(default)]
    pub min_rating: Vec<f32>,
    #[serde(default)]
    pub price_min: Option<u32>,
    #[serde(default)]
    pub price_max: Option<u32>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub page: Option<usize>,
}

impl ListingQuery {
    fn selections(&self) -> impl Iterator<Item = (FilterDimension, String)> + '_ {
        let labels = [
            (FilterDimension::ServiceType, &self.services),
            (FilterDimension::Experience, &self.experience),
            (FilterDimension::Availability, &self.availability),
            (FilterDimension::WorkType, &self.work_types),
        ]
        .into_iter()
        .flat_map(|(dimension, values)| {
            values
                .iter()
                .map(move |value| (dimension, value.trim().to_string()))
        });

        let ratings = self
            .min_rating
            .iter()
            .map(|threshold| (FilterDimension::MinimumRating, threshold.to_string()));

        labels.chain(ratings)
    }

    /// Replays the query onto `engine`.
    pub fn apply_to(&self, engine: &mut ListingEngine) {
        for (dimension, value) in self.selections() {
            engine.select_filter(dimension, value);
        }

        if self.price_min.is_some() || self.price_max.is_some() {
            let bounds = engine.filters().bounds();
            engine.set_price_range(
                self.price_min.unwrap_or(bounds.floor),
                self.price_max.unwrap_or(bounds.ceiling),
            );
        }

        engine.set_sort(self.sort);
        engine.set_page(self.page.unwrap_or(1));
    }

    pub fn evaluate(&self, records: Vec<WorkerRecord>, settings: ListingSettings) -> ListingView {
        let mut engine = ListingEngine::new(records, settings);
        self.apply_to(&mut engine);
        engine.view()
    }
}
