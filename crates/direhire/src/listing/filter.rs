use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::domain::WorkerRecord;

/// Independent axis of selection in the filter sidebar. Price is handled by
/// [`PriceRange`] rather than a selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    ServiceType,
    Experience,
    Availability,
    WorkType,
    MinimumRating,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 5] = [
        FilterDimension::ServiceType,
        FilterDimension::Experience,
        FilterDimension::Availability,
        FilterDimension::WorkType,
        FilterDimension::MinimumRating,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            FilterDimension::ServiceType => "service_type",
            FilterDimension::Experience => "experience",
            FilterDimension::Availability => "availability",
            FilterDimension::WorkType => "work_type",
            FilterDimension::MinimumRating => "minimum_rating",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.key().eq_ignore_ascii_case(raw.trim()))
    }

    /// Whether `record` satisfies a non-empty selection on this dimension.
    fn admits(self, record: &WorkerRecord, selected: &BTreeSet<String>) -> bool {
        match self {
            FilterDimension::ServiceType => record
                .services
                .iter()
                .any(|service| selected.contains(service.as_str())),
            FilterDimension::Experience => selected.contains(record.experience.key()),
            FilterDimension::Availability => record
                .availability
                .iter()
                .any(|window| selected.contains(window.key())),
            FilterDimension::WorkType => record
                .work_types
                .iter()
                .any(|work_type| selected.contains(work_type.key())),
            FilterDimension::MinimumRating => minimum_threshold(selected)
                .map(|threshold| record.rating >= threshold)
                .unwrap_or(false),
        }
    }
}

/// Rating buckets read as "& above", so the loosest selected bucket wins.
fn minimum_threshold(selected: &BTreeSet<String>) -> Option<f32> {
    selected
        .iter()
        .filter_map(|raw| raw.trim().parse::<f32>().ok())
        .filter(|value| value.is_finite())
        .reduce(f32::min)
}

/// Platform-wide hourly rate bound; also the default price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub floor: u32,
    pub ceiling: u32,
}

impl PriceBounds {
    pub const DEFAULT_FLOOR: u32 = 10;
    pub const DEFAULT_CEILING: u32 = 500;

    /// Builds a bound, swapping the ends if they arrive reversed.
    pub fn new(floor: u32, ceiling: u32) -> Self {
        if floor <= ceiling {
            Self { floor, ceiling }
        } else {
            Self {
                floor: ceiling,
                ceiling: floor,
            }
        }
    }

    pub fn full_range(&self) -> PriceRange {
        PriceRange {
            min: self.floor,
            max: self.ceiling,
        }
    }

    fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.floor, self.ceiling)
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FLOOR, Self::DEFAULT_CEILING)
    }
}

/// Inclusive hourly rate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn contains(&self, rate: u32) -> bool {
        (self.min..=self.max).contains(&rate)
    }
}

/// User-selected filter configuration, one selection set per dimension.
///
/// An empty set places no constraint on its dimension. A record is kept only
/// when it passes every non-empty dimension and the price window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    selections: BTreeMap<FilterDimension, BTreeSet<String>>,
    price_range: PriceRange,
    bounds: PriceBounds,
}

impl FilterState {
    pub fn new(bounds: PriceBounds) -> Self {
        let selections = FilterDimension::ALL
            .into_iter()
            .map(|dimension| (dimension, BTreeSet::new()))
            .collect();

        Self {
            selections,
            price_range: bounds.full_range(),
            bounds,
        }
    }

    /// Adds `value` to the dimension's selection, or removes it if present.
    pub fn toggle(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        let value = value.into();
        let selected = self.selections.entry(dimension).or_default();
        if !selected.remove(&value) {
            selected.insert(value);
        }
    }

    /// Adds `value` without toggling it off when already selected.
    pub fn select(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        self.selections
            .entry(dimension)
            .or_default()
            .insert(value.into());
    }

    pub fn is_selected(&self, dimension: FilterDimension, value: &str) -> bool {
        self.selections
            .get(&dimension)
            .map(|selected| selected.contains(value))
            .unwrap_or(false)
    }

    pub fn selected(&self, dimension: FilterDimension) -> impl Iterator<Item = &str> {
        self.selections
            .get(&dimension)
            .into_iter()
            .flat_map(|selected| selected.iter().map(String::as_str))
    }

    /// Replaces the price window, clamped into the platform bound with
    /// `min <= max` restored by swapping.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.price_range = PriceRange {
            min: self.bounds.clamp(min),
            max: self.bounds.clamp(max),
        };
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Empties every selection and restores the default price window.
    pub fn clear_all(&mut self) {
        for selected in self.selections.values_mut() {
            selected.clear();
        }
        self.price_range = self.bounds.full_range();
    }

    /// True once the price window is narrower than the platform bound.
    pub fn price_is_narrowed(&self) -> bool {
        self.price_range != self.bounds.full_range()
    }

    /// Number of non-default selections; a narrowed price window counts once.
    pub fn active_filter_count(&self) -> usize {
        let selected: usize = self.selections.values().map(BTreeSet::len).sum();
        selected + usize::from(self.price_is_narrowed())
    }

    /// The price window only applies once narrowed below the platform bound.
    pub fn admits(&self, record: &WorkerRecord) -> bool {
        (!self.price_is_narrowed() || self.price_range.contains(record.hourly_rate))
            && self
                .selections
                .iter()
                .all(|(dimension, selected)| {
                    selected.is_empty() || dimension.admits(record, selected)
                })
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(PriceBounds::default())
    }
}
