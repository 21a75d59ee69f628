use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::domain::WorkerRecord;

/// Sort order offered by the listing header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "rating")]
    RatingDescending,
    #[serde(rename = "price-low")]
    PriceAscending,
    #[serde(rename = "price-high")]
    PriceDescending,
    #[serde(rename = "reviews")]
    ReviewCountDescending,
    #[serde(rename = "availability")]
    AvailabilityFirst,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::RatingDescending,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::ReviewCountDescending,
        SortKey::AvailabilityFirst,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            SortKey::RatingDescending => "rating",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::ReviewCountDescending => "reviews",
            SortKey::AvailabilityFirst => "availability",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::RatingDescending => "Highest Rated",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::ReviewCountDescending => "Most Reviews",
            SortKey::AvailabilityFirst => "Available First",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.key().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn compare(self, a: &WorkerRecord, b: &WorkerRecord) -> Ordering {
        match self {
            SortKey::RatingDescending => b.rating.total_cmp(&a.rating),
            SortKey::PriceAscending => a.hourly_rate.cmp(&b.hourly_rate),
            SortKey::PriceDescending => b.hourly_rate.cmp(&a.hourly_rate),
            SortKey::ReviewCountDescending => b.review_count.cmp(&a.review_count),
            SortKey::AvailabilityFirst => b.is_available.cmp(&a.is_available),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|key| key.key()).collect();
            format!("unknown sort '{raw}' (expected one of {})", known.join(", "))
        })
    }
}

/// Stable in-place sort; ties keep their incoming relative order.
pub fn sort_records(records: &mut [&WorkerRecord], key: SortKey) {
    records.sort_by(|a, b| key.compare(a, b));
}
