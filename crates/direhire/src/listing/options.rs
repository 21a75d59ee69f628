use serde::Serialize;

use super::domain::{AvailabilityWindow, ExperienceTier, WorkType, SERVICE_SLUGS};
use super::filter::FilterDimension;
use super::sort::SortKey;
use crate::i18n::Translator;

pub const RATING_BUCKETS: [u8; 4] = [4, 3, 2, 1];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label_key: String,
    pub label: String,
}

/// One sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroup {
    pub dimension: FilterDimension,
    pub title_key: &'static str,
    pub title: String,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

fn option(translator: &Translator, value: &str, label_key: String) -> FilterOption {
    FilterOption {
        value: value.to_string(),
        label: translator.t(&label_key).to_string(),
        label_key,
    }
}

/// Known options per dimension with labels resolved for `translator`'s locale.
pub fn filter_groups(translator: &Translator) -> Vec<FilterGroup> {
    FilterDimension::ALL
        .into_iter()
        .map(|dimension| {
            let options = match dimension {
                FilterDimension::ServiceType => SERVICE_SLUGS
                    .iter()
                    .map(|slug| option(translator, slug, format!("services.{slug}")))
                    .collect(),
                FilterDimension::Experience => ExperienceTier::ALL
                    .iter()
                    .map(|tier| option(translator, tier.key(), format!("filters.{}", tier.key())))
                    .collect(),
                FilterDimension::Availability => AvailabilityWindow::ALL
                    .iter()
                    .map(|window| {
                        let label_key = match window {
                            AvailabilityWindow::Today => "filters.today",
                            AvailabilityWindow::ThisWeek => "filters.thisWeek",
                            AvailabilityWindow::Flexible => "filters.flexible",
                        };
                        option(translator, window.key(), label_key.to_string())
                    })
                    .collect(),
                FilterDimension::WorkType => WorkType::ALL
                    .iter()
                    .map(|work_type| {
                        option(
                            translator,
                            work_type.key(),
                            format!("filters.{}", work_type.key()),
                        )
                    })
                    .collect(),
                FilterDimension::MinimumRating => RATING_BUCKETS
                    .iter()
                    .map(|bucket| FilterOption {
                        value: bucket.to_string(),
                        label_key: "filters.andAbove".to_string(),
                        label: format!("{bucket}★ {}", translator.t("filters.andAbove")),
                    })
                    .collect(),
            };

            let title_key = title_key(dimension);
            FilterGroup {
                dimension,
                title_key,
                title: translator.t(title_key).to_string(),
                options,
            }
        })
        .collect()
}

fn title_key(dimension: FilterDimension) -> &'static str {
    match dimension {
        FilterDimension::ServiceType => "filters.serviceType",
        FilterDimension::Experience => "filters.experienceLevel",
        FilterDimension::Availability => "filters.availability",
        FilterDimension::WorkType => "filters.workPreference",
        FilterDimension::MinimumRating => "filters.minimumRating",
    }
}

pub fn sort_options() -> Vec<SortOption> {
    SortKey::ALL
        .iter()
        .map(|key| SortOption {
            value: key.key(),
            label: key.label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn groups_cover_every_dimension_in_order() {
        let groups = filter_groups(&Translator::new(Locale::En));
        let dimensions: Vec<_> = groups.iter().map(|group| group.dimension).collect();
        assert_eq!(dimensions, FilterDimension::ALL.to_vec());
        assert_eq!(groups[0].options.len(), 10);
        assert_eq!(groups[0].options[0].label, "Carpenter");
        assert_eq!(groups[3].title, "Work Preference");
    }

    #[test]
    fn hindi_labels_resolve() {
        let groups = filter_groups(&Translator::new(Locale::Hi));
        let expert = groups[1]
            .options
            .iter()
            .find(|option| option.value == "expert")
            .expect("expert option");
        assert_eq!(expert.label, "विशेषज्ञ");
    }

    #[test]
    fn sort_options_match_keys() {
        let options = sort_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].value, "rating");
        assert_eq!(options[4].label, "Available First");
    }
}
