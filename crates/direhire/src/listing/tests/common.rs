use crate::listing::domain::{
    AvailabilityWindow, ExperienceTier, WorkType, WorkerId, WorkerRecord,
};
use crate::listing::ListingSettings;

#[allow(clippy::too_many_arguments)]
pub(super) fn worker(
    id: &str,
    name: &str,
    service: &str,
    rating: f32,
    review_count: u32,
    hourly_rate: u32,
    is_available: bool,
    experience: ExperienceTier,
) -> WorkerRecord {
    WorkerRecord {
        id: WorkerId(id.to_string()),
        name: name.to_string(),
        profession: service.to_string(),
        location: "Downtown Area".to_string(),
        rating,
        review_count,
        hourly_rate,
        project_rate: None,
        skills: Vec::new(),
        is_available,
        is_verified: true,
        is_top_rated: rating >= 4.8,
        experience,
        completed_jobs: review_count / 2,
        services: vec![service.to_string()],
        availability: if is_available {
            vec![AvailabilityWindow::Today, AvailabilityWindow::ThisWeek]
        } else {
            vec![AvailabilityWindow::Flexible]
        },
        work_types: vec![WorkType::Onsite],
    }
}

/// Six storefront workers; two share a 4.8 rating to exercise tie order.
pub(super) fn storefront() -> Vec<WorkerRecord> {
    vec![
        worker("1", "John Smith", "carpenter", 4.8, 127, 85, true, ExperienceTier::Expert),
        worker("2", "Maria Garcia", "plumber", 4.9, 203, 95, true, ExperienceTier::Expert),
        worker("3", "David Chen", "electrician", 4.7, 89, 90, false, ExperienceTier::Expert),
        worker("4", "Sarah Johnson", "cleaner", 4.6, 145, 45, true, ExperienceTier::Intermediate),
        worker("5", "Mike Thompson", "painter", 4.5, 76, 55, true, ExperienceTier::Intermediate),
        worker("6", "Lisa Wong", "mason", 4.8, 112, 80, true, ExperienceTier::Expert),
    ]
}

/// `count` workers with rates 10, 20, ... and alternating availability.
pub(super) fn bulk(count: usize) -> Vec<WorkerRecord> {
    (0..count)
        .map(|index| {
            worker(
                &format!("bulk-{index}"),
                &format!("Worker {index}"),
                if index % 2 == 0 { "driver" } else { "cook" },
                3.0 + (index % 5) as f32 * 0.5,
                index as u32,
                10 + 10 * index as u32,
                index % 3 != 0,
                ExperienceTier::Beginner,
            )
        })
        .collect()
}

pub(super) fn settings() -> ListingSettings {
    ListingSettings::default()
}

pub(super) fn ids<'a>(records: impl IntoIterator<Item = &'a WorkerRecord>) -> Vec<&'a str> {
    records
        .into_iter()
        .map(|record| record.id.0.as_str())
        .collect()
}
