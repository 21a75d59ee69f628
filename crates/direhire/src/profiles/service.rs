use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{ContactCard, OfferedService, ProfilePage, ReviewView, WorkerProfile};
use super::store::{MarketplaceStore, RepositoryError, UserRow, WorkerProfileRow};
use crate::listing::{ExperienceTier, WorkerId, WorkerRecord};

const TOP_RATED_MIN_RATING: f32 = 4.8;
const TOP_RATED_MIN_JOBS: u32 = 50;
const ANONYMOUS_REVIEWER: &str = "Anonymous";
const UNKNOWN_JOB: &str = "Untitled job";
const FALLBACK_PROFESSION: &str = "Worker";

/// Read model over the marketplace store: assembles joined profile views and
/// listing records.
pub struct ProfileService<S> {
    store: Arc<S>,
}

impl<S> ProfileService<S>
where
    S: MarketplaceStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Profile joined with its user (required) and offered services.
    pub fn profile(&self, id: &WorkerId) -> Result<WorkerProfile, ProfileError> {
        let (row, user) = self.profile_row(id)?;
        let services = self.offered_services(&row.id)?;
        Ok(assemble_profile(row, user, services))
    }

    /// Reviews left for the worker, newest first.
    pub fn reviews(&self, id: &WorkerId) -> Result<Vec<ReviewView>, ProfileError> {
        let (row, _) = self.profile_row(id)?;
        self.reviews_for_row(&row)
    }

    pub fn page(&self, id: &WorkerId) -> Result<ProfilePage, ProfileError> {
        let (row, user) = self.profile_row(id)?;
        let reviews = self.reviews_for_row(&row)?;
        let services = self.offered_services(&row.id)?;
        Ok(ProfilePage {
            profile: assemble_profile(row, user, services),
            reviews,
        })
    }

    /// Listing records for every profile whose owning user exists.
    pub fn listing_records(&self) -> Result<Vec<WorkerRecord>, ProfileError> {
        let rows = self.store.worker_profiles()?;
        let mut records = Vec::with_capacity(rows.len());

        for row in rows {
            let Some(user) = self.store.user(&row.user_id)? else {
                warn!(worker_id = %row.id, "skipping worker profile without a user row");
                continue;
            };
            let services = self.offered_services(&row.id)?;
            let review_count = self.store.reviews_for(&row.user_id)?.len();
            records.push(listing_record(row, user, services, review_count));
        }

        debug!(count = records.len(), "listing records assembled");
        Ok(records)
    }

    fn profile_row(&self, id: &WorkerId) -> Result<(WorkerProfileRow, UserRow), ProfileError> {
        let row = self
            .store
            .worker_profile(id)?
            .ok_or_else(|| ProfileError::NotFound(id.clone()))?;

        match self.store.user(&row.user_id)? {
            Some(user) => Ok((row, user)),
            None => {
                warn!(worker_id = %id, user_id = %row.user_id.0, "worker profile has no user row");
                Err(ProfileError::NotFound(id.clone()))
            }
        }
    }

    fn offered_services(&self, id: &WorkerId) -> Result<Vec<OfferedService>, RepositoryError> {
        let mut services = Vec::new();
        for link in self.store.worker_services(id)? {
            match self.store.service(&link.service_id)? {
                Some(service) => services.push(OfferedService {
                    service_name: service.name,
                    experience_level: link.experience_level,
                }),
                None => {
                    warn!(
                        worker_id = %id,
                        service_id = %link.service_id.0,
                        "dangling worker service link"
                    )
                }
            }
        }
        Ok(services)
    }

    fn reviews_for_row(&self, row: &WorkerProfileRow) -> Result<Vec<ReviewView>, ProfileError> {
        let mut reviews = Vec::new();
        for review in self.store.reviews_for(&row.user_id)? {
            let reviewer_name = self
                .store
                .user(&review.reviewer_id)?
                .map(|user| user.full_name)
                .unwrap_or_else(|| ANONYMOUS_REVIEWER.to_string());
            let job_title = self
                .store
                .job(&review.job_id)?
                .map(|job| job.title)
                .unwrap_or_else(|| UNKNOWN_JOB.to_string());

            reviews.push(ReviewView {
                id: review.id,
                rating: review.rating,
                comment: review.comment.unwrap_or_default(),
                reviewer_name,
                created_at: review.created_at,
                job_title,
            });
        }

        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}

fn assemble_profile(
    row: WorkerProfileRow,
    user: UserRow,
    services: Vec<OfferedService>,
) -> WorkerProfile {
    WorkerProfile {
        id: row.id,
        user_id: row.user_id,
        bio: row.bio.unwrap_or_default(),
        hourly_rate: row.hourly_rate.unwrap_or_default(),
        project_rate: row.project_rate,
        experience_years: row.experience_years.unwrap_or_default(),
        location: row.location,
        service_area: row.service_area,
        is_available: row.is_available.unwrap_or(false),
        is_verified: row.is_verified.unwrap_or(false),
        portfolio_images: row.portfolio_images,
        skills: row.skills,
        rating: row.rating.unwrap_or_default(),
        total_jobs: row.total_jobs.unwrap_or_default(),
        user: ContactCard {
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
        },
        services,
    }
}

fn listing_record(
    row: WorkerProfileRow,
    user: UserRow,
    services: Vec<OfferedService>,
    review_count: usize,
) -> WorkerRecord {
    let rating = row.rating.unwrap_or_default().clamp(0.0, 5.0);
    let completed_jobs = row.total_jobs.unwrap_or_default();
    let experience = services
        .iter()
        .map(|service| service.experience_level)
        .max()
        .unwrap_or(ExperienceTier::Beginner);
    let profession = services
        .first()
        .map(|service| service.service_name.clone())
        .unwrap_or_else(|| FALLBACK_PROFESSION.to_string());

    WorkerRecord {
        id: row.id,
        name: user.full_name,
        profession,
        location: row.location,
        rating,
        review_count: u32::try_from(review_count).unwrap_or(u32::MAX),
        hourly_rate: row.hourly_rate.unwrap_or_default(),
        project_rate: row.project_rate,
        skills: row.skills,
        is_available: row.is_available.unwrap_or(false),
        is_verified: row.is_verified.unwrap_or(false),
        is_top_rated: rating >= TOP_RATED_MIN_RATING && completed_jobs >= TOP_RATED_MIN_JOBS,
        experience,
        completed_jobs,
        services: services
            .iter()
            .map(|service| service.service_name.trim().to_ascii_lowercase())
            .collect(),
        availability: row.availability,
        work_types: row.work_types,
    }
}

/// Error raised while assembling profile views.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("worker {0} not found")]
    NotFound(WorkerId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
