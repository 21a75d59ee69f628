use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::listing::{AvailabilityWindow, ExperienceTier, WorkType, WorkerId};
use crate::profiles::store::{
    CatalogSnapshot, JobId, JobRow, MarketplaceStore, RepositoryError, ReviewRow, ServiceId,
    ServiceRow, UserId, UserRole, UserRow, WorkerProfileRow, WorkerServiceRow,
};
use crate::profiles::ProfileService;

/// Store double answering straight from a snapshot.
pub(super) struct SnapshotStore {
    pub(super) snapshot: CatalogSnapshot,
}

impl MarketplaceStore for SnapshotStore {
    fn worker_profile(&self, id: &WorkerId) -> Result<Option<WorkerProfileRow>, RepositoryError> {
        Ok(self
            .snapshot
            .worker_profiles
            .iter()
            .find(|row| &row.id == id)
            .cloned())
    }

    fn worker_profiles(&self) -> Result<Vec<WorkerProfileRow>, RepositoryError> {
        Ok(self.snapshot.worker_profiles.clone())
    }

    fn user(&self, id: &UserId) -> Result<Option<UserRow>, RepositoryError> {
        Ok(self.snapshot.users.iter().find(|row| &row.id == id).cloned())
    }

    fn service(&self, id: &ServiceId) -> Result<Option<ServiceRow>, RepositoryError> {
        Ok(self
            .snapshot
            .services
            .iter()
            .find(|row| &row.id == id)
            .cloned())
    }

    fn worker_services(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<WorkerServiceRow>, RepositoryError> {
        Ok(self
            .snapshot
            .worker_services
            .iter()
            .filter(|row| &row.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn reviews_for(&self, reviewee_id: &UserId) -> Result<Vec<ReviewRow>, RepositoryError> {
        Ok(self
            .snapshot
            .reviews
            .iter()
            .filter(|row| &row.reviewee_id == reviewee_id)
            .cloned()
            .collect())
    }

    fn job(&self, id: &JobId) -> Result<Option<JobRow>, RepositoryError> {
        Ok(self.snapshot.jobs.iter().find(|row| &row.id == id).cloned())
    }
}

pub(super) struct OfflineStore;

impl MarketplaceStore for OfflineStore {
    fn worker_profile(&self, _id: &WorkerId) -> Result<Option<WorkerProfileRow>, RepositoryError> {
        Err(offline())
    }

    fn worker_profiles(&self) -> Result<Vec<WorkerProfileRow>, RepositoryError> {
        Err(offline())
    }

    fn user(&self, _id: &UserId) -> Result<Option<UserRow>, RepositoryError> {
        Err(offline())
    }

    fn service(&self, _id: &ServiceId) -> Result<Option<ServiceRow>, RepositoryError> {
        Err(offline())
    }

    fn worker_services(
        &self,
        _worker_id: &WorkerId,
    ) -> Result<Vec<WorkerServiceRow>, RepositoryError> {
        Err(offline())
    }

    fn reviews_for(&self, _reviewee_id: &UserId) -> Result<Vec<ReviewRow>, RepositoryError> {
        Err(offline())
    }

    fn job(&self, _id: &JobId) -> Result<Option<JobRow>, RepositoryError> {
        Err(offline())
    }
}

fn offline() -> RepositoryError {
    RepositoryError::Unavailable("database offline".to_string())
}

pub(super) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn user(id: &str, name: &str, role: UserRole) -> UserRow {
    UserRow {
        id: UserId(id.to_string()),
        email: format!("{id}@direhire.test"),
        full_name: name.to_string(),
        phone: Some("+91 98765 43210".to_string()),
        role,
    }
}

fn profile_row(id: &str, user_id: &str, rate: u32, rating: f32, jobs: u32) -> WorkerProfileRow {
    WorkerProfileRow {
        id: WorkerId(id.to_string()),
        user_id: UserId(user_id.to_string()),
        bio: Some("Fifteen years of residential work.".to_string()),
        hourly_rate: Some(rate),
        project_rate: None,
        experience_years: Some(15),
        location: "Jaipur".to_string(),
        service_area: vec!["Jaipur".to_string(), "Ajmer".to_string()],
        is_available: Some(true),
        is_verified: Some(true),
        portfolio_images: Vec::new(),
        skills: vec!["Custom Cabinets".to_string()],
        rating: Some(rating),
        total_jobs: Some(jobs),
        availability: vec![AvailabilityWindow::Today],
        work_types: vec![WorkType::Onsite],
    }
}

/// Two workers, one orphaned profile, three reviews for the first worker.
pub(super) fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        users: vec![
            user("u-ramesh", "Ramesh Sharma", UserRole::Worker),
            user("u-meena", "Meena Iyer", UserRole::Worker),
            user("u-anita", "Anita Desai", UserRole::Customer),
            user("u-vikram", "Vikram Rao", UserRole::Customer),
        ],
        worker_profiles: vec![
            profile_row("w-ramesh", "u-ramesh", 85, 4.9, 89),
            profile_row("w-meena", "u-meena", 45, 4.2, 12),
            profile_row("w-orphan", "u-missing", 60, 4.0, 3),
        ],
        services: vec![
            ServiceRow {
                id: ServiceId("s-carpentry".to_string()),
                name: "Carpenter".to_string(),
                category: Some("home".to_string()),
                is_active: Some(true),
            },
            ServiceRow {
                id: ServiceId("s-painting".to_string()),
                name: "Painter".to_string(),
                category: Some("home".to_string()),
                is_active: Some(true),
            },
        ],
        worker_services: vec![
            WorkerServiceRow {
                worker_id: WorkerId("w-ramesh".to_string()),
                service_id: ServiceId("s-carpentry".to_string()),
                experience_level: ExperienceTier::Expert,
            },
            WorkerServiceRow {
                worker_id: WorkerId("w-ramesh".to_string()),
                service_id: ServiceId("s-painting".to_string()),
                experience_level: ExperienceTier::Intermediate,
            },
            WorkerServiceRow {
                worker_id: WorkerId("w-meena".to_string()),
                service_id: ServiceId("s-gone".to_string()),
                experience_level: ExperienceTier::Expert,
            },
        ],
        reviews: vec![
            review("r-1", "j-1", "u-anita", 5, at(2)),
            review("r-2", "j-2", "u-vikram", 4, at(9)),
            review("r-3", "j-missing", "u-deleted", 5, at(5)),
        ],
        jobs: vec![
            job("j-1", "Kitchen cabinets"),
            job("j-2", "Wardrobe repair"),
        ],
    }
}

fn review(id: &str, job: &str, reviewer: &str, rating: u8, created_at: DateTime<Utc>) -> ReviewRow {
    ReviewRow {
        id: id.to_string(),
        job_id: JobId(job.to_string()),
        rating,
        comment: Some("Solid work".to_string()),
        reviewee_id: UserId("u-ramesh".to_string()),
        reviewer_id: UserId(reviewer.to_string()),
        created_at,
    }
}

fn job(id: &str, title: &str) -> JobRow {
    JobRow {
        id: JobId(id.to_string()),
        title: title.to_string(),
        service_id: ServiceId("s-carpentry".to_string()),
        customer_id: UserId("u-anita".to_string()),
    }
}

pub(super) fn build_service() -> Arc<ProfileService<SnapshotStore>> {
    Arc::new(ProfileService::new(Arc::new(SnapshotStore {
        snapshot: snapshot(),
    })))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
