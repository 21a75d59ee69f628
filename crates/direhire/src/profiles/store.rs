use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{AvailabilityWindow, ExperienceTier, WorkType, WorkerId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Worker,
    Admin,
}

/// `users` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// `worker_profiles` table. Nullable columns stay optional here and are
/// defaulted when the read model is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfileRow {
    pub id: WorkerId,
    pub user_id: UserId,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<u32>,
    #[serde(default)]
    pub project_rate: Option<u32>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    pub location: String,
    #[serde(default)]
    pub service_area: Vec<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub portfolio_images: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub total_jobs: Option<u32>,
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub work_types: Vec<WorkType>,
}

/// `services` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// `worker_services` join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerServiceRow {
    pub worker_id: WorkerId,
    pub service_id: ServiceId,
    pub experience_level: ExperienceTier,
}

/// `reviews` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub id: String,
    pub job_id: JobId,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub reviewee_id: UserId,
    pub reviewer_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// `jobs` table, trimmed to what the profile page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRow {
    pub id: JobId,
    pub title: String,
    pub service_id: ServiceId,
    pub customer_id: UserId,
}

/// Whole-catalog dump, used to seed in-memory stores from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub users: Vec<UserRow>,
    #[serde(default)]
    pub worker_profiles: Vec<WorkerProfileRow>,
    #[serde(default)]
    pub services: Vec<ServiceRow>,
    #[serde(default)]
    pub worker_services: Vec<WorkerServiceRow>,
    #[serde(default)]
    pub reviews: Vec<ReviewRow>,
    #[serde(default)]
    pub jobs: Vec<JobRow>,
}

/// Read-only query surface of the hosted marketplace database: single-row
/// fetches by id and equality filters on foreign keys.
pub trait MarketplaceStore: Send + Sync {
    fn worker_profile(&self, id: &WorkerId) -> Result<Option<WorkerProfileRow>, RepositoryError>;
    fn worker_profiles(&self) -> Result<Vec<WorkerProfileRow>, RepositoryError>;
    fn user(&self, id: &UserId) -> Result<Option<UserRow>, RepositoryError>;
    fn service(&self, id: &ServiceId) -> Result<Option<ServiceRow>, RepositoryError>;
    fn worker_services(&self, worker_id: &WorkerId)
        -> Result<Vec<WorkerServiceRow>, RepositoryError>;
    fn reviews_for(&self, reviewee_id: &UserId) -> Result<Vec<ReviewRow>, RepositoryError>;
    fn job(&self, id: &JobId) -> Result<Option<JobRow>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
