use chrono::{DateTime, Utc};
use serde::Serialize;

use super::store::UserId;
use crate::listing::{ExperienceTier, WorkerId};

/// Contact card pulled from the owning user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferedService {
    pub service_name: String,
    pub experience_level: ExperienceTier,
}

/// Worker profile joined with its user and offered services.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerProfile {
    pub id: WorkerId,
    pub user_id: UserId,
    pub bio: String,
    pub hourly_rate: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_rate: Option<u32>,
    pub experience_years: u32,
    pub location: String,
    pub service_area: Vec<String>,
    pub is_available: bool,
    pub is_verified: bool,
    pub portfolio_images: Vec<String>,
    pub skills: Vec<String>,
    pub rating: f32,
    pub total_jobs: u32,
    pub user: ContactCard,
    pub services: Vec<OfferedService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub reviewer_name: String,
    pub created_at: DateTime<Utc>,
    pub job_title: String,
}

/// Everything the profile page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePage {
    pub profile: WorkerProfile,
    pub reviews: Vec<ReviewView>,
}
