use serde::{Deserialize, Serialize};

/// Identifier wrapper for worker profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub String);

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Worker entry as shown on a listing card. Read-only inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub id: WorkerId,
    pub name: String,
    pub profession: String,
    pub location: String,
    pub rating: f32,
    pub review_count: u32,
    pub hourly_rate: u32,
    #[serde(default)]
    pub project_rate: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub is_available: bool,
    pub is_verified: bool,
    pub is_top_rated: bool,
    pub experience: ExperienceTier,
    pub completed_jobs: u32,
    /// Service slugs (`carpenter`, `plumber`, ...) the worker is listed under.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub work_types: Vec<WorkType>,
}

/// Experience tier shared with the hosted store's `experience_level` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Beginner,
        ExperienceTier::Intermediate,
        ExperienceTier::Expert,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ExperienceTier::Beginner => "beginner",
            ExperienceTier::Intermediate => "intermediate",
            ExperienceTier::Expert => "expert",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

/// When a worker can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityWindow {
    Today,
    ThisWeek,
    Flexible,
}

impl AvailabilityWindow {
    pub const ALL: [AvailabilityWindow; 3] = [
        AvailabilityWindow::Today,
        AvailabilityWindow::ThisWeek,
        AvailabilityWindow::Flexible,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            AvailabilityWindow::Today => "today",
            AvailabilityWindow::ThisWeek => "this_week",
            AvailabilityWindow::Flexible => "flexible",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "today" => Some(Self::Today),
            "this_week" | "thisweek" => Some(Self::ThisWeek),
            "flexible" => Some(Self::Flexible),
            _ => None,
        }
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Onsite,
    Remote,
}

impl WorkType {
    pub const ALL: [WorkType; 2] = [WorkType::Onsite, WorkType::Remote];

    pub const fn key(self) -> &'static str {
        match self {
            WorkType::Onsite => "onsite",
            WorkType::Remote => "remote",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "onsite" | "on-site" => Some(Self::Onsite),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Service slugs offered in the sidebar, in display order.
pub const SERVICE_SLUGS: [&str; 10] = [
    "carpenter",
    "plumber",
    "electrician",
    "painter",
    "mason",
    "cleaner",
    "gardener",
    "cook",
    "driver",
    "tutor",
];
