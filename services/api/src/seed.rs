use chrono::{TimeZone, Utc};
use direhire::listing::{AvailabilityWindow, ExperienceTier, WorkType, WorkerId};
use direhire::profiles::{
    CatalogSnapshot, JobId, JobRow, ReviewRow, ServiceId, ServiceRow, UserId, UserRole, UserRow,
    WorkerProfileRow, WorkerServiceRow,
};

struct SeedWorker {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    location: &'static str,
    service: &'static str,
    tier: ExperienceTier,
    rating: f32,
    hourly_rate: u32,
    project_rate: Option<u32>,
    completed_jobs: u32,
    experience_years: u32,
    available: bool,
    verified: bool,
    skills: [&'static str; 4],
    availability: &'static [AvailabilityWindow],
    work_types: &'static [WorkType],
}

const SERVICES: [(&str, &str, &str); 6] = [
    ("svc-carpenter", "Carpenter", "home-improvement"),
    ("svc-plumber", "Plumber", "repairs"),
    ("svc-electrician", "Electrician", "repairs"),
    ("svc-cleaner", "Cleaner", "cleaning"),
    ("svc-painter", "Painter", "home-improvement"),
    ("svc-mason", "Mason", "construction"),
];

const WORKERS: [SeedWorker; 6] = [
    SeedWorker {
        id: "1",
        name: "John Smith",
        email: "john.smith@direhire.example",
        location: "Downtown Area",
        service: "svc-carpenter",
        tier: ExperienceTier::Expert,
        rating: 4.8,
        hourly_rate: 85,
        project_rate: Some(500),
        completed_jobs: 89,
        experience_years: 15,
        available: true,
        verified: true,
        skills: [
            "Furniture Making",
            "Home Renovation",
            "Deck Building",
            "Custom Cabinets",
        ],
        availability: &[AvailabilityWindow::Today, AvailabilityWindow::ThisWeek],
        work_types: &[WorkType::Onsite],
    },
    SeedWorker {
        id: "2",
        name: "Maria Garcia",
        email: "maria.garcia@direhire.example",
        location: "North Side",
        service: "svc-plumber",
        tier: ExperienceTier::Expert,
        rating: 4.9,
        hourly_rate: 95,
        project_rate: Some(350),
        completed_jobs: 156,
        experience_years: 12,
        available: true,
        verified: true,
        skills: [
            "Emergency Repairs",
            "Bathroom Installation",
            "Pipe Fitting",
            "Water Heaters",
        ],
        availability: &[AvailabilityWindow::Today],
        work_types: &[WorkType::Onsite],
    },
    SeedWorker {
        id: "3",
        name: "David Chen",
        email: "david.chen@direhire.example",
        location: "East District",
        service: "svc-electrician",
        tier: ExperienceTier::Expert,
        rating: 4.7,
        hourly_rate: 90,
        project_rate: None,
        completed_jobs: 67,
        experience_years: 10,
        available: false,
        verified: true,
        skills: ["Wiring", "Panel Installation", "Smart Home Setup", "Lighting"],
        availability: &[AvailabilityWindow::Flexible],
        work_types: &[WorkType::Onsite, WorkType::Remote],
    },
    SeedWorker {
        id: "4",
        name: "Sarah Johnson",
        email: "sarah.johnson@direhire.example",
        location: "West End",
        service: "svc-cleaner",
        tier: ExperienceTier::Intermediate,
        rating: 4.6,
        hourly_rate: 45,
        project_rate: Some(120),
        completed_jobs: 234,
        experience_years: 6,
        available: true,
        verified: true,
        skills: [
            "Deep Cleaning",
            "Office Cleaning",
            "Move-in/out",
            "Eco-friendly",
        ],
        availability: &[AvailabilityWindow::ThisWeek],
        work_types: &[WorkType::Onsite],
    },
    SeedWorker {
        id: "5",
        name: "Mike Thompson",
        email: "mike.thompson@direhire.example",
        location: "South Bay",
        service: "svc-painter",
        tier: ExperienceTier::Intermediate,
        rating: 4.5,
        hourly_rate: 55,
        project_rate: Some(800),
        completed_jobs: 45,
        experience_years: 4,
        available: true,
        verified: false,
        skills: [
            "Interior Painting",
            "Exterior Painting",
            "Wall Texture",
            "Color Consultation",
        ],
        availability: &[AvailabilityWindow::ThisWeek, AvailabilityWindow::Flexible],
        work_types: &[WorkType::Onsite],
    },
    SeedWorker {
        id: "6",
        name: "Lisa Wong",
        email: "lisa.wong@direhire.example",
        location: "Central City",
        service: "svc-mason",
        tier: ExperienceTier::Expert,
        rating: 4.8,
        hourly_rate: 80,
        project_rate: Some(1200),
        completed_jobs: 78,
        experience_years: 11,
        available: true,
        verified: true,
        skills: [
            "Tile Installation",
            "Stone Work",
            "Bathroom Tiling",
            "Kitchen Backsplash",
        ],
        availability: &[AvailabilityWindow::Today],
        work_types: &[WorkType::Onsite],
    },
];

const CUSTOMERS: [(&str, &str); 3] = [
    ("cust-anita", "Anita Desai"),
    ("cust-vikram", "Vikram Rao"),
    ("cust-priya", "Priya Nair"),
];

// (worker, customer, rating, comment, job title, day of March 2025)
const REVIEWS: [(&str, &str, u8, &str, &str, u32); 8] = [
    ("1", "cust-anita", 5, "Cabinets fit perfectly.", "Kitchen cabinets", 3),
    ("1", "cust-vikram", 4, "Good work, finished a day late.", "Deck repair", 18),
    ("2", "cust-priya", 5, "Fixed the leak within an hour.", "Emergency leak", 7),
    ("2", "cust-anita", 5, "Very tidy installation.", "Water heater install", 21),
    ("3", "cust-vikram", 5, "Smart switches work great.", "Smart lighting", 11),
    ("4", "cust-priya", 4, "Thorough deep clean.", "Move-out clean", 2),
    ("5", "cust-anita", 4, "Nice finish on the walls.", "Living room paint", 14),
    ("6", "cust-vikram", 5, "Beautiful backsplash.", "Kitchen backsplash", 25),
];

/// Demo catalog served when no snapshot file is configured.
pub(crate) fn demo_catalog() -> CatalogSnapshot {
    let mut snapshot = CatalogSnapshot::default();

    for (id, name, category) in SERVICES {
        snapshot.services.push(ServiceRow {
            id: ServiceId(id.to_string()),
            name: name.to_string(),
            category: Some(category.to_string()),
            is_active: Some(true),
        });
    }

    for (id, name) in CUSTOMERS {
        snapshot.users.push(UserRow {
            id: UserId(id.to_string()),
            email: format!("{id}@direhire.example"),
            full_name: name.to_string(),
            phone: None,
            role: UserRole::Customer,
        });
    }

    for worker in &WORKERS {
        let user_id = UserId(format!("user-{}", worker.id));
        snapshot.users.push(UserRow {
            id: user_id.clone(),
            email: worker.email.to_string(),
            full_name: worker.name.to_string(),
            phone: Some(format!("+91 98100 0000{}", worker.id)),
            role: UserRole::Worker,
        });
        snapshot.worker_profiles.push(WorkerProfileRow {
            id: WorkerId(worker.id.to_string()),
            user_id,
            bio: Some(format!(
                "{} with {} years on the job in {}.",
                worker.name, worker.experience_years, worker.location
            )),
            hourly_rate: Some(worker.hourly_rate),
            project_rate: worker.project_rate,
            experience_years: Some(worker.experience_years),
            location: worker.location.to_string(),
            service_area: vec![worker.location.to_string()],
            is_available: Some(worker.available),
            is_verified: Some(worker.verified),
            portfolio_images: Vec::new(),
            skills: worker.skills.iter().map(|skill| skill.to_string()).collect(),
            rating: Some(worker.rating),
            total_jobs: Some(worker.completed_jobs),
            availability: worker.availability.to_vec(),
            work_types: worker.work_types.to_vec(),
        });
        snapshot.worker_services.push(WorkerServiceRow {
            worker_id: WorkerId(worker.id.to_string()),
            service_id: ServiceId(worker.service.to_string()),
            experience_level: worker.tier,
        });
    }

    for (index, (worker, customer, rating, comment, title, day)) in REVIEWS.iter().enumerate() {
        let job_id = JobId(format!("job-{}", index + 1));
        let service_id = WORKERS
            .iter()
            .find(|seed| seed.id == *worker)
            .map(|seed| seed.service)
            .unwrap_or("svc-carpenter");

        snapshot.jobs.push(JobRow {
            id: job_id.clone(),
            title: title.to_string(),
            service_id: ServiceId(service_id.to_string()),
            customer_id: UserId(customer.to_string()),
        });
        if let Some(created_at) = Utc.with_ymd_and_hms(2025, 3, *day, 9, 30, 0).single() {
            snapshot.reviews.push(ReviewRow {
                id: format!("review-{}", index + 1),
                job_id,
                rating: *rating,
                comment: Some(comment.to_string()),
                reviewee_id: UserId(format!("user-{worker}")),
                reviewer_id: UserId(customer.to_string()),
                created_at,
            });
        }
    }

    snapshot
}
