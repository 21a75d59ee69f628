use crate::infra::{load_catalog, InMemoryMarketplaceStore};
use clap::Args;
use direhire::config::AppConfig;
use direhire::error::AppError;
use direhire::listing::{
    ListingQuery, ListingView, SortKey, WorkerCatalogImporter, WorkerId, WorkerRecord,
};
use direhire::profiles::{ProfilePage, ProfileService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct WorkersListArgs {
    /// Service slug to include (repeatable), e.g. carpenter
    #[arg(long = "service")]
    pub(crate) services: Vec<String>,
    /// Experience tier to include (repeatable): beginner, intermediate, expert
    #[arg(long)]
    pub(crate) experience: Vec<String>,
    /// Availability window to include (repeatable): today, this_week, flexible
    #[arg(long)]
    pub(crate) availability: Vec<String>,
    /// Work type to include (repeatable): onsite, remote
    #[arg(long = "work-type")]
    pub(crate) work_types: Vec<String>,
    /// Minimum star rating bucket (repeatable, loosest wins)
    #[arg(long = "min-rating")]
    pub(crate) min_rating: Vec<f32>,
    /// Lower end of the hourly rate window
    #[arg(long)]
    pub(crate) price_min: Option<u32>,
    /// Upper end of the hourly rate window
    #[arg(long)]
    pub(crate) price_max: Option<u32>,
    /// Sort order: rating, price-low, price-high, reviews, availability
    #[arg(long, default_value = "rating")]
    pub(crate) sort: SortKey,
    /// Page to print (clamped into range)
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Read worker records from a CSV export instead of the catalog
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print the listing view as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WorkersShowArgs {
    /// Worker profile id
    pub(crate) worker_id: String,
    /// Print the profile page as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl WorkersListArgs {
    fn query(&self) -> ListingQuery {
        ListingQuery {
            services: self.services.clone(),
            experience: self.experience.clone(),
            availability: self.availability.clone(),
            work_types: self.work_types.clone(),
            min_rating: self.min_rating.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            sort: self.sort,
            page: self.page,
        }
    }
}

fn catalog_service(
    config: &AppConfig,
) -> Result<ProfileService<InMemoryMarketplaceStore>, AppError> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let store = InMemoryMarketplaceStore::new(catalog);
    Ok(ProfileService::new(Arc::new(store)))
}

pub(crate) fn run_workers_list(args: WorkersListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let records = match &args.csv {
        Some(path) => WorkerCatalogImporter::from_path(path)?,
        None => catalog_service(&config)?.listing_records()?,
    };

    let view = args.query().evaluate(records, config.listing);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_listing(&view);
    }
    Ok(())
}

pub(crate) fn run_workers_show(args: WorkersShowArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let page = catalog_service(&config)?.page(&WorkerId(args.worker_id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        render_profile(&page);
    }
    Ok(())
}

fn render_listing(view: &ListingView) {
    println!(
        "{} workers found | page {} of {} | sorted by {}",
        view.total_count,
        view.current_page,
        view.total_pages,
        view.sort.label()
    );
    if view.active_filter_count > 0 {
        println!("{} active filters", view.active_filter_count);
    }
    if view.workers.is_empty() {
        println!("No workers match the selected filters.");
        return;
    }
    for worker in &view.workers {
        println!("{}", listing_line(worker));
    }
}

fn listing_line(worker: &WorkerRecord) -> String {
    let mut badges = Vec::new();
    if worker.is_verified {
        badges.push("verified");
    }
    if worker.is_top_rated {
        badges.push("top rated");
    }
    let availability = if worker.is_available {
        "available"
    } else {
        "busy"
    };
    let project = worker
        .project_rate
        .map(|rate| format!(" | ₹{rate}/project"))
        .unwrap_or_default();
    let badges = if badges.is_empty() {
        String::new()
    } else {
        format!(" [{}]", badges.join(", "))
    };

    format!(
        "- #{} {} ({}) | {} | {:.1}★ ({} reviews) | ₹{}/hr{} | {}{}",
        worker.id,
        worker.name,
        worker.profession,
        worker.location,
        worker.rating,
        worker.review_count,
        worker.hourly_rate,
        project,
        availability,
        badges
    )
}

fn render_profile(page: &ProfilePage) {
    let profile = &page.profile;
    println!("{} (#{})", profile.user.full_name, profile.id);
    println!(
        "- {} | {:.1}★ | {} jobs completed | {} years experience",
        profile.location, profile.rating, profile.total_jobs, profile.experience_years
    );
    println!("- ₹{}/hr", profile.hourly_rate);
    if !profile.bio.is_empty() {
        println!("- {}", profile.bio);
    }
    println!("- Contact: {}", profile.user.email);
    if let Some(phone) = &profile.user.phone {
        println!("  Phone: {phone}");
    }
    if !profile.services.is_empty() {
        println!("Services:");
        for service in &profile.services {
            println!(
                "  - {} ({})",
                service.service_name,
                service.experience_level.key()
            );
        }
    }
    if !profile.skills.is_empty() {
        println!("Skills: {}", profile.skills.join(", "));
    }

    if page.reviews.is_empty() {
        println!("Reviews: none yet");
        return;
    }
    println!("Reviews:");
    for review in &page.reviews {
        println!(
            "  - {}★ {} on {} ({})",
            review.rating,
            review.reviewer_name,
            review.job_title,
            review.created_at.format("%Y-%m-%d")
        );
        if !review.comment.is_empty() {
            println!("    {}", review.comment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_catalog;
    use direhire::listing::ListingSettings;

    fn demo_records() -> Vec<WorkerRecord> {
        ProfileService::new(Arc::new(InMemoryMarketplaceStore::new(demo_catalog())))
            .listing_records()
            .expect("demo records")
    }

    #[test]
    fn list_args_become_a_query() {
        let args = WorkersListArgs {
            services: vec!["plumber".to_string(), "carpenter".to_string()],
            sort: SortKey::PriceAscending,
            ..WorkersListArgs::default()
        };
        let view = args.query().evaluate(demo_records(), ListingSettings::default());

        assert_eq!(view.total_count, 2);
        assert_eq!(view.workers[0].name, "John Smith");
        assert_eq!(view.active_filter_count, 2);
    }

    #[test]
    fn listing_line_shows_badges_and_rates() {
        let records = demo_records();
        let john = records
            .iter()
            .find(|record| record.id.0 == "1")
            .expect("seeded worker");
        let line = listing_line(john);
        assert!(line.contains("John Smith (Carpenter)"));
        assert!(line.contains("₹85/hr | ₹500/project"));
        assert!(line.ends_with("[verified, top rated]"));
    }
}
