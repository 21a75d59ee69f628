use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use direhire::error::AppError;
use direhire::listing::WorkerId;
use direhire::profiles::{
    CatalogSnapshot, JobId, JobRow, MarketplaceStore, RepositoryError, ReviewRow, ServiceId,
    ServiceRow, UserId, UserRow, WorkerProfileRow, WorkerServiceRow,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use crate::seed::demo_catalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Marketplace store backed by an immutable in-process catalog snapshot.
#[derive(Clone)]
pub(crate) struct InMemoryMarketplaceStore {
    catalog: Arc<CatalogSnapshot>,
}

impl InMemoryMarketplaceStore {
    pub(crate) fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            catalog: Arc::new(snapshot),
        }
    }
}

impl MarketplaceStore for InMemoryMarketplaceStore {
    fn worker_profile(&self, id: &WorkerId) -> Result<Option<WorkerProfileRow>, RepositoryError> {
        Ok(self
            .catalog
            .worker_profiles
            .iter()
            .find(|row| &row.id == id)
            .cloned())
    }

    fn worker_profiles(&self) -> Result<Vec<WorkerProfileRow>, RepositoryError> {
        Ok(self.catalog.worker_profiles.clone())
    }

    fn user(&self, id: &UserId) -> Result<Option<UserRow>, RepositoryError> {
        Ok(self.catalog.users.iter().find(|row| &row.id == id).cloned())
    }

    fn service(&self, id: &ServiceId) -> Result<Option<ServiceRow>, RepositoryError> {
        Ok(self.catalog.services.iter().find(|row| &row.id == id).cloned())
    }

    fn worker_services(
        &self,
        worker_id: &WorkerId,
    ) -> Result<Vec<WorkerServiceRow>, RepositoryError> {
        Ok(self
            .catalog
            .worker_services
            .iter()
            .filter(|row| &row.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn reviews_for(&self, reviewee_id: &UserId) -> Result<Vec<ReviewRow>, RepositoryError> {
        Ok(self
            .catalog
            .reviews
            .iter()
            .filter(|row| &row.reviewee_id == reviewee_id)
            .cloned()
            .collect())
    }

    fn job(&self, id: &JobId) -> Result<Option<JobRow>, RepositoryError> {
        Ok(self.catalog.jobs.iter().find(|row| &row.id == id).cloned())
    }
}

/// Loads the JSON snapshot at `path`, or the demo catalog when unset.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<CatalogSnapshot, AppError> {
    match path {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            let snapshot: CatalogSnapshot = serde_json::from_reader(reader)?;
            info!(
                path = %path.display(),
                workers = snapshot.worker_profiles.len(),
                "catalog snapshot loaded"
            );
            Ok(snapshot)
        }
        None => Ok(demo_catalog()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use direhire::profiles::ProfileService;

    #[test]
    fn store_serves_demo_catalog_joins() {
        let store = Arc::new(InMemoryMarketplaceStore::new(demo_catalog()));
        let service = ProfileService::new(store);

        let page = service
            .page(&WorkerId("2".to_string()))
            .expect("demo worker exists");
        assert_eq!(page.profile.user.full_name, "Maria Garcia");
        assert_eq!(page.profile.services[0].service_name, "Plumber");
        assert_eq!(page.reviews.len(), 2);
        assert!(page.reviews[0].created_at > page.reviews[1].created_at);
    }

    #[test]
    fn demo_listing_matches_storefront_badges() {
        let store = Arc::new(InMemoryMarketplaceStore::new(demo_catalog()));
        let records = ProfileService::new(store)
            .listing_records()
            .expect("records load");

        let top_rated: Vec<_> = records
            .iter()
            .filter(|record| record.is_top_rated)
            .map(|record| record.id.0.as_str())
            .collect();
        assert_eq!(top_rated, vec!["1", "2", "6"]);
    }

    #[test]
    fn cloned_stores_share_one_snapshot() {
        let store = InMemoryMarketplaceStore::new(demo_catalog());
        let clone = store.clone();

        assert!(Arc::ptr_eq(&store.catalog, &clone.catalog));
        let profiles = clone.worker_profiles().expect("profiles load");
        assert_eq!(profiles.len(), store.catalog.worker_profiles.len());
    }

    #[test]
    fn missing_snapshot_file_is_an_io_error() {
        let result = load_catalog(Some(Path::new("/nonexistent/direhire-catalog.json")));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
