use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::service::{ProfileError, ProfileService};
use super::store::MarketplaceStore;
use crate::listing::{ListingQuery, ListingSettings, SortKey, WorkerId};

/// Shared state for the worker routes.
pub struct WorkerRoutesState<S> {
    pub profiles: Arc<ProfileService<S>>,
    pub settings: ListingSettings,
}

impl<S> Clone for WorkerRoutesState<S> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
            settings: self.settings,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}

/// Router exposing the listing grid, search and profile pages.
pub fn worker_router<S>(profiles: Arc<ProfileService<S>>, settings: ListingSettings) -> Router
where
    S: MarketplaceStore + 'static,
{
    Router::new()
        .route("/api/v1/workers", get(browse_handler::<S>))
        .route("/api/v1/workers/search", post(search_handler::<S>))
        .route("/api/v1/workers/:worker_id", get(profile_handler::<S>))
        .with_state(WorkerRoutesState { profiles, settings })
}

pub(crate) async fn browse_handler<S>(
    State(state): State<WorkerRoutesState<S>>,
    Query(params): Query<BrowseParams>,
) -> Response
where
    S: MarketplaceStore + 'static,
{
    let query = ListingQuery {
        page: params.page,
        sort: params.sort.unwrap_or_default(),
        ..ListingQuery::default()
    };
    run_listing(&state, &query)
}

pub(crate) async fn search_handler<S>(
    State(state): State<WorkerRoutesState<S>>,
    axum::Json(query): axum::Json<ListingQuery>,
) -> Response
where
    S: MarketplaceStore + 'static,
{
    run_listing(&state, &query)
}

fn run_listing<S>(state: &WorkerRoutesState<S>, query: &ListingQuery) -> Response
where
    S: MarketplaceStore + 'static,
{
    match state.profiles.listing_records() {
        Ok(records) => {
            let view = query.evaluate(records, state.settings);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => unavailable(error),
    }
}

pub(crate) async fn profile_handler<S>(
    State(state): State<WorkerRoutesState<S>>,
    Path(worker_id): Path<String>,
) -> Response
where
    S: MarketplaceStore + 'static,
{
    let id = WorkerId(worker_id);
    match state.profiles.page(&id) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(ProfileError::NotFound(_)) => {
            let payload = json!({
                "error": "worker not found",
                "worker_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => unavailable(error),
    }
}

fn unavailable(error: ProfileError) -> Response {
    warn!(%error, "marketplace store fetch failed");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
}
