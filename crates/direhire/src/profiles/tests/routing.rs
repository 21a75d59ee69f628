use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::listing::ListingSettings;
use crate::profiles::router::{profile_handler, WorkerRoutesState};
use crate::profiles::{worker_router, ProfileService};

#[tokio::test]
async fn profile_handler_returns_page() {
    let state = WorkerRoutesState {
        profiles: build_service(),
        settings: ListingSettings::default(),
    };

    let response = profile_handler(State(state), Path("w-ramesh".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["profile"]["user"]["full_name"], json!("Ramesh Sharma"));
    assert_eq!(payload["reviews"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn profile_handler_returns_not_found() {
    let state = WorkerRoutesState {
        profiles: build_service(),
        settings: ListingSettings::default(),
    };

    let response = profile_handler(State(state), Path("ghost".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["worker_id"], json!("ghost"));
}

#[tokio::test]
async fn profile_handler_degrades_when_store_is_down() {
    let state = WorkerRoutesState {
        profiles: Arc::new(ProfileService::new(Arc::new(OfflineStore))),
        settings: ListingSettings::default(),
    };

    let response = profile_handler(State(state), Path("w-ramesh".to_string())).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn browse_route_lists_default_page() {
    let router = worker_router(build_service(), ListingSettings::default());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/workers?sort=price-low")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_count"], json!(2));
    assert_eq!(payload["sort"], json!("price-low"));
    assert_eq!(payload["workers"][0]["id"], json!("w-meena"));
}

#[tokio::test]
async fn search_route_applies_filters() {
    let router = worker_router(build_service(), ListingSettings::default());
    let body = json!({
        "services": ["carpenter"],
        "min_rating": [4.5],
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/workers/search")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_count"], json!(1));
    assert_eq!(payload["active_filter_count"], json!(2));
    assert_eq!(payload["workers"][0]["name"], json!("Ramesh Sharma"));
}

#[tokio::test]
async fn browse_route_keeps_workers_without_a_rate() {
    let mut catalog = snapshot();
    if let Some(meena) = catalog
        .worker_profiles
        .iter_mut()
        .find(|row| row.id.0 == "w-meena")
    {
        meena.hourly_rate = None;
    }
    let service = Arc::new(ProfileService::new(Arc::new(SnapshotStore {
        snapshot: catalog,
    })));
    let router = worker_router(service, ListingSettings::default());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/workers?sort=price-low")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_count"], json!(2));
    assert_eq!(payload["active_filter_count"], json!(0));
    assert_eq!(payload["workers"][0]["id"], json!("w-meena"));
    assert_eq!(payload["workers"][0]["hourly_rate"], json!(0));
}
