use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use direhire::config::AppConfig;
use direhire::forms::form_router;
use direhire::i18n::locale_router;
use direhire::profiles::{worker_router, MarketplaceStore, ProfileService};
use serde_json::json;
use std::sync::Arc;

/// Every storefront route plus the operational endpoints.
pub(crate) fn with_storefront_routes<S>(
    profiles: Arc<ProfileService<S>>,
    config: &AppConfig,
) -> axum::Router
where
    S: MarketplaceStore + 'static,
{
    worker_router(profiles, config.listing)
        .merge(locale_router(
            config.default_locale,
            config.listing.price_bounds,
        ))
        .merge(form_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
