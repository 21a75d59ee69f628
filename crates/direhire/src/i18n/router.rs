use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{Locale, Translator};
use crate::listing::{filter_groups, sort_options, PriceBounds};

#[derive(Debug, Clone, Copy)]
pub struct LocaleRoutesState {
    pub default_locale: Locale,
    pub price_bounds: PriceBounds,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub locale: Option<String>,
}

/// Dictionary download and localized sidebar options.
pub fn locale_router(default_locale: Locale, price_bounds: PriceBounds) -> Router {
    Router::new()
        .route("/api/v1/i18n/:locale", get(dictionary_handler))
        .route("/api/v1/filters", get(filters_handler))
        .with_state(LocaleRoutesState {
            default_locale,
            price_bounds,
        })
}

pub(crate) async fn dictionary_handler(Path(locale): Path<String>) -> Response {
    match Locale::parse(&locale) {
        Some(locale) => {
            let payload = json!({
                "locale": locale,
                "messages": Translator::new(locale).dictionary(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "error": "unsupported locale",
                "locale": locale,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

/// Unknown or missing locales fall back to the configured default.
pub(crate) async fn filters_handler(
    State(state): State<LocaleRoutesState>,
    Query(params): Query<FilterParams>,
) -> Response {
    let requested = params.locale.as_deref().and_then(Locale::parse);
    if requested.is_none() && params.locale.is_some() {
        debug!(locale = ?params.locale, "unsupported locale, using default");
    }
    let translator = Translator::new(requested.unwrap_or(state.default_locale));

    let payload = json!({
        "locale": translator.locale(),
        "title": translator.t("filters.title"),
        "groups": filter_groups(&translator),
        "sort_options": sort_options(),
        "price_bounds": state.price_bounds,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = locale_router(Locale::Hi, PriceBounds::default())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&bytes).expect("json payload"))
    }

    #[tokio::test]
    async fn dictionary_route_serves_known_locales() {
        let (status, payload) = get_json("/api/v1/i18n/en").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["locale"], json!("en"));
        assert_eq!(payload["messages"]["filters.title"], json!("Filters"));
    }

    #[tokio::test]
    async fn dictionary_route_rejects_unknown_locales() {
        let (status, payload) = get_json("/api/v1/i18n/fr").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["locale"], json!("fr"));
    }

    #[tokio::test]
    async fn filters_default_to_configured_locale() {
        let (status, payload) = get_json("/api/v1/filters?locale=xx").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["locale"], json!("hi"));
        assert_eq!(payload["groups"].as_array().map(Vec::len), Some(5));
        assert_eq!(payload["price_bounds"]["ceiling"], json!(500));
    }

    #[tokio::test]
    async fn filters_localize_labels() {
        let (_, payload) = get_json("/api/v1/filters?locale=en").await;
        assert_eq!(payload["title"], json!("Filters"));
        assert_eq!(payload["groups"][0]["dimension"], json!("service_type"));
        assert_eq!(payload["sort_options"][0]["value"], json!("rating"));
    }
}
