use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryMarketplaceStore};
use crate::routes::with_storefront_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use direhire::config::AppConfig;
use direhire::error::AppError;
use direhire::profiles::ProfileService;
use direhire::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let store = Arc::new(InMemoryMarketplaceStore::new(catalog));
    let profiles = Arc::new(ProfileService::new(store));

    let app = with_storefront_routes(profiles, &config)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        page_size = config.listing.page_size,
        locale = %config.default_locale,
        "worker marketplace storefront ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
