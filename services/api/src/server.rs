use crate::cli::ServeArgs;
use crate::infra::{load_seed, AppState, InMemoryProfileStore};
use crate::routes::with_readiness_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pro_readiness::config::{AppConfig, ConfigError};
use pro_readiness::error::AppError;
use pro_readiness::professionals::readiness::{ReadinessRoutes, ReadinessService};
use pro_readiness::telemetry;
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

    let store = match args.seed.take() {
        Some(path) => InMemoryProfileStore::seeded(load_seed(&path)?),
        None => InMemoryProfileStore::default(),
    };
    info!(profiles = store.len(), "profile store loaded");

    let store = Arc::new(store);
    let service = ReadinessService::new(store.clone(), config.readiness.policy.clone())
        .map_err(ConfigError::Policy)?;
    let service = Arc::new(service);

    let app = with_readiness_routes(ReadinessRoutes {
        service,
        writer: store,
        fetch_budget: config.readiness.fetch_timeout,
    })
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        activation_threshold = config.readiness.policy.activation_threshold,
        "professional readiness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
