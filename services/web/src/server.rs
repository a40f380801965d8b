use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::app_router;
use axum_prometheus::PrometheusMetricLayer;
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::risk::{EngineClient, SubmissionGate};
use credit_risk::seo::SiteConfig;
use credit_risk::telemetry;
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
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        site: Arc::new(SiteConfig::from_env()),
        engine: Arc::new(EngineClient::new(&config.engine)),
        gate: Arc::new(SubmissionGate::new()),
    };

    let app = app_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, engine = %config.engine.base_url(), "credit risk console ready");

    axum::serve(listener, app).await?;
    Ok(())
}
