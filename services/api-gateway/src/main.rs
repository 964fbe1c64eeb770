use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::get,
    serve, Router,
};
use formula_database::{initialize_store, ItemRepository};
use formula_utils::{init_logging, AppConfig, CorsConfig};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

mod handlers;
mod metrics;
mod middleware;
mod routes;
mod service;

use handlers::{health_check, home, metrics_handler};
use metrics::ApiMetrics;
use middleware::*;
use service::FormulaService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting Formula API Gateway");

    let store = initialize_store(&config.storage)?;
    let state = AppState {
        formulas: FormulaService::new(ItemRepository::new(store)),
        metrics: ApiMetrics::new()?,
        config: config.clone(),
    };

    let app = create_app(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Formula API Gateway listening on {}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Formula API Gateway stopped");
    Ok(())
}

pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let max_request_size = state.config.server.max_request_size;

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .merge(routes::create_api_routes())
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(DefaultBodyLimit::max(max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[derive(Clone)]
pub struct AppState {
    pub formulas: FormulaService,
    pub metrics: ApiMetrics,
    pub config: AppConfig,
}
