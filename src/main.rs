//! eventkit-gateway server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use eventkit_gateway::api;
use eventkit_gateway::app_state::AppState;
use eventkit_gateway::config::KitConfig;
use eventkit_gateway::domain::SnapshotStore;
use eventkit_gateway::service::KitService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = KitConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        event_zone = %config.event_zone,
        default_page_size = u32::from(config.default_page_size),
        "starting eventkit-gateway"
    );

    // Build service layer
    let store = Arc::new(SnapshotStore::new());
    let kit_service = Arc::new(KitService::new(
        store,
        config.event_zone,
        config.certificate_style.clone(),
    ));

    let app_state = AppState {
        kit_service,
        default_page_size: config.default_page_size,
    };

    let app = api::build_router()
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
