//! EPB Server - Industrial Safety Expertise and NDT Record-Keeping
//!
//! A Rust REST API server for ЭПБ workflow and NDT record-keeping.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epb_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("epb_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EPB Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository (seeded in-memory stores) and services
    let repository = Repository::new();
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route(
            "/equipment/:id/verifications",
            post(api::equipment::add_verification),
        )
        // Specialists
        .route("/specialists", get(api::specialists::list_specialists))
        .route("/specialists", post(api::specialists::create_specialist))
        .route("/specialists/:id", get(api::specialists::get_specialist))
        .route("/specialists/:id", put(api::specialists::update_specialist))
        .route(
            "/specialists/:id",
            delete(api::specialists::delete_specialist),
        )
        .route("/specialists/:id/certs", post(api::specialists::add_cert))
        // Expertises
        .route("/expertises", get(api::expertises::list_expertises))
        .route("/expertises", post(api::expertises::create_expertise))
        .route("/expertises/:id", get(api::expertises::get_expertise))
        .route("/expertises/:id", put(api::expertises::update_expertise))
        .route("/expertises/:id", delete(api::expertises::delete_expertise))
        // Technical diagnostics reports
        .route("/td-reports", get(api::td_reports::list_td_reports))
        .route("/td-reports", post(api::td_reports::create_td_report))
        .route("/td-reports/export", get(api::td_reports::export_td_reports))
        .route("/td-reports/:id", get(api::td_reports::get_td_report))
        .route("/td-reports/:id", put(api::td_reports::update_td_report))
        .route("/td-reports/:id", delete(api::td_reports::delete_td_report))
        // Registry
        .route("/registry", get(api::registry::list_registry))
        .route("/registry", post(api::registry::create_registry_entry))
        .route("/registry/export", get(api::registry::export_registry))
        .route("/registry/:id", get(api::registry::get_registry_entry))
        .route("/registry/:id", put(api::registry::update_registry_entry))
        .route("/registry/:id", delete(api::registry::delete_registry_entry))
        // Schedule
        .route("/schedule", get(api::schedule::get_schedule))
        .route("/schedule/months", get(api::schedule::get_schedule_months))
        // Calculators
        .route("/calc/residual-life", post(api::calculators::residual_life))
        .route(
            "/calc/residual-life/history",
            get(api::calculators::residual_history),
        )
        .route("/calc/wall-thickness", post(api::calculators::wall_thickness))
        .route("/calc/corrosion-rate", post(api::calculators::corrosion_rate))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
