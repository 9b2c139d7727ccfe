//! HTTP gateway for BreatheEasy.
//!
//! Serves the embedded browser chat UI plus the v1 JSON API for creating
//! persona agents and chatting with them.
//!
//! Built on Axum for high performance async HTTP.

pub mod api_v1;
pub mod frontend;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use breatheeasy_agent::AgentSpec;
use breatheeasy_config::AppConfig;
use breatheeasy_personas::PersonaRegistry;
use breatheeasy_tools::CustomerRecords;

pub use api_v1::{ApiV1State, SharedApiState};

/// Build the full router: health, v1 API, and the embedded frontend.
pub fn build_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(Arc::clone(&state))
        .nest("/v1", api_v1::v1_router(state))
        .merge(frontend::frontend_router())
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1 MB body limit
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Build the shared state from config.
///
/// The provider, tool registry and customer-record store are built once and
/// shared by every agent the API creates.
pub fn build_state(config: &AppConfig) -> Result<SharedApiState, Box<dyn std::error::Error>> {
    let provider = breatheeasy_providers::build_from_config(config)?;

    let records = CustomerRecords::open(config.storage.leads_path(), config.storage.feedback_path())?;
    let tools = Arc::new(breatheeasy_tools::default_registry(Arc::new(records)));
    let personas = PersonaRegistry::with_tools(&tools.definitions());

    Ok(Arc::new(ApiV1State::new(
        provider,
        tools,
        personas,
        AgentSpec::from_config(config),
    )))
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let state = build_state(&config)?;
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    provider_reachable: bool,
}

/// The gateway itself is up whenever this answers; `provider_reachable`
/// reports whether the model service responded.
async fn health_handler(State(state): State<SharedApiState>) -> Json<HealthResponse> {
    let provider_reachable = match state.provider.health_check().await {
        Ok(reachable) => reachable,
        Err(e) => {
            warn!(provider = state.provider.name(), error = %e, "Provider health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider_reachable,
    })
}
