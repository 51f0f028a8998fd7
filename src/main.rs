//! Style Pulse server binary.
//!
//! Loads configuration, wires the owned state objects, and serves the
//! survey and dashboard API.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use style_pulse::adapters::ai::{AnthropicConfig, AnthropicProvider};
use style_pulse::adapters::http::{app_router, AppState};
use style_pulse::application::{NarrativeService, ShareLink, SurveyService};
use style_pulse::config::{AppConfig, ServerConfig};
use style_pulse::domain::catalog::default_catalog;
use style_pulse::domain::survey::StyleClassifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    if !config.ai.has_credentials() {
        warn!("no AI credential configured; narrative requests will return fallback text");
    }

    let catalog = Arc::new(default_catalog().clone());
    let survey = Arc::new(SurveyService::new(catalog, StyleClassifier::new()));
    let provider = Arc::new(AnthropicProvider::new(AnthropicConfig::from_app_config(
        &config.ai,
    )));
    let narrative = Arc::new(NarrativeService::new(provider, config.ai.max_tokens));
    let share_link = Arc::new(ShareLink::new(config.share.link.clone()));

    let app = app_router(AppState::new(survey, narrative, share_link)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.bind_addr();
    info!(%addr, environment = ?config.server.environment, "style-pulse listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer: configured origins, or permissive when none are
/// set (participant phones hit the API from whatever origin the deep link
/// points at).
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers(Any)
    }
}
