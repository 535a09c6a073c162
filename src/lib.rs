//! Saigon Flood Watch - backend service
//!
//! Geocodes street addresses in Ho Chi Minh City and derives the dashboard
//! view-model: current weather, flood risk, a synthesized traffic estimate,
//! the tide table and advisory links.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod types;

pub use config::Config;

use external::{forecast::ForecastClient, geocoding::GeocodingClient, marine::MarineClient};
use services::dashboard::DashboardService;
use services::traffic::SynthesizedTraffic;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard: DashboardService,
    pub geocoding: GeocodingClient,
}

impl AppState {
    /// Build the state with the default (synthesized) traffic estimator
    pub fn new(config: Config) -> Self {
        let forecast = ForecastClient::new(
            config.forecast.base_url.clone(),
            config.forecast.timezone.clone(),
        );
        let marine = MarineClient::new(config.marine.base_url.clone());
        let geocoding = GeocodingClient::new(
            config.geocoding.base_url.clone(),
            config.geocoding.user_agent.clone(),
        );
        let dashboard = DashboardService::new(forecast, marine, Arc::new(SynthesizedTraffic));

        Self {
            config: Arc::new(config),
            dashboard,
            geocoding,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Saigon Flood Watch API v1.0"
}
