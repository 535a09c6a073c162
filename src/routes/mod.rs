//! Route definitions for the Saigon Flood Watch service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard lookups
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/dashboard/search", get(handlers::search_dashboard))
        // Autocomplete suggestions
        .route("/geocode/suggest", get(handlers::suggest_locations))
}
