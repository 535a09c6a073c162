//! HTTP handlers for address autocomplete

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::types::HCMC_BOUNDS;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub q: String,
}

/// A single autocomplete suggestion
#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub display_name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Return geocoding suggestions for the UI's debounced autocomplete.
///
/// The endpoint is stateless; the 500 ms debounce that bounds request volume
/// lives in the client.
pub async fn suggest_locations(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> AppResult<Json<Vec<Suggestion>>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::ValidationError("query must not be empty".into()));
    }

    let candidates = state
        .geocoding
        .search(q, state.config.geocoding.suggestion_limit)
        .await?;

    let suggestions = candidates
        .into_iter()
        .filter(|c| HCMC_BOUNDS.contains(&c.coords))
        .map(|c| Suggestion {
            label: c.label,
            display_name: c.display_name,
            latitude: c.coords.latitude,
            longitude: c.coords.longitude,
        })
        .collect();

    Ok(Json(suggestions))
}
