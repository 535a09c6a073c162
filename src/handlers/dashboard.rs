//! HTTP handlers for dashboard lookups

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::DashboardData;
use crate::types::{GpsCoordinates, HCMC_BOUNDS};
use crate::AppState;

/// Query parameters for a coordinate lookup
#[derive(Debug, Deserialize)]
pub struct CoordinateQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Display address when the caller already resolved one (e.g. map click)
    pub address: Option<String>,
}

/// Derive the dashboard view-model for known coordinates.
///
/// Used for map clicks and suggestion selections, where the UI already holds
/// coordinates and a label.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<CoordinateQuery>,
) -> AppResult<Json<DashboardData>> {
    let coords = GpsCoordinates::new(query.latitude, query.longitude);
    ensure_in_coverage(&coords)?;

    let address = query
        .address
        .unwrap_or_else(|| format!("{:.4}, {:.4}", coords.latitude, coords.longitude));

    let data = state.dashboard.derive(coords, address).await?;
    Ok(Json(data))
}

/// Query parameters for a free-text address lookup
#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    pub q: String,
}

/// Geocode a street address and derive the dashboard view-model for the
/// first in-coverage candidate.
pub async fn search_dashboard(
    State(state): State<AppState>,
    Query(query): Query<AddressQuery>,
) -> AppResult<Json<DashboardData>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::ValidationError("query must not be empty".into()));
    }

    let candidates = state
        .geocoding
        .search(q, state.config.geocoding.suggestion_limit)
        .await?;

    let candidate = candidates
        .into_iter()
        .find(|c| HCMC_BOUNDS.contains(&c.coords))
        .ok_or_else(|| AppError::GeocodeNotFound(q.to_string()))?;

    let data = state
        .dashboard
        .derive(candidate.coords, candidate.label)
        .await?;
    Ok(Json(data))
}

fn ensure_in_coverage(coords: &GpsCoordinates) -> AppResult<()> {
    if HCMC_BOUNDS.contains(coords) {
        Ok(())
    } else {
        Err(AppError::OutsideCoverage {
            latitude: coords.latitude.to_string(),
            longitude: coords.longitude.to_string(),
        })
    }
}
