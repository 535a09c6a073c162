//! Marine API client
//!
//! Fetches tide extrema for the fixed river gauge. A failure here never fails
//! a lookup; the caller substitutes the fallback tide table instead.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::GpsCoordinates;

/// Marine/tide API client
#[derive(Clone)]
pub struct MarineClient {
    client: Client,
    base_url: String,
}

/// Raw marine response
#[derive(Debug, Deserialize)]
pub struct MarineResponse {
    pub daily: Option<TideExtrema>,
}

/// Tide extrema as ISO-8601 local timestamps, up to two of each per day
#[derive(Debug, Default, Deserialize)]
pub struct TideExtrema {
    #[serde(default)]
    pub tide_high: Vec<String>,
    #[serde(default)]
    pub tide_low: Vec<String>,
}

impl MarineClient {
    /// Create a new MarineClient
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a new MarineClient with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self::new(base_url)
    }

    /// Fetch today's tide extrema for the given gauge coordinates
    pub async fn fetch_tides(&self, gauge: GpsCoordinates) -> AppResult<MarineResponse> {
        let url = format!(
            "{}/marine?latitude={}&longitude={}&daily=tide_high,tide_low&timezone=Asia%2FHo_Chi_Minh",
            self.base_url, gauge.latitude, gauge.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Marine API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalService(format!(
                "Marine API error: {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to parse marine response: {}", e)))
    }
}
