//! Geocoding API client
//!
//! Nominatim-style free-text search, restricted to Vietnam and bounded to the
//! Ho Chi Minh City viewbox. Also owns the display-address formatting rule.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::types::{GpsCoordinates, HCMC_BOUNDS};

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

/// A geocoding candidate with parsed coordinates and formatted label
#[derive(Debug, Clone)]
pub struct GeocodeCandidate {
    pub coords: GpsCoordinates,
    /// Display address built from the field-priority rule
    pub label: String,
    /// Full provider display name, kept for suggestion lists
    pub display_name: String,
}

/// Raw geocoding result
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    road: Option<String>,
    ward: Option<String>,
    quarter: Option<String>,
    city_district: Option<String>,
    district: Option<String>,
    suburb: Option<String>,
    city: Option<String>,
}

impl GeocodingClient {
    /// Create a new GeocodingClient
    pub fn new(base_url: String, user_agent: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            user_agent,
        }
    }

    /// Create a new GeocodingClient with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self::new(base_url, "saigon-flood-watch/0.1".to_string())
    }

    /// Search for an address within the Ho Chi Minh City viewbox
    pub async fn search(&self, query: &str, limit: u8) -> AppResult<Vec<GeocodeCandidate>> {
        let viewbox = format!(
            "{},{},{},{}",
            HCMC_BOUNDS.west, HCMC_BOUNDS.north, HCMC_BOUNDS.east, HCMC_BOUNDS.south
        );
        let limit = limit.to_string();

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("countrycodes", "vn"),
                ("bounded", "1"),
                ("viewbox", viewbox.as_str()),
                ("limit", limit.as_str()),
            ])
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalService(format!(
                "Geocoding API error: {}",
                status
            )));
        }

        let results: Vec<NominatimResult> = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse geocoding response: {}", e))
        })?;

        Ok(results
            .into_iter()
            .filter_map(|r| {
                let latitude = Decimal::from_str(&r.lat).ok()?;
                let longitude = Decimal::from_str(&r.lon).ok()?;
                Some(GeocodeCandidate {
                    coords: GpsCoordinates::new(latitude, longitude),
                    label: format_display_address(&r.address),
                    display_name: r.display_name,
                })
            })
            .collect())
    }
}

/// Build a short display address from the provider's address breakdown.
///
/// Field priority: road, then ward/quarter, then district, then the city
/// name. Empty parts are skipped; an address with no usable parts falls back
/// to the city name alone.
fn format_display_address(address: &NominatimAddress) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(road) = address.road.as_deref() {
        parts.push(road);
    }
    if let Some(ward) = address.ward.as_deref().or(address.quarter.as_deref()) {
        parts.push(ward);
    }
    if let Some(district) = address
        .city_district
        .as_deref()
        .or(address.district.as_deref())
        .or(address.suburb.as_deref())
    {
        parts.push(district);
    }
    parts.push(address.city.as_deref().unwrap_or("Ho Chi Minh City"));

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_address() {
        let address = NominatimAddress {
            road: Some("Nguyễn Huệ".to_string()),
            ward: Some("Phường Bến Nghé".to_string()),
            quarter: None,
            city_district: Some("Quận 1".to_string()),
            district: None,
            suburb: None,
            city: Some("Thành phố Hồ Chí Minh".to_string()),
        };
        assert_eq!(
            format_display_address(&address),
            "Nguyễn Huệ, Phường Bến Nghé, Quận 1, Thành phố Hồ Chí Minh"
        );
    }

    #[test]
    fn test_quarter_substitutes_for_ward() {
        let address = NominatimAddress {
            road: Some("Lê Lợi".to_string()),
            quarter: Some("Khu phố 2".to_string()),
            district: Some("Quận 3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            format_display_address(&address),
            "Lê Lợi, Khu phố 2, Quận 3, Ho Chi Minh City"
        );
    }

    #[test]
    fn test_empty_address_falls_back_to_city() {
        assert_eq!(
            format_display_address(&NominatimAddress::default()),
            "Ho Chi Minh City"
        );
    }
}
