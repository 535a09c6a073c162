//! Forecast API client
//!
//! Integrates with an Open-Meteo style forecast endpoint for current
//! conditions plus the hourly fields the risk derivation needs.

use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::CurrentConditions;
use crate::types::GpsCoordinates;

/// Forecast API client
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    timezone: String,
}

/// Raw forecast response, fields as requested in the query string
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentBlock>,
    pub hourly: Option<HourlyBlock>,
    pub daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub rain: Option<f64>,
    pub weather_code: Option<i32>,
    pub wind_speed_10m: Option<f64>,
    pub uv_index: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub soil_moisture_0_to_1cm: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    #[serde(default)]
    pub us_aqi: Vec<Option<f64>>,
}

impl ForecastClient {
    /// Create a new ForecastClient
    pub fn new(base_url: String, timezone: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            timezone,
        }
    }

    /// Create a new ForecastClient with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            timezone: "Asia/Ho_Chi_Minh".to_string(),
        }
    }

    /// Fetch current conditions and hourly fields for the given coordinates.
    ///
    /// Any failure here (network, non-2xx, unparseable body) means the whole
    /// lookup fails, so everything maps to `ForecastUnavailable`.
    pub async fn fetch(&self, coords: GpsCoordinates) -> AppResult<ForecastResponse> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}\
             &current=temperature_2m,relative_humidity_2m,apparent_temperature,rain,weather_code,wind_speed_10m,uv_index\
             &hourly=precipitation_probability,precipitation,soil_moisture_0_to_1cm\
             &daily=us_aqi&timezone={}",
            self.base_url, coords.latitude, coords.longitude, self.timezone
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Forecast API request failed: {}", e);
            AppError::ForecastUnavailable
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Forecast API error: {} - {}", status, body);
            return Err(AppError::ForecastUnavailable);
        }

        response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse forecast response: {}", e);
            AppError::ForecastUnavailable
        })
    }
}

/// Project a raw forecast response onto the view-model's current conditions.
///
/// Missing numeric fields become zero, never null. `next_hour_index` is the
/// position in the hourly arrays holding the coming hour's figures; indexing
/// past the end of an array also yields zero.
pub fn project_conditions(raw: &ForecastResponse, next_hour_index: usize) -> CurrentConditions {
    let current = raw.current.as_ref();
    let hourly = raw.hourly.as_ref();

    CurrentConditions {
        temperature_celsius: dec_or_zero(current.and_then(|c| c.temperature_2m)),
        apparent_temperature_celsius: dec_or_zero(current.and_then(|c| c.apparent_temperature)),
        humidity_percent: dec_or_zero(current.and_then(|c| c.relative_humidity_2m)),
        rain_mm: dec_or_zero(current.and_then(|c| c.rain)),
        rain_probability_percent: hourly_at(
            hourly.map(|h| h.precipitation_probability.as_slice()),
            next_hour_index,
        ),
        rain_next_hour_mm: hourly_at(hourly.map(|h| h.precipitation.as_slice()), next_hour_index),
        wind_speed_kmh: dec_or_zero(current.and_then(|c| c.wind_speed_10m)),
        weather_code: current.and_then(|c| c.weather_code).unwrap_or(0),
        uv_index: dec_or_zero(current.and_then(|c| c.uv_index)),
        us_aqi: hourly_at(raw.daily.as_ref().map(|d| d.us_aqi.as_slice()), 0),
        soil_moisture: hourly_at(
            hourly.map(|h| h.soil_moisture_0_to_1cm.as_slice()),
            next_hour_index,
        ),
    }
}

// Provider figures are decimal at the source; from_f64 recovers the shortest
// round-trip representation.
fn dec_or_zero(value: Option<f64>) -> Decimal {
    value.and_then(Decimal::from_f64).unwrap_or_default()
}

fn hourly_at(values: Option<&[Option<f64>]>, index: usize) -> Decimal {
    dec_or_zero(values.and_then(|v| v.get(index).copied().flatten()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> ForecastResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_project_full_response() {
        let raw = parse(
            r#"{
                "current": {
                    "temperature_2m": 31.5,
                    "relative_humidity_2m": 74.0,
                    "apparent_temperature": 37.2,
                    "rain": 2.5,
                    "weather_code": 61,
                    "wind_speed_10m": 12.0,
                    "uv_index": 8.0
                },
                "hourly": {
                    "precipitation_probability": [10, 65, 80],
                    "precipitation": [0.0, 4.5, 9.0],
                    "soil_moisture_0_to_1cm": [0.30, 0.42, 0.44]
                },
                "daily": { "us_aqi": [92] }
            }"#,
        );

        let conditions = project_conditions(&raw, 1);
        assert_eq!(conditions.temperature_celsius, dec!(31.5));
        assert_eq!(conditions.rain_mm, dec!(2.5));
        assert_eq!(conditions.rain_probability_percent, dec!(65));
        assert_eq!(conditions.rain_next_hour_mm, dec!(4.5));
        assert_eq!(conditions.soil_moisture, dec!(0.42));
        assert_eq!(conditions.weather_code, 61);
        assert_eq!(conditions.us_aqi, dec!(92));
    }

    #[test]
    fn test_missing_probability_defaults_to_zero() {
        let raw = parse(
            r#"{
                "current": { "temperature_2m": 30.0 },
                "hourly": { "precipitation": [1.0, 2.0] }
            }"#,
        );

        let conditions = project_conditions(&raw, 1);
        assert_eq!(conditions.rain_probability_percent, Decimal::ZERO);
        assert_eq!(conditions.rain_next_hour_mm, dec!(2.0));
    }

    #[test]
    fn test_out_of_range_hourly_index_defaults_to_zero() {
        let raw = parse(
            r#"{
                "current": { "rain": 1.0 },
                "hourly": { "precipitation_probability": [40] }
            }"#,
        );

        let conditions = project_conditions(&raw, 23);
        assert_eq!(conditions.rain_probability_percent, Decimal::ZERO);
    }

    #[test]
    fn test_empty_response_is_all_zeros() {
        let conditions = project_conditions(&parse("{}"), 1);
        assert_eq!(conditions.temperature_celsius, Decimal::ZERO);
        assert_eq!(conditions.rain_mm, Decimal::ZERO);
        assert_eq!(conditions.rain_probability_percent, Decimal::ZERO);
        assert_eq!(conditions.weather_code, 0);
        assert_eq!(conditions.us_aqi, Decimal::ZERO);
        assert_eq!(conditions.soil_moisture, Decimal::ZERO);
    }

    #[test]
    fn test_hourly_nulls_default_to_zero() {
        // Providers pad hourly arrays with nulls past the forecast horizon
        let raw = parse(
            r#"{
                "hourly": { "precipitation_probability": [30, null] }
            }"#,
        );

        let conditions = project_conditions(&raw, 1);
        assert_eq!(conditions.rain_probability_percent, Decimal::ZERO);
    }
}
