//! Risk derivation pipeline
//!
//! Turns coordinates and a display address into the dashboard view-model:
//! fetch forecast and tide data, normalize, score flood risk, synthesize
//! traffic, assemble advisories. One pass, no retries.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use crate::error::AppResult;
use crate::external::forecast::{project_conditions, ForecastClient};
use crate::external::marine::MarineClient;
use crate::models::DashboardData;
use crate::services::{advisory, flood, tides, traffic::TrafficEstimator};
use crate::types::{GpsCoordinates, TIDE_GAUGE};

/// Ho Chi Minh City is fixed UTC+7 year round
const HCMC_UTC_OFFSET_SECONDS: i32 = 7 * 3600;

/// The derivation pipeline and its collaborators
#[derive(Clone)]
pub struct DashboardService {
    forecast: ForecastClient,
    marine: MarineClient,
    traffic: Arc<dyn TrafficEstimator>,
}

impl DashboardService {
    pub fn new(
        forecast: ForecastClient,
        marine: MarineClient,
        traffic: Arc<dyn TrafficEstimator>,
    ) -> Self {
        Self {
            forecast,
            marine,
            traffic,
        }
    }

    /// Derive the view-model for a location.
    ///
    /// The forecast and marine fetches run concurrently and both settle
    /// before any computation. A forecast failure fails the lookup; a marine
    /// failure degrades to the fallback tide table.
    pub async fn derive(
        &self,
        coords: GpsCoordinates,
        display_address: String,
    ) -> AppResult<DashboardData> {
        let (forecast, marine) = tokio::join!(
            self.forecast.fetch(coords),
            self.marine.fetch_tides(TIDE_GAUGE)
        );

        let forecast = forecast?;
        let now = Utc::now();
        let weather = project_conditions(&forecast, next_hour_index(now));

        let tide_events = match marine {
            Ok(response) => tides::tide_table(&response),
            Err(error) => {
                tracing::warn!("Marine fetch failed, using fallback tides: {}", error);
                tides::fallback_tides()
            }
        };

        let flood_risk = flood::assess(weather.rain_mm, weather.soil_moisture);
        let traffic_estimate = self.traffic.estimate(weather.rain_mm);
        let advisories = advisory::assemble(&weather, &flood_risk);

        Ok(DashboardData {
            location: display_address,
            coords,
            weather,
            flood: flood_risk,
            traffic: traffic_estimate,
            tides: tide_events,
            advisories,
            fetched_at: now,
        })
    }
}

/// Index into today's hourly arrays for the coming hour's figures.
///
/// Hourly arrays start at local midnight, so the coming hour sits at local
/// hour + 1. At 23:00 local this lands past the end of a one-day array and
/// the projection falls back to zero.
pub fn next_hour_index(now: DateTime<Utc>) -> usize {
    let offset = FixedOffset::east_opt(HCMC_UTC_OFFSET_SECONDS)
        .expect("UTC+7 is within the valid offset range");
    let local = now.with_timezone(&offset);
    local.hour() as usize + 1
}
