//! The aggregated view-model returned to the dashboard UI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CurrentConditions, FloodRisk, TideEvent, TrafficEstimate};
use crate::types::GpsCoordinates;

/// Kinds of advisory entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    TrafficPortal,
    FloodControl,
    RainWarning,
}

/// A single advisory link shown under the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub title_en: String,
    pub title_vi: String,
    pub url: String,
}

/// The normalized data bundle handed to the rendering layer after a lookup.
///
/// Built fresh on every successful lookup and never mutated afterwards; a new
/// lookup replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    /// Formatted display address
    pub location: String,
    pub coords: GpsCoordinates,
    pub weather: CurrentConditions,
    pub flood: FloodRisk,
    pub traffic: TrafficEstimate,
    pub tides: Vec<TideEvent>,
    pub advisories: Vec<Advisory>,
    pub fetched_at: DateTime<Utc>,
}
