//! Synthesized traffic estimate
//!
//! There is no real traffic feed behind these numbers. The estimate is a
//! weather-influenced placeholder produced by a pluggable estimator (see
//! `services::traffic`) and must be presented to users as indicative only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categorical traffic status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrafficStatus {
    Clear,
    Moderate,
    Heavy,
}

/// Synthesized congestion estimate for the looked-up location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficEstimate {
    /// Congestion percentage, always within [10, 100]
    pub congestion_percent: i32,
    pub status: TrafficStatus,
    pub average_speed_kmh: Decimal,
    pub incident_count: i32,
    /// Marks the estimate as synthesized rather than measured
    pub synthesized: bool,
}

impl TrafficStatus {
    /// Map a congestion percentage onto a categorical status
    pub fn from_congestion(congestion_percent: i32) -> Self {
        if congestion_percent > 70 {
            TrafficStatus::Heavy
        } else if congestion_percent > 40 {
            TrafficStatus::Moderate
        } else {
            TrafficStatus::Clear
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(TrafficStatus::from_congestion(10), TrafficStatus::Clear);
        assert_eq!(TrafficStatus::from_congestion(40), TrafficStatus::Clear);
        assert_eq!(TrafficStatus::from_congestion(41), TrafficStatus::Moderate);
        assert_eq!(TrafficStatus::from_congestion(70), TrafficStatus::Moderate);
        assert_eq!(TrafficStatus::from_congestion(71), TrafficStatus::Heavy);
        assert_eq!(TrafficStatus::from_congestion(100), TrafficStatus::Heavy);
    }
}
