//! Traffic estimation
//!
//! No real traffic feed backs the dashboard. The default estimator
//! synthesizes a congestion figure from a random base plus a rain bonus and
//! labels the result as synthesized. The estimator sits behind a trait so the
//! derivation pipeline stays deterministic under test.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{TrafficEstimate, TrafficStatus};

/// Congestion added when any rain is falling
const RAIN_CONGESTION_BONUS: i32 = 20;

/// Free-flow average speed in km/h; congestion knocks 0.4 km/h per point
const FREE_FLOW_SPEED_KMH: Decimal = dec!(50);

/// Produces a traffic estimate for the current weather
pub trait TrafficEstimator: Send + Sync {
    fn estimate(&self, rain_mm: Decimal) -> TrafficEstimate;
}

/// Default estimator: random base congestion in [10, 40) plus the rain bonus
pub struct SynthesizedTraffic;

impl TrafficEstimator for SynthesizedTraffic {
    fn estimate(&self, rain_mm: Decimal) -> TrafficEstimate {
        let base = rand::thread_rng().gen_range(10..40);
        build_estimate(base, rain_mm)
    }
}

/// Deterministic estimator with a fixed base congestion, for tests
pub struct FixedCongestion(pub i32);

impl TrafficEstimator for FixedCongestion {
    fn estimate(&self, rain_mm: Decimal) -> TrafficEstimate {
        build_estimate(self.0, rain_mm)
    }
}

/// Derive the full estimate from a base congestion figure and current rain
pub fn build_estimate(base_congestion: i32, rain_mm: Decimal) -> TrafficEstimate {
    let bonus = if rain_mm > Decimal::ZERO {
        RAIN_CONGESTION_BONUS
    } else {
        0
    };
    let congestion_percent = (base_congestion + bonus).min(100);

    TrafficEstimate {
        congestion_percent,
        status: TrafficStatus::from_congestion(congestion_percent),
        average_speed_kmh: FREE_FLOW_SPEED_KMH - Decimal::from(congestion_percent) * dec!(0.4),
        incident_count: if congestion_percent > 60 { 1 } else { 0 },
        synthesized: true,
    }
}
