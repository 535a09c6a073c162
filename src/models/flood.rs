//! Flood risk estimate derived from rain, soil moisture and canal level

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Canal level above which a flood warning is displayed, in metres
pub const CANAL_WARNING_THRESHOLD_M: Decimal = dec!(2.0);

/// Categorical flood risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FloodLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// Derived flood risk for the looked-up location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloodRisk {
    /// Additive heuristic score, 0..=100
    pub score: i32,
    pub level: FloodLevel,
    /// Synthesized canal level in metres
    pub canal_level_m: Decimal,
    pub warning_threshold_m: Decimal,
}

impl FloodLevel {
    /// Map an additive score onto a categorical level
    pub fn from_score(score: i32) -> Self {
        if score > 80 {
            FloodLevel::Critical
        } else if score > 50 {
            FloodLevel::High
        } else if score > 30 {
            FloodLevel::Moderate
        } else {
            FloodLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(FloodLevel::from_score(0), FloodLevel::Low);
        assert_eq!(FloodLevel::from_score(30), FloodLevel::Low);
        assert_eq!(FloodLevel::from_score(31), FloodLevel::Moderate);
        assert_eq!(FloodLevel::from_score(50), FloodLevel::Moderate);
        assert_eq!(FloodLevel::from_score(51), FloodLevel::High);
        assert_eq!(FloodLevel::from_score(80), FloodLevel::High);
        assert_eq!(FloodLevel::from_score(81), FloodLevel::Critical);
        assert_eq!(FloodLevel::from_score(100), FloodLevel::Critical);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(FloodLevel::Low < FloodLevel::Moderate);
        assert!(FloodLevel::Moderate < FloodLevel::High);
        assert!(FloodLevel::High < FloodLevel::Critical);
    }
}
