//! Flood risk scoring
//!
//! An additive threshold ladder over rain, topsoil moisture and a synthesized
//! canal level. Thresholds are independent, so contributions overlap: rain
//! alone can add up to 30 points across its three bands. The score is
//! monotone non-decreasing in both inputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FloodLevel, FloodRisk, CANAL_WARNING_THRESHOLD_M};

/// Base canal level in metres when no rain has fallen
const CANAL_BASE_M: Decimal = dec!(1.2);

/// Canal level rise per millimetre of rain
const CANAL_RISE_PER_MM: Decimal = dec!(0.05);

/// Score a location's flood risk from current rain and soil moisture.
///
/// The canal level is synthesized from rain since no canal gauge feed exists;
/// it rises 5 cm per millimetre of rain from a 1.2 m base.
pub fn assess(rain_mm: Decimal, soil_moisture: Decimal) -> FloodRisk {
    let canal_level_m = CANAL_BASE_M + rain_mm * CANAL_RISE_PER_MM;

    let mut score = 0;
    if soil_moisture > dec!(0.35) {
        score += 15;
    }
    if soil_moisture > dec!(0.45) {
        score += 15;
    }
    if rain_mm > dec!(5) {
        score += 10;
    }
    if rain_mm > dec!(15) {
        score += 10;
    }
    if rain_mm > dec!(30) {
        score += 10;
    }
    if canal_level_m > dec!(1.5) {
        score += 15;
    }
    if canal_level_m > dec!(2.0) {
        score += 25;
    }

    FloodRisk {
        score,
        level: FloodLevel::from_score(score),
        canal_level_m,
        warning_threshold_m: CANAL_WARNING_THRESHOLD_M,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_conditions_are_low_risk() {
        let risk = assess(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, FloodLevel::Low);
        assert_eq!(risk.canal_level_m, dec!(1.20));
    }

    #[test]
    fn test_heavy_rain_saturated_soil_is_critical() {
        // canal = 1.2 + 40 * 0.05 = 3.2, both canal bonuses apply
        let risk = assess(dec!(40), dec!(0.5));
        assert_eq!(risk.canal_level_m, dec!(3.2));
        assert!(risk.score >= 85);
        assert_eq!(risk.level, FloodLevel::Critical);
    }

    #[test]
    fn test_score_is_capped_contributions() {
        // Maximum possible: 30 soil + 30 rain + 40 canal
        let risk = assess(dec!(100), dec!(1.0));
        assert_eq!(risk.score, 100);
    }

    #[test]
    fn test_moderate_rain_band() {
        // rain 10: one rain band (+10), canal 1.7 (+15), dry soil
        let risk = assess(dec!(10), dec!(0.2));
        assert_eq!(risk.score, 25);
        assert_eq!(risk.level, FloodLevel::Low);
    }

    #[test]
    fn test_soil_bands_overlap() {
        let one_band = assess(Decimal::ZERO, dec!(0.40));
        let two_bands = assess(Decimal::ZERO, dec!(0.50));
        assert_eq!(one_band.score, 15);
        assert_eq!(two_bands.score, 30);
    }

    #[test]
    fn test_thresholds_are_strict_inequalities() {
        assert_eq!(assess(dec!(5), Decimal::ZERO).score, 0);
        assert_eq!(assess(Decimal::ZERO, dec!(0.35)).score, 0);
        // canal = 1.5 exactly at rain 6 adds the 5mm rain band only
        assert_eq!(assess(dec!(6), Decimal::ZERO).score, 10);
    }

    #[test]
    fn test_monotone_in_rain() {
        let mut previous = -1;
        for rain in 0..=60 {
            let risk = assess(Decimal::from(rain), dec!(0.3));
            assert!(risk.score >= previous, "score dropped at rain={}", rain);
            previous = risk.score;
        }
    }
}
