//! Advisory list assembly
//!
//! A short list of links to official portals, with conditional flood and rain
//! entries when the derived readings cross their thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Advisory, AdvisoryKind, CurrentConditions, FloodLevel, FloodRisk};

const TRAFFIC_PORTAL_URL: &str = "http://giaothong.hochiminhcity.gov.vn";
const FLOOD_CONTROL_URL: &str = "http://www.phongchonglutbaotphcm.gov.vn";
const WEATHER_PORTAL_URL: &str = "https://nchmf.gov.vn";

/// Rain amount above which a rain advisory is shown, in millimetres
const RAIN_ADVISORY_MM: Decimal = dec!(10);

/// Next-hour rain probability above which a rain advisory is shown
const RAIN_ADVISORY_PROBABILITY: Decimal = dec!(60);

/// Assemble the advisory list for the current readings
pub fn assemble(weather: &CurrentConditions, flood: &FloodRisk) -> Vec<Advisory> {
    let mut advisories = vec![Advisory {
        kind: AdvisoryKind::TrafficPortal,
        title_en: "HCMC traffic portal".to_string(),
        title_vi: "Cổng thông tin giao thông TP.HCM".to_string(),
        url: TRAFFIC_PORTAL_URL.to_string(),
    }];

    if flood.level >= FloodLevel::High {
        advisories.push(Advisory {
            kind: AdvisoryKind::FloodControl,
            title_en: "Flood risk elevated - steering committee updates".to_string(),
            title_vi: "Nguy cơ ngập cao - cập nhật từ ban chỉ huy phòng chống lụt bão".to_string(),
            url: FLOOD_CONTROL_URL.to_string(),
        });
    }

    if weather.rain_mm > RAIN_ADVISORY_MM
        || weather.rain_probability_percent > RAIN_ADVISORY_PROBABILITY
    {
        advisories.push(Advisory {
            kind: AdvisoryKind::RainWarning,
            title_en: "Heavy rain expected - check the national forecast".to_string(),
            title_vi: "Dự báo mưa lớn - xem bản tin khí tượng quốc gia".to_string(),
            url: WEATHER_PORTAL_URL.to_string(),
        });
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::flood;

    fn conditions(rain_mm: Decimal, probability: Decimal) -> CurrentConditions {
        CurrentConditions {
            temperature_celsius: dec!(31),
            apparent_temperature_celsius: dec!(36),
            humidity_percent: dec!(75),
            rain_mm,
            rain_probability_percent: probability,
            rain_next_hour_mm: Decimal::ZERO,
            wind_speed_kmh: dec!(8),
            weather_code: 3,
            uv_index: dec!(7),
            us_aqi: dec!(90),
            soil_moisture: dec!(0.2),
        }
    }

    #[test]
    fn test_traffic_portal_always_present() {
        let weather = conditions(Decimal::ZERO, Decimal::ZERO);
        let risk = flood::assess(weather.rain_mm, weather.soil_moisture);
        let advisories = assemble(&weather, &risk);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].kind, AdvisoryKind::TrafficPortal);
    }

    #[test]
    fn test_rain_advisory_on_heavy_rain() {
        let weather = conditions(dec!(12), Decimal::ZERO);
        let risk = flood::assess(weather.rain_mm, weather.soil_moisture);
        let advisories = assemble(&weather, &risk);
        assert!(advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::RainWarning));
    }

    #[test]
    fn test_rain_advisory_on_high_probability() {
        let weather = conditions(Decimal::ZERO, dec!(75));
        let risk = flood::assess(weather.rain_mm, weather.soil_moisture);
        let advisories = assemble(&weather, &risk);
        assert!(advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::RainWarning));
    }

    #[test]
    fn test_no_rain_advisory_at_thresholds() {
        // Both conditions are strict inequalities
        let weather = conditions(dec!(10), dec!(60));
        let risk = flood::assess(weather.rain_mm, weather.soil_moisture);
        let advisories = assemble(&weather, &risk);
        assert!(!advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::RainWarning));
    }

    #[test]
    fn test_flood_advisory_on_high_level() {
        // rain 40 + saturated soil pushes the level to Critical
        let weather = conditions(dec!(40), dec!(90));
        let risk = flood::assess(weather.rain_mm, dec!(0.5));
        let advisories = assemble(&weather, &risk);
        assert!(advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::FloodControl));
        assert_eq!(advisories.len(), 3);
    }
}
