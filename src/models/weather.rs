//! Current weather conditions projected from the forecast provider

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current conditions at the looked-up location.
///
/// Every field is a read-only projection of the forecast response; fields the
/// provider omits are zero, never null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temperature_celsius: Decimal,
    pub apparent_temperature_celsius: Decimal,
    pub humidity_percent: Decimal,
    /// Instantaneous rain over the last reporting interval
    pub rain_mm: Decimal,
    /// Probability of precipitation for the coming hour
    pub rain_probability_percent: Decimal,
    /// Forecast rain volume for the coming hour
    pub rain_next_hour_mm: Decimal,
    pub wind_speed_kmh: Decimal,
    /// WMO weather interpretation code
    pub weather_code: i32,
    pub uv_index: Decimal,
    pub us_aqi: Decimal,
    /// Topsoil moisture fraction, feeds the flood score
    pub soil_moisture: Decimal,
}
