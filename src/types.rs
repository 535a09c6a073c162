//! Common types used across the service

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Coverage area for the dashboard: the Ho Chi Minh City bounding box.
/// Lookups outside this box are rejected before the derivation pipeline runs.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub south: Decimal,
    pub west: Decimal,
    pub north: Decimal,
    pub east: Decimal,
}

impl BoundingBox {
    pub fn contains(&self, coords: &GpsCoordinates) -> bool {
        coords.latitude >= self.south
            && coords.latitude <= self.north
            && coords.longitude >= self.west
            && coords.longitude <= self.east
    }
}

/// Ho Chi Minh City coverage box
pub const HCMC_BOUNDS: BoundingBox = BoundingBox {
    south: dec!(10.35),
    west: dec!(106.30),
    north: dec!(11.16),
    east: dec!(107.02),
};

/// Tide readings are anchored to the Vung Tau reference gauge rather than the
/// user's location, so every lookup shares one consistent tide table.
pub const TIDE_GAUGE: GpsCoordinates = GpsCoordinates {
    latitude: dec!(10.346),
    longitude: dec!(107.084),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hcmc_bounds_accepts_city_center() {
        // Ben Thanh market
        let coords = GpsCoordinates::new(dec!(10.7725), dec!(106.6980));
        assert!(HCMC_BOUNDS.contains(&coords));
    }

    #[test]
    fn test_hcmc_bounds_rejects_outside() {
        let outside = [
            GpsCoordinates::new(dec!(21.0285), dec!(105.8542)), // Hanoi
            GpsCoordinates::new(dec!(10.0452), dec!(105.7469)), // Can Tho
            GpsCoordinates::new(dec!(1.3521), dec!(103.8198)),  // Singapore
        ];
        for coords in outside {
            assert!(!HCMC_BOUNDS.contains(&coords));
        }
    }

    #[test]
    fn test_bounds_edges_inclusive() {
        assert!(HCMC_BOUNDS.contains(&GpsCoordinates::new(dec!(10.35), dec!(106.30))));
        assert!(HCMC_BOUNDS.contains(&GpsCoordinates::new(dec!(11.16), dec!(107.02))));
    }

    #[test]
    fn test_tide_gauge_outside_city_box() {
        // The gauge sits at the river mouth, deliberately outside coverage.
        assert!(!HCMC_BOUNDS.contains(&TIDE_GAUGE));
    }
}
