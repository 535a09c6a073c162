//! External API clients for third-party providers

pub mod forecast;
pub mod geocoding;
pub mod marine;
