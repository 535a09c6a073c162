//! HTTP handlers

mod dashboard;
mod geocode;
mod health;

pub use dashboard::{get_dashboard, search_dashboard};
pub use geocode::suggest_locations;
pub use health::health_check;
