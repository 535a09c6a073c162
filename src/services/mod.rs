//! Business logic services

pub mod advisory;
pub mod dashboard;
pub mod flood;
pub mod tides;
pub mod traffic;
