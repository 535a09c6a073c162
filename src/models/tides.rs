//! Tide events for the Saigon River gauge

use serde::{Deserialize, Serialize};

/// High or low water
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TideKind {
    High,
    Low,
}

/// A single tide extremum, formatted for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TideEvent {
    pub kind: TideKind,
    /// Localized 12-hour clock string, e.g. "04:30 AM"
    pub time: String,
    /// Display height, e.g. "3.2m"
    pub height: String,
}

impl TideEvent {
    pub fn new(kind: TideKind, time: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            kind,
            time: time.into(),
            height: height.into(),
        }
    }
}
