//! Tide table assembly
//!
//! Combines the marine provider's high/low extrema into a display-ready,
//! chronologically sorted table. Ordering compares the parsed timestamps
//! directly, so entries sort correctly across midnight. When the provider
//! returns nothing usable, a fixed fallback table is substituted.

use chrono::NaiveDateTime;

use crate::external::marine::MarineResponse;
use crate::models::{TideEvent, TideKind};

/// Display height used for provider-supplied extrema, which carry timestamps
/// only. Typical spring ranges at the Vung Tau gauge.
const HIGH_TIDE_HEIGHT: &str = "3.5m";
const LOW_TIDE_HEIGHT: &str = "1.0m";

/// How many extrema of each kind to keep per day
const EXTREMA_PER_KIND: usize = 2;

/// Build the tide table from a marine response, falling back to the fixed
/// table when the daily block is absent or empty.
pub fn tide_table(response: &MarineResponse) -> Vec<TideEvent> {
    let Some(daily) = response.daily.as_ref() else {
        return fallback_tides();
    };

    let mut timed: Vec<(NaiveDateTime, TideKind)> = Vec::new();
    for raw in daily.tide_high.iter().take(EXTREMA_PER_KIND) {
        if let Some(timestamp) = parse_timestamp(raw) {
            timed.push((timestamp, TideKind::High));
        }
    }
    for raw in daily.tide_low.iter().take(EXTREMA_PER_KIND) {
        if let Some(timestamp) = parse_timestamp(raw) {
            timed.push((timestamp, TideKind::Low));
        }
    }

    if timed.is_empty() {
        return fallback_tides();
    }

    timed.sort_by_key(|(timestamp, _)| *timestamp);

    timed
        .into_iter()
        .map(|(timestamp, kind)| {
            let height = match kind {
                TideKind::High => HIGH_TIDE_HEIGHT,
                TideKind::Low => LOW_TIDE_HEIGHT,
            };
            TideEvent::new(kind, timestamp.format("%I:%M %p").to_string(), height)
        })
        .collect()
}

/// The fixed four-event table substituted when marine data is unavailable
pub fn fallback_tides() -> Vec<TideEvent> {
    vec![
        TideEvent::new(TideKind::High, "04:30 AM", "3.2m"),
        TideEvent::new(TideKind::Low, "10:15 AM", "1.2m"),
        TideEvent::new(TideKind::High, "05:45 PM", "3.8m"),
        TideEvent::new(TideKind::Low, "11:30 PM", "0.9m"),
    ]
}

/// Parse the provider's ISO-8601 local timestamps, with or without seconds
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
