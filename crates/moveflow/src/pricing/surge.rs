//! Peak-demand surge determination.
//!
//! Surge applies to the base and distance fares only. Several windows can
//! match the same timestamp; the applicable multipliers combine via `max`,
//! never by stacking, and the result is clamped to the configured ceiling.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

use super::config::PricingConfig;

/// Parse a caller-supplied booking timestamp.
///
/// Accepts RFC 3339 (the offset's wall clock is what counts for peak hours)
/// and two bare local formats. Anything else is `None`: an unreadable
/// timestamp must not block a booking over a cosmetic surcharge, so the
/// caller prices it without surge.
pub fn parse_scheduled_at(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    None
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

fn is_peak_hour(hour: u32) -> bool {
    (7..=9).contains(&hour) || (17..=19).contains(&hour)
}

/// Surge multiplier for a scheduled local time.
///
/// Weekday commuter windows and weekends each contribute a candidate
/// multiplier; the largest applicable one wins.
pub fn surge_factor(scheduled_at: NaiveDateTime, config: &PricingConfig) -> Decimal {
    let mut factor = Decimal::ONE;

    if !is_weekend(scheduled_at.weekday()) && is_peak_hour(scheduled_at.hour()) {
        factor = factor.max(config.weekday_peak_surge);
    }

    if is_weekend(scheduled_at.weekday()) {
        factor = factor.max(config.weekend_surge);
    }

    factor.min(config.max_surge)
}

/// Surge for an optional raw timestamp; absent or malformed input prices
/// without surge.
pub fn surge_for(scheduled_at: Option<&str>, config: &PricingConfig) -> Decimal {
    scheduled_at
        .and_then(parse_scheduled_at)
        .map(|when| surge_factor(when, config))
        .unwrap_or(Decimal::ONE)
}
