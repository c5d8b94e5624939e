//! Time utilities: time-of-day parsing, fractional hours, duration formatting.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

/// Format used for every time-of-day written to the log.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse `HH:MM:SS` or `HH:MM`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Drop sub-second precision, so that what is stored matches what is shown.
pub fn truncate_to_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// Clamp a negative interval (clock stepped backwards) to zero.
pub fn non_negative(delta: TimeDelta) -> TimeDelta {
    if delta < TimeDelta::zero() {
        TimeDelta::zero()
    } else {
        delta
    }
}

/// Round to two decimals, the precision of every hour column.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Duration expressed in fractional hours, rounded to two decimals.
pub fn hours(delta: TimeDelta) -> f64 {
    let millis = delta.num_milliseconds() as f64;
    round2(millis / 3_600_000.0)
}

/// Human readable duration, e.g. `01h 05m 09s`.
pub fn format_duration(delta: TimeDelta) -> String {
    let secs = delta.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}h {:02}m {:02}s", sign, s / 3600, (s % 3600) / 60, s % 60)
}

pub fn format_hours(h: f64) -> String {
    format!("{:.2}", h)
}

// ---------------------------
// serde helpers for the log columns
// ---------------------------

pub fn serialize_time<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_time(*t))
}

pub fn deserialize_time<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_time(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day '{raw}'")))
}

pub fn serialize_hours<S: Serializer>(h: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_hours(*h))
}
