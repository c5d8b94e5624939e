// src/logstore/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn excel_epoch() -> NaiveDate {
    // 1899-12-30 is always a valid date
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// Excel serial of a calendar date (whole days since 1899-12-30).
pub(crate) fn date_to_serial(d: NaiveDate) -> f64 {
    (d - excel_epoch()).num_days() as f64
}

/// Excel serial of a time of day (fraction of a day).
pub(crate) fn time_to_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY
}

/// Date part of an Excel serial.
pub(crate) fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    excel_epoch().checked_add_signed(TimeDelta::try_days(serial.floor() as i64)?)
}

/// Time-of-day part of an Excel serial, rounded to the nearest second.
pub(crate) fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial.fract() * SECONDS_PER_DAY).round() as u32;
    // 23:59:59.6 rounds up to the next midnight
    NaiveTime::from_num_seconds_from_midnight_opt(secs % 86_400, 0)
}

/// Date written as text, plain or ISO date-time.
pub(crate) fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let dt_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
    dt_formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}
