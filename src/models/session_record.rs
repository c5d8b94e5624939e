use crate::utils::time::{
    deserialize_time, format_hours, format_time, hours, non_negative, serialize_hours,
    serialize_time, truncate_to_seconds,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Column schema of the log table, in file order.
pub const COLUMNS: [&str; 7] = [
    "Date",
    "Day",
    "Check-In Time",
    "Check-Out Time",
    "Total Time (hours)",
    "Pause Time (hours)",
    "Working Time (hours)",
];

/// One completed session, as it is written to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(
        rename = "Check-In Time",
        serialize_with = "serialize_time",
        deserialize_with = "deserialize_time"
    )]
    pub check_in: NaiveTime,
    #[serde(
        rename = "Check-Out Time",
        serialize_with = "serialize_time",
        deserialize_with = "deserialize_time"
    )]
    pub check_out: NaiveTime,
    #[serde(rename = "Total Time (hours)", serialize_with = "serialize_hours")]
    pub total_hours: f64,
    #[serde(rename = "Pause Time (hours)", serialize_with = "serialize_hours")]
    pub pause_hours: f64,
    #[serde(rename = "Working Time (hours)", serialize_with = "serialize_hours")]
    pub working_hours: f64,
}

impl SessionRecord {
    /// Build the record of a session that ran from `check_in` to `check_out`
    /// with `pause` spent paused.
    ///
    /// Working time is derived from the exact durations and rounded last,
    /// so it never drifts from `total - pause` by more than the rounding.
    pub fn from_interval(
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        pause: TimeDelta,
    ) -> Self {
        let total = non_negative(check_out - check_in);
        let pause = non_negative(pause);
        let working = non_negative(total - pause);

        Self {
            date: check_in.date(),
            day: check_in.format("%A").to_string(),
            check_in: truncate_to_seconds(check_in.time()),
            check_out: truncate_to_seconds(check_out.time()),
            total_hours: hours(total),
            pause_hours: hours(pause),
            working_hours: hours(working),
        }
    }

    /// Cells as shown on screen, in column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.day.clone(),
            format_time(self.check_in),
            format_time(self.check_out),
            format_hours(self.total_hours),
            format_hours(self.pause_hours),
            format_hours(self.working_hours),
        ]
    }
}
