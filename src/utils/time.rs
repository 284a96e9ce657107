//! Time utilities: parsing HH:MM:SS, interval computations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta};

pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, TIME_FORMAT).ok()
}

/// Parse a stored punch entry, failing with `InvalidInput` on corrupt data.
pub fn parse_entry(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidInput(format!("invalid punch time '{t}'")))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Signed interval `end - start`; negative when `end` is earlier.
pub fn interval(start: NaiveTime, end: NaiveTime) -> TimeDelta {
    end - start
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    interval(start, end).num_minutes()
}
