use crate::utils::date::weekdays_in_month;
use chrono::TimeDelta;

pub const DAILY_WORK_HOURS: i64 = 8;

/// Expected = 8h for every Monday..Friday of the month.
/// Public holidays are not known here and count as working days.
pub fn expected_for_month(year: i32, month: u32) -> TimeDelta {
    TimeDelta::hours(DAILY_WORK_HOURS * weekdays_in_month(year, month))
}
