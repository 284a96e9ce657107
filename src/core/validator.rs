//! Acceptance rules for a daily record.
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. more than four punches
//! 2. the same time registered twice
//! 3. any punch on Saturday or Sunday
//! 4. less than an hour between the last two punches (weekdays only)

use crate::errors::{AppError, AppResult};
use crate::models::DailyRecord;
use crate::utils::time::{minutes_between, parse_entry};
use std::collections::HashSet;
use tracing::error;

pub const MAX_PUNCHES_PER_DAY: usize = 4;
pub const MIN_LUNCH_MINUTES: i64 = 60;

pub fn validate_record(record: &DailyRecord) -> AppResult<()> {
    let entries = &record.entries;

    if entries.len() > MAX_PUNCHES_PER_DAY {
        error!(day = %record.day, ?entries, "too many punches for the day");
        return Err(AppError::TooManyPunches);
    }

    let unique: HashSet<&String> = entries.iter().collect();
    if unique.len() < entries.len() {
        error!(day = %record.day, ?entries, "punch already registered");
        return Err(AppError::DuplicatePunch);
    }

    if record.is_weekend() {
        error!(day = %record.day, "punch on a weekend");
        return Err(AppError::WeekendNotAllowed);
    }

    // Last two by list position, not by time: an out-of-order punch is
    // compared against whatever was appended just before it.
    if let [.., before_last, last] = entries.as_slice() {
        let gap = minutes_between(parse_entry(before_last)?, parse_entry(last)?);
        if gap < MIN_LUNCH_MINUTES {
            error!(day = %record.day, ?entries, gap, "lunch break too short");
            return Err(AppError::InsufficientLunchBreak);
        }
    }

    Ok(())
}
