use crate::errors::AppResult;
use crate::models::DailyRecord;
use crate::utils::time::interval;
use chrono::TimeDelta;

/// Worked time of a single day: (e1 - e0) + (e3 - e2).
///
/// Only a complete day (exactly four punches) counts; anything else is
/// still open and contributes zero.
pub fn worked_for_record(record: &DailyRecord) -> AppResult<TimeDelta> {
    if !record.is_complete() {
        return Ok(TimeDelta::zero());
    }

    let t = record.times()?;
    Ok(interval(t[0], t[1]) + interval(t[2], t[3]))
}

pub fn worked_for_records(records: &[DailyRecord]) -> AppResult<TimeDelta> {
    records
        .iter()
        .try_fold(TimeDelta::zero(), |acc, r| -> AppResult<TimeDelta> {
            Ok(acc + worked_for_record(r)?)
        })
}
