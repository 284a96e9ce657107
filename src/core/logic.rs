use crate::core::calculator::worked::worked_for_record;
use crate::errors::AppResult;
use crate::models::{DailyRecord, day_summary::DaySummary};

pub struct Core;

impl Core {
    pub fn build_daily_summary(record: &DailyRecord) -> AppResult<DaySummary> {
        Ok(DaySummary {
            day: record.day_str(),
            entries: record.entries.clone(),
            worked: worked_for_record(record)?,
            complete: record.is_complete(),
        })
    }

    pub fn build_summaries(records: &[DailyRecord]) -> AppResult<Vec<DaySummary>> {
        records.iter().map(Core::build_daily_summary).collect()
    }
}
