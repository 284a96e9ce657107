use super::daily_record::DailyRecord;
use crate::utils::formatting::iso_duration;
use chrono::TimeDelta;
use serde::{Serialize, Serializer};

/// Snapshot of a month's balance. Recomputed from the daily records on
/// every request; saving one never touches earlier snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub month: String,
    #[serde(serialize_with = "as_iso")]
    pub worked: TimeDelta,
    #[serde(serialize_with = "as_iso")]
    pub excess: TimeDelta,
    #[serde(serialize_with = "as_iso")]
    pub owed: TimeDelta,
    pub records: Vec<DailyRecord>,
}

fn as_iso<S: Serializer>(d: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&iso_duration(*d))
}
