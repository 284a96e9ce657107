use crate::errors::AppResult;
use crate::utils::date::is_weekend;
use crate::utils::time::{format_time, parse_entry};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Punches registered for one calendar day, in the order they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub day: NaiveDate,
    pub entries: Vec<String>,
    /// Storage revision; bumped on every successful save.
    #[serde(skip)]
    pub version: i64,
}

impl DailyRecord {
    /// New unsaved record holding its first punch.
    pub fn first_punch(day: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: None,
            day,
            entries: vec![format_time(time)],
            version: 0,
        }
    }

    pub fn push(&mut self, time: NaiveTime) {
        self.entries.push(format_time(time));
    }

    pub fn day_str(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }

    pub fn is_weekend(&self) -> bool {
        is_weekend(self.day)
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == 4
    }

    pub fn times(&self) -> AppResult<Vec<NaiveTime>> {
        self.entries.iter().map(|e| parse_entry(e)).collect()
    }
}
