//! SQLite-backed implementation of the store traits.

use super::{MomentStore, RecordStore, ReportStore};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, Moment, MonthlyReport};
use chrono::NaiveDate;
use rusqlite::Connection;

/// Borrowing adapter: one connection serves all three stores.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl MomentStore for SqliteStore<'_> {
    fn save_moment(&self, moment: &Moment) -> AppResult<Moment> {
        let id = queries::insert_moment(self.conn, moment)?;
        Ok(Moment {
            id: Some(id),
            timestamp: moment.timestamp.clone(),
        })
    }
}

impl RecordStore for SqliteStore<'_> {
    fn find_by_date(&self, day: NaiveDate) -> AppResult<Option<DailyRecord>> {
        queries::find_record_by_day(self.conn, &day)
    }

    fn save_record(&self, record: &DailyRecord) -> AppResult<DailyRecord> {
        if record.version == 0 {
            let id = queries::insert_record(self.conn, record)?;
            return Ok(DailyRecord {
                id: Some(id),
                version: 1,
                ..record.clone()
            });
        }

        if queries::update_record_if_version(self.conn, record)? == 0 {
            return Err(AppError::ConcurrentUpdate(format!(
                "record for {} changed since it was read",
                record.day_str()
            )));
        }

        Ok(DailyRecord {
            version: record.version + 1,
            ..record.clone()
        })
    }
}

impl ReportStore for SqliteStore<'_> {
    fn save_report(&self, report: &MonthlyReport) -> AppResult<MonthlyReport> {
        let id = queries::insert_report(self.conn, report)?;
        Ok(MonthlyReport {
            id: Some(id),
            ..report.clone()
        })
    }
}
