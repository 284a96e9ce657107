//! Storage boundaries of the punch core.
//!
//! The recorder and the aggregator only see these traits; the SQLite adapter
//! and the in-memory store both implement all three.
//!
//! Contract: `MomentStore::save` and `RecordStore::save` are independent
//! writes. A moment saved for audit stays saved even when the punch it
//! carries is rejected afterwards.

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;
use crate::models::{DailyRecord, Moment, MonthlyReport};
use chrono::NaiveDate;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub trait MomentStore {
    /// Append a raw punch to the audit trail and return it with its id.
    fn save_moment(&self, moment: &Moment) -> AppResult<Moment>;
}

pub trait RecordStore {
    fn find_by_date(&self, day: NaiveDate) -> AppResult<Option<DailyRecord>>;

    /// Insert or replace the record for `record.day`.
    ///
    /// Fails with `ConcurrentUpdate` when the stored version no longer
    /// matches `record.version`, i.e. someone else saved the day first.
    fn save_record(&self, record: &DailyRecord) -> AppResult<DailyRecord>;
}

pub trait ReportStore {
    fn save_report(&self, report: &MonthlyReport) -> AppResult<MonthlyReport>;
}
