//! In-memory stores, used by tests and by callers that don't need SQLite.

use super::{MomentStore, RecordStore, ReportStore};
use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, Moment, MonthlyReport};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Tables {
    moments: Vec<Moment>,
    records: BTreeMap<NaiveDate, DailyRecord>,
    reports: Vec<MonthlyReport>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Single-threaded store backed by plain collections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RefCell<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moments(&self) -> Vec<Moment> {
        self.tables.borrow().moments.clone()
    }

    pub fn records(&self) -> Vec<DailyRecord> {
        self.tables.borrow().records.values().cloned().collect()
    }

    pub fn reports(&self) -> Vec<MonthlyReport> {
        self.tables.borrow().reports.clone()
    }

    /// Seed a record as-is, bypassing validation.
    pub fn insert_record(&self, record: DailyRecord) {
        self.tables.borrow_mut().records.insert(record.day, record);
    }
}

impl MomentStore for MemoryStore {
    fn save_moment(&self, moment: &Moment) -> AppResult<Moment> {
        let mut t = self.tables.borrow_mut();
        let mut stored = moment.clone();
        stored.id = Some(t.next_id());
        t.moments.push(stored.clone());
        Ok(stored)
    }
}

impl RecordStore for MemoryStore {
    fn find_by_date(&self, day: NaiveDate) -> AppResult<Option<DailyRecord>> {
        Ok(self.tables.borrow().records.get(&day).cloned())
    }

    fn save_record(&self, record: &DailyRecord) -> AppResult<DailyRecord> {
        let mut t = self.tables.borrow_mut();
        let current = t.records.get(&record.day).map(|r| (r.id, r.version));

        let id = match current {
            Some((_, version)) if version != record.version => {
                return Err(AppError::ConcurrentUpdate(format!(
                    "record for {} changed since it was read",
                    record.day_str()
                )));
            }
            Some((id, _)) => id,
            None if record.version != 0 => {
                return Err(AppError::ConcurrentUpdate(format!(
                    "record for {} no longer exists",
                    record.day_str()
                )));
            }
            None => Some(t.next_id()),
        };

        let mut stored = record.clone();
        stored.id = id;
        stored.version = record.version + 1;
        t.records.insert(stored.day, stored.clone());
        Ok(stored)
    }
}

impl ReportStore for MemoryStore {
    fn save_report(&self, report: &MonthlyReport) -> AppResult<MonthlyReport> {
        let mut t = self.tables.borrow_mut();
        let mut stored = report.clone();
        stored.id = Some(t.next_id());
        t.reports.push(stored.clone());
        Ok(stored)
    }
}
