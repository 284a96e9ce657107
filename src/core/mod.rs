//! Punch validation and monthly aggregation.

pub mod calculator;
pub mod config;
pub mod log;
pub mod logic;
pub mod punch;
pub mod report;
pub mod validator;

use crate::errors::AppResult;
use crate::models::{DailyRecord, Moment, MonthlyReport};
use crate::store::{MomentStore, RecordStore, ReportStore};
use punch::PunchRecorder;
use report::ReportAggregator;

/// Public surface of the core, wired to explicit stores.
pub struct TimeClock<'a> {
    recorder: PunchRecorder<'a>,
    aggregator: ReportAggregator<'a>,
}

impl<'a> TimeClock<'a> {
    pub fn new(
        moments: &'a dyn MomentStore,
        records: &'a dyn RecordStore,
        reports: &'a dyn ReportStore,
    ) -> Self {
        Self {
            recorder: PunchRecorder::new(moments, records),
            aggregator: ReportAggregator::new(records, reports),
        }
    }

    pub fn record_punch(&self, moment: Option<&Moment>) -> AppResult<DailyRecord> {
        self.recorder.record(moment)
    }

    pub fn monthly_report(&self, month: &str) -> AppResult<MonthlyReport> {
        self.aggregator.generate(month)
    }
}
