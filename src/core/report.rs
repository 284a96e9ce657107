use crate::core::calculator::balance::calculate_balance;
use crate::core::calculator::expected::expected_for_month;
use crate::core::calculator::worked::worked_for_records;
use crate::errors::{AppError, AppResult};
use crate::models::MonthlyReport;
use crate::store::{RecordStore, ReportStore};
use crate::utils::date::{month_bounds, parse_year_month};
use chrono::Datelike;
use tracing::{info, warn};

/// Builds monthly timesheet reports out of daily records.
pub struct ReportAggregator<'a> {
    records: &'a dyn RecordStore,
    reports: &'a dyn ReportStore,
}

impl<'a> ReportAggregator<'a> {
    pub fn new(records: &'a dyn RecordStore, reports: &'a dyn ReportStore) -> Self {
        Self { records, reports }
    }

    /// Compute, save and return the report for `month` (`YYYY-MM`).
    pub fn generate(&self, month: &str) -> AppResult<MonthlyReport> {
        info!(month, "generating monthly report");

        let first = parse_year_month(month)
            .ok_or_else(|| AppError::InvalidInput(format!("invalid month '{month}', expected YYYY-MM")))?;
        let (first, last) = month_bounds(first);

        let mut records = Vec::new();
        for day in first.iter_days().take_while(|d| *d <= last) {
            if let Some(r) = self.records.find_by_date(day)? {
                records.push(r);
            }
        }

        if records.is_empty() {
            warn!(month, "no records found");
            return Err(AppError::NotFound(
                "no records found for the specified month".into(),
            ));
        }

        let worked = worked_for_records(&records)?;
        let expected = expected_for_month(first.year(), first.month());
        let balance = calculate_balance(worked, expected);

        let report = MonthlyReport {
            id: None,
            month: month.to_string(),
            worked,
            excess: balance.excess,
            owed: balance.owed,
            records,
        };

        let stored = self.reports.save_report(&report)?;
        info!(month, "monthly report generated");
        Ok(stored)
    }
}
