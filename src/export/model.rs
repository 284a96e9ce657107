// src/export/model.rs

use crate::core::calculator::worked::worked_for_record;
use crate::errors::AppResult;
use crate::models::MonthlyReport;
use crate::utils::formatting::iso_duration;
use serde::Serialize;

/// Flat row, one per daily record of the report.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub month: String,
    pub day: String,
    pub punches: usize,
    pub entries: String,
    pub worked: String,
}

pub(crate) fn report_to_rows(report: &MonthlyReport) -> AppResult<Vec<DayExport>> {
    report
        .records
        .iter()
        .map(|r| -> AppResult<DayExport> {
            Ok(DayExport {
                month: report.month.clone(),
                day: r.day_str(),
                punches: r.entries.len(),
                entries: r.entries.join(" "),
                worked: iso_duration(worked_for_record(r)?),
            })
        })
        .collect()
}
