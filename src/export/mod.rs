// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::DayExport;

use crate::errors::AppResult;
use crate::models::MonthlyReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
///
/// Quiet exports leave stdout to machine-readable output and only trace.
pub(crate) fn notify_export_success(label: &str, path: &Path, quiet: bool) {
    if quiet {
        tracing::info!(format = label, path = %path.display(), "export completed");
    } else {
        success(format!("{label} export completed: {}", path.display()));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the per-day breakdown of `report` to `file`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    /// With `quiet` nothing is printed to stdout.
    pub fn export_report(
        report: &MonthlyReport,
        format: ExportFormat,
        file: &str,
        force: bool,
        quiet: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force, quiet)?;

        let rows = model::report_to_rows(report)?;

        match format {
            ExportFormat::Csv => json_csv::export_csv(&rows, path, quiet),
            ExportFormat::Json => json_csv::export_json(&rows, path, quiet),
        }
    }
}
