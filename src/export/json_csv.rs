// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{DayExport, notify_export_success};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[DayExport], path: &Path, quiet: bool) -> AppResult<()> {
    tracing::debug!(path = %path.display(), "exporting to JSON");

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, quiet);
    Ok(())
}

/// Export CSV (header included via serde).
pub(crate) fn export_csv(rows: &[DayExport], path: &Path, quiet: bool) -> AppResult<()> {
    tracing::debug!(path = %path.display(), "exporting to CSV");

    let mut wtr = csv::Writer::from_path(path)?;

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, quiet);
    Ok(())
}
