use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, Moment, MonthlyReport};
use crate::utils::formatting::iso_duration;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

pub fn insert_moment(conn: &Connection, moment: &Moment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO moments (timestamp, created_at) VALUES (?1, ?2)",
        params![
            moment.timestamp.as_deref().unwrap_or_default(),
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Moments whose raw timestamp starts with `prefix` (all when `None`).
pub fn load_moments(conn: &Connection, prefix: Option<&str>) -> AppResult<Vec<Moment>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp FROM moments
         WHERE ?1 IS NULL OR substr(timestamp, 1, length(?1)) = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([prefix], |row| {
        Ok(Moment {
            id: Some(row.get(0)?),
            timestamp: Some(row.get(1)?),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_record_row(row: &Row) -> Result<DailyRecord> {
    let day_str: String = row.get("day")?;
    let entries_json: String = row.get("entries")?;

    let day = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidInput(format!("invalid day: {day_str}"))),
        )
    })?;

    let entries: Vec<String> = serde_json::from_str(&entries_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(DailyRecord {
        id: Some(row.get("id")?),
        day,
        entries,
        version: row.get("version")?,
    })
}

pub fn find_record_by_day(conn: &Connection, day: &NaiveDate) -> AppResult<Option<DailyRecord>> {
    let mut stmt = conn.prepare_cached("SELECT id, day, entries, version FROM records WHERE day = ?1")?;

    let record = stmt
        .query_row([day.format("%Y-%m-%d").to_string()], map_record_row)
        .optional()?;

    Ok(record)
}

/// Records with `from <= day <= to`, oldest first.
pub fn load_records_between(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<DailyRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, day, entries, version FROM records
         WHERE day >= ?1 AND day <= ?2
         ORDER BY day ASC",
    )?;

    let rows = stmt.query_map(
        [
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ],
        map_record_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a brand-new day. A UNIQUE clash means another writer created it first.
pub fn insert_record(conn: &Connection, record: &DailyRecord) -> AppResult<i64> {
    let entries = serde_json::to_string(&record.entries)?;

    match conn.execute(
        "INSERT INTO records (day, entries, version) VALUES (?1, ?2, 1)",
        params![record.day_str(), entries],
    ) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(AppError::ConcurrentUpdate(format!(
                "record for {} was created concurrently",
                record.day_str()
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// Compare-and-swap on `version`; returns the number of rows touched (0 or 1).
pub fn update_record_if_version(conn: &Connection, record: &DailyRecord) -> AppResult<usize> {
    let entries = serde_json::to_string(&record.entries)?;

    let changed = conn.execute(
        "UPDATE records
         SET entries = ?1, version = version + 1
         WHERE day = ?2 AND version = ?3",
        params![entries, record.day_str(), record.version],
    )?;

    Ok(changed)
}

pub fn insert_report(conn: &Connection, report: &MonthlyReport) -> AppResult<i64> {
    let records = serde_json::to_string(&report.records)?;

    conn.execute(
        "INSERT INTO reports (month, worked, excess, owed, records, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            report.month,
            iso_duration(report.worked),
            iso_duration(report.excess),
            iso_duration(report.owed),
            records,
            Local::now().to_rfc3339(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    let count = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(count)
}
