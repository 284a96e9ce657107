use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{info, warn};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Raw punches, kept for audit only.
fn create_moments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS moments (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp   TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// One row per calendar day; `entries` is a JSON array of "HH:MM:SS".
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            day      TEXT NOT NULL UNIQUE,
            entries  TEXT NOT NULL DEFAULT '[]',
            version  INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_records_day ON records(day);
        "#,
    )?;
    Ok(())
}

fn create_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            month       TEXT NOT NULL,
            worked      TEXT NOT NULL,
            excess      TEXT NOT NULL,
            owed        TEXT NOT NULL,
            records     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_month ON reports(month);
        "#,
    )?;
    Ok(())
}

/// Records created before optimistic locking have no `version` column.
fn migrate_add_version_column(conn: &Connection) -> Result<()> {
    let version = "20250301_0003_add_record_version";

    if has_column(conn, "records", "version")? {
        return Ok(());
    }

    warn!("adding 'version' column to records table");

    conn.execute(
        "ALTER TABLE records ADD COLUMN version INTEGER NOT NULL DEFAULT 1;",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added version to records')",
        [version],
    )?;

    info!(migration = version, "added 'version' to records table");

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() before every command, so it reports
/// through `tracing` only and never writes to stdout.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "moments")? {
        create_moments_table(conn)?;
        info!(table = "moments", "table created");
    }

    if !table_exists(conn, "records")? {
        create_records_table(conn)?;
        info!(table = "records", "table created");
    } else {
        migrate_add_version_column(conn)?;
    }

    if !table_exists(conn, "reports")? {
        create_reports_table(conn)?;
        info!(table = "reports", "table created");
    }

    Ok(())
}
