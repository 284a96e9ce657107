use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Maintenance on the punch database. Flags run in a fixed order:
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        run_pending_migrations(&pool.conn)?;
        ttlog(&pool.conn, "migrate", &cfg.database, "Schema brought up to date")?;
        success("Migration completed.");
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        info("Running integrity check…");
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity != "ok" {
            return Err(AppError::Migration(format!(
                "integrity check failed: {integrity}"
            )));
        }
        success("Integrity check passed.");
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
