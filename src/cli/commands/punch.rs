use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeClock;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Moment;
use crate::models::moment::MOMENT_FORMAT;
use crate::store::SqliteStore;
use crate::ui::messages::success;
use chrono::Local;

/// Record a punch and show the resulting day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        timestamp,
        now,
        json,
    } = cmd
    {
        //
        // 1. Build the moment (explicit or current local time)
        //
        let moment = if *now {
            Moment::new(Local::now().naive_local().format(MOMENT_FORMAT).to_string())
        } else {
            Moment {
                id: None,
                timestamp: timestamp.clone(),
            }
        };

        //
        // 2. Open DB and wire the stores
        //
        let pool = DbPool::open_ready(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);
        let clock = TimeClock::new(&store, &store, &store);

        //
        // 3. Execute logic
        //
        let record = clock.record_punch(Some(&moment))?;

        if let Err(e) = ttlog(
            &pool.conn,
            "punch",
            &record.day_str(),
            &format!("Punch {} registered", record.entries.last().map(String::as_str).unwrap_or("")),
        ) {
            tracing::warn!(error = %e, "failed to write internal log");
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            success(format!(
                "Punch registered on {}: {}",
                record.day_str(),
                record.entries.join(" | ")
            ));
        }
    }

    Ok(())
}
