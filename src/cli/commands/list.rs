use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_moments, load_records_between};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::{self, month_bounds, parse_year_month};
use crate::utils::formatting::duration2readable;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, moments } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;

        if *moments {
            let items = load_moments(&pool.conn, period.as_deref())?;
            if items.is_empty() {
                println!("No punches recorded.");
            }
            for m in items {
                println!(
                    "{:>5}  {}",
                    m.id.unwrap_or_default(),
                    m.timestamp.unwrap_or_default()
                );
            }
            return Ok(());
        }

        let (from, to) = resolve_period(period)?;
        let records = load_records_between(&pool.conn, &from, &to)?;

        if records.is_empty() {
            println!("No records between {} and {}", from, to);
            return Ok(());
        }

        println!("📅 Daily records from {} to {}:", from, to);
        for (summary, record) in Core::build_summaries(&records)?.into_iter().zip(&records) {
            let worked = if summary.complete {
                duration2readable(summary.worked, false)
            } else {
                format!("{GREY}open{RESET}")
            };

            println!(
                "{} {}  {:<39}  {}",
                summary.day,
                date::weekday_str(record.day),
                summary.entries.join("  "),
                worked
            );
        }
    }
    Ok(())
}

/// `YYYY-MM-DD` → that day; `YYYY-MM` → whole month; none → current month.
fn resolve_period(period: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => {
            if let Some(d) = date::parse_date(p) {
                return Ok((d, d));
            }
            parse_year_month(p)
                .map(month_bounds)
                .ok_or_else(|| AppError::InvalidInput(format!("invalid period '{p}'")))
        }
        None => Ok(month_bounds(date::today())),
    }
}
