use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeClock;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::MonthlyReport;
use crate::store::SqliteStore;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date::weekday_str;
use crate::utils::formatting::{duration2readable, iso_duration};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        month,
        json,
        export,
        format,
        force,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);
        let clock = TimeClock::new(&store, &store, &store);

        let report = clock.monthly_report(month)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "report",
            month,
            &format!(
                "Report generated: worked {}, excess {}, owed {}",
                iso_duration(report.worked),
                iso_duration(report.excess),
                iso_duration(report.owed)
            ),
        ) {
            tracing::warn!(error = %e, "failed to write internal log");
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report, cfg)?;
        }

        if let Some(file) = export {
            tracing::debug!(file = file.as_str(), format = format.as_str(), "exporting report");
            ExportLogic::export_report(&report, *format, file, *force, *json)?;
        }
    }

    Ok(())
}

fn print_report(report: &MonthlyReport, cfg: &Config) -> AppResult<()> {
    header(format!("Timesheet {}", report.month));

    let mut table = Table::new(
        vec![
            Column::new("DAY", 10),
            Column::new("WD", 3),
            Column::new("PUNCHES", 39),
            Column::new("WORKED", 8),
        ],
        cfg.separator(),
    );

    for (summary, record) in Core::build_summaries(&report.records)?
        .into_iter()
        .zip(&report.records)
    {
        let mut punches = summary.entries.clone();
        punches.resize(4, "--:--:--".to_string());

        table.add_row(vec![
            summary.day,
            weekday_str(record.day).to_string(),
            punches.join("  "),
            duration2readable(summary.worked, false),
        ]);
    }

    print!("{}", table.render());

    let color = color_for_balance(report.excess.num_minutes(), report.owed.num_minutes());
    println!();
    println!("Worked: {}", duration2readable(report.worked, false));
    println!(
        "Excess: {}{}{}",
        color,
        duration2readable(report.excess, false),
        RESET
    );
    println!(
        "Owed:   {}{}{}",
        color,
        duration2readable(report.owed, false),
        RESET
    );

    Ok(())
}
