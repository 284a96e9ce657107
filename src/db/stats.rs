use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Moments", "moments"),
        ("Daily records", "records"),
        ("Reports", "reports"),
    ] {
        let count = count_rows(&pool.conn, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    //
    // 3) DATE RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row("SELECT day FROM records ORDER BY day ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    let last_day: Option<String> = pool
        .conn
        .query_row("SELECT day FROM records ORDER BY day DESC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_day.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_day.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
