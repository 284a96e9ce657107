use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_operation};

const MAX_OP_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            // Truncate before coloring so escape codes don't count as width.
            let visible: String = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            println!(
                "{:>id_w$}  {:<date_w$}  {}{:<op_w$}{}  {}",
                e.id,
                e.date,
                color_for_operation(&e.operation),
                visible,
                RESET,
                e.message,
                id_w = id_w,
                date_w = date_w,
                op_w = MAX_OP_WIDTH,
            );
        }

        Ok(())
    }
}
