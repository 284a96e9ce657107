/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Balance color:
/// excess → green
/// owed → red
/// even → reset
pub fn color_for_balance(excess_minutes: i64, owed_minutes: i64) -> &'static str {
    if excess_minutes > 0 {
        GREEN
    } else if owed_minutes > 0 {
        RED
    } else {
        RESET
    }
}

/// Color used by `log --print` for each recorded operation.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "punch" => GREEN,
        "report" => BLUE,
        "init" => YELLOW,
        "migration_applied" | "migrate" => MAGENTA,
        _ => RESET,
    }
}
