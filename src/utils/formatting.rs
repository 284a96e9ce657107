//! Formatting utilities used for CLI and export outputs.

use chrono::TimeDelta;

/// ISO-8601 duration text: `PT9H`, `PT25M5S`, `PT0S`.
/// Each component keeps the sign of the whole duration (`PT-1H-30M`).
pub fn iso_duration(d: TimeDelta) -> String {
    let total = d.num_seconds();
    if total == 0 {
        return "PT0S".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::from("PT");
    if hours != 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes != 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if seconds != 0 {
        out.push_str(&format!("{seconds}S"));
    }
    out
}

pub fn duration2readable(d: TimeDelta, want_sign: bool) -> String {
    let mins = d.num_minutes();
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    // +02h 25m, -01h 10m
    format!("{}{:02}h {:02}m", sign, hours, minutes)
}
