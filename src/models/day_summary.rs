use chrono::TimeDelta;

/// Per-day view used by `list` and the report breakdown.
#[derive(Debug, Default, Clone)]
pub struct DaySummary {
    pub day: String,
    pub entries: Vec<String>,
    pub worked: TimeDelta,
    pub complete: bool,
}
