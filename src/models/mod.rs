pub mod daily_record;
pub mod day_summary;
pub mod moment;
pub mod monthly_report;

pub use daily_record::DailyRecord;
pub use moment::Moment;
pub use monthly_report::MonthlyReport;
