use chrono::NaiveDate;
use rpunchclock::core::validator::validate_record;
use rpunchclock::errors::AppError;
use rpunchclock::models::DailyRecord;

fn record(day: &str, entries: &[&str]) -> DailyRecord {
    DailyRecord {
        id: None,
        day: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        entries: entries.iter().map(|e| e.to_string()).collect(),
        version: 0,
    }
}

#[test]
fn test_full_weekday_is_valid() {
    let r = record(
        "2022-05-17",
        &["08:00:00", "12:00:00", "13:00:00", "18:00:00"],
    );
    assert!(validate_record(&r).is_ok());
}

#[test]
fn test_single_weekday_punch_is_valid() {
    assert!(validate_record(&record("2022-04-18", &["08:00:00"])).is_ok());
}

#[test]
fn test_five_punches_rejected() {
    let r = record(
        "2022-04-18",
        &["08:00:00", "12:00:00", "13:00:00", "17:00:00", "18:00:00"],
    );
    assert!(matches!(validate_record(&r), Err(AppError::TooManyPunches)));
}

#[test]
fn test_count_wins_over_duplicates() {
    let r = record(
        "2022-04-18",
        &["08:00:00", "08:00:00", "08:00:00", "08:00:00", "08:00:00"],
    );
    assert!(matches!(validate_record(&r), Err(AppError::TooManyPunches)));
}

#[test]
fn test_count_wins_over_weekend() {
    let r = record(
        "2022-04-16",
        &["08:00:00", "12:00:00", "13:00:00", "17:00:00", "18:00:00"],
    );
    assert!(matches!(validate_record(&r), Err(AppError::TooManyPunches)));
}

#[test]
fn test_duplicate_rejected() {
    let r = record("2022-04-18", &["08:00:00", "12:00:00", "08:00:00"]);
    assert!(matches!(validate_record(&r), Err(AppError::DuplicatePunch)));
}

#[test]
fn test_duplicate_wins_over_weekend() {
    let r = record("2022-04-17", &["17:00:00", "17:00:00"]);
    assert!(matches!(validate_record(&r), Err(AppError::DuplicatePunch)));
}

#[test]
fn test_saturday_rejected() {
    let r = record(
        "2022-04-16",
        &["08:00:00", "12:00:00", "13:00:00", "17:00:00"],
    );
    let err = validate_record(&r).unwrap_err();
    assert!(matches!(err, AppError::WeekendNotAllowed));
    assert_eq!(err.to_string(), "weekends not permitted as work day");
}

#[test]
fn test_sunday_single_punch_rejected() {
    let r = record("2022-04-17", &["10:00:00"]);
    assert!(matches!(validate_record(&r), Err(AppError::WeekendNotAllowed)));
}

#[test]
fn test_short_lunch_rejected() {
    let r = record("2022-04-18", &["08:00:00", "08:30:00"]);
    let err = validate_record(&r).unwrap_err();
    assert!(matches!(err, AppError::InsufficientLunchBreak));
    assert_eq!(err.to_string(), "must have at least 1 hour lunch break");
}

#[test]
fn test_exactly_one_hour_accepted() {
    let r = record("2022-04-18", &["08:00:00", "12:00:00", "13:00:00"]);
    assert!(validate_record(&r).is_ok());
}

#[test]
fn test_fifty_nine_minutes_and_59_seconds_rejected() {
    let r = record("2022-04-18", &["12:00:00", "12:59:59"]);
    assert!(matches!(
        validate_record(&r),
        Err(AppError::InsufficientLunchBreak)
    ));
}

#[test]
fn test_only_last_two_entries_are_checked() {
    // 08:00 → 08:10 is short, but it is no longer the last pair.
    let r = record("2022-04-18", &["08:00:00", "08:10:00", "09:10:00"]);
    assert!(validate_record(&r).is_ok());

    let r = record("2022-04-18", &["07:00:00", "08:00:00", "08:10:00"]);
    assert!(matches!(
        validate_record(&r),
        Err(AppError::InsufficientLunchBreak)
    ));
}

#[test]
fn test_earlier_punch_appended_last_is_rejected() {
    // List order, not clock order: 12:00 after 13:00 is a negative gap.
    let r = record("2022-04-18", &["08:00:00", "13:00:00", "12:00:00"]);
    assert!(matches!(
        validate_record(&r),
        Err(AppError::InsufficientLunchBreak)
    ));
}
