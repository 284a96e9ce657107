//! The lunch rule compares the last two punches by position in the list,
//! not by clock time. These properties pin that behavior down.

use chrono::NaiveDate;
use proptest::prelude::*;
use rpunchclock::core::validator::validate_record;
use rpunchclock::errors::AppError;
use rpunchclock::models::DailyRecord;

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}:00", minutes / 60, minutes % 60)
}

fn weekday_record(entries: Vec<String>) -> DailyRecord {
    DailyRecord {
        id: None,
        // Monday
        day: NaiveDate::from_ymd_opt(2022, 4, 18).unwrap(),
        entries,
        version: 0,
    }
}

proptest! {
    #[test]
    fn gap_of_an_hour_or_more_is_accepted(start in 0u32..(23 * 60), gap in 60u32..=120) {
        prop_assume!(start + gap < 24 * 60);
        let r = weekday_record(vec![hhmm(start), hhmm(start + gap)]);
        prop_assert!(validate_record(&r).is_ok());
    }

    #[test]
    fn swapping_a_valid_pair_is_rejected(start in 0u32..(23 * 60), gap in 60u32..=120) {
        prop_assume!(start + gap < 24 * 60);
        let r = weekday_record(vec![hhmm(start + gap), hhmm(start)]);
        prop_assert!(matches!(validate_record(&r), Err(AppError::InsufficientLunchBreak)));
    }

    #[test]
    fn earlier_entries_do_not_matter(first in 0u32..(6 * 60), a in (7 * 60)..(12 * 60u32), gap in 0u32..=120) {
        prop_assume!(first != a && first != a + gap && gap > 0);
        let r = weekday_record(vec![hhmm(first), hhmm(a), hhmm(a + gap)]);
        let result = validate_record(&r);
        if gap >= 60 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(AppError::InsufficientLunchBreak)));
        }
    }
}
