use chrono::TimeDelta;

/// Excess and owed time for a month; at most one of the two is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub excess: TimeDelta,
    pub owed: TimeDelta,
}

pub fn calculate_balance(worked: TimeDelta, expected: TimeDelta) -> Balance {
    if worked < expected {
        Balance {
            excess: TimeDelta::zero(),
            owed: expected - worked,
        }
    } else {
        Balance {
            excess: worked - expected,
            owed: TimeDelta::zero(),
        }
    }
}
