use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MOMENT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A raw clock punch as received from the caller.
///
/// `timestamp` stays a string until validated: the audit trail keeps exactly
/// what was sent, and a missing value is a client error, not a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub timestamp: Option<String>,
}

impl Moment {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            id: None,
            timestamp: Some(timestamp.into()),
        }
    }

    /// Parse the timestamp in the strict `YYYY-MM-DDTHH:MM:SS` shape.
    pub fn parse(&self) -> AppResult<NaiveDateTime> {
        let raw = self
            .timestamp
            .as_deref()
            .ok_or_else(|| AppError::InvalidInput("required field not provided".into()))?;

        if !has_moment_shape(raw) {
            return Err(AppError::InvalidInput("invalid date-time format".into()));
        }

        NaiveDateTime::parse_from_str(raw, MOMENT_FORMAT)
            .map_err(|_| AppError::InvalidInput("invalid date-time format".into()))
    }
}

/// `chrono` accepts single-digit fields and longer years; the punch API does not.
fn has_moment_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 19
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            10 => *c == b'T',
            13 | 16 => *c == b':',
            _ => c.is_ascii_digit(),
        })
}
