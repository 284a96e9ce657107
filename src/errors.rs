//! Unified application error type.
//! All modules (db, store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Concurrent update detected: {0}")]
    ConcurrentUpdate(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Punch / report rules
    // ---------------------------
    #[error("{0}")]
    InvalidInput(String),

    #[error("only 4 punches per day allowed")]
    TooManyPunches,

    #[error("punch already registered")]
    DuplicatePunch,

    #[error("weekends not permitted as work day")]
    WeekendNotAllowed,

    #[error("must have at least 1 hour lunch break")]
    InsufficientLunchBreak,

    #[error("{0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Status a transport layer answers with for this error.
    ///
    /// Mirrors the HTTP mapping of the punch API: 400 for bad input,
    /// 403 for rule violations, 409 for duplicates and lost updates,
    /// 404 when a month has no records. Infrastructure failures are 500.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::TooManyPunches
            | AppError::WeekendNotAllowed
            | AppError::InsufficientLunchBreak => 403,
            AppError::DuplicatePunch | AppError::ConcurrentUpdate(_) => 409,
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// True for errors caused by the caller's data rather than by the system.
    pub fn is_rejection(&self) -> bool {
        (400..500).contains(&self.http_status())
    }
}

pub type AppResult<T> = Result<T, AppError>;
