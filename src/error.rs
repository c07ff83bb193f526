use chrono::NaiveDate;
use thiserror::Error;

/// Failure taxonomy for registry and conversion operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unknown time zone identifier: {0}")]
    UnknownZone(String),

    #[error("no zone registered under key {0}")]
    UnknownKey(String),

    #[error("zone already registered: {0}")]
    DuplicateZone(String),

    #[error("{0} minutes is outside the day range 0..1440")]
    TimeOutOfRange(u32),

    #[error("{time} on {date} does not exist in {zone} (skipped by a clock transition)")]
    NonexistentLocalTime {
        zone: String,
        date: NaiveDate,
        time: String,
    },

    #[error("cannot compose a timestamp on {0}")]
    InvalidDate(NaiveDate),
}
