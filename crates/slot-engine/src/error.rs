//! Error types for slot-engine value construction.
//!
//! The resolver itself never fails. Errors only arise when building a
//! [`TimeRange`](crate::TimeRange) from out-of-bounds minutes or parsing a
//! malformed clock string.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Minute {minute} is outside the day (0..=1440)")]
    OutOfDay { minute: u32 },

    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
