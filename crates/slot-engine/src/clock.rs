//! Conversion between `HH:MM` clock strings and minutes from midnight.
//!
//! `24:00` is accepted and produced for the end-of-day boundary, which
//! `chrono::NaiveTime` cannot represent on its own.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};
use crate::range::MINUTES_PER_DAY;

/// Parse an `HH:MM` clock string into minutes from midnight.
///
/// # Errors
/// Returns `SlotError::InvalidClock` if the string is not a valid 24-hour
/// clock time.
///
/// # Examples
///
/// ```
/// use slot_engine::clock::parse_minutes;
///
/// assert_eq!(parse_minutes("09:30").unwrap(), 570);
/// assert_eq!(parse_minutes("24:00").unwrap(), 1440);
/// assert!(parse_minutes("9.30").is_err());
/// ```
pub fn parse_minutes(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| SlotError::InvalidClock(format!("'{}': {}", s, e)))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Format minutes from midnight as `HH:MM`.
///
/// Values past the end of the day are clamped to `24:00`.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes.min(MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
