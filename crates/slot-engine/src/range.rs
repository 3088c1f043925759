//! Half-open time ranges within a single day, in minutes from midnight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::format_minutes;
use crate::error::{Result, SlotError};

/// Number of minutes in a day; the exclusive upper bound of every range.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day. Use with `inclusive = true` to reach midnight.
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// An immutable `[start, end)` interval within one day.
///
/// Ordering is by start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire shape, checked through [`TimeRange::from_start_end`].
#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, false)
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Build a range from a start minute and a length.
    ///
    /// # Errors
    /// Returns `SlotError::OutOfDay` if the range would extend past midnight.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::from_start_end(start, start.saturating_add(duration), false)
    }

    /// Build a range from its bounds. When `inclusive` is set, `end` names the
    /// last minute inside the range rather than the first minute after it.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRange` if `start > end`, or
    /// `SlotError::OutOfDay` if either bound lies past the end of the day.
    ///
    /// # Examples
    ///
    /// ```
    /// use slot_engine::{TimeRange, END_OF_DAY, START_OF_DAY};
    ///
    /// let day = TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true).unwrap();
    /// assert_eq!(day, TimeRange::WHOLE_DAY);
    /// ```
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        if start > MINUTES_PER_DAY {
            return Err(SlotError::OutOfDay { minute: start });
        }
        if end > MINUTES_PER_DAY {
            return Err(SlotError::OutOfDay { minute: end });
        }
        if start > end {
            return Err(SlotError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range whose bounds the caller has already validated.
    pub(crate) fn between(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= MINUTES_PER_DAY);
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls inside `[start, end)`.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Two ranges overlap when one contains the other's start.
    ///
    /// Adjacent ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.contains_minute(other.start) || other.contains_minute(self.start)
    }

    /// Whether `other` lies entirely within this range.
    ///
    /// An empty range is contained when its start point is.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.is_empty() {
            return self.contains_minute(other.start);
        }
        self.start <= other.start && other.end <= self.end
    }

    /// The sub-range shared by both ranges, or `None` when they do not overlap.
    pub fn overlap(&self, other: &TimeRange) -> Option<TimeRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeRange::between(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minutes(self.start),
            format_minutes(self.end)
        )
    }
}
