//! Meeting requests -- the duration and attendee lists to schedule for.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A request to find room for a meeting of `duration` minutes.
///
/// `attendees` must all be free; `optional_attendees` are accommodated when
/// possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    duration: u32,
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        }
    }

    /// Return a copy of this request with one more optional attendee.
    pub fn with_optional_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.optional_attendees.insert(attendee.into());
        self
    }

    /// Return a copy of this request with several more optional attendees.
    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Mandatory and optional attendees together.
    pub fn everyone(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}
