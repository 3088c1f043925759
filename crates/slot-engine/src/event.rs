//! Calendar events -- busy periods tagged with the attendees they occupy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// A calendar fact: every attendee listed is busy during `when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// Whether any of `people` is among this event's attendees.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
