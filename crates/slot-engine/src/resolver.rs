//! Meeting slot resolution.
//!
//! Tries, in order: a slot everyone (mandatory and optional) can attend; then
//! the mandatory attendees' free time, narrowed to the ranges the most
//! optional attendees can also make; then the mandatory attendees' free time
//! alone.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability;
use crate::event::Event;
use crate::gaps::{find_gaps, relevant_events};
use crate::range::{TimeRange, MINUTES_PER_DAY};
use crate::request::MeetingRequest;

/// Which rule produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionTier {
    /// No slot exists.
    Unsatisfiable,
    /// Nobody who matters has anything scheduled.
    WholeDay,
    /// Every mandatory and optional attendee is free.
    AllAttendees,
    /// Mandatory attendees are free, along with `optional_count` optional ones.
    BestOptional { optional_count: usize },
    /// Mandatory attendees are free; no optional attendee can join.
    MandatoryOnly,
}

/// The slots found for a request and how they were chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Candidate slots, sorted by start, each at least the requested duration.
    pub slots: Vec<TimeRange>,
    pub tier: ResolutionTier,
}

impl Resolution {
    fn new(slots: Vec<TimeRange>, tier: ResolutionTier) -> Self {
        debug!(?tier, slots = slots.len(), "resolved meeting request");
        Self { slots, tier }
    }

    fn unsatisfiable() -> Self {
        Self::new(Vec::new(), ResolutionTier::Unsatisfiable)
    }

    fn whole_day() -> Self {
        Self::new(vec![TimeRange::WHOLE_DAY], ResolutionTier::WholeDay)
    }
}

/// Find the time ranges in which the requested meeting could take place.
///
/// Shorthand for [`resolve`] when the tier is not needed.
///
/// # Examples
///
/// ```
/// use slot_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
///
/// let events = vec![Event::new(
///     "Planning",
///     TimeRange::from_start_end(540, 600, false).unwrap(),
///     ["alice"],
/// )];
/// let request = MeetingRequest::new(["alice"], 30);
///
/// let slots = find_meeting_times(&events, &request);
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0], TimeRange::from_start_end(0, 540, false).unwrap());
/// ```
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    resolve(events, request).slots
}

/// Resolve a meeting request against the day's events.
///
/// Never fails: an impossible request resolves to an empty slot list with
/// [`ResolutionTier::Unsatisfiable`]. A request with no mandatory attendees
/// whose optional attendees share no free slot is also unsatisfiable; there
/// is no fallback to a subset of optional attendees in that case.
pub fn resolve(events: &[Event], request: &MeetingRequest) -> Resolution {
    let duration = request.duration();
    if duration > MINUTES_PER_DAY {
        debug!(duration, "meeting is longer than a day");
        return Resolution::unsatisfiable();
    }

    let everyone = request.everyone();
    let combined = relevant_events(events, &everyone);
    if everyone.is_empty() || combined.is_empty() {
        return Resolution::whole_day();
    }

    let all_free = find_gaps(combined, duration);
    if !all_free.is_empty() {
        return Resolution::new(all_free, ResolutionTier::AllAttendees);
    }

    if request.attendees().is_empty() {
        return Resolution::unsatisfiable();
    }

    let mandatory = relevant_events(events, request.attendees());
    if mandatory.is_empty() {
        return Resolution::whole_day();
    }

    let mandatory_gaps = find_gaps(mandatory, duration);
    if mandatory_gaps.is_empty() {
        return Resolution::unsatisfiable();
    }

    let candidates = optional_candidates(events, request, &mandatory_gaps);
    debug!(
        mandatory_gaps = mandatory_gaps.len(),
        candidates = candidates.len(),
        "scoring optional attendees"
    );

    match availability::most_available(&availability::score(&candidates, duration)) {
        Some((optional_count, slots)) => {
            Resolution::new(slots, ResolutionTier::BestOptional { optional_count })
        }
        None => Resolution::new(mandatory_gaps, ResolutionTier::MandatoryOnly),
    }
}

/// Ranges in which one optional attendee and all mandatory attendees are free
/// for at least the meeting duration. One entry per attendee per shared range.
fn optional_candidates(
    events: &[Event],
    request: &MeetingRequest,
    mandatory_gaps: &[TimeRange],
) -> Vec<TimeRange> {
    let duration = request.duration();

    request
        .optional_attendees()
        .iter()
        .flat_map(|attendee| {
            let just_them = BTreeSet::from([attendee.clone()]);
            find_gaps(relevant_events(events, &just_them), duration)
        })
        .flat_map(|free| {
            mandatory_gaps
                .iter()
                .filter_map(move |gap| free.overlap(gap))
        })
        .filter(|shared| shared.duration() >= duration)
        .collect()
}
