//! Compute free gaps within the day from a list of busy events.
//!
//! Events are sorted by start time and folded over with a cursor marking the
//! earliest minute not yet known to be busy. Overlapping and back-to-back
//! events merge naturally because the cursor never moves backward.

use std::collections::BTreeSet;

use tracing::trace;

use crate::event::Event;
use crate::range::{TimeRange, MINUTES_PER_DAY, START_OF_DAY};

/// Keep only the events that occupy at least one of `attendees`.
///
/// Events involving nobody in `attendees` cannot block the meeting and are
/// invisible to the gap scan.
pub fn relevant_events<'a>(events: &'a [Event], attendees: &BTreeSet<String>) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .collect()
}

/// Find every maximal free range of at least `duration` minutes in the day.
///
/// The events are expected to be pre-filtered to the attendees that matter
/// (see [`relevant_events`]). With no events the whole day is returned,
/// provided the duration fits in a day at all. Zero-length events occupy no
/// time, and zero-length gaps are never returned, even for a zero-minute
/// duration.
///
/// # Examples
///
/// ```
/// use slot_engine::{find_gaps, Event, TimeRange};
///
/// let standup = Event::new(
///     "Standup",
///     TimeRange::from_start_end(540, 600, false).unwrap(),
///     ["alice"],
/// );
/// let gaps = find_gaps([&standup], 30);
/// assert_eq!(gaps.len(), 2);
/// assert_eq!(gaps[0].end(), 540);
/// assert_eq!(gaps[1].start(), 600);
/// ```
pub fn find_gaps<'a, I>(events: I, duration: u32) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut busy: Vec<TimeRange> = events
        .into_iter()
        .map(Event::when)
        .filter(|when| !when.is_empty())
        .collect();
    // Stable sort: events sharing a start keep their input order.
    busy.sort_by_key(TimeRange::start);

    let (cursor, mut gaps) = busy.iter().fold(
        (START_OF_DAY, Vec::new()),
        |(cursor, mut gaps): (u32, Vec<TimeRange>), when| {
            if when.start() > cursor && when.start() - cursor >= duration {
                gaps.push(TimeRange::between(cursor, when.start()));
            }
            (cursor.max(when.end()), gaps)
        },
    );

    // Trailing gap up to midnight.
    if cursor < MINUTES_PER_DAY && MINUTES_PER_DAY - cursor >= duration {
        gaps.push(TimeRange::between(cursor, MINUTES_PER_DAY));
    }

    trace!(busy = busy.len(), duration, gaps = gaps.len(), "gap scan finished");
    gaps
}
