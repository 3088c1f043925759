//! Optional-attendee scoring.
//!
//! Each candidate is a range in which one optional attendee and every
//! mandatory attendee are free for at least the meeting duration. A sweep over
//! candidate start points labels every achievable common range with the number
//! of optional attendees who can make all of it, and the best-labeled ranges
//! win.

use crate::range::TimeRange;

/// A range labeled with how many optional attendees are free for all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Availability {
    pub(crate) when: TimeRange,
    pub(crate) count: usize,
}

/// Label the common ranges of overlapping candidates with their coverage.
///
/// Candidates from a single attendee never overlap each other, so counting
/// the candidates that cover a range counts distinct attendees. At each start
/// point `s`, the candidates that began at or before `s` and last until
/// `s + duration` (and past `s`) all contain `[s, s + duration)`; their
/// intersection is recorded along with how many there are. A candidate that
/// ends too early for `s` cannot cover any later start either, so it is
/// dropped from the active set for good.
pub(crate) fn score(candidates: &[TimeRange], duration: u32) -> Vec<Availability> {
    let mut sorted = candidates.to_vec();
    sorted.sort();

    let mut labeled = Vec::new();
    let mut active: Vec<TimeRange> = Vec::new();
    let mut next = 0;

    while next < sorted.len() {
        let sweep = sorted[next].start();
        while next < sorted.len() && sorted[next].start() == sweep {
            active.push(sorted[next]);
            next += 1;
        }
        active.retain(|c| c.end() > sweep && c.end() - sweep >= duration);

        if let Some(when) = common_range(&active) {
            labeled.push(Availability {
                when,
                count: active.len(),
            });
        }
    }

    labeled
}

/// Pick the highest coverage and every distinct range that reaches it,
/// sorted by start.
///
/// Returns `None` when there is nothing to choose from.
pub(crate) fn most_available(labeled: &[Availability]) -> Option<(usize, Vec<TimeRange>)> {
    let best = labeled.iter().map(|a| a.count).max()?;

    let mut ranges: Vec<TimeRange> = labeled
        .iter()
        .filter(|a| a.count == best)
        .map(|a| a.when)
        .collect();
    ranges.sort();
    ranges.dedup();

    Some((best, ranges))
}

/// Intersection of every active candidate.
fn common_range(active: &[TimeRange]) -> Option<TimeRange> {
    let start = active.iter().map(TimeRange::start).max()?;
    let end = active.iter().map(TimeRange::end).min()?;
    (start <= end).then(|| TimeRange::between(start, end))
}
