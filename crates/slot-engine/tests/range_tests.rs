//! Tests for `TimeRange` construction, comparison, and serialization.

use slot_engine::{SlotError, TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn whole_day_spans_midnight_to_midnight() {
    assert_eq!(TimeRange::WHOLE_DAY.start(), 0);
    assert_eq!(TimeRange::WHOLE_DAY.end(), MINUTES_PER_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
}

#[test]
fn inclusive_end_of_day_equals_whole_day() {
    let day = TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true).unwrap();
    assert_eq!(day, TimeRange::WHOLE_DAY);
}

#[test]
fn start_duration_and_start_end_agree() {
    assert_eq!(
        TimeRange::from_start_duration(540, 60).unwrap(),
        range(540, 600)
    );
}

#[test]
fn start_after_end_is_rejected() {
    let err = TimeRange::from_start_end(600, 540, false).unwrap_err();
    assert_eq!(err, SlotError::InvalidRange { start: 600, end: 540 });
}

#[test]
fn range_past_midnight_is_rejected() {
    let err = TimeRange::from_start_duration(1400, 60).unwrap_err();
    assert_eq!(err, SlotError::OutOfDay { minute: 1460 });

    let err = TimeRange::from_start_end(END_OF_DAY + 1, END_OF_DAY + 1, true).unwrap_err();
    assert_eq!(err, SlotError::OutOfDay { minute: 1441 });
}

#[test]
fn empty_range_at_midnight_is_allowed() {
    let r = range(1440, 1440);
    assert!(r.is_empty());
    assert_eq!(r.duration(), 0);
}

// ── Overlap and containment ─────────────────────────────────────────────────

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = range(540, 600);
    let b = range(600, 660);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
    assert_eq!(a.overlap(&b), None);
}

#[test]
fn overlapping_ranges_share_their_middle() {
    let a = range(540, 630);
    let b = range(600, 700);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert_eq!(a.overlap(&b), Some(range(600, 630)));
    assert_eq!(b.overlap(&a), Some(range(600, 630)));
}

#[test]
fn nested_range_overlap_is_the_inner_range() {
    let outer = range(0, 1440);
    let inner = range(300, 400);
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    assert_eq!(outer.overlap(&inner), Some(inner));
}

#[test]
fn contains_respects_half_open_end() {
    let r = range(540, 600);
    assert!(r.contains_minute(540));
    assert!(r.contains_minute(599));
    assert!(!r.contains_minute(600));
    assert!(r.contains(&range(540, 600)));
    assert!(!r.contains(&range(540, 601)));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn ordering_is_by_start_then_end() {
    let mut ranges = vec![range(600, 700), range(0, 100), range(600, 650)];
    ranges.sort();
    assert_eq!(ranges, vec![range(0, 100), range(600, 650), range(600, 700)]);
}

// ── Display and serde ───────────────────────────────────────────────────────

#[test]
fn displays_as_clock_times() {
    assert_eq!(range(545, 600).to_string(), "09:05-10:00");
    assert_eq!(TimeRange::WHOLE_DAY.to_string(), "00:00-24:00");
}

#[test]
fn serializes_as_minutes() {
    let json = serde_json::to_string(&range(540, 600)).unwrap();
    assert_eq!(json, r#"{"start":540,"end":600}"#);
}

#[test]
fn deserialize_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":0,"end":1440}"#).unwrap();
    assert_eq!(ok, TimeRange::WHOLE_DAY);

    assert!(serde_json::from_str::<TimeRange>(r#"{"start":600,"end":540}"#).is_err());
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":0,"end":1500}"#).is_err());
}
