//! Assertion helpers for swipe tests.

use crate::host::SwipeEvent;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that `expected` appears in `events` in order, possibly with other
/// events in between.
pub fn assert_events_in_order(events: &[SwipeEvent], expected: &[SwipeEvent]) {
    let mut remaining = events.iter();
    for wanted in expected {
        assert!(
            remaining.any(|event| event == wanted),
            "event {:?} missing or out of order in {:?}",
            wanted,
            events
        );
    }
}

/// Number of events equal to `event`.
pub fn count_events(events: &[SwipeEvent], event: &SwipeEvent) -> usize {
    events.iter().filter(|candidate| *candidate == event).count()
}

/// Assert that no dismissal was reported.
pub fn assert_no_dismissals(events: &[SwipeEvent]) {
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, SwipeEvent::Dismissed(_))),
        "unexpected dismissal in {:?}",
        events
    );
}
