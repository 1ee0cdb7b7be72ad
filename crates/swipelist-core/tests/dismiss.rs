use std::time::Duration;
use swipelist_testing::prelude::*;

fn dismiss_config() -> SwipeConfig {
    SwipeConfig::default().with_actions(SwipeAction::Dismiss, SwipeAction::Reveal)
}

#[test]
fn slow_dismiss_swipe_reports_single_batch() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(10), dismiss_config());

    rule.swipe(3, -260.0);
    rule.finish_animations();

    assert_eq!(
        count_events(rule.events(), &SwipeEvent::Dismissed(vec![3])),
        1
    );
    assert_eq!(rule.controller().items().len(), 9);
    assert_eq!(rule.host().row(3), RowPresentation::default());
    assert!(rule.controller().pending_dismissals().is_empty());
    assert_events_in_order(
        rule.events(),
        &[
            SwipeEvent::StartOpen {
                index: 3,
                action: SwipeAction::Dismiss,
                right: false,
            },
            SwipeEvent::Dismissed(vec![3]),
        ],
    );
}

#[test]
fn dismiss_drag_moves_and_fades_whole_row() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(10), dismiss_config());

    rule.press(3);
    rule.drag_by(-100.0, 5);

    let row = rule.host().row(3);
    assert_eq!(row.row_x, -100.0);
    assert_eq!(row.front_x, 0.0);
    assert_approx_eq(row.row_alpha, 0.5, 0.001, "alpha halfway to the threshold");
}

#[test]
fn short_dismiss_swipe_restores_row() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(10), dismiss_config());

    rule.swipe(3, -120.0);
    rule.finish_animations();

    assert_no_dismissals(rule.events());
    assert_eq!(rule.controller().items().len(), 10);
    let row = rule.host().row(3);
    assert_eq!(row.row_x, 0.0);
    assert_eq!(row.row_alpha, 1.0);
}

#[test]
fn collapse_disables_row_until_it_finishes() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(10), dismiss_config());

    rule.swipe(3, -260.0);
    // Slide out.
    let slide = rule.host_mut().finish_next_animation().unwrap();
    rule.controller_mut().on_animation_finished(slide.id);

    assert!(!rule.host().row(3).enabled);
    assert_eq!(rule.controller().pending_dismissals().in_flight(), 1);
    assert_no_dismissals(rule.events());

    rule.finish_animations();
    assert!(rule.host().row(3).enabled);
}

#[test]
fn overlapping_dismissals_flush_highest_first() {
    let mut host = RecordingHost::new(20).with_visible_rows(4);
    host.scroll_to(4);
    let mut rule = SwipeTestRule::new(host, SwipeConfig::default());

    assert_eq!(rule.controller_mut().dismiss(5), Ok(true));
    assert_eq!(rule.controller_mut().dismiss(2), Ok(false));
    assert_eq!(rule.controller_mut().dismiss(8), Ok(false));
    assert_no_dismissals(rule.events());

    rule.finish_animations();

    assert_eq!(rule.events(), &[SwipeEvent::Dismissed(vec![8, 5, 2])]);
    assert_eq!(rule.controller().items().len(), 17);
}

#[test]
fn detached_flush_waits_for_running_collapse() {
    let mut host = RecordingHost::new(20).with_visible_rows(4);
    host.scroll_to(4);
    let mut rule = SwipeTestRule::new(host, SwipeConfig::default());

    assert_eq!(rule.controller_mut().dismiss(2), Ok(false));
    assert_eq!(rule.controller_mut().dismiss(5), Ok(true));
    rule.advance(Duration::from_millis(400));
    assert_no_dismissals(rule.events());

    rule.finish_animations();
    assert_eq!(rule.events(), &[SwipeEvent::Dismissed(vec![5, 2])]);
}

#[test]
fn offscreen_dismissal_flushes_after_animation_time() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(20), SwipeConfig::default());

    assert_eq!(rule.controller_mut().dismiss(15), Ok(false));
    assert!(rule.host().pending_animations().is_empty());
    assert!(rule.controller().next_deadline().is_some());

    rule.advance(Duration::from_millis(300));
    assert_no_dismissals(rule.events());

    rule.advance(Duration::from_millis(100));
    assert_eq!(rule.events(), &[SwipeEvent::Dismissed(vec![15])]);
    assert!(rule.controller().next_deadline().is_none());
}

#[test]
fn dismiss_rejects_unknown_position() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(5), SwipeConfig::default());

    assert_eq!(
        rule.controller_mut().dismiss(5),
        Err(SwipeError::IndexOutOfRange { index: 5, len: 5 })
    );
}

#[test]
fn dismissing_pressed_row_abandons_gesture() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(10), SwipeConfig::default());

    rule.press(4);
    rule.controller_mut().dismiss(4).unwrap();
    assert!(rule.controller().session().is_none());

    rule.press(6);
    rule.controller_mut().dismiss(2).unwrap();
    assert_eq!(rule.controller().session().map(|session| session.index), Some(5));
}

#[test]
fn dismiss_swipe_closes_other_opened_rows() {
    let mut rule = SwipeTestRule::new(
        RecordingHost::new(10),
        SwipeConfig::default().with_actions(SwipeAction::Reveal, SwipeAction::Dismiss),
    );
    rule.swipe(1, -260.0);
    rule.finish_animations();
    assert!(rule.controller().is_opened(1));

    rule.swipe(5, 260.0);
    rule.finish_animations();

    assert!(!rule.controller().is_opened(1));
    assert_events_in_order(
        rule.events(),
        &[
            SwipeEvent::Closed {
                index: 1,
                right: false,
            },
            SwipeEvent::Dismissed(vec![5]),
        ],
    );
}

#[test]
fn unordered_batch_keeps_flags_aligned_with_host() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(11), SwipeConfig::default());
    rule.controller_mut().toggle_choice(9).unwrap();

    rule.controller_mut().dismiss(5).unwrap();
    rule.controller_mut().dismiss(2).unwrap();
    rule.controller_mut().dismiss(8).unwrap();
    rule.finish_animations();

    assert_eq!(
        count_events(rule.events(), &SwipeEvent::Dismissed(vec![8, 5, 2])),
        1
    );
    assert_eq!(rule.controller().items().len(), 8);
    assert!(rule.controller().is_checked(6), "old row 9 moves to 6");
    assert!(!rule.controller().is_checked(7));
}

#[test]
fn dismissing_queued_position_again_is_rejected() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(10), SwipeConfig::default());

    assert_eq!(rule.controller_mut().dismiss(4), Ok(true));
    assert_eq!(
        rule.controller_mut().dismiss(4),
        Err(SwipeError::AlreadyDismissed { index: 4 })
    );
    rule.finish_animations();

    assert_eq!(rule.events(), &[SwipeEvent::Dismissed(vec![4])]);
    assert_eq!(rule.controller().items().len(), 9);
}

#[test]
fn selected_rows_map_past_queued_dismissals() {
    let mut host = RecordingHost::new(12).with_visible_rows(4);
    host.scroll_to(6);
    let mut rule = SwipeTestRule::new(host, SwipeConfig::default());
    rule.controller_mut().toggle_choice(3).unwrap();
    rule.controller_mut().toggle_choice(8).unwrap();

    assert_eq!(rule.controller_mut().dismiss(7), Ok(true));
    assert_eq!(rule.controller_mut().dismiss_selected(), Ok(vec![8, 3]));
    rule.finish_animations();

    assert_eq!(
        rule.events().last(),
        Some(&SwipeEvent::Dismissed(vec![8, 7, 3]))
    );
    assert_eq!(rule.controller().items().len(), 9);
    assert_eq!(rule.controller().selected_count(), 0);
}
