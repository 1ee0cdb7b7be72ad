use std::time::Duration;
use swipelist_testing::prelude::*;

fn rule() -> SwipeTestRule {
    SwipeTestRule::new(RecordingHost::new(20), SwipeConfig::default())
}

#[test]
fn list_drag_closes_opened_rows_and_pauses_swiping() {
    let mut rule = rule();
    rule.controller_mut().open(1).unwrap();
    rule.finish_animations();
    rule.take_events();

    rule.scroll(ScrollState::Dragging);
    rule.finish_animations();

    assert!(rule.controller().is_list_moving());
    assert!(!rule.controller().is_enabled());
    assert!(!rule.controller().is_opened(1));
    assert_eq!(
        rule.events(),
        &[SwipeEvent::Closed {
            index: 1,
            right: false
        }]
    );

    rule.swipe(3, -260.0);
    rule.finish_animations();
    assert!(!rule.controller().is_opened(3));
}

#[test]
fn close_on_scroll_can_be_turned_off() {
    let config = SwipeConfig::default().with_close_all_when_list_moves(false);
    let mut rule = SwipeTestRule::new(RecordingHost::new(20), config);
    rule.controller_mut().open(1).unwrap();
    rule.finish_animations();

    rule.scroll(ScrollState::Dragging);

    assert!(rule.host().pending_animations().is_empty());
    assert!(rule.controller().is_opened(1));
}

#[test]
fn swiping_resumes_after_scroll_settles() {
    let mut rule = rule();
    rule.scroll(ScrollState::Dragging);
    rule.scroll(ScrollState::Idle);
    assert!(!rule.controller().is_list_moving());

    rule.advance(Duration::from_millis(400));
    assert!(!rule.controller().is_enabled());

    rule.advance(Duration::from_millis(100));
    assert!(rule.controller().is_enabled());

    rule.swipe(3, -260.0);
    rule.finish_animations();
    assert!(rule.controller().is_opened(3));
}

#[test]
fn settling_fling_keeps_swiping_paused() {
    let mut rule = rule();
    rule.scroll(ScrollState::Dragging);
    rule.scroll(ScrollState::Settling);
    rule.advance(Duration::from_secs(2));
    assert!(!rule.controller().is_enabled());
    assert!(rule.controller().is_list_moving());

    rule.scroll(ScrollState::Idle);
    rule.advance(Duration::from_millis(500));
    assert!(rule.controller().is_enabled());
}

#[test]
fn new_scroll_drag_cancels_pending_reenable() {
    let mut rule = rule();
    rule.scroll(ScrollState::Dragging);
    rule.scroll(ScrollState::Idle);
    rule.advance(Duration::from_millis(300));

    rule.scroll(ScrollState::Dragging);
    rule.advance(Duration::from_millis(300));

    assert!(!rule.controller().is_enabled());
    assert!(rule.controller().next_deadline().is_none());
}

#[test]
fn list_drag_abandons_swipe_in_progress() {
    let mut rule = rule();
    rule.press(2);
    assert!(rule.drag_by(-100.0, 5));
    assert_eq!(rule.host().row(2).front_x, -100.0);

    rule.scroll(ScrollState::Dragging);

    assert!(rule.controller().session().is_none());
    assert_eq!(rule.host().row(2).front_x, 0.0);
    assert!(!rule.release());
    rule.finish_animations();
    assert!(!rule.controller().is_opened(2));
}

#[test]
fn pointer_cancel_restores_row_without_state_change() {
    let mut rule = rule();
    rule.controller_mut().open(1).unwrap();
    rule.finish_animations();

    rule.press(1);
    rule.drag_by(100.0, 5);
    assert_eq!(rule.host().row(1).front_x, -300.0);

    rule.cancel();

    assert!(rule.controller().session().is_none());
    assert!(rule.controller().is_opened(1));
    assert_eq!(rule.host().row(1).front_x, -400.0);
    assert!(rule.host().pending_animations().is_empty());
}

#[test]
fn scrolled_top_reports_transitions_only() {
    let mut rule = rule();
    rule.host_mut().scroll_to(3);
    rule.scroll(ScrollState::Dragging);
    rule.scroll(ScrollState::Idle);

    rule.host_mut().scroll_to(0);
    rule.scroll(ScrollState::Dragging);
    rule.scroll(ScrollState::Idle);

    assert_eq!(
        rule.events(),
        &[SwipeEvent::ScrolledTop(false), SwipeEvent::ScrolledTop(true)]
    );
}

#[test]
fn idle_scroll_resets_host_scrolling() {
    let mut rule = rule();
    rule.scroll(ScrollState::Idle);
    assert_eq!(rule.host().scroll_resets(), 1);
}

#[test]
fn set_enabled_gates_swipes() {
    let mut rule = rule();
    rule.controller_mut().set_enabled(false);
    rule.swipe(2, -260.0);
    rule.finish_animations();
    assert!(!rule.controller().is_opened(2));

    rule.controller_mut().set_enabled(true);
    rule.swipe(2, -260.0);
    rule.finish_animations();
    assert!(rule.controller().is_opened(2));
}

#[test]
fn config_cannot_change_mid_gesture() {
    let mut rule = rule();
    rule.press(1);
    assert_eq!(
        rule.controller_mut().set_config(SwipeConfig::default()),
        Err(SwipeError::SessionActive)
    );
    rule.release();

    let invalid = SwipeConfig::default().with_reveal_percentage(150.0);
    let err = rule.controller_mut().set_config(invalid).unwrap_err();
    assert!(matches!(err, SwipeError::InvalidConfig(_)));
    assert!(std::error::Error::source(&err).is_some());

    let right_only = SwipeConfig::default().with_mode(SwipeMode::Right);
    rule.controller_mut().set_config(right_only).unwrap();
    assert_eq!(rule.controller().config().mode, SwipeMode::Right);
}

#[test]
fn reset_items_tracks_new_rows() {
    let mut rule = SwipeTestRule::new(RecordingHost::new(3), SwipeConfig::default());
    rule.host_mut().add_items(2);

    assert!(!rule.press(4), "untracked rows are skipped");

    rule.controller_mut().reset_items();
    assert_eq!(rule.controller().items().len(), 5);
    assert!(rule.press(4));
}
