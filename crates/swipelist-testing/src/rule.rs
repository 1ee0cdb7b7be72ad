//! Robot-style driver for a [`SwipeController`] over a [`RecordingHost`].
//!
//! The rule owns a virtual clock. Every pointer move advances it by one
//! frame, so drags carry realistic velocities; [`SwipeTestRule::hold`] lets
//! the pointer rest before a release so it reads as a slow drag rather than
//! a fling.
//!
//! # Example
//!
//! ```
//! use swipelist_testing::prelude::*;
//!
//! let mut rule = SwipeTestRule::new(RecordingHost::new(10), SwipeConfig::default());
//! rule.swipe(2, -260.0);
//! rule.finish_animations();
//! assert!(rule.controller().is_opened(2));
//! ```

use crate::host::{RecordingHost, SwipeEvent};
use swipelist_core::{ScrollState, SwipeConfig, SwipeController};
use swipelist_foundation::{Point, PointerEvent};
use web_time::{Duration, Instant};

pub struct SwipeTestRule {
    controller: SwipeController<RecordingHost>,
    now: Instant,
    pointer: Point,
}

impl SwipeTestRule {
    /// Time between two generated pointer moves.
    pub const FRAME: Duration = Duration::from_millis(16);

    /// Steps used by [`Self::swipe`] and [`Self::fling`].
    pub const DRAG_STEPS: usize = 10;

    pub fn new(host: RecordingHost, config: SwipeConfig) -> Self {
        let mut controller =
            SwipeController::new(host, config).expect("test config must be valid");
        let now = Instant::now();
        controller.tick(now);
        Self {
            controller,
            now,
            pointer: Point::ZERO,
        }
    }

    pub fn controller(&self) -> &SwipeController<RecordingHost> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController<RecordingHost> {
        &mut self.controller
    }

    pub fn host(&self) -> &RecordingHost {
        self.controller.host()
    }

    pub fn host_mut(&mut self) -> &mut RecordingHost {
        self.controller.host_mut()
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn events(&self) -> &[SwipeEvent] {
        self.host().events()
    }

    pub fn take_events(&mut self) -> Vec<SwipeEvent> {
        self.host_mut().take_events()
    }

    /// Center of the visible row at `index`.
    pub fn row_center(&self, index: usize) -> Point {
        let host = self.host();
        let row = index.saturating_sub(host.first_visible()) as f32;
        Point::new(host.width() / 2.0, (row + 0.5) * host.row_height())
    }

    /// Presses the center of row `index`. Returns whether the controller
    /// consumed the press.
    pub fn press(&mut self, index: usize) -> bool {
        let point = self.row_center(index);
        self.press_at(point)
    }

    pub fn press_at(&mut self, point: Point) -> bool {
        self.pointer = point;
        let event = PointerEvent::down(point, self.now);
        self.controller.on_pointer_event(&event);
        event.is_consumed()
    }

    /// Moves the pointer to `point` one frame later.
    pub fn move_to(&mut self, point: Point) -> bool {
        self.now += Self::FRAME;
        self.pointer = point;
        let event = PointerEvent::moved(point, self.now);
        self.controller.on_pointer_event(&event);
        event.is_consumed()
    }

    /// Drags horizontally by `dx` in `steps` evenly spaced frames. Returns
    /// whether the last move was consumed.
    pub fn drag_by(&mut self, dx: f32, steps: usize) -> bool {
        let steps = steps.max(1);
        let start = self.pointer;
        let mut consumed = false;
        for step in 1..=steps {
            let x = start.x + dx * step as f32 / steps as f32;
            consumed = self.move_to(Point::new(x, start.y));
        }
        consumed
    }

    /// Keeps the pointer still for `duration`. Running deferred work is
    /// ticked along the way.
    pub fn hold(&mut self, duration: Duration) {
        self.advance(duration);
    }

    /// Lifts the pointer where it is, at the current instant.
    pub fn release(&mut self) -> bool {
        let event = PointerEvent::up(self.pointer, self.now);
        self.controller.on_pointer_event(&event);
        event.is_consumed()
    }

    pub fn cancel(&mut self) {
        let event = PointerEvent::cancel(self.pointer, self.now);
        self.controller.on_pointer_event(&event);
    }

    /// Slow horizontal swipe on row `index`: the pointer rests before the
    /// release so no fling is detected.
    pub fn swipe(&mut self, index: usize, dx: f32) {
        self.press(index);
        self.drag_by(dx, Self::DRAG_STEPS);
        self.hold(Duration::from_millis(100));
        self.release();
    }

    /// Quick horizontal swipe on row `index`, released while still moving.
    pub fn fling(&mut self, index: usize, dx: f32) {
        self.press(index);
        self.drag_by(dx, 4);
        self.release();
    }

    pub fn scroll(&mut self, state: ScrollState) {
        self.controller.on_scroll_state_changed(state, self.now);
    }

    /// Advances the clock and runs due deferred work.
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
        self.controller.tick(self.now);
    }

    /// Completes running animations, including ones started by completions,
    /// until none are left. Returns how many finished.
    pub fn finish_animations(&mut self) -> usize {
        let mut finished = 0;
        while let Some(request) = self.host_mut().finish_next_animation() {
            self.controller.on_animation_finished(request.id);
            finished += 1;
            assert!(finished < 1_000, "animations never settle");
        }
        finished
    }

    /// Finishes all animations and lets every deferred task run.
    pub fn settle(&mut self) {
        self.finish_animations();
        self.advance(Duration::from_secs(1));
        self.finish_animations();
    }
}
