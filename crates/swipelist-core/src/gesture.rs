//! Per-gesture tracking state and the release decision.

use crate::action::{ActionSet, SwipeAction};
use crate::config::{SwipeConfig, SwipeMode};
use crate::item_state::ItemState;
use swipelist_foundation::{Point, PointerEvent, Velocity, VelocityTracker};
use web_time::Instant;

/// State of one touch sequence on one row, from press to release or cancel.
#[derive(Clone, Debug)]
pub struct GestureSession<H> {
    pub index: usize,
    pub handle: H,
    pub down: Point,
    pub down_time: Instant,
    /// Row width captured at press.
    pub view_width: f32,
    /// Effective swipe mode for this row, captured at press.
    pub mode: SwipeMode,
    pub action: SwipeAction,
    pub swiping: bool,
    pub swiping_right: bool,
    /// Last translation applied to the front surface (or the row, for
    /// dismiss swipes).
    pub front_x: f32,
    tracker: VelocityTracker,
}

impl<H> GestureSession<H> {
    pub fn new(
        index: usize,
        handle: H,
        event: &PointerEvent,
        view_width: f32,
        mode: SwipeMode,
        resting_x: f32,
    ) -> Self {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(event.timestamp, event.position);
        Self {
            index,
            handle,
            down: event.position,
            down_time: event.timestamp,
            view_width,
            mode,
            action: SwipeAction::None,
            swiping: false,
            swiping_right: false,
            front_x: resting_x,
            tracker,
        }
    }

    pub fn track(&mut self, event: &PointerEvent) {
        self.tracker.add_position(event.timestamp, event.position);
    }

    /// Unclamped pointer velocity; releases faster than the configured
    /// maximum must not count as flings.
    pub fn velocity(&self) -> Velocity {
        self.tracker.velocity()
    }

    pub fn delta_x(&self, position: Point) -> f32 {
        position.x - self.down.x
    }

    /// True when this move should start the swipe: past the slop, no action
    /// picked yet, and mostly horizontal.
    pub fn should_start_swipe(&self, displacement: f32, velocity: Velocity, slop: f32) -> bool {
        displacement > slop
            && self.action == SwipeAction::None
            && velocity.y.abs() < velocity.x.abs()
    }

    pub fn start_swipe(&mut self, action: SwipeAction, right: bool) {
        self.swiping = true;
        self.swiping_right = right;
        self.action = action;
    }

    /// Decides whether the release commits the swipe and in which direction.
    ///
    /// A fling within the configured velocity bounds commits unless it runs
    /// against the tracked drag direction (when the two directions have
    /// different actions) or pushes an opened row further open. Otherwise a
    /// drag past the reveal threshold commits; for an opened row only a drag
    /// back towards neutral does.
    pub fn release_decision(
        &self,
        velocity: Velocity,
        delta_x: f32,
        item: ItemState,
        config: &SwipeConfig,
        actions: &ActionSet,
    ) -> ReleaseDecision {
        let mut speed_x = velocity.x.abs();
        if !item.opened {
            let against_mode = match self.mode {
                SwipeMode::Left => velocity.x > 0.0,
                SwipeMode::Right => velocity.x < 0.0,
                _ => false,
            };
            if against_mode {
                speed_x = 0.0;
            }
        }
        let speed_y = velocity.y.abs();

        let is_fling = config.min_fling_velocity <= speed_x
            && speed_x <= config.max_fling_velocity
            && speed_y * 2.0 < speed_x;

        if is_fling {
            let right = velocity.x > 0.0;
            let swap = if right != self.swiping_right && actions.left != actions.right {
                false
            } else if item.opened {
                item.opened_right != right
            } else {
                true
            };
            log::debug!(
                "fling release on {}: swap={swap} right={right} swiping_right={}",
                self.index,
                self.swiping_right
            );
            return ReleaseDecision { swap, right };
        }

        if delta_x.abs() > config.reveal_threshold(self.view_width) {
            let right = delta_x > 0.0;
            let swap = if item.opened {
                item.opened_right != right
            } else {
                true
            };
            log::debug!("drag release on {}: swap={swap} right={right}", self.index);
            return ReleaseDecision { swap, right };
        }

        ReleaseDecision::SNAP_BACK
    }
}

/// Outcome of a release: commit (`swap`) or snap back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub swap: bool,
    /// Direction of the commit; meaningful when `swap` is set.
    pub right: bool,
}

impl ReleaseDecision {
    pub const SNAP_BACK: ReleaseDecision = ReleaseDecision {
        swap: false,
        right: false,
    };
}
