//! Shared gesture constants for swipe handling on list items.
//!
//! All distances are in logical pixels and all velocities in logical pixels
//! per second. Hosts running on high-density screens should scale the
//! distances before passing them into a `SwipeConfig`.

use web_time::Duration;

/// Touch slop: movement below this distance never starts a swipe.
///
/// Matches the Android `ViewConfiguration.TOUCH_SLOP` baseline of ~8dp.
pub const TOUCH_SLOP: f32 = 8.0;

/// Minimum release velocity that counts as a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum release velocity that counts as a fling. Faster releases are
/// treated as noise and fall back to the displacement check.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Percentage of the row width the front surface must travel before a slow
/// release commits the swipe.
pub const DEFAULT_REVEAL_PERCENTAGE: f32 = 50.0;

/// Visible displacement band around the neutral point while a choice swipe
/// is in progress.
pub const CHOICE_DISPLACEMENT: f32 = 80.0;

/// Default duration of settle/reveal/dismiss animations.
pub const DEFAULT_ANIMATION_TIME: Duration = Duration::from_millis(250);

/// Swiping stays disabled this long after list scrolling settles, so residual
/// scroll momentum does not start a swipe.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Extra slack on top of the animation time before off-screen dismissals are
/// flushed on their own.
pub const DETACHED_DISMISS_SLACK: Duration = Duration::from_millis(100);
