//! Swipe configuration.
//!
//! A config is applied between gestures; the controller rejects changes
//! while a gesture is in progress.

use crate::action::SwipeAction;
use crate::error::ConfigError;
use swipelist_foundation::gesture_constants::{
    DEFAULT_ANIMATION_TIME, DEFAULT_REVEAL_PERCENTAGE, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY,
    TOUCH_SLOP,
};
use web_time::Duration;

/// Directions in which rows may be swiped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipeMode {
    None,
    Left,
    Right,
    #[default]
    Both,
}

impl SwipeMode {
    pub fn is_enabled(self) -> bool {
        self != SwipeMode::None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    pub mode: SwipeMode,
    pub left_action: SwipeAction,
    pub right_action: SwipeAction,
    /// Action taken when an opened row keeps being dragged left.
    pub secondary_left_action: SwipeAction,
    /// Width of the front surface left visible when opened to the left.
    /// Negative values are measured from the opposite edge.
    pub left_offset: f32,
    /// Width of the front surface left visible when opened to the right.
    /// Negative values are measured from the opposite edge.
    pub right_offset: f32,
    /// Percentage of the row width a slow drag must cover to commit.
    pub reveal_percentage: f32,
    pub animation_time: Duration,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    pub touch_slop: f32,
    /// Long press opens the row; otherwise it toggles the choice flag.
    pub open_on_long_press: bool,
    pub close_all_when_list_moves: bool,
    /// Front surface stays clickable while its row is revealed.
    pub front_clickable_when_revealed: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            mode: SwipeMode::Both,
            left_action: SwipeAction::Reveal,
            right_action: SwipeAction::Reveal,
            secondary_left_action: SwipeAction::None,
            left_offset: 0.0,
            right_offset: 0.0,
            reveal_percentage: DEFAULT_REVEAL_PERCENTAGE,
            animation_time: DEFAULT_ANIMATION_TIME,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            touch_slop: TOUCH_SLOP,
            open_on_long_press: true,
            close_all_when_list_moves: true,
            front_clickable_when_revealed: false,
        }
    }
}

impl SwipeConfig {
    pub fn with_mode(mut self, mode: SwipeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_actions(mut self, left: SwipeAction, right: SwipeAction) -> Self {
        self.left_action = left;
        self.right_action = right;
        self
    }

    pub fn with_secondary_left_action(mut self, action: SwipeAction) -> Self {
        self.secondary_left_action = action;
        self
    }

    pub fn with_offsets(mut self, left: f32, right: f32) -> Self {
        self.left_offset = left;
        self.right_offset = right;
        self
    }

    pub fn with_reveal_percentage(mut self, percentage: f32) -> Self {
        self.reveal_percentage = percentage;
        self
    }

    pub fn with_animation_time(mut self, duration: Duration) -> Self {
        self.animation_time = duration;
        self
    }

    pub fn with_fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn with_open_on_long_press(mut self, enabled: bool) -> Self {
        self.open_on_long_press = enabled;
        self
    }

    pub fn with_close_all_when_list_moves(mut self, enabled: bool) -> Self {
        self.close_all_when_list_moves = enabled;
        self
    }

    pub fn with_front_clickable_when_revealed(mut self, enabled: bool) -> Self {
        self.front_clickable_when_revealed = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.reveal_percentage) {
            return Err(ConfigError::RevealPercentage(self.reveal_percentage));
        }
        let (min, max) = (self.min_fling_velocity, self.max_fling_velocity);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(ConfigError::FlingBounds { min, max });
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::TouchSlop(self.touch_slop));
        }
        if !self.left_offset.is_finite() {
            return Err(ConfigError::Offset {
                side: "left",
                value: self.left_offset,
            });
        }
        if !self.right_offset.is_finite() {
            return Err(ConfigError::Offset {
                side: "right",
                value: self.right_offset,
            });
        }
        Ok(())
    }

    /// Animation time, falling back to the default for a zero duration.
    pub fn effective_animation_time(&self) -> Duration {
        if self.animation_time.is_zero() {
            DEFAULT_ANIMATION_TIME
        } else {
            self.animation_time
        }
    }

    /// Displacement a slow drag must exceed to commit.
    pub fn reveal_threshold(&self, width: f32) -> f32 {
        width * self.reveal_percentage / 100.0
    }

    /// Resting translation of the front surface for a row opened towards `right`.
    pub fn open_position(&self, right: bool, width: f32) -> f32 {
        if right {
            if self.right_offset < 0.0 {
                -self.right_offset
            } else {
                width - self.right_offset
            }
        } else if self.left_offset < 0.0 {
            self.left_offset
        } else {
            -width + self.left_offset
        }
    }

    /// Full-traversal translation used when a row is dismissed towards `right`.
    pub fn dismiss_position(&self, right: bool, width: f32) -> f32 {
        if right {
            width - self.right_offset
        } else {
            -width + self.left_offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SwipeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.mode, SwipeMode::Both);
        assert_eq!(config.reveal_threshold(400.0), 200.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let config = SwipeConfig::default().with_reveal_percentage(120.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RevealPercentage(120.0))
        );

        let config = SwipeConfig::default().with_fling_velocity(900.0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FlingBounds { .. })
        ));

        let config = SwipeConfig::default().with_touch_slop(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::TouchSlop(-1.0)));
    }

    #[test]
    fn zero_animation_time_falls_back() {
        let config = SwipeConfig::default().with_animation_time(Duration::ZERO);
        assert_eq!(config.effective_animation_time(), DEFAULT_ANIMATION_TIME);
    }

    #[test]
    fn open_position_honours_offset_sign() {
        let config = SwipeConfig::default().with_offsets(60.0, 80.0);
        assert_eq!(config.open_position(false, 400.0), -340.0);
        assert_eq!(config.open_position(true, 400.0), 320.0);

        let config = SwipeConfig::default().with_offsets(-120.0, -100.0);
        assert_eq!(config.open_position(false, 400.0), -120.0);
        assert_eq!(config.open_position(true, 400.0), 100.0);
    }
}
