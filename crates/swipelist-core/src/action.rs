//! Action selection for an in-progress swipe.
//!
//! An action is picked once, when the drag first crosses the touch slop, and
//! is only revised afterwards when the drag flips direction or crosses the
//! open threshold.

use crate::config::{SwipeConfig, SwipeMode};
use swipelist_foundation::gesture_constants::CHOICE_DISPLACEMENT;

/// What a swipe does to its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeAction {
    /// Idle; no action decided yet.
    #[default]
    None,
    /// Slide the front surface to expose the back surface.
    Reveal,
    /// Slide the whole row out and remove it.
    Dismiss,
    /// Toggle the row's checked flag.
    Choice,
    /// Fire the host's open action, then settle like `Reset`.
    Open,
    /// Snap back to neutral and mark the row closed.
    Reset,
}

/// Per-direction actions currently in effect.
///
/// While at least one row is checked every direction maps to
/// [`SwipeAction::Choice`]; the configured actions are restored when the
/// last row is unchecked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSet {
    pub left: SwipeAction,
    pub right: SwipeAction,
    pub secondary_left: SwipeAction,
    saved: Option<(SwipeAction, SwipeAction)>,
}

impl ActionSet {
    pub fn from_config(config: &SwipeConfig) -> Self {
        Self {
            left: config.left_action,
            right: config.right_action,
            secondary_left: config.secondary_left_action,
            saved: None,
        }
    }

    /// Applies a new config. In choice mode the new actions take effect once
    /// choice mode ends.
    pub fn reconfigure(&mut self, config: &SwipeConfig) {
        let configured = (config.left_action, config.right_action);
        self.secondary_left = config.secondary_left_action;
        match &mut self.saved {
            Some(saved) => *saved = configured,
            None => (self.left, self.right) = configured,
        }
    }

    pub fn for_direction(&self, right: bool) -> SwipeAction {
        if right {
            self.right
        } else {
            self.left
        }
    }

    pub fn in_choice_mode(&self) -> bool {
        self.saved.is_some()
    }

    pub fn enter_choice_mode(&mut self) {
        if self.saved.is_none() {
            self.saved = Some((self.left, self.right));
        }
        self.left = SwipeAction::Choice;
        self.right = SwipeAction::Choice;
    }

    pub fn exit_choice_mode(&mut self) {
        if let Some((left, right)) = self.saved.take() {
            self.left = left;
            self.right = right;
        }
    }

    fn has_open(&self) -> bool {
        self.left == SwipeAction::Open || self.secondary_left == SwipeAction::Open
    }
}

/// Maps a configured action to the one a drag actually runs. `Open` starts
/// out as a reveal and is promoted by [`open_threshold_action`].
pub fn drag_action(configured: SwipeAction) -> SwipeAction {
    match configured {
        SwipeAction::Dismiss | SwipeAction::Choice => configured,
        _ => SwipeAction::Reveal,
    }
}

/// Action chosen when the drag crosses the touch slop.
pub fn select_action(actions: &ActionSet, opened: bool, swiping_right: bool) -> SwipeAction {
    if opened {
        if actions.secondary_left == SwipeAction::None || swiping_right {
            SwipeAction::Reveal
        } else {
            SwipeAction::Reset
        }
    } else {
        drag_action(actions.for_direction(swiping_right))
    }
}

/// Horizontal displacement that counts towards the touch slop.
///
/// Motion in a direction the mode forbids counts as zero. An opened row may
/// keep moving left in `Left` mode only when a secondary left action exists.
pub fn allowed_displacement(
    mode: SwipeMode,
    opened: bool,
    secondary_left: SwipeAction,
    delta_x: f32,
) -> f32 {
    let blocked = match mode {
        SwipeMode::None => true,
        SwipeMode::Both => false,
        SwipeMode::Left if opened => secondary_left == SwipeAction::None && delta_x < 0.0,
        SwipeMode::Left => delta_x > 0.0,
        SwipeMode::Right if opened => delta_x > 0.0,
        SwipeMode::Right => delta_x < 0.0,
    };
    if blocked {
        0.0
    } else {
        delta_x.abs()
    }
}

/// Promotes the current action to `Open` once the front surface is dragged
/// left past its revealed resting point, and demotes it back to `Reveal`
/// when the drag returns. A no-op unless an open action is configured.
pub fn open_threshold_action(
    current: SwipeAction,
    actions: &ActionSet,
    front_x: f32,
    open_left_position: f32,
) -> SwipeAction {
    if !actions.has_open() {
        return current;
    }
    if front_x < open_left_position {
        SwipeAction::Open
    } else if matches!(current, SwipeAction::Open | SwipeAction::Reset) {
        SwipeAction::Reveal
    } else {
        current
    }
}

/// Front translation while a choice swipe is dragged: pinned to a small band
/// around neutral.
pub fn choice_translation(delta_x: f32) -> f32 {
    delta_x.clamp(-CHOICE_DISPLACEMENT, CHOICE_DISPLACEMENT)
}

/// Row alpha while a dismiss swipe is dragged.
pub fn dismiss_alpha(delta_x: f32, width: f32) -> f32 {
    (1.0 - 2.0 * delta_x.abs() / width.max(1.0)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(left: SwipeAction, right: SwipeAction) -> ActionSet {
        ActionSet::from_config(&SwipeConfig::default().with_actions(left, right))
    }

    #[test]
    fn closed_row_uses_direction_action() {
        let set = actions(SwipeAction::Dismiss, SwipeAction::Choice);
        assert_eq!(select_action(&set, false, false), SwipeAction::Dismiss);
        assert_eq!(select_action(&set, false, true), SwipeAction::Choice);

        let set = actions(SwipeAction::Open, SwipeAction::None);
        assert_eq!(select_action(&set, false, false), SwipeAction::Reveal);
        assert_eq!(select_action(&set, false, true), SwipeAction::Reveal);
    }

    #[test]
    fn opened_row_reveals_unless_secondary_left_applies() {
        let mut set = actions(SwipeAction::Dismiss, SwipeAction::Dismiss);
        assert_eq!(select_action(&set, true, false), SwipeAction::Reveal);

        set.secondary_left = SwipeAction::Open;
        assert_eq!(select_action(&set, true, false), SwipeAction::Reset);
        assert_eq!(select_action(&set, true, true), SwipeAction::Reveal);
    }

    #[test]
    fn choice_mode_overrides_and_restores() {
        let mut set = actions(SwipeAction::Reveal, SwipeAction::Dismiss);
        set.enter_choice_mode();
        set.enter_choice_mode();
        assert!(set.in_choice_mode());
        assert_eq!(set.for_direction(false), SwipeAction::Choice);
        assert_eq!(set.for_direction(true), SwipeAction::Choice);

        set.reconfigure(&SwipeConfig::default().with_actions(SwipeAction::Dismiss, SwipeAction::Reveal));
        assert_eq!(set.left, SwipeAction::Choice);

        set.exit_choice_mode();
        assert_eq!(set.left, SwipeAction::Dismiss);
        assert_eq!(set.right, SwipeAction::Reveal);
    }

    #[test]
    fn displacement_respects_mode() {
        let none = SwipeAction::None;
        assert_eq!(allowed_displacement(SwipeMode::Both, false, none, -20.0), 20.0);
        assert_eq!(allowed_displacement(SwipeMode::None, false, none, -20.0), 0.0);
        assert_eq!(allowed_displacement(SwipeMode::Left, false, none, 20.0), 0.0);
        assert_eq!(allowed_displacement(SwipeMode::Left, false, none, -20.0), 20.0);
        assert_eq!(allowed_displacement(SwipeMode::Right, false, none, -20.0), 0.0);
        assert_eq!(allowed_displacement(SwipeMode::Left, true, none, -20.0), 0.0);
        assert_eq!(allowed_displacement(SwipeMode::Left, true, none, 20.0), 20.0);
        assert_eq!(
            allowed_displacement(SwipeMode::Left, true, SwipeAction::Open, -20.0),
            20.0
        );
        assert_eq!(allowed_displacement(SwipeMode::Right, true, none, 20.0), 0.0);
    }

    #[test]
    fn open_threshold_promotes_and_demotes() {
        let mut set = actions(SwipeAction::Reveal, SwipeAction::Reveal);
        assert_eq!(
            open_threshold_action(SwipeAction::Reveal, &set, -500.0, -300.0),
            SwipeAction::Reveal
        );

        set.secondary_left = SwipeAction::Open;
        assert_eq!(
            open_threshold_action(SwipeAction::Reset, &set, -320.0, -300.0),
            SwipeAction::Open
        );
        assert_eq!(
            open_threshold_action(SwipeAction::Open, &set, -200.0, -300.0),
            SwipeAction::Reveal
        );
        assert_eq!(
            open_threshold_action(SwipeAction::Dismiss, &set, -200.0, -300.0),
            SwipeAction::Dismiss
        );
    }

    #[test]
    fn choice_band_and_dismiss_fade() {
        assert_eq!(choice_translation(200.0), CHOICE_DISPLACEMENT);
        assert_eq!(choice_translation(-200.0), -CHOICE_DISPLACEMENT);
        assert_eq!(choice_translation(30.0), 30.0);

        assert_eq!(dismiss_alpha(0.0, 400.0), 1.0);
        assert_eq!(dismiss_alpha(100.0, 400.0), 0.5);
        assert_eq!(dismiss_alpha(-300.0, 400.0), 0.0);
    }
}
