//! Capabilities the host list widget provides to the swipe controller.
//!
//! The host owns rendering, layout and the animator. The controller only
//! queries it, pushes presentation updates and emits notifications; it never
//! reaches into the host's view hierarchy.

use crate::action::SwipeAction;
use crate::config::SwipeMode;
use std::fmt::Debug;
use swipelist_foundation::Rect;
use web_time::Duration;

/// Identifies one animation request so its completion can be routed back
/// through [`crate::SwipeController::on_animation_finished`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// Which part of a row a presentation update targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemSurface {
    /// The swipeable front surface.
    Front,
    /// The whole row, front and back together.
    Row,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationTarget {
    /// Translate `surface` horizontally, optionally fading it.
    Slide {
        surface: ItemSurface,
        translation_x: f32,
        alpha: Option<f32>,
    },
    /// Shrink the row's height to (almost) nothing.
    Collapse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest<H> {
    pub id: AnimationId,
    pub handle: H,
    pub target: AnimationTarget,
    pub duration: Duration,
}

pub trait SwipeHost {
    /// Host-side reference to a visible row.
    type Handle: Clone + PartialEq + Debug;

    fn item_count(&self) -> usize;

    /// Inclusive range of visible positions, `None` when nothing is shown.
    fn visible_range(&self) -> Option<(usize, usize)>;

    /// Handle of the visible row at `index`, `None` if it is off-screen or
    /// has no swipeable surface.
    fn visible_handle(&self, index: usize) -> Option<Self::Handle>;

    /// Hit rectangle of the visible row at `index`, in list coordinates.
    fn item_bounds(&self, index: usize) -> Option<Rect>;

    fn list_width(&self) -> f32;

    /// Starts an animation; the host must later report its completion with
    /// the request's id.
    fn animate_to(&mut self, request: AnimationRequest<Self::Handle>);

    fn first_completely_visible(&self) -> Option<usize> {
        None
    }

    fn is_swipe_allowed(&self, _index: usize) -> bool {
        true
    }

    fn swipe_mode_override(&self, _index: usize) -> Option<SwipeMode> {
        None
    }

    fn set_translation(&mut self, _handle: &Self::Handle, _surface: ItemSurface, _x: f32) {}

    fn set_alpha(&mut self, _handle: &Self::Handle, _surface: ItemSurface, _alpha: f32) {}

    fn set_back_visible(&mut self, _handle: &Self::Handle, _visible: bool) {}

    fn set_front_clickable(&mut self, _handle: &Self::Handle, _clickable: bool, _long: bool) {}

    /// Enables or disables input on the row and its children.
    fn set_row_enabled(&mut self, _handle: &Self::Handle, _enabled: bool) {}

    /// Redraws the checked/unchecked indicator of a row.
    fn show_checked(&mut self, _handle: &Self::Handle, _checked: bool) {}

    /// Restores alpha, translation and height after the row was dismissed.
    fn reset_presentation(&mut self, _handle: &Self::Handle) {}

    /// Stops the list from intercepting the current touch sequence and
    /// cancels its own handling of it.
    fn cancel_list_touch(&mut self) {}

    /// Re-enables list scrolling after a swipe settles.
    fn reset_scrolling(&mut self) {}

    fn on_opened(&mut self, _index: usize, _right: bool) {}

    fn on_closed(&mut self, _index: usize, _right: bool) {}

    fn on_start_open(&mut self, _index: usize, _action: SwipeAction, _right: bool) {}

    fn on_start_close(&mut self, _index: usize, _right: bool) {}

    fn on_move(&mut self, _index: usize, _delta_x: f32) {}

    fn on_choice_started(&mut self) {}

    fn on_choice_ended(&mut self) {}

    fn on_choice_changed(&mut self, _index: usize, _checked: bool) {}

    /// Dismissed positions, highest first.
    fn on_dismiss(&mut self, _positions: &[usize]) {}

    fn on_open_action_triggered(&mut self, _index: usize) {}

    fn on_scrolled_top(&mut self, _at_top: bool) {}

    fn on_click_front_view(&mut self, _index: usize) {}

    fn on_click_back_view(&mut self, _index: usize) {}
}
