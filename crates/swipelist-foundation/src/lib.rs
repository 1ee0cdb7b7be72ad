//! Input primitives shared by the swipelist crates.

pub mod geometry;
pub mod gesture_constants;
pub mod input;
pub mod velocity_tracker;

pub use geometry::{Point, Rect};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::{Velocity, VelocityTracker, VelocityTracker1D};
