//! Swipe gesture core for list widgets.
//!
//! The host list implements [`SwipeHost`] and forwards pointer events,
//! scroll-state changes, animation completions and clock ticks to a
//! [`SwipeController`]. The controller owns the per-item state and decides
//! which reveal/dismiss/choice transition a gesture produces.

pub mod action;
pub mod config;
pub mod controller;
pub mod deferred;
pub mod error;
pub mod gesture;
pub mod host;
pub mod item_state;
pub mod pending_dismiss;

pub use action::{ActionSet, SwipeAction};
pub use config::{SwipeConfig, SwipeMode};
pub use controller::{ScrollState, SwipeController};
pub use deferred::{DeferredId, DeferredQueue};
pub use error::{ConfigError, SwipeError};
pub use gesture::{GestureSession, ReleaseDecision};
pub use host::{AnimationId, AnimationRequest, AnimationTarget, ItemSurface, SwipeHost};
pub use item_state::{ItemState, ItemStateStore};
pub use pending_dismiss::{DismissBatch, PendingDismissQueue, PendingDismissal};

pub use swipelist_foundation::{Point, PointerEvent, PointerEventKind, Rect};
