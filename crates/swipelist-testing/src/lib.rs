//! Testing utilities and harness for swipelist

pub mod assertions;
pub mod host;
pub mod rule;

pub use host::{RecordingHost, RowPresentation, SwipeEvent};
pub use rule::SwipeTestRule;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::host::{RecordingHost, RowPresentation, SwipeEvent};
    pub use crate::rule::SwipeTestRule;
    pub use swipelist_core::{
        ScrollState, SwipeAction, SwipeConfig, SwipeController, SwipeError, SwipeMode,
    };
}
