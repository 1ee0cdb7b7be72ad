//! Pointer events as delivered by the host list widget.

use crate::geometry::Point;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// The swipe controller consumes events it acts on (a press that landed on a
/// swipeable row, moves once a swipe is under way) so the host can stop
/// forwarding them to its own scroll and click handling.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position relative to the list's top-left corner.
    pub position: Point,
    pub timestamp: Instant,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp: Instant) -> Self {
        Self {
            id: 0,
            kind,
            position,
            timestamp,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerEventKind::Down, position, timestamp)
    }

    pub fn moved(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerEventKind::Move, position, timestamp)
    }

    pub fn up(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerEventKind::Up, position, timestamp)
    }

    pub fn cancel(position: Point, timestamp: Instant) -> Self {
        Self::new(PointerEventKind::Cancel, position, timestamp)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::down(Point::new(4.0, 4.0), Instant::now());
        let forwarded = event.clone();
        assert!(!event.is_consumed());
        forwarded.consume();
        assert!(event.is_consumed());
    }
}
