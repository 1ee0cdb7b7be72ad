//! A console "inbox" list that hosts the swipe controller.
//!
//! Rows are fixed-height and the whole list fits on screen. Animations are
//! queued and completed by the driver in `main`, which stands in for a real
//! animator.

use std::collections::VecDeque;
use swipelist_core::{
    AnimationId, AnimationRequest, AnimationTarget, ItemSurface, Rect, SwipeAction, SwipeHost,
};

pub const ROW_HEIGHT: f32 = 72.0;
pub const LIST_WIDTH: f32 = 360.0;

pub struct InboxHost {
    messages: Vec<String>,
    visible_rows: usize,
    running: VecDeque<AnimationId>,
}

impl InboxHost {
    pub fn new(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            visible_rows: 6,
            running: VecDeque::new(),
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn next_finished_animation(&mut self) -> Option<AnimationId> {
        self.running.pop_front()
    }

    fn subject(&self, index: usize) -> &str {
        self.messages.get(index).map_or("?", String::as_str)
    }
}

impl SwipeHost for InboxHost {
    type Handle = usize;

    fn item_count(&self) -> usize {
        self.messages.len()
    }

    fn visible_range(&self) -> Option<(usize, usize)> {
        let last = self.messages.len().min(self.visible_rows).checked_sub(1)?;
        Some((0, last))
    }

    fn visible_handle(&self, index: usize) -> Option<usize> {
        let (first, last) = self.visible_range()?;
        (first..=last).contains(&index).then_some(index)
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        self.visible_handle(index)?;
        Some(Rect::new(0.0, index as f32 * ROW_HEIGHT, LIST_WIDTH, ROW_HEIGHT))
    }

    fn list_width(&self) -> f32 {
        LIST_WIDTH
    }

    fn animate_to(&mut self, request: AnimationRequest<usize>) {
        match request.target {
            AnimationTarget::Slide {
                surface,
                translation_x,
                ..
            } => {
                let part = match surface {
                    ItemSurface::Front => "front",
                    ItemSurface::Row => "row",
                };
                log::debug!(
                    "animate {part} of row {} to {translation_x} over {:?}",
                    request.handle,
                    request.duration
                );
            }
            AnimationTarget::Collapse => log::debug!("collapse row {}", request.handle),
        }
        self.running.push_back(request.id);
    }

    fn on_start_open(&mut self, index: usize, action: SwipeAction, right: bool) {
        let side = if right { "right" } else { "left" };
        log::info!("{action:?} swipe {side} on \"{}\"", self.subject(index));
    }

    fn on_opened(&mut self, index: usize, _right: bool) {
        log::info!("opened \"{}\"", self.subject(index));
    }

    fn on_closed(&mut self, index: usize, _right: bool) {
        log::info!("closed \"{}\"", self.subject(index));
    }

    fn on_choice_started(&mut self) {
        log::info!("selection mode on");
    }

    fn on_choice_ended(&mut self) {
        log::info!("selection mode off");
    }

    fn on_choice_changed(&mut self, index: usize, checked: bool) {
        let mark = if checked { "selected" } else { "deselected" };
        log::info!("{mark} \"{}\"", self.subject(index));
    }

    fn on_dismiss(&mut self, positions: &[usize]) {
        for &position in positions {
            if position < self.messages.len() {
                let removed = self.messages.remove(position);
                log::info!("archived \"{removed}\"");
            }
        }
    }
}
