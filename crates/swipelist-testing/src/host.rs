//! In-memory list host that records everything the controller does.
//!
//! Rows are laid out top to bottom with a fixed height, starting at
//! `first_visible`. Row handles are plain host positions. Animations are not
//! played: requests queue up until the harness finishes them, at which point
//! their end values are applied to the row presentation.

use std::collections::{BTreeMap, VecDeque};
use swipelist_core::{
    AnimationRequest, AnimationTarget, ItemSurface, SwipeAction, SwipeHost, SwipeMode,
};
use swipelist_foundation::Rect;

/// Notification received from the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeEvent {
    Opened { index: usize, right: bool },
    Closed { index: usize, right: bool },
    StartOpen {
        index: usize,
        action: SwipeAction,
        right: bool,
    },
    StartClose { index: usize, right: bool },
    ChoiceStarted,
    ChoiceEnded,
    ChoiceChanged { index: usize, checked: bool },
    Dismissed(Vec<usize>),
    OpenActionTriggered(usize),
    ScrolledTop(bool),
    FrontClicked(usize),
    BackClicked(usize),
}

/// Current presentation of one row, as last set by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowPresentation {
    pub front_x: f32,
    pub row_x: f32,
    pub row_alpha: f32,
    pub back_visible: bool,
    pub front_clickable: bool,
    pub front_long_clickable: bool,
    pub enabled: bool,
    pub checked: bool,
}

impl Default for RowPresentation {
    fn default() -> Self {
        Self {
            front_x: 0.0,
            row_x: 0.0,
            row_alpha: 1.0,
            back_visible: true,
            front_clickable: true,
            front_long_clickable: true,
            enabled: true,
            checked: false,
        }
    }
}

#[derive(Debug)]
pub struct RecordingHost {
    item_count: usize,
    width: f32,
    row_height: f32,
    first_visible: usize,
    visible_rows: usize,
    blocked: Vec<usize>,
    mode_overrides: Vec<(usize, SwipeMode)>,
    rows: BTreeMap<usize, RowPresentation>,
    events: Vec<SwipeEvent>,
    moves: Vec<(usize, f32)>,
    animations: VecDeque<AnimationRequest<usize>>,
    list_touch_cancels: usize,
    scroll_resets: usize,
}

impl RecordingHost {
    pub const DEFAULT_WIDTH: f32 = 400.0;
    pub const DEFAULT_ROW_HEIGHT: f32 = 50.0;
    pub const DEFAULT_VISIBLE_ROWS: usize = 8;

    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            width: Self::DEFAULT_WIDTH,
            row_height: Self::DEFAULT_ROW_HEIGHT,
            first_visible: 0,
            visible_rows: Self::DEFAULT_VISIBLE_ROWS,
            blocked: Vec::new(),
            mode_overrides: Vec::new(),
            rows: BTreeMap::new(),
            events: Vec::new(),
            moves: Vec::new(),
            animations: VecDeque::new(),
            list_touch_cancels: 0,
            scroll_resets: 0,
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self
    }

    /// Marks `index` as not swipeable.
    pub fn block_swipe(mut self, index: usize) -> Self {
        self.blocked.push(index);
        self
    }

    pub fn override_mode(mut self, index: usize, mode: SwipeMode) -> Self {
        self.mode_overrides.push((index, mode));
        self
    }

    /// Scrolls so that `first` is the top visible row.
    pub fn scroll_to(&mut self, first: usize) {
        self.first_visible = first;
    }

    /// Appends rows, as an adapter would after new data arrives.
    pub fn add_items(&mut self, count: usize) {
        self.item_count += count;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn events(&self) -> &[SwipeEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<SwipeEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn moves(&self) -> &[(usize, f32)] {
        &self.moves
    }

    pub fn row(&self, handle: usize) -> RowPresentation {
        self.rows.get(&handle).copied().unwrap_or_default()
    }

    pub fn pending_animations(&self) -> &VecDeque<AnimationRequest<usize>> {
        &self.animations
    }

    pub fn list_touch_cancels(&self) -> usize {
        self.list_touch_cancels
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    /// Pops the oldest running animation and applies its end values.
    pub fn finish_next_animation(&mut self) -> Option<AnimationRequest<usize>> {
        let request = self.animations.pop_front()?;
        if let AnimationTarget::Slide {
            surface,
            translation_x,
            alpha,
        } = request.target
        {
            let row = self.row_mut(request.handle);
            match surface {
                ItemSurface::Front => row.front_x = translation_x,
                ItemSurface::Row => row.row_x = translation_x,
            }
            if let Some(alpha) = alpha {
                row.row_alpha = alpha;
            }
        }
        log::trace!("finished animation {:?}", request.id);
        Some(request)
    }

    fn row_mut(&mut self, handle: usize) -> &mut RowPresentation {
        self.rows.entry(handle).or_default()
    }

    fn last_visible(&self) -> Option<usize> {
        if self.first_visible >= self.item_count || self.visible_rows == 0 {
            return None;
        }
        Some((self.first_visible + self.visible_rows).min(self.item_count) - 1)
    }
}

impl SwipeHost for RecordingHost {
    type Handle = usize;

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn visible_range(&self) -> Option<(usize, usize)> {
        self.last_visible().map(|last| (self.first_visible, last))
    }

    fn visible_handle(&self, index: usize) -> Option<usize> {
        let last = self.last_visible()?;
        (self.first_visible..=last).contains(&index).then_some(index)
    }

    fn item_bounds(&self, index: usize) -> Option<Rect> {
        self.visible_handle(index)?;
        let top = (index - self.first_visible) as f32 * self.row_height;
        Some(Rect::new(0.0, top, self.width, self.row_height))
    }

    fn list_width(&self) -> f32 {
        self.width
    }

    fn animate_to(&mut self, request: AnimationRequest<usize>) {
        self.animations.push_back(request);
    }

    fn first_completely_visible(&self) -> Option<usize> {
        self.last_visible().map(|_| self.first_visible)
    }

    fn is_swipe_allowed(&self, index: usize) -> bool {
        !self.blocked.contains(&index)
    }

    fn swipe_mode_override(&self, index: usize) -> Option<SwipeMode> {
        self.mode_overrides
            .iter()
            .find(|(overridden, _)| *overridden == index)
            .map(|(_, mode)| *mode)
    }

    fn set_translation(&mut self, handle: &usize, surface: ItemSurface, x: f32) {
        let row = self.row_mut(*handle);
        match surface {
            ItemSurface::Front => row.front_x = x,
            ItemSurface::Row => row.row_x = x,
        }
    }

    fn set_alpha(&mut self, handle: &usize, _surface: ItemSurface, alpha: f32) {
        self.row_mut(*handle).row_alpha = alpha;
    }

    fn set_back_visible(&mut self, handle: &usize, visible: bool) {
        self.row_mut(*handle).back_visible = visible;
    }

    fn set_front_clickable(&mut self, handle: &usize, clickable: bool, long: bool) {
        let row = self.row_mut(*handle);
        row.front_clickable = clickable;
        row.front_long_clickable = long;
    }

    fn set_row_enabled(&mut self, handle: &usize, enabled: bool) {
        self.row_mut(*handle).enabled = enabled;
    }

    fn show_checked(&mut self, handle: &usize, checked: bool) {
        self.row_mut(*handle).checked = checked;
    }

    fn reset_presentation(&mut self, handle: &usize) {
        let row = self.row_mut(*handle);
        row.front_x = 0.0;
        row.row_x = 0.0;
        row.row_alpha = 1.0;
        row.enabled = true;
    }

    fn cancel_list_touch(&mut self) {
        self.list_touch_cancels += 1;
    }

    fn reset_scrolling(&mut self) {
        self.scroll_resets += 1;
    }

    fn on_opened(&mut self, index: usize, right: bool) {
        self.events.push(SwipeEvent::Opened { index, right });
    }

    fn on_closed(&mut self, index: usize, right: bool) {
        self.events.push(SwipeEvent::Closed { index, right });
    }

    fn on_start_open(&mut self, index: usize, action: SwipeAction, right: bool) {
        self.events.push(SwipeEvent::StartOpen {
            index,
            action,
            right,
        });
    }

    fn on_start_close(&mut self, index: usize, right: bool) {
        self.events.push(SwipeEvent::StartClose { index, right });
    }

    fn on_move(&mut self, index: usize, delta_x: f32) {
        self.moves.push((index, delta_x));
    }

    fn on_choice_started(&mut self) {
        self.events.push(SwipeEvent::ChoiceStarted);
    }

    fn on_choice_ended(&mut self) {
        self.events.push(SwipeEvent::ChoiceEnded);
    }

    fn on_choice_changed(&mut self, index: usize, checked: bool) {
        self.events.push(SwipeEvent::ChoiceChanged { index, checked });
    }

    fn on_dismiss(&mut self, positions: &[usize]) {
        self.item_count = self.item_count.saturating_sub(positions.len());
        self.events.push(SwipeEvent::Dismissed(positions.to_vec()));
    }

    fn on_open_action_triggered(&mut self, index: usize) {
        self.events.push(SwipeEvent::OpenActionTriggered(index));
    }

    fn on_scrolled_top(&mut self, at_top: bool) {
        self.events.push(SwipeEvent::ScrolledTop(at_top));
    }

    fn on_click_front_view(&mut self, index: usize) {
        self.events.push(SwipeEvent::FrontClicked(index));
    }

    fn on_click_back_view(&mut self, index: usize) {
        self.events.push(SwipeEvent::BackClicked(index));
    }
}
