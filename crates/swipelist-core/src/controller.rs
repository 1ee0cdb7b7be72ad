//! Swipe controller: turns pointer and scroll input into row transitions.
//!
//! Everything runs on the UI thread. Animations are asynchronous: the
//! controller records what each requested animation should do when it ends,
//! and the host reports completions through
//! [`SwipeController::on_animation_finished`]. Delayed work (re-enabling
//! swipes after a scroll settles, flushing off-screen dismissals) lives in a
//! [`DeferredQueue`] driven by [`SwipeController::tick`].

use crate::action::{self, ActionSet, SwipeAction};
use crate::config::{SwipeConfig, SwipeMode};
use crate::deferred::{DeferredId, DeferredQueue};
use crate::error::SwipeError;
use crate::gesture::{GestureSession, ReleaseDecision};
use crate::host::{AnimationId, AnimationRequest, AnimationTarget, ItemSurface, SwipeHost};
use crate::item_state::{ItemState, ItemStateStore};
use crate::pending_dismiss::{DismissBatch, PendingDismissQueue};
use rustc_hash::FxHashMap;
use swipelist_foundation::gesture_constants::{DETACHED_DISMISS_SLACK, SCROLL_SETTLE_DELAY};
use swipelist_foundation::{Point, PointerEvent, PointerEventKind};
use web_time::Instant;

/// Scroll state of the host list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    /// The user is dragging the list.
    Dragging,
    /// The list is flinging after the user let go.
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeferredTask {
    ReenableSwipe,
    FlushDetachedDismissals,
}

/// Cleanup for the row a gesture ran on, applied when its settle animation
/// ends.
#[derive(Clone, Debug)]
struct CellReset<H> {
    index: usize,
    handle: H,
    restore_back: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealOutcome {
    Stay,
    Open { right: bool },
    Close,
}

#[derive(Clone, Debug)]
enum Completion<H> {
    Reveal {
        index: usize,
        outcome: RevealOutcome,
        cell: Option<CellReset<H>>,
    },
    Dismiss {
        index: usize,
        handle: H,
        commit: bool,
        cell: Option<CellReset<H>>,
    },
    /// Slide back to neutral; `close` clears the row's opened flag.
    Settle {
        index: usize,
        close: bool,
        cell: Option<CellReset<H>>,
    },
    Collapse {
        handle: H,
    },
}

pub struct SwipeController<H: SwipeHost> {
    host: H,
    config: SwipeConfig,
    actions: ActionSet,
    items: ItemStateStore,
    session: Option<GestureSession<H::Handle>>,
    pending: PendingDismissQueue<H::Handle>,
    animations: FxHashMap<AnimationId, Completion<H::Handle>>,
    next_animation: u64,
    deferred: DeferredQueue<DeferredTask>,
    reenable: Option<DeferredId>,
    detached_flush: Option<DeferredId>,
    paused: bool,
    list_moving: bool,
    /// A released gesture whose settle animation has not finished yet.
    settling_gesture: bool,
    at_top: bool,
    now: Option<Instant>,
}

impl<H: SwipeHost> SwipeController<H> {
    pub fn new(host: H, config: SwipeConfig) -> Result<Self, SwipeError> {
        config.validate()?;
        let items = ItemStateStore::with_len(host.item_count());
        Ok(Self {
            host,
            actions: ActionSet::from_config(&config),
            config,
            items,
            session: None,
            pending: PendingDismissQueue::new(),
            animations: FxHashMap::default(),
            next_animation: 1,
            deferred: DeferredQueue::new(),
            reenable: None,
            detached_flush: None,
            paused: false,
            list_moving: false,
            settling_gesture: false,
            at_top: true,
            now: None,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    pub fn items(&self) -> &ItemStateStore {
        &self.items
    }

    pub fn session(&self) -> Option<&GestureSession<H::Handle>> {
        self.session.as_ref()
    }

    pub fn pending_dismissals(&self) -> &PendingDismissQueue<H::Handle> {
        &self.pending
    }

    pub fn is_list_moving(&self) -> bool {
        self.list_moving
    }

    pub fn is_enabled(&self) -> bool {
        !self.paused
    }

    pub fn is_opened(&self, index: usize) -> bool {
        self.items.is_opened(index)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.items.is_checked(index)
    }

    pub fn selected_count(&self) -> usize {
        self.items.selected_count()
    }

    pub fn selected_positions(&self) -> Vec<usize> {
        self.items.selected_positions()
    }

    pub fn has_running_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Earliest instant at which [`Self::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.next_deadline()
    }

    /// Replaces the configuration. Rejected while a gesture is in progress.
    pub fn set_config(&mut self, config: SwipeConfig) -> Result<(), SwipeError> {
        if self.session.is_some() {
            return Err(SwipeError::SessionActive);
        }
        config.validate()?;
        self.actions.reconfigure(&config);
        self.config = config;
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.paused = !enabled;
        self.cancel_reenable();
    }

    /// Grows the item state to the host's current item count. Call whenever
    /// the host's data set gains items.
    pub fn reset_items(&mut self) {
        self.items.grow_to(self.host.item_count());
    }

    /// Front translation a freshly bound row at `index` should start with.
    pub fn resting_offset(&self, index: usize) -> f32 {
        self.items
            .get(index)
            .map_or(0.0, |item| self.resting_x(item, self.width()))
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        self.observe(event.timestamp);
        if !self.config.mode.is_enabled() {
            return;
        }
        match event.kind {
            PointerEventKind::Down => self.press(event),
            PointerEventKind::Move => self.drag(event),
            PointerEventKind::Up => self.release(event),
            PointerEventKind::Cancel => self.cancel_session(),
        }
    }

    pub fn on_scroll_state_changed(&mut self, state: ScrollState, now: Instant) {
        self.observe(now);
        match state {
            ScrollState::Dragging => {
                if self.config.close_all_when_list_moves {
                    self.close_opened_items();
                }
                self.list_moving = true;
                self.paused = true;
                self.cancel_reenable();
                self.cancel_session();
            }
            ScrollState::Settling => {}
            ScrollState::Idle => {
                self.list_moving = false;
                self.settling_gesture = false;
                self.host.reset_scrolling();
                self.cancel_reenable();
                let id = self
                    .deferred
                    .schedule(now + SCROLL_SETTLE_DELAY, DeferredTask::ReenableSwipe);
                self.reenable = Some(id);
            }
        }
        self.track_scrolled_top();
    }

    /// Runs deferred work that is due at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.observe(now);
        for (id, task) in self.deferred.drain_due(now) {
            match task {
                DeferredTask::ReenableSwipe => {
                    if self.reenable == Some(id) {
                        self.reenable = None;
                    }
                    log::debug!("swiping re-enabled after scroll settled");
                    self.paused = false;
                }
                DeferredTask::FlushDetachedDismissals => {
                    self.detached_flush = None;
                    if let Some(batch) = self.pending.flush_if_idle() {
                        self.report_dismissals(batch);
                    }
                }
            }
        }
    }

    pub fn on_animation_finished(&mut self, id: AnimationId) {
        let Some(completion) = self.animations.remove(&id) else {
            log::warn!("completion for unknown animation {id:?}");
            return;
        };

        match completion {
            Completion::Reveal {
                index,
                outcome,
                cell,
            } => {
                self.host.reset_scrolling();
                self.apply_reveal(index, outcome);
                self.reset_cell(cell);
            }
            Completion::Dismiss {
                index,
                handle,
                commit,
                cell,
            } => {
                if !commit {
                    self.reset_cell(cell);
                    return;
                }
                self.settling_gesture = false;
                self.close_opened_items();
                match self.store_index(index) {
                    Ok(store) => {
                        self.remove_item(store, index);
                        self.collapse(index, handle);
                    }
                    Err(err) => {
                        log::warn!("dropping dismissal: {err}");
                        if let Some(batch) = self.pending.finish_animation() {
                            self.report_dismissals(batch);
                        }
                    }
                }
            }
            Completion::Settle { index, close, cell } => {
                self.host.reset_scrolling();
                if close {
                    if let Some(item) = self.items.get(index) {
                        self.items.reset_opened(index);
                        self.host.on_closed(index, item.opened_right);
                    }
                }
                self.reset_cell(cell);
            }
            Completion::Collapse { handle } => {
                self.host.set_row_enabled(&handle, true);
                if let Some(batch) = self.pending.finish_animation() {
                    self.report_dismissals(batch);
                }
            }
        }
    }

    /// Animates the row at `index` open towards the left.
    pub fn open(&mut self, index: usize) -> Result<(), SwipeError> {
        let item = self.item(index)?;
        if item.opened {
            return Ok(());
        }
        let handle = self.visible_handle(index)?;
        let decision = ReleaseDecision {
            swap: true,
            right: false,
        };
        self.animate_reveal(index, handle, item, decision, None);
        Ok(())
    }

    pub fn close(&mut self, index: usize) -> Result<(), SwipeError> {
        let item = self.item(index)?;
        if !item.opened {
            return Ok(());
        }
        let handle = self.visible_handle(index)?;
        let decision = ReleaseDecision {
            swap: true,
            right: item.opened_right,
        };
        self.animate_reveal(index, handle, item, decision, None);
        Ok(())
    }

    /// Closes every opened row that is currently visible.
    pub fn close_opened_items(&mut self) {
        let Some((first, last)) = self.host.visible_range() else {
            return;
        };
        for index in first..=last {
            if self.items.is_opened(index) {
                if let Err(err) = self.close(index) {
                    log::debug!("could not close {index}: {err}");
                }
            }
        }
    }

    /// Flips the checked flag of `index`, entering or leaving choice mode as
    /// the selection count moves between zero and one.
    pub fn toggle_choice(&mut self, index: usize) -> Result<bool, SwipeError> {
        let previous_count = self.items.selected_count();
        let checked = self
            .items
            .toggle_checked(index)
            .ok_or(SwipeError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;

        if previous_count == 0 && checked {
            self.host.on_choice_started();
            self.close_opened_items();
            self.actions.enter_choice_mode();
        }
        if previous_count == 1 && !checked {
            self.host.on_choice_ended();
            self.actions.exit_choice_mode();
        }

        self.host.on_choice_changed(index, checked);
        if let Some(handle) = self.host.visible_handle(index) {
            self.host.show_checked(&handle, checked);
        }
        Ok(checked)
    }

    /// Unchecks every row and leaves choice mode.
    pub fn clear_choices(&mut self) {
        let cleared = self.items.clear_checked();
        if cleared.is_empty() {
            return;
        }
        for index in cleared {
            if let Some(handle) = self.host.visible_handle(index) {
                self.host.show_checked(&handle, false);
            }
        }
        self.host.on_choice_ended();
        self.actions.exit_choice_mode();
    }

    /// Dismisses the row at host position `position`. Returns `true` if a
    /// collapse animation was started, `false` if the row was off-screen and
    /// only queued.
    ///
    /// Positions refer to the host list as it is before the pending batch is
    /// reported, so several calls may be made in any order.
    pub fn dismiss(&mut self, position: usize) -> Result<bool, SwipeError> {
        let index = self.store_index(position)?;
        let handle = match self.host.visible_range() {
            Some((first, last)) if (first..=last).contains(&position) => {
                self.host.visible_handle(position)
            }
            _ => None,
        };
        self.remove_item(index, position);

        match handle {
            Some(handle) => {
                self.pending.begin_animation();
                self.collapse(position, handle);
                Ok(true)
            }
            None => {
                self.pending.enqueue(position, None);
                self.schedule_detached_flush();
                Ok(false)
            }
        }
    }

    /// Dismisses every checked row, highest position first, and leaves
    /// choice mode. Returns the dismissed host positions.
    pub fn dismiss_selected(&mut self) -> Result<Vec<usize>, SwipeError> {
        let mut positions: Vec<usize> = self
            .items
            .selected_positions()
            .into_iter()
            .map(|index| self.pending.host_position(index))
            .collect();
        positions.reverse();
        for &position in &positions {
            self.dismiss(position)?;
        }
        if !positions.is_empty() && self.actions.in_choice_mode() {
            self.host.on_choice_ended();
            self.actions.exit_choice_mode();
        }
        Ok(positions)
    }

    pub fn on_front_click(&mut self, index: usize) {
        if self.config.front_clickable_when_revealed && self.items.is_opened(index) {
            if let Err(err) = self.close(index) {
                log::debug!("front click could not close {index}: {err}");
            }
        }
        self.host.on_click_front_view(index);
    }

    pub fn on_back_click(&mut self, index: usize) {
        self.host.on_click_back_view(index);
    }

    pub fn on_front_long_press(&mut self, index: usize) -> Result<(), SwipeError> {
        if self.config.open_on_long_press {
            self.open(index)
        } else {
            self.toggle_choice(index).map(|_| ())
        }
    }

    fn press(&mut self, event: &PointerEvent) {
        if self.paused && (self.session.is_some() || self.settling_gesture) {
            log::debug!("press ignored while list is paused");
            return;
        }
        if let Some(previous) = self.session.take() {
            self.abandon(previous);
        }

        let Some(index) = self.hit_test(event.position) else {
            return;
        };
        if !self.host.is_swipe_allowed(index) {
            return;
        }
        let Some(item) = self.items.get(index) else {
            log::warn!(
                "press on untracked item {index} (tracking {}); call reset_items",
                self.items.len()
            );
            return;
        };
        let Some(handle) = self.host.visible_handle(index) else {
            log::debug!("item {index} has no swipeable surface");
            return;
        };

        let width = self.width();
        let mode = self
            .host
            .swipe_mode_override(index)
            .unwrap_or(self.config.mode);
        let clickable = self.config.front_clickable_when_revealed || !item.opened;
        self.host.set_front_clickable(&handle, clickable, !item.opened);

        let resting_x = self.resting_x(item, width);
        self.session = Some(GestureSession::new(
            index, handle, event, width, mode, resting_x,
        ));
        event.consume();
    }

    fn drag(&mut self, event: &PointerEvent) {
        if self.paused {
            return;
        }
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.track(event);

        let Some(item) = self.items.get(session.index) else {
            log::warn!("abandoning swipe on removed item {}", session.index);
            self.abandon(session);
            return;
        };

        let velocity = session.velocity();
        let delta_x = session.delta_x(event.position);
        let displacement = action::allowed_displacement(
            session.mode,
            item.opened,
            self.actions.secondary_left,
            delta_x,
        );
        if session.should_start_swipe(displacement, velocity, self.config.touch_slop) {
            self.start_swipe(&mut session, item, delta_x > 0.0);
        }

        if session.swiping {
            let mut offset = delta_x;
            if item.opened {
                offset += self
                    .config
                    .open_position(item.opened_right, session.view_width);
            }
            self.drag_front(&mut session, item, offset);
            event.consume();
        }
        self.session = Some(session);
    }

    fn start_swipe(
        &mut self,
        session: &mut GestureSession<H::Handle>,
        item: ItemState,
        right: bool,
    ) {
        let action = action::select_action(&self.actions, item.opened, right);
        session.start_swipe(action, right);
        log::debug!(
            "swipe started on {}: action={action:?} right={right}",
            session.index
        );

        if item.opened {
            if action == SwipeAction::Reveal {
                self.host.on_start_close(session.index, right);
            }
        } else {
            self.host.on_start_open(session.index, action, right);
        }
        self.host.cancel_list_touch();
        if action == SwipeAction::Choice {
            self.host.set_back_visible(&session.handle, false);
        }
    }

    fn drag_front(
        &mut self,
        session: &mut GestureSession<H::Handle>,
        item: ItemState,
        offset: f32,
    ) {
        let width = session.view_width;
        let front_x = session.front_x;
        let previous = session.action;

        if front_x > 0.0 && session.mode == SwipeMode::Left {
            session.action = SwipeAction::Reset;
            self.switch_surface(&session.handle, item, width, previous, session.action);
            return;
        }
        if front_x < 0.0 {
            if session.mode == SwipeMode::Right {
                return;
            }
            session.action = action::open_threshold_action(
                session.action,
                &self.actions,
                front_x,
                self.config.open_position(false, width),
            );
        }

        self.host.on_move(session.index, offset);

        // Position relative to where the drag started, to detect a flip
        // across the starting point.
        let mut relative_x = front_x;
        if item.opened {
            relative_x -= self.config.open_position(item.opened_right, width);
        }
        let flipped_to = if relative_x > 0.0 && !session.swiping_right {
            if self.actions.secondary_left == SwipeAction::None {
                session.action = action::drag_action(self.actions.right);
            }
            Some(true)
        } else if relative_x < 0.0 && session.swiping_right {
            session.action = action::drag_action(self.actions.left);
            Some(false)
        } else {
            None
        };
        if let Some(right) = flipped_to {
            session.swiping_right = right;
            log::debug!(
                "swipe on {} flipped, right={right} action={:?}",
                session.index,
                session.action
            );
            self.host
                .set_back_visible(&session.handle, session.action != SwipeAction::Choice);
        }
        self.switch_surface(&session.handle, item, width, previous, session.action);

        log::trace!("drag {} to {offset}", session.index);
        let handle = &session.handle;
        session.front_x = match session.action {
            SwipeAction::Dismiss => {
                self.host.set_translation(handle, ItemSurface::Row, offset);
                self.host
                    .set_alpha(handle, ItemSurface::Row, action::dismiss_alpha(offset, width));
                offset
            }
            SwipeAction::Choice => {
                let x = action::choice_translation(offset);
                self.host.set_translation(handle, ItemSurface::Front, x);
                x
            }
            _ => {
                self.host.set_translation(handle, ItemSurface::Front, offset);
                offset
            }
        };
    }

    /// Puts back the surface `from` was dragging when `to` drives the other
    /// one. `Dismiss` moves the whole row, every other action the front.
    fn switch_surface(
        &mut self,
        handle: &H::Handle,
        item: ItemState,
        width: f32,
        from: SwipeAction,
        to: SwipeAction,
    ) {
        let was_row = from == SwipeAction::Dismiss;
        if was_row == (to == SwipeAction::Dismiss) {
            return;
        }
        if was_row {
            self.host.set_translation(handle, ItemSurface::Row, 0.0);
            self.host.set_alpha(handle, ItemSurface::Row, 1.0);
        } else {
            let resting_x = self.resting_x(item, width);
            self.host.set_translation(handle, ItemSurface::Front, resting_x);
        }
    }

    fn release(&mut self, event: &PointerEvent) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if !session.swiping {
            log::trace!("release on {} without swipe", session.index);
            return;
        }
        session.track(event);

        let Some(item) = self.items.get(session.index) else {
            log::warn!("abandoning release on removed item {}", session.index);
            self.abandon(session);
            return;
        };

        let velocity = session.velocity();
        let delta_x = session.delta_x(event.position);
        let decision =
            session.release_decision(velocity, delta_x, item, &self.config, &self.actions);
        let action = session.action;
        let index = session.index;
        log::debug!("release on {index}: action={action:?} decision={decision:?}");

        let cell = CellReset {
            index,
            handle: session.handle.clone(),
            restore_back: action == SwipeAction::Choice,
        };
        self.settling_gesture = true;
        self.run_action(action, decision, index, session.handle, item, cell);
        if action == SwipeAction::Choice {
            if let Err(err) = self.toggle_choice(index) {
                log::warn!("choice toggle failed: {err}");
            }
        }
        event.consume();
    }

    fn run_action(
        &mut self,
        action: SwipeAction,
        decision: ReleaseDecision,
        index: usize,
        handle: H::Handle,
        item: ItemState,
        cell: CellReset<H::Handle>,
    ) {
        match action {
            SwipeAction::Reveal => self.animate_reveal(index, handle, item, decision, Some(cell)),
            SwipeAction::Dismiss => self.animate_dismiss(index, handle, decision, cell),
            SwipeAction::Choice => self.animate_settle(index, handle, false, cell),
            SwipeAction::Open => {
                self.host.on_open_action_triggered(index);
                self.animate_settle(index, handle, true, cell);
            }
            SwipeAction::Reset => self.animate_settle(index, handle, true, cell),
            SwipeAction::None => self.reset_cell(Some(cell)),
        }
    }

    fn animate_reveal(
        &mut self,
        index: usize,
        handle: H::Handle,
        item: ItemState,
        decision: ReleaseDecision,
        cell: Option<CellReset<H::Handle>>,
    ) {
        let width = self.width();
        let (target, outcome) = match (item.opened, decision.swap) {
            (true, false) => (
                self.config.open_position(item.opened_right, width),
                RevealOutcome::Stay,
            ),
            (true, true) => (0.0, RevealOutcome::Close),
            (false, true) => (
                self.config.open_position(decision.right, width),
                RevealOutcome::Open {
                    right: decision.right,
                },
            ),
            (false, false) => (0.0, RevealOutcome::Stay),
        };
        let target = AnimationTarget::Slide {
            surface: ItemSurface::Front,
            translation_x: target,
            alpha: None,
        };
        self.start_animation(
            handle,
            target,
            Completion::Reveal {
                index,
                outcome,
                cell,
            },
        );
    }

    fn animate_dismiss(
        &mut self,
        index: usize,
        handle: H::Handle,
        decision: ReleaseDecision,
        cell: CellReset<H::Handle>,
    ) {
        let (translation_x, alpha) = if decision.swap {
            self.pending.begin_animation();
            let width = self.width();
            (self.config.dismiss_position(decision.right, width), 0.0)
        } else {
            (0.0, 1.0)
        };
        let target = AnimationTarget::Slide {
            surface: ItemSurface::Row,
            translation_x,
            alpha: Some(alpha),
        };
        self.start_animation(
            handle.clone(),
            target,
            Completion::Dismiss {
                index,
                handle,
                commit: decision.swap,
                cell: Some(cell),
            },
        );
    }

    fn animate_settle(
        &mut self,
        index: usize,
        handle: H::Handle,
        close: bool,
        cell: CellReset<H::Handle>,
    ) {
        let target = AnimationTarget::Slide {
            surface: ItemSurface::Front,
            translation_x: 0.0,
            alpha: None,
        };
        self.start_animation(
            handle,
            target,
            Completion::Settle {
                index,
                close,
                cell: Some(cell),
            },
        );
    }

    /// Shrinks a dismissed row; the matching `begin_animation` has already
    /// been recorded in the pending queue.
    fn collapse(&mut self, index: usize, handle: H::Handle) {
        self.host.set_row_enabled(&handle, false);
        self.pending.enqueue(index, Some(handle.clone()));
        self.start_animation(
            handle.clone(),
            AnimationTarget::Collapse,
            Completion::Collapse { handle },
        );
    }

    fn start_animation(
        &mut self,
        handle: H::Handle,
        target: AnimationTarget,
        completion: Completion<H::Handle>,
    ) {
        let id = AnimationId(self.next_animation);
        self.next_animation += 1;
        self.animations.insert(id, completion);
        self.host.animate_to(AnimationRequest {
            id,
            handle,
            target,
            duration: self.config.effective_animation_time(),
        });
    }

    fn apply_reveal(&mut self, index: usize, outcome: RevealOutcome) {
        let Some(item) = self.items.get(index) else {
            log::warn!("reveal finished on removed item {index}");
            return;
        };
        match outcome {
            RevealOutcome::Open { right } if !item.opened => {
                self.items.set_opened(index, right);
                self.host.on_opened(index, right);
            }
            RevealOutcome::Close if item.opened => {
                self.items.set_closed(index);
                self.host.on_closed(index, item.opened_right);
            }
            _ => {}
        }
    }

    fn reset_cell(&mut self, cell: Option<CellReset<H::Handle>>) {
        let Some(cell) = cell else {
            return;
        };
        self.settling_gesture = false;
        if cell.restore_back {
            self.host.set_back_visible(&cell.handle, true);
        }
        let opened = self.items.is_opened(cell.index);
        self.host.set_front_clickable(&cell.handle, opened, opened);
    }

    /// Drops a session without any state change, putting its row back where
    /// it rested before the gesture.
    fn abandon(&mut self, session: GestureSession<H::Handle>) {
        if !session.swiping {
            return;
        }
        let resting_x = self
            .items
            .get(session.index)
            .map_or(0.0, |item| self.resting_x(item, session.view_width));
        let handle = &session.handle;
        self.host.set_translation(handle, ItemSurface::Front, resting_x);
        self.host.set_translation(handle, ItemSurface::Row, 0.0);
        self.host.set_alpha(handle, ItemSurface::Row, 1.0);
        self.host.set_back_visible(handle, true);
        log::debug!("abandoned swipe on {}", session.index);
    }

    fn cancel_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.abandon(session);
        }
    }

    /// Removes store entry `index`, the row at host `position`, keeping the
    /// open session aligned.
    fn remove_item(&mut self, index: usize, position: usize) {
        self.items.remove(index);
        let stale = match &mut self.session {
            Some(session) if session.index == position => true,
            Some(session) if session.index > position => {
                session.index -= 1;
                false
            }
            _ => false,
        };
        if stale {
            self.cancel_session();
        }
    }

    fn schedule_detached_flush(&mut self) {
        if self.pending.in_flight() > 0 || self.detached_flush.is_some() {
            return;
        }
        let deadline =
            self.current_time() + self.config.effective_animation_time() + DETACHED_DISMISS_SLACK;
        let id = self
            .deferred
            .schedule(deadline, DeferredTask::FlushDetachedDismissals);
        self.detached_flush = Some(id);
    }

    fn report_dismissals(&mut self, batch: DismissBatch<H::Handle>) {
        self.host.on_dismiss(&batch.positions);
        for handle in &batch.handles {
            self.host.reset_presentation(handle);
        }
    }

    fn track_scrolled_top(&mut self) {
        let Some(first) = self.host.first_completely_visible() else {
            return;
        };
        if first == 0 {
            if !self.at_top {
                self.at_top = true;
                self.host.on_scrolled_top(true);
            }
        } else if self.at_top {
            self.at_top = false;
            self.host.on_scrolled_top(false);
        }
    }

    fn cancel_reenable(&mut self) {
        if let Some(id) = self.reenable.take() {
            self.deferred.cancel(id);
        }
    }

    fn hit_test(&self, position: Point) -> Option<usize> {
        let (first, last) = self.host.visible_range()?;
        (first..=last).find(|&index| {
            self.host
                .item_bounds(index)
                .is_some_and(|bounds| bounds.contains(position))
        })
    }

    /// Item-state index of the row at host `position`.
    fn store_index(&self, position: usize) -> Result<usize, SwipeError> {
        let index = self
            .pending
            .store_index(position)
            .ok_or(SwipeError::AlreadyDismissed { index: position })?;
        if self.items.contains(index) {
            Ok(index)
        } else {
            Err(SwipeError::IndexOutOfRange {
                index: position,
                len: self.items.len() + self.pending.len(),
            })
        }
    }

    fn item(&self, index: usize) -> Result<ItemState, SwipeError> {
        self.items.get(index).ok_or(SwipeError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    fn visible_handle(&self, index: usize) -> Result<H::Handle, SwipeError> {
        self.host
            .visible_handle(index)
            .ok_or(SwipeError::NotVisible { index })
    }

    fn resting_x(&self, item: ItemState, width: f32) -> f32 {
        if item.opened {
            self.config.open_position(item.opened_right, width)
        } else {
            0.0
        }
    }

    fn width(&self) -> f32 {
        self.host.list_width().max(1.0)
    }

    fn observe(&mut self, now: Instant) {
        self.now = Some(self.now.map_or(now, |seen| seen.max(now)));
    }

    fn current_time(&self) -> Instant {
        self.now.unwrap_or_else(Instant::now)
    }
}
