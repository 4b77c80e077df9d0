// SPDX-License-Identifier: MPL-2.0
//! Per-toast state machine: collapsed pill, expanded pill + body, and the
//! transition used to swap content without a layout jump.
//!
//! The widget keeps its own copy of the payload ([`ToastView`]). Content
//! replaced while expanded is staged: the widget collapses first, and the
//! new payload is committed once the collapse finished (transition end, or
//! [`SWAP_COLLAPSE_MS`] at the latest).
//!
//! The expanded height is frozen while collapsed, so measurements taken of
//! content that is not on screen never resize the toast before it expands
//! again.

use super::geometry;
use super::notification::{InstanceId, Position, ToastId, ToastState};
use super::options::{AutopilotDelays, ToastView};
use super::store::ToastRecord;
use super::timers::Timers;
use crate::config::{HEADER_EXIT_MS, HEIGHT, SWAP_COLLAPSE_MS, SWIPE_DISMISS, SWIPE_MAX};
use std::time::{Duration, Instant};

/// Visual phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collapsed,
    Expanded,
    /// Collapsing ahead of a staged content swap.
    Transitioning,
}

/// Raw events fed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    HoverIn,
    HoverOut,
    /// Cursor moved; carries the vertical position.
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    /// The renderer finished the current height transition.
    TransitionEnd,
    /// Measured height of the body content.
    ContentMeasured(f32),
    /// Measured width of the header's inline content.
    HeaderMeasured(f32),
    ButtonPressed,
}

/// What the owner of the widget has to do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Dismiss(ToastId),
    ButtonPressed(ToastId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetTimer {
    AutoExpand,
    AutoCollapse,
    SwapCommit,
    HeaderExit,
}

/// Title, badge and state: the part of the pill that crossfades.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub state: ToastState,
    pub title: String,
    pub icon: String,
}

impl Header {
    fn of(view: &ToastView) -> Self {
        Self {
            state: view.state,
            title: view.title.clone(),
            icon: view.icon.clone(),
        }
    }
}

/// Current header plus the one fading out, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLayer {
    pub current: Header,
    pub previous: Option<Header>,
}

#[derive(Debug, Clone)]
struct Staged {
    instance: InstanceId,
    view: ToastView,
    autopilot: Option<AutopilotDelays>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Drag {
    pressed: bool,
    cursor_y: Option<f32>,
    /// Unknown until a cursor position is seen while pressed.
    origin: Option<f32>,
    distance: f32,
}

impl Drag {
    fn offset(&self) -> f32 {
        self.distance.clamp(-SWIPE_MAX, SWIPE_MAX)
    }
}

/// Layout targets handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSignals {
    pub phase: Phase,
    /// Current target height: the pill height, or the expanded height.
    pub height: f32,
    /// Expanded height, frozen while collapsed.
    pub expanded_height: f32,
    pub pill_width: f32,
    pub pill_offset_x: f32,
    /// Vertical drag offset, within `±SWIPE_MAX`.
    pub drag_offset: f32,
    pub blur_radius: f32,
}

/// Everything the renderer needs to draw one toast.
#[derive(Debug, Clone)]
pub struct ToastViewModel {
    pub id: ToastId,
    pub position: Position,
    pub view: ToastView,
    pub header: HeaderLayer,
    pub exiting: bool,
    pub layout: LayoutSignals,
}

/// State machine of a single toast.
#[derive(Debug)]
pub struct ToastWidget {
    id: ToastId,
    instance: InstanceId,
    position: Position,
    view: ToastView,
    autopilot: Option<AutopilotDelays>,
    staged: Option<Staged>,
    header: HeaderLayer,
    open: bool,
    hovered: bool,
    exiting: bool,
    exclusive: bool,
    content_height: Option<f32>,
    header_width: Option<f32>,
    frozen_height: f32,
    drag: Drag,
    timers: Timers<WidgetTimer>,
    now: Instant,
}

impl ToastWidget {
    /// Creates a collapsed widget showing `record`.
    #[must_use]
    pub fn new(record: &ToastRecord, now: Instant) -> Self {
        let view = record.view.clone();
        let mut widget = Self {
            id: record.id,
            instance: record.instance,
            position: record.position,
            header: HeaderLayer {
                current: Header::of(&view),
                previous: None,
            },
            frozen_height: geometry::expanded_height(geometry::estimate_content_height(&view)),
            view,
            autopilot: record.autopilot,
            staged: None,
            open: false,
            hovered: false,
            exiting: false,
            exclusive: true,
            content_height: None,
            header_width: None,
            drag: Drag::default(),
            timers: Timers::new(),
            now,
        };
        widget.schedule_autopilot();
        if record.exiting {
            widget.set_exiting(now);
        }
        widget
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Instance currently on screen.
    #[must_use]
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Most recent instance received, staged or committed.
    #[must_use]
    pub fn latest_instance(&self) -> InstanceId {
        self.staged
            .as_ref()
            .map_or(self.instance, |staged| staged.instance)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn view(&self) -> &ToastView {
        &self.view
    }

    #[must_use]
    pub fn header(&self) -> &HeaderLayer {
        &self.header
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.staged.is_some() {
            Phase::Transitioning
        } else if self.open {
            Phase::Expanded
        } else {
            Phase::Collapsed
        }
    }

    /// Expanded height target. Frozen while collapsed.
    #[must_use]
    pub fn expanded_height(&self) -> f32 {
        self.frozen_height
    }

    /// Grants or revokes the exclusive right to expand.
    ///
    /// Losing it collapses an open toast unless the pointer is over it.
    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
        if !exclusive && self.open && !self.hovered {
            self.collapse();
        }
    }

    /// Receives a new record for this toast.
    pub fn replace_content(&mut self, record: &ToastRecord, now: Instant) {
        self.now = now;
        self.position = record.position;
        let staged = Staged {
            instance: record.instance,
            view: record.view.clone(),
            autopilot: record.autopilot,
        };

        if self.open || self.staged.is_some() {
            tracing::trace!(id = %self.id, "content swap staged");
            self.staged = Some(staged);
            self.collapse();
            self.timers.cancel(&WidgetTimer::AutoExpand);
            self.timers.cancel(&WidgetTimer::AutoCollapse);
            self.timers.schedule_if_idle(
                WidgetTimer::SwapCommit,
                now + Duration::from_millis(SWAP_COLLAPSE_MS),
            );
        } else {
            self.commit(staged);
        }
    }

    /// Collapses for good; exiting toasts never expand again.
    pub fn set_exiting(&mut self, now: Instant) {
        self.now = now;
        self.exiting = true;
        self.collapse();
        self.drag = Drag::default();
        self.timers.cancel(&WidgetTimer::AutoExpand);
        self.timers.cancel(&WidgetTimer::AutoCollapse);
    }

    /// Handles a renderer event.
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        self.now = now;
        match message {
            Message::HoverIn => {
                self.hovered = true;
                self.try_expand();
                Effect::None
            }
            Message::HoverOut => {
                self.hovered = false;
                self.collapse();
                self.drag = Drag::default();
                Effect::None
            }
            Message::PointerMoved(y) => {
                self.drag.cursor_y = Some(y);
                if self.drag.pressed {
                    match self.drag.origin {
                        Some(origin) => self.drag.distance = y - origin,
                        None => self.drag.origin = Some(y),
                    }
                }
                Effect::None
            }
            Message::PointerPressed => {
                if !self.exiting {
                    self.drag.pressed = true;
                    self.drag.origin = self.drag.cursor_y;
                    self.drag.distance = 0.0;
                }
                Effect::None
            }
            Message::PointerReleased => {
                let pressed = std::mem::take(&mut self.drag.pressed);
                self.drag.origin = None;
                let distance = std::mem::take(&mut self.drag.distance);
                if !pressed || self.exiting {
                    return Effect::None;
                }
                if self.view.dismiss_on_tap || distance.abs() >= SWIPE_DISMISS {
                    tracing::trace!(id = %self.id, distance, "dismiss gesture");
                    Effect::Dismiss(self.id)
                } else {
                    Effect::None
                }
            }
            Message::TransitionEnd => {
                if let Some(staged) = self.staged.take() {
                    self.timers.cancel(&WidgetTimer::SwapCommit);
                    self.commit(staged);
                }
                Effect::None
            }
            Message::ContentMeasured(height) => {
                self.content_height = Some(height.max(0.0));
                if self.open {
                    self.frozen_height = geometry::expanded_height(height);
                }
                Effect::None
            }
            Message::HeaderMeasured(width) => {
                self.header_width = Some(width.max(0.0));
                Effect::None
            }
            Message::ButtonPressed => match &self.view.button {
                Some(_) if !self.exiting => Effect::ButtonPressed(self.id),
                _ => Effect::None,
            },
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        for timer in self.timers.take_expired(now) {
            tracing::trace!(id = %self.id, ?timer, "widget timer fired");
            match timer {
                WidgetTimer::AutoExpand => self.try_expand(),
                WidgetTimer::AutoCollapse => {
                    if !self.hovered {
                        self.collapse();
                    }
                }
                WidgetTimer::SwapCommit => {
                    if let Some(staged) = self.staged.take() {
                        self.commit(staged);
                    }
                }
                WidgetTimer::HeaderExit => self.header.previous = None,
            }
        }
    }

    /// Cancels every pending timer and drops staged content.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.staged = None;
        self.drag = Drag::default();
    }

    /// Whether any timer is still pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn layout(&self) -> LayoutSignals {
        let header_width = self
            .header_width
            .unwrap_or_else(|| geometry::estimate_header_width(&self.view));
        let pill_width = geometry::pill_width(header_width);
        let phase = self.phase();

        LayoutSignals {
            phase,
            height: if phase == Phase::Expanded {
                self.frozen_height
            } else {
                HEIGHT
            },
            expanded_height: self.frozen_height,
            pill_width,
            pill_offset_x: geometry::pill_offset_x(self.position.align(), pill_width),
            drag_offset: self.drag.offset(),
            blur_radius: geometry::blur_radius(self.view.roundness),
        }
    }

    #[must_use]
    pub fn view_model(&self) -> ToastViewModel {
        ToastViewModel {
            id: self.id,
            position: self.position,
            view: self.view.clone(),
            header: self.header.clone(),
            exiting: self.exiting,
            layout: self.layout(),
        }
    }

    fn can_expand(&self) -> bool {
        !self.exiting
            && self.staged.is_none()
            && self.view.state.is_expandable()
            && (self.exclusive || self.hovered)
    }

    fn try_expand(&mut self) {
        if self.open || !self.can_expand() {
            return;
        }
        self.open = true;
        let content = self
            .content_height
            .unwrap_or_else(|| geometry::estimate_content_height(&self.view));
        self.frozen_height = geometry::expanded_height(content);
    }

    fn collapse(&mut self) {
        self.open = false;
    }

    fn commit(&mut self, staged: Staged) {
        let header = Header::of(&staged.view);
        if header != self.header.current {
            let previous = std::mem::replace(&mut self.header.current, header);
            self.header.previous = Some(previous);
            self.timers.schedule(
                WidgetTimer::HeaderExit,
                self.now + Duration::from_millis(HEADER_EXIT_MS),
            );
        }

        if staged.view.description != self.view.description
            || staged.view.button != self.view.button
        {
            // Measurement belongs to the old body.
            self.content_height = None;
        }
        if staged.view.title != self.view.title || staged.view.icon != self.view.icon {
            self.header_width = None;
        }

        self.instance = staged.instance;
        self.view = staged.view;
        self.autopilot = staged.autopilot;

        if !self.exiting {
            self.schedule_autopilot();
            if self.hovered {
                self.try_expand();
            }
        }
    }

    fn schedule_autopilot(&mut self) {
        self.timers.cancel(&WidgetTimer::AutoExpand);
        self.timers.cancel(&WidgetTimer::AutoCollapse);
        if let Some(delays) = self.autopilot {
            self.timers
                .schedule(WidgetTimer::AutoExpand, self.now + delays.expand);
            self.timers
                .schedule(WidgetTimer::AutoCollapse, self.now + delays.collapse);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::config::{DEFAULT_AUTO_COLLAPSE_MS, DEFAULT_AUTO_EXPAND_MS, MIN_EXPAND_RATIO};
    use crate::ui::notifications::{Store, StoreDefaults, ToastOptions};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup(options: ToastOptions) -> (Store, ToastId, ToastWidget, Instant) {
        let t0 = Instant::now();
        let store = Store::with_clock(StoreDefaults::default(), t0);
        let id = store.create(options);
        let record = store.get(id).expect("record exists");
        (store, id, ToastWidget::new(&record, t0), t0)
    }

    fn replace(store: &Store, widget: &mut ToastWidget, options: ToastOptions, now: Instant) {
        store.tick(now);
        store.update(widget.id(), options);
        let record = store.get(widget.id()).expect("record exists");
        widget.replace_content(&record, now);
    }

    #[test]
    fn starts_collapsed() {
        let (_, _, widget, _) = setup(ToastOptions::new().title("Saved"));
        assert_eq!(widget.phase(), Phase::Collapsed);
        assert_abs_diff_eq!(widget.layout().height, HEIGHT);
    }

    #[test]
    fn hover_expands_and_unhover_collapses() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new().description("body"));
        widget.handle(Message::HoverIn, t0);
        assert_eq!(widget.phase(), Phase::Expanded);
        assert!(widget.layout().height > HEIGHT);

        widget.handle(Message::HoverOut, t0);
        assert_eq!(widget.phase(), Phase::Collapsed);
    }

    #[test]
    fn loading_never_expands() {
        let (_, _, mut widget, t0) =
            setup(ToastOptions::new().state(ToastState::Loading).persistent());
        widget.handle(Message::HoverIn, t0);
        widget.tick(t0 + ms(10_000));
        assert_eq!(widget.phase(), Phase::Collapsed);
    }

    #[test]
    fn autopilot_expands_then_collapses() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new().description("body"));
        widget.tick(t0 + ms(DEFAULT_AUTO_EXPAND_MS - 1));
        assert_eq!(widget.phase(), Phase::Collapsed);
        widget.tick(t0 + ms(DEFAULT_AUTO_EXPAND_MS));
        assert_eq!(widget.phase(), Phase::Expanded);
        widget.tick(t0 + ms(DEFAULT_AUTO_COLLAPSE_MS));
        assert_eq!(widget.phase(), Phase::Collapsed);
    }

    #[test]
    fn autopilot_collapse_waits_for_hover_out() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.handle(Message::HoverIn, t0 + ms(10));
        widget.tick(t0 + ms(DEFAULT_AUTO_COLLAPSE_MS));
        assert_eq!(widget.phase(), Phase::Expanded);
    }

    #[test]
    fn autopilot_off_does_not_expand() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new().autopilot_off());
        widget.tick(t0 + ms(DEFAULT_AUTO_EXPAND_MS * 2));
        assert_eq!(widget.phase(), Phase::Collapsed);
        assert!(!widget.has_pending_timers());
    }

    #[test]
    fn non_exclusive_toasts_only_expand_on_hover() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.set_exclusive(false);
        widget.tick(t0 + ms(DEFAULT_AUTO_EXPAND_MS));
        assert_eq!(widget.phase(), Phase::Collapsed);

        widget.handle(Message::HoverIn, t0 + ms(200));
        assert_eq!(widget.phase(), Phase::Expanded);
    }

    #[test]
    fn losing_exclusivity_collapses_unless_hovered() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.tick(t0 + ms(DEFAULT_AUTO_EXPAND_MS));
        assert_eq!(widget.phase(), Phase::Expanded);
        widget.set_exclusive(false);
        assert_eq!(widget.phase(), Phase::Collapsed);
    }

    #[test]
    fn exiting_collapses_and_blocks_expansion() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.handle(Message::HoverIn, t0);
        widget.set_exiting(t0 + ms(5));
        assert_eq!(widget.phase(), Phase::Collapsed);
        widget.handle(Message::HoverIn, t0 + ms(6));
        assert_eq!(widget.phase(), Phase::Collapsed);
        assert!(widget.is_exiting());
    }

    #[test]
    fn replacement_while_collapsed_commits_immediately() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().title("One").autopilot_off());
        replace(&store, &mut widget, ToastOptions::new().title("Two"), t0 + ms(10));

        assert_eq!(widget.phase(), Phase::Collapsed);
        assert_eq!(widget.view().title, "Two");
        assert_eq!(widget.instance(), widget.latest_instance());
    }

    #[test]
    fn replacement_while_expanded_is_staged_until_swap_delay() {
        let (store, _, mut widget, t0) =
            setup(ToastOptions::new().title("Uploading").description("short"));
        widget.handle(Message::HoverIn, t0);
        let t1 = t0 + ms(50);
        replace(&store, &mut widget, ToastOptions::new().title("Uploaded"), t1);

        assert_eq!(widget.phase(), Phase::Transitioning);
        assert_eq!(widget.view().title, "Uploading");
        assert_ne!(widget.instance(), widget.latest_instance());

        widget.tick(t1 + ms(SWAP_COLLAPSE_MS - 1));
        assert_eq!(widget.phase(), Phase::Transitioning);
        widget.tick(t1 + ms(SWAP_COLLAPSE_MS));
        assert_eq!(widget.view().title, "Uploaded");
        // Still hovered: re-expands after the swap.
        assert_eq!(widget.phase(), Phase::Expanded);
    }

    #[test]
    fn transition_end_commits_early() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().title("A"));
        widget.handle(Message::HoverIn, t0);
        replace(&store, &mut widget, ToastOptions::new().title("B"), t0 + ms(10));
        widget.handle(Message::TransitionEnd, t0 + ms(60));

        assert_eq!(widget.view().title, "B");
        assert_eq!(widget.phase(), Phase::Expanded);
    }

    #[test]
    fn rapid_replacements_keep_only_the_latest_staged_payload() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().title("A"));
        widget.handle(Message::HoverIn, t0);
        replace(&store, &mut widget, ToastOptions::new().title("B"), t0 + ms(10));
        replace(&store, &mut widget, ToastOptions::new().title("C"), t0 + ms(20));

        // First staging set the deadline.
        widget.tick(t0 + ms(10 + SWAP_COLLAPSE_MS));
        assert_eq!(widget.view().title, "C");
    }

    #[test]
    fn expanded_height_is_frozen_through_a_staged_swap() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().description("tall"));
        widget.handle(Message::HoverIn, t0);
        widget.handle(Message::ContentMeasured(120.0), t0);
        let committed = widget.expanded_height();
        assert_abs_diff_eq!(committed, HEIGHT + 120.0);

        replace(&store, &mut widget, ToastOptions::new().description("x"), t0 + ms(10));
        widget.handle(Message::ContentMeasured(5.0), t0 + ms(20));
        assert!(widget.expanded_height() >= committed);
        widget.tick(t0 + ms(100));
        assert!(widget.expanded_height() >= committed);
    }

    #[test]
    fn measurements_while_collapsed_apply_on_next_expansion() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new().description("body"));
        let frozen = widget.expanded_height();
        widget.handle(Message::ContentMeasured(300.0), t0);
        assert_abs_diff_eq!(widget.expanded_height(), frozen);

        widget.handle(Message::HoverIn, t0);
        assert_abs_diff_eq!(widget.expanded_height(), HEIGHT + 300.0);
        widget.handle(Message::ContentMeasured(0.0), t0);
        assert_abs_diff_eq!(widget.expanded_height(), HEIGHT * MIN_EXPAND_RATIO);
    }

    #[test]
    fn header_change_crossfades_then_drops_previous_layer() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().title("Loading").autopilot_off());
        replace(&store, &mut widget, ToastOptions::new().title("Done"), t0);

        let previous = widget.header().previous.clone().expect("previous header");
        assert_eq!(previous.title, "Loading");
        assert_eq!(widget.header().current.title, "Done");

        widget.tick(t0 + ms(HEADER_EXIT_MS));
        assert!(widget.header().previous.is_none());
    }

    #[test]
    fn description_only_change_keeps_a_single_header_layer() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().title("Same"));
        replace(&store, &mut widget, ToastOptions::new().description("new"), t0);
        assert!(widget.header().previous.is_none());
    }

    #[test]
    fn drag_past_threshold_dismisses() {
        let (_, id, mut widget, t0) = setup(ToastOptions::new());
        widget.handle(Message::PointerMoved(10.0), t0);
        widget.handle(Message::PointerPressed, t0);
        widget.handle(Message::PointerMoved(10.0 + SWIPE_DISMISS + 5.0), t0);

        assert_abs_diff_eq!(widget.layout().drag_offset, SWIPE_MAX);
        assert_eq!(widget.handle(Message::PointerReleased, t0), Effect::Dismiss(id));
        assert_abs_diff_eq!(widget.layout().drag_offset, 0.0);
    }

    #[test]
    fn short_drag_snaps_back() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.handle(Message::PointerMoved(50.0), t0);
        widget.handle(Message::PointerPressed, t0);
        widget.handle(Message::PointerMoved(40.0), t0);
        assert_abs_diff_eq!(widget.layout().drag_offset, -10.0);

        assert_eq!(widget.handle(Message::PointerReleased, t0), Effect::None);
        assert_abs_diff_eq!(widget.layout().drag_offset, 0.0);
    }

    #[test]
    fn tap_to_dismiss_skips_the_drag_threshold() {
        let (_, id, mut widget, t0) = setup(ToastOptions::new().dismiss_on_tap(true));
        widget.handle(Message::PointerPressed, t0);
        assert_eq!(widget.handle(Message::PointerReleased, t0), Effect::Dismiss(id));
    }

    #[test]
    fn press_before_any_move_measures_from_the_first_move() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.handle(Message::PointerPressed, t0);
        widget.handle(Message::PointerMoved(200.0), t0);
        assert_abs_diff_eq!(widget.layout().drag_offset, 0.0);

        widget.handle(Message::PointerMoved(205.0), t0);
        assert_abs_diff_eq!(widget.layout().drag_offset, 5.0);
        assert_eq!(widget.handle(Message::PointerReleased, t0), Effect::None);
    }

    #[test]
    fn moves_without_a_press_do_not_drag() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new());
        widget.handle(Message::PointerMoved(0.0), t0);
        widget.handle(Message::PointerMoved(100.0), t0);
        assert_abs_diff_eq!(widget.layout().drag_offset, 0.0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let (_, _, mut widget, t0) = setup(ToastOptions::new().dismiss_on_tap(true));
        assert_eq!(widget.handle(Message::PointerReleased, t0), Effect::None);
    }

    #[test]
    fn button_press_reports_effect_only_with_a_button() {
        let (_, _, mut plain, t0) = setup(ToastOptions::new());
        assert_eq!(plain.handle(Message::ButtonPressed, t0), Effect::None);

        let (_, id, mut with_button, t0) = setup(ToastOptions::new().button("Undo", || {}));
        assert_eq!(
            with_button.handle(Message::ButtonPressed, t0),
            Effect::ButtonPressed(id)
        );
    }

    #[test]
    fn teardown_cancels_all_timers() {
        let (store, _, mut widget, t0) = setup(ToastOptions::new().title("A"));
        widget.handle(Message::HoverIn, t0);
        replace(&store, &mut widget, ToastOptions::new().title("B"), t0 + ms(10));
        assert!(widget.has_pending_timers());

        widget.teardown();
        assert!(!widget.has_pending_timers());
        widget.tick(t0 + ms(10_000));
        assert_eq!(widget.view().title, "A");
    }

    #[test]
    fn pill_is_offset_by_position_alignment() {
        let (_, _, mut widget, t0) =
            setup(ToastOptions::new().position(Position::TopLeft));
        widget.handle(Message::HeaderMeasured(100.0), t0);
        let layout = widget.layout();
        assert_abs_diff_eq!(layout.pill_width, geometry::pill_width(100.0));
        assert_abs_diff_eq!(layout.pill_offset_x, 0.0);
        assert_abs_diff_eq!(layout.blur_radius, geometry::blur_radius(widget.view().roundness));
    }
}
