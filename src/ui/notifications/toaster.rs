// SPDX-License-Identifier: MPL-2.0
//! Viewport layer: keeps one widget per record and drives dismiss timers.
//!
//! The `Toaster` owns the store handle it was built with. It reconciles its
//! widgets with the store's records, decides which toast may expand, and
//! dismisses toasts whose duration elapsed while the viewport is not
//! hovered.

use super::notification::{InstanceId, Position, ToastId};
use super::options::ToastOptions;
use super::store::{Store, SubscriptionId, ToastRecord};
use super::timers::Timers;
use super::widget::{self, Effect, ToastViewModel, ToastWidget};
use crate::config::DEFAULT_VIEWPORT_OFFSET;
use iced::Padding;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Messages handled by the [`Toaster`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Advances every clock to the given instant.
    Tick(Instant),
    /// Pointer entered or left a viewport.
    ViewportHovered(bool),
    /// Event for a single toast.
    Toast(ToastId, widget::Message),
}

/// Distance between a viewport and the window edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Uniform(f32),
    /// Missing edges use the default offset.
    Edges {
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
        left: Option<f32>,
    },
}

impl Offset {
    #[must_use]
    pub fn padding(self) -> Padding {
        match self {
            Offset::Uniform(value) => Padding::new(value.max(0.0)),
            Offset::Edges {
                top,
                right,
                bottom,
                left,
            } => {
                let edge = |value: Option<f32>| value.unwrap_or(DEFAULT_VIEWPORT_OFFSET).max(0.0);
                Padding {
                    top: edge(top),
                    right: edge(right),
                    bottom: edge(bottom),
                    left: edge(left),
                }
            }
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Uniform(DEFAULT_VIEWPORT_OFFSET)
    }
}

/// Toasts sharing a screen position, in store order.
#[derive(Debug)]
pub struct Group<'a> {
    pub position: Position,
    pub toasts: Vec<&'a ToastWidget>,
}

/// Owner of every toast widget on screen.
#[derive(Debug)]
pub struct Toaster {
    store: Store,
    widgets: Vec<ToastWidget>,
    dismiss_timers: Timers<(ToastId, InstanceId)>,
    viewport_hovered: bool,
    hover_owner: Option<ToastId>,
    offset: Offset,
    subscription: SubscriptionId,
    dirty: Rc<Cell<bool>>,
}

impl Toaster {
    /// Creates a toaster showing the records of `store`.
    #[must_use]
    pub fn new(store: Store) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |_| flag.set(true));

        let mut toaster = Self {
            store,
            widgets: Vec::new(),
            dismiss_timers: Timers::new(),
            viewport_hovered: false,
            hover_owner: None,
            offset: Offset::default(),
            subscription,
            dirty,
        };
        toaster.sync();
        toaster
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// The store this toaster renders.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// Position used by toasts that do not name one.
    pub fn set_position(&mut self, position: Position) {
        self.store.set_default_position(position);
    }

    /// Options applied beneath every call's options.
    pub fn set_default_options(&mut self, options: ToastOptions) {
        let mut defaults = self.store.defaults();
        defaults.options = options;
        self.store.set_defaults(defaults);
    }

    #[must_use]
    pub fn is_viewport_hovered(&self) -> bool {
        self.viewport_hovered
    }

    /// Whether anything is on screen or still scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.widgets.is_empty() || !self.store.is_empty() || self.dirty.get()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::ViewportHovered(hovered) => self.set_viewport_hovered(hovered),
            Message::Toast(id, message) => self.handle_toast(id, message),
        }
    }

    /// Advances the store and every widget to `now`, firing due timers.
    pub fn tick(&mut self, now: Instant) {
        self.store.tick(now);
        // Records created since the last sync need their timers before any fire.
        self.sync();

        for (id, instance) in self.dismiss_timers.take_expired(now) {
            let current = self
                .store
                .get(id)
                .filter(ToastRecord::is_live)
                .map(|record| record.instance);
            if current == Some(instance) {
                tracing::trace!(%id, "dismiss timer fired");
                self.store.dismiss(id);
            }
        }

        self.sync();
        for widget in &mut self.widgets {
            widget.tick(now);
        }
    }

    /// Reconciles widgets with the store if it changed since the last call.
    pub fn sync(&mut self) {
        if !self.dirty.replace(false) {
            return;
        }

        let records = self.store.records();
        let now = self.store.now();

        self.widgets.retain_mut(|widget| {
            let keep = records.iter().any(|record| record.id == widget.id());
            if !keep {
                widget.teardown();
            }
            keep
        });

        for record in &records {
            match self.widgets.iter_mut().find(|widget| widget.id() == record.id) {
                Some(widget) if widget.is_exiting() && record.is_live() => {
                    widget.teardown();
                    *widget = ToastWidget::new(record, now);
                }
                Some(widget) => {
                    if widget.latest_instance() != record.instance {
                        widget.replace_content(record, now);
                    }
                    if record.exiting && !widget.is_exiting() {
                        widget.set_exiting(now);
                    }
                }
                None => self.widgets.push(ToastWidget::new(record, now)),
            }
        }
        self.widgets.sort_by_key(|widget| {
            records
                .iter()
                .position(|record| record.id == widget.id())
                .unwrap_or(usize::MAX)
        });

        self.dismiss_timers.cancel_where(|(id, instance)| {
            !records
                .iter()
                .any(|record| record.id == *id && record.instance == *instance && record.is_live())
        });
        if !self.viewport_hovered {
            for record in records.iter().filter(|record| record.is_live()) {
                if let Some(duration) = record.duration.as_duration() {
                    self.dismiss_timers
                        .schedule_if_idle((record.id, record.instance), record.updated_at + duration);
                }
            }
        }

        if let Some(owner) = self.hover_owner {
            if !records.iter().any(|record| record.id == owner && record.is_live()) {
                self.hover_owner = None;
            }
        }
        self.assign_exclusive(&records);
    }

    /// Id of the toast currently allowed to expand.
    #[must_use]
    pub fn exclusive(&self) -> Option<ToastId> {
        exclusive_of(self.hover_owner, &self.store.records())
    }

    #[must_use]
    pub fn widget(&self, id: ToastId) -> Option<&ToastWidget> {
        self.widgets.iter().find(|widget| widget.id() == id)
    }

    pub fn widgets(&self) -> impl Iterator<Item = &ToastWidget> {
        self.widgets.iter()
    }

    /// One group per occupied position, in order of first appearance.
    #[must_use]
    pub fn groups(&self) -> Vec<Group<'_>> {
        let mut groups: Vec<Group<'_>> = Vec::new();
        for widget in &self.widgets {
            match groups
                .iter_mut()
                .find(|group| group.position == widget.position())
            {
                Some(group) => group.toasts.push(widget),
                None => groups.push(Group {
                    position: widget.position(),
                    toasts: vec![widget],
                }),
            }
        }
        groups
    }

    #[must_use]
    pub fn view_models(&self) -> Vec<ToastViewModel> {
        self.widgets.iter().map(ToastWidget::view_model).collect()
    }

    /// Deadline of the pending dismiss timer for a record instance.
    #[must_use]
    pub fn dismiss_deadline(&self, id: ToastId, instance: InstanceId) -> Option<Instant> {
        self.dismiss_timers.deadline(&(id, instance))
    }

    /// Cancels every timer and drops every widget.
    pub fn teardown(&mut self) {
        self.dismiss_timers.cancel_all();
        for widget in &mut self.widgets {
            widget.teardown();
        }
        self.widgets.clear();
        self.hover_owner = None;
        if self.store.unsubscribe(self.subscription) {
            tracing::debug!("toaster torn down");
        }
    }

    fn set_viewport_hovered(&mut self, hovered: bool) {
        if hovered == self.viewport_hovered {
            return;
        }
        self.viewport_hovered = hovered;

        if hovered {
            self.dismiss_timers.cancel_all();
            return;
        }

        // Remaining time is not kept: every live toast starts over.
        let now = self.store.now();
        for record in self.store.records().iter().filter(|record| record.is_live()) {
            if let Some(duration) = record.duration.as_duration() {
                self.dismiss_timers
                    .schedule((record.id, record.instance), now + duration);
            }
        }
    }

    fn handle_toast(&mut self, id: ToastId, message: widget::Message) {
        let now = self.store.now();
        let Some(widget) = self.widgets.iter_mut().find(|widget| widget.id() == id) else {
            return;
        };

        let effect = widget.handle(message, now);
        match message {
            widget::Message::HoverIn if widget.is_hovered() && !widget.is_exiting() => {
                self.hover_owner = Some(id);
            }
            widget::Message::HoverOut if self.hover_owner == Some(id) => self.hover_owner = None,
            _ => {}
        }

        match effect {
            Effect::None => {}
            Effect::Dismiss(id) => self.store.dismiss(id),
            Effect::ButtonPressed(id) => {
                let button = self
                    .widget(id)
                    .and_then(|widget| widget.view().button.clone());
                if let Some(button) = button {
                    tracing::debug!(%id, title = %button.title, "toast button pressed");
                    button.press();
                }
            }
        }

        self.sync();
        if matches!(
            message,
            widget::Message::HoverIn | widget::Message::HoverOut
        ) {
            let records = self.store.records();
            self.assign_exclusive(&records);
        }
    }

    fn assign_exclusive(&mut self, records: &[ToastRecord]) {
        let exclusive = exclusive_of(self.hover_owner, records);
        for widget in &mut self.widgets {
            widget.set_exclusive(Some(widget.id()) == exclusive);
        }
    }
}

/// The hovered toast, otherwise the newest live one.
fn exclusive_of(hover_owner: Option<ToastId>, records: &[ToastRecord]) -> Option<ToastId> {
    hover_owner.or_else(|| {
        records
            .iter()
            .filter(|record| record.is_live())
            .max_by_key(|record| record.created_at)
            .map(|record| record.id)
    })
}

impl Drop for Toaster {
    fn drop(&mut self) {
        self.teardown();
    }
}
