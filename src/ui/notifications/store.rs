// SPDX-License-Identifier: MPL-2.0
//! Notification store: the ordered sequence of toast records.
//!
//! The `Store` owns every record, applies defaults, tracks exit-removal
//! delays and notifies subscribers after each mutation. It is a cheap,
//! clonable handle over single-threaded shared state, so the toaster, the
//! application and pending promise futures can all hold one.
//!
//! Time only moves when [`Store::tick`] is called. Mutations schedule
//! relative to the last observed instant.

use super::notification::{InstanceId, Position, ToastDuration, ToastId, ToastState};
use super::options::{AutopilotDelays, ToastOptions, ToastView};
use super::timers::Timers;
use crate::config::{DEFAULT_AUTO_COLLAPSE_MS, DEFAULT_AUTO_EXPAND_MS, DEFAULT_EXIT_DELAY_MS};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A notification as stored.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    pub id: ToastId,
    pub instance: InstanceId,
    /// Fully merged options the record was built from.
    pub options: ToastOptions,
    pub view: ToastView,
    pub position: Position,
    pub duration: ToastDuration,
    /// `None` when the toast never expands on its own.
    pub autopilot: Option<AutopilotDelays>,
    pub exiting: bool,
    pub created_at: Instant,
    /// When the current instance was committed to the store.
    pub updated_at: Instant,
}

impl ToastRecord {
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.exiting
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.view.state
    }
}

/// Store-wide defaults, applied beneath every call's options.
#[derive(Debug, Clone)]
pub struct StoreDefaults {
    pub position: Position,
    pub options: ToastOptions,
    pub exit_delay: Duration,
    pub autopilot: AutopilotDelays,
}

impl Default for StoreDefaults {
    fn default() -> Self {
        Self {
            position: Position::default(),
            options: ToastOptions::default(),
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
            autopilot: AutopilotDelays {
                expand: Duration::from_millis(DEFAULT_AUTO_EXPAND_MS),
                collapse: Duration::from_millis(DEFAULT_AUTO_COLLAPSE_MS),
            },
        }
    }
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[ToastRecord])>;

struct Inner {
    records: Vec<ToastRecord>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    /// Subscribers currently being notified.
    notifying: Vec<SubscriptionId>,
    /// Unsubscribed while being notified.
    dropped_subscribers: Vec<SubscriptionId>,
    next_subscription: u64,
    defaults: StoreDefaults,
    exits: Timers<InstanceId>,
    now: Instant,
}

impl Inner {
    fn build_record(&self, id: ToastId, options: ToastOptions, created_at: Instant) -> ToastRecord {
        let duration = options.duration.unwrap_or_default();
        let position = options.position.unwrap_or(self.defaults.position);
        let autopilot = options
            .autopilot
            .unwrap_or_default()
            .resolve(duration, self.defaults.autopilot);
        let view = options.to_view();

        ToastRecord {
            id,
            instance: InstanceId::next(),
            options: ToastOptions {
                id: Some(id),
                ..options
            },
            view,
            position,
            duration,
            autopilot,
            exiting: false,
            created_at,
            updated_at: self.now,
        }
    }

    fn live_index(&self, id: ToastId) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.id == id && record.is_live())
    }
}

/// Shared handle to the notification sequence.
///
/// Subscribers run synchronously after each mutation, once the store is no
/// longer borrowed, so they may read from it. Mutating the store from inside
/// a subscriber is not supported.
#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<Inner>>,
}

impl Store {
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(StoreDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(defaults: StoreDefaults) -> Self {
        Self::with_clock(defaults, Instant::now())
    }

    /// Creates a store whose logical clock starts at `now`.
    #[must_use]
    pub fn with_clock(defaults: StoreDefaults, now: Instant) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                records: Vec::new(),
                subscribers: Vec::new(),
                notifying: Vec::new(),
                dropped_subscribers: Vec::new(),
                next_subscription: 0,
                defaults,
                exits: Timers::new(),
                now,
            })),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> StoreDefaults {
        self.inner.borrow().defaults.clone()
    }

    pub fn set_defaults(&self, defaults: StoreDefaults) {
        self.inner.borrow_mut().defaults = defaults;
    }

    pub fn set_default_position(&self, position: Position) {
        self.inner.borrow_mut().defaults.position = position;
    }

    /// Last instant observed through [`Store::tick`].
    #[must_use]
    pub fn now(&self) -> Instant {
        self.inner.borrow().now
    }

    /// Creates a toast, or replaces the live toast named by `options.id`.
    ///
    /// Replacement keeps the stable id and the slot in the sequence but
    /// yields a new instance id. An exiting record under the same id is
    /// removed at once so ids stay unique in the sequence.
    pub fn create(&self, options: ToastOptions) -> ToastId {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let merged = inner.defaults.options.merge(&options);
            let id = merged.id.unwrap_or_default();

            match inner.records.iter().position(|record| record.id == id) {
                Some(index) if inner.records[index].is_live() => {
                    let created_at = inner.records[index].created_at;
                    let record = inner.build_record(id, merged, created_at);
                    tracing::debug!(%id, state = %record.state(), "toast replaced");
                    inner.records[index] = record;
                }
                Some(index) => {
                    let stale = inner.records.remove(index);
                    inner.exits.cancel(&stale.instance);
                    let record = inner.build_record(id, merged, inner.now);
                    tracing::debug!(%id, state = %record.state(), "toast recreated while exiting");
                    inner.records.push(record);
                }
                None => {
                    let record = inner.build_record(id, merged, inner.now);
                    tracing::debug!(%id, state = %record.state(), "toast created");
                    inner.records.push(record);
                }
            }
            id
        };
        self.emit();
        id
    }

    /// Creates a toast with its state taken from the options, success otherwise.
    pub fn show(&self, options: ToastOptions) -> ToastId {
        self.create(options)
    }

    pub fn success(&self, options: ToastOptions) -> ToastId {
        self.create(options.state(ToastState::Success))
    }

    pub fn error(&self, options: ToastOptions) -> ToastId {
        self.create(options.state(ToastState::Error))
    }

    pub fn warning(&self, options: ToastOptions) -> ToastId {
        self.create(options.state(ToastState::Warning))
    }

    pub fn info(&self, options: ToastOptions) -> ToastId {
        self.create(options.state(ToastState::Info))
    }

    pub fn action(&self, options: ToastOptions) -> ToastId {
        self.create(options.state(ToastState::Action))
    }

    /// Layers `options` over the live toast `id`, producing a new instance.
    ///
    /// Unknown or exiting ids are ignored.
    pub fn update(&self, id: ToastId, options: ToastOptions) {
        {
            let mut inner = self.inner.borrow_mut();
            let Some(index) = inner.live_index(id) else {
                tracing::trace!(%id, "update ignored for unknown toast");
                return;
            };
            let current = &inner.records[index];
            let created_at = current.created_at;
            let merged = current.options.merge(&ToastOptions {
                id: Some(id),
                ..options
            });
            let record = inner.build_record(id, merged, created_at);
            tracing::debug!(%id, state = %record.state(), "toast updated");
            inner.records[index] = record;
        }
        self.emit();
    }

    /// Flags the live toast `id` as exiting and schedules its removal.
    ///
    /// Unknown or already exiting ids are ignored.
    pub fn dismiss(&self, id: ToastId) {
        {
            let mut inner = self.inner.borrow_mut();
            let Some(index) = inner.live_index(id) else {
                return;
            };
            let deadline = inner.now + inner.defaults.exit_delay;
            let record = &mut inner.records[index];
            record.exiting = true;
            let instance = record.instance;
            inner.exits.schedule(instance, deadline);
            tracing::debug!(%id, "toast dismissed");
        }
        self.emit();
    }

    /// Dismisses every live toast, or only those at `position`.
    pub fn clear(&self, position: Option<Position>) {
        let ids: Vec<ToastId> = self
            .inner
            .borrow()
            .records
            .iter()
            .filter(|record| record.is_live())
            .filter(|record| position.map_or(true, |position| record.position == position))
            .map(|record| record.id)
            .collect();

        for id in ids {
            self.dismiss(id);
        }
    }

    /// Advances the logical clock and removes toasts whose exit delay elapsed.
    pub fn tick(&self, now: Instant) {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            if now > inner.now {
                inner.now = now;
            }
            let now = inner.now;
            let expired = inner.exits.take_expired(now);
            let before = inner.records.len();
            inner
                .records
                .retain(|record| !expired.contains(&record.instance));
            before - inner.records.len()
        };

        if removed > 0 {
            tracing::trace!(removed, "exited toasts removed");
            self.emit();
        }
    }

    /// Registers a callback invoked with the full sequence after every mutation.
    pub fn subscribe(&self, callback: impl FnMut(&[ToastRecord]) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub, _)| *sub != id);
        if inner.subscribers.len() != before {
            return true;
        }
        if inner.notifying.contains(&id) && !inner.dropped_subscribers.contains(&id) {
            inner.dropped_subscribers.push(id);
            return true;
        }
        false
    }

    /// Snapshot of the sequence.
    #[must_use]
    pub fn records(&self) -> Vec<ToastRecord> {
        self.inner.borrow().records.clone()
    }

    /// Record for `id`, preferring the live one.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<ToastRecord> {
        let inner = self.inner.borrow();
        inner
            .live_index(id)
            .or_else(|| inner.records.iter().position(|record| record.id == id))
            .map(|index| inner.records[index].clone())
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.inner
            .borrow()
            .records
            .iter()
            .filter(|record| record.is_live())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().records.is_empty()
    }

    /// Earliest pending exit removal.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().exits.next_deadline()
    }

    fn emit(&self) {
        let (snapshot, mut subscribers) = {
            let mut inner = self.inner.borrow_mut();
            let subscribers = std::mem::take(&mut inner.subscribers);
            inner.notifying = subscribers.iter().map(|(id, _)| *id).collect();
            (inner.records.clone(), subscribers)
        };

        for (_, callback) in &mut subscribers {
            callback(&snapshot);
        }

        let mut inner = self.inner.borrow_mut();
        inner.notifying.clear();
        let dropped = std::mem::take(&mut inner.dropped_subscribers);
        subscribers.retain(|(id, _)| !dropped.contains(id));
        subscribers.append(&mut inner.subscribers);
        inner.subscribers = subscribers;
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("records", &inner.records.len())
            .field("subscribers", &inner.subscribers.len())
            .field("now", &inner.now)
            .finish()
    }
}
