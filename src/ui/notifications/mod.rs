// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts start as a small pill showing a state badge and a title. Hovered,
//! or driven by their autopilot, they expand to reveal a description and an
//! optional action button, then collapse and time out on their own.
//!
//! # Components
//!
//! - [`store`] - `Store` holding the ordered toast records
//! - [`widget`] - `ToastWidget` expand/collapse/content-swap state machine
//! - [`toaster`] - `Toaster` viewport layer: widgets, dismiss timers, exclusivity
//! - [`toast`] - Iced rendering of a `Toaster`
//! - [`geometry`] - Layout targets derived from measurements
//! - [`promise`] - Loading toasts settled by a future's result
//!
//! # Usage
//!
//! ```no_run
//! use iced_toaster::ui::notifications::{Store, ToastOptions, Toaster, Message};
//! use std::time::Instant;
//!
//! let store = Store::new();
//! let mut toaster = Toaster::new(store.clone());
//!
//! store.success(ToastOptions::new().title("Saved").description("photo.png"));
//!
//! // Drive time from a subscription
//! toaster.update(Message::Tick(Instant::now()));
//! ```
//!
//! # Design Considerations
//!
//! - Time only moves through `tick`, so every timer is deterministic in tests
//! - One toast expands at a time: the hovered one, else the newest
//! - Content replaced while expanded is swapped after a collapse, never in place

pub mod geometry;
mod notification;
mod options;
mod promise;
mod store;
mod timers;
pub mod toast;
mod toaster;
mod widget;

pub use notification::{Align, InstanceId, Position, ToastDuration, ToastId, ToastState};
pub use options::{
    Autopilot, AutopilotDelays, Description, Span, TextStyle, ToastButton, ToastOptions,
    ToastStyles, ToastView,
};
pub use promise::{PendingPromise, PromiseOptions, PromiseStep};
pub use store::{Store, StoreDefaults, SubscriptionId, ToastRecord};
pub use timers::Timers;
pub use toaster::{Group, Message, Offset, Toaster};
pub use widget::{
    Effect, Header, HeaderLayer, LayoutSignals, Message as ToastMessage, Phase, ToastViewModel,
    ToastWidget,
};
