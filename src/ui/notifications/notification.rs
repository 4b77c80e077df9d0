// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines identifiers, the state tag, screen positions and
//! durations shared by the store, the widget state machine and the renderer.

use crate::config::DEFAULT_DURATION_MS;
use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Ids derived from a caller key carry this bit, counter ids never do.
const KEYED_BIT: u64 = 1 << 63;

/// Stable identifier of a notification, kept across content replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed) & !KEYED_BIT)
    }

    /// Derives an ID from a caller-chosen key.
    ///
    /// The same key always yields the same ID, so "the upload toast" can be
    /// replaced without keeping the ID returned by the first call around.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        // FNV-1a
        let hash = key.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });
        Self(hash | KEYED_BIT)
    }

    /// Returns whether this ID was derived from a key.
    #[must_use]
    pub fn is_keyed(self) -> bool {
        self.0 & KEYED_BIT != 0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Version of the content shown under a [`ToastId`].
///
/// Every create, replacement and update yields a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// State tag: drives the accent color, the badge glyph and expandability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastState {
    #[default]
    Success,
    /// Work in progress. Never expands.
    Loading,
    Error,
    Warning,
    Info,
    /// Carries a call-to-action button.
    Action,
}

impl ToastState {
    /// Returns the accent color for this state.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastState::Success => palette::SUCCESS_500,
            ToastState::Loading => palette::LOADING_500,
            ToastState::Error => palette::ERROR_500,
            ToastState::Warning => palette::WARNING_500,
            ToastState::Info => palette::INFO_500,
            ToastState::Action => palette::ACTION_500,
        }
    }

    /// Returns the default badge glyph.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ToastState::Success => "✓",
            ToastState::Loading => "…",
            ToastState::Error => "✕",
            ToastState::Warning => "!",
            ToastState::Info => "i",
            ToastState::Action => "→",
        }
    }

    /// Returns the title shown when none was given.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            ToastState::Success => "Success",
            ToastState::Loading => "Loading",
            ToastState::Error => "Error",
            ToastState::Warning => "Warning",
            ToastState::Info => "Info",
            ToastState::Action => "Action",
        }
    }

    /// Loading toasts stay a pill.
    #[must_use]
    pub fn is_expandable(self) -> bool {
        self != ToastState::Loading
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastState::Success => "success",
            ToastState::Loading => "loading",
            ToastState::Error => "error",
            ToastState::Warning => "warning",
            ToastState::Info => "info",
            ToastState::Action => "action",
        }
    }
}

impl fmt::Display for ToastState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment of the pill inside its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Screen corner or edge a viewport is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    #[must_use]
    pub fn align(self) -> Align {
        match self {
            Position::TopLeft | Position::BottomLeft => Align::Left,
            Position::TopCenter | Position::BottomCenter => Align::Center,
            Position::TopRight | Position::BottomRight => Align::Right,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidPosition(s.to_string()))
    }
}

/// How long a toast stays before it is dismissed automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    Millis(u64),
    /// Stays until dismissed.
    Persistent,
}

impl ToastDuration {
    /// Returns the finite duration, if any. `Millis(0)` counts as persistent.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            ToastDuration::Millis(0) | ToastDuration::Persistent => None,
            ToastDuration::Millis(ms) => Some(Duration::from_millis(ms)),
        }
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        ToastDuration::Millis(DEFAULT_DURATION_MS)
    }
}

impl From<Option<u64>> for ToastDuration {
    fn from(value: Option<u64>) -> Self {
        value.map_or(ToastDuration::Persistent, ToastDuration::Millis)
    }
}
