// SPDX-License-Identifier: MPL-2.0
//! Toast options and their resolution into a renderable payload.
//!
//! Every field of [`ToastOptions`] is optional. Options are layered with
//! [`ToastOptions::merge`]: later layers win field by field, except for
//! [`ToastStyles`], whose own fields are merged individually.

use super::notification::{Position, ToastDuration, ToastId, ToastState};
use crate::config::DEFAULT_ROUNDNESS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A run of description text with optional emphasis.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub color: Option<Color>,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
            color: None,
        }
    }

    #[must_use]
    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Body text of an expanded toast.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Plain(String),
    Rich(Vec<Span>),
}

impl Description {
    /// Returns the description without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Description::Plain(text) => text.clone(),
            Description::Rich(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Plain(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Plain(text)
    }
}

impl From<Vec<Span>> for Description {
    fn from(spans: Vec<Span>) -> Self {
        Description::Rich(spans)
    }
}

/// Style hook for a single text element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub size: Option<f32>,
}

impl TextStyle {
    fn merge(self, over: TextStyle) -> TextStyle {
        TextStyle {
            color: over.color.or(self.color),
            size: over.size.or(self.size),
        }
    }
}

/// Per-field style hooks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToastStyles {
    pub title: Option<TextStyle>,
    pub description: Option<TextStyle>,
    pub badge: Option<TextStyle>,
    pub button: Option<TextStyle>,
}

impl ToastStyles {
    /// Merges two style sets; `over` wins per field, and per property
    /// inside a field.
    #[must_use]
    pub fn merge(self, over: ToastStyles) -> ToastStyles {
        fn field(base: Option<TextStyle>, over: Option<TextStyle>) -> Option<TextStyle> {
            match (base, over) {
                (Some(base), Some(over)) => Some(base.merge(over)),
                (base, over) => over.or(base),
            }
        }

        ToastStyles {
            title: field(self.title, over.title),
            description: field(self.description, over.description),
            badge: field(self.badge, over.badge),
            button: field(self.button, over.button),
        }
    }
}

/// Resolved autopilot timing, relative to the moment content is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutopilotDelays {
    pub expand: Duration,
    pub collapse: Duration,
}

/// Automatic expand/collapse behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autopilot {
    /// Expand and collapse on their own; `None` fields use store defaults.
    On {
        expand: Option<Duration>,
        collapse: Option<Duration>,
    },
    #[default]
    Inherit,
    Off,
}

impl Autopilot {
    /// Resolves the delays for a toast shown for `duration`.
    ///
    /// Persistent toasts have no autopilot. Delays never exceed the duration.
    #[must_use]
    pub fn resolve(
        self,
        duration: ToastDuration,
        defaults: AutopilotDelays,
    ) -> Option<AutopilotDelays> {
        let total = duration.as_duration()?;
        let (expand, collapse) = match self {
            Autopilot::Off => return None,
            Autopilot::Inherit => (defaults.expand, defaults.collapse),
            Autopilot::On { expand, collapse } => (
                expand.unwrap_or(defaults.expand),
                collapse.unwrap_or(defaults.collapse),
            ),
        };
        Some(AutopilotDelays {
            expand: expand.min(total),
            collapse: collapse.min(total),
        })
    }
}

/// Call-to-action button shown in the body.
#[derive(Clone)]
pub struct ToastButton {
    pub title: String,
    pub on_click: Rc<dyn Fn()>,
}

impl ToastButton {
    pub fn new(title: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            on_click: Rc::new(on_click),
        }
    }

    pub(crate) fn press(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for ToastButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastButton")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ToastButton {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && Rc::ptr_eq(&self.on_click, &other.on_click)
    }
}

/// Options accepted by every store operation.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub id: Option<ToastId>,
    pub state: Option<ToastState>,
    pub title: Option<String>,
    pub description: Option<Description>,
    pub position: Option<Position>,
    pub duration: Option<ToastDuration>,
    pub icon: Option<String>,
    pub styles: ToastStyles,
    pub fill: Option<Color>,
    pub roundness: Option<f32>,
    pub autopilot: Option<Autopilot>,
    pub button: Option<ToastButton>,
    pub dismiss_on_tap: Option<bool>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: ToastId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn state(mut self, state: ToastState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<Description>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for a finite duration in milliseconds.
    #[must_use]
    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(ToastDuration::Millis(ms))
    }

    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(ToastDuration::Persistent)
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: ToastStyles) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn roundness(mut self, roundness: f32) -> Self {
        self.roundness = Some(roundness);
        self
    }

    #[must_use]
    pub fn autopilot(mut self, autopilot: Autopilot) -> Self {
        self.autopilot = Some(autopilot);
        self
    }

    #[must_use]
    pub fn autopilot_off(self) -> Self {
        self.autopilot(Autopilot::Off)
    }

    #[must_use]
    pub fn button(mut self, title: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        self.button = Some(ToastButton::new(title, on_click));
        self
    }

    #[must_use]
    pub fn dismiss_on_tap(mut self, enabled: bool) -> Self {
        self.dismiss_on_tap = Some(enabled);
        self
    }

    /// Layers `over` on top of `self`.
    #[must_use]
    pub fn merge(&self, over: &ToastOptions) -> ToastOptions {
        ToastOptions {
            id: over.id.or(self.id),
            state: over.state.or(self.state),
            title: over.title.clone().or_else(|| self.title.clone()),
            description: over
                .description
                .clone()
                .or_else(|| self.description.clone()),
            position: over.position.or(self.position),
            duration: over.duration.or(self.duration),
            icon: over.icon.clone().or_else(|| self.icon.clone()),
            styles: self.styles.merge(over.styles),
            fill: over.fill.or(self.fill),
            roundness: over.roundness.or(self.roundness),
            autopilot: over.autopilot.or(self.autopilot),
            button: over.button.clone().or_else(|| self.button.clone()),
            dismiss_on_tap: over.dismiss_on_tap.or(self.dismiss_on_tap),
        }
    }

    /// Resolves the renderable payload. Missing fields fall back to the
    /// state's defaults.
    #[must_use]
    pub fn to_view(&self) -> ToastView {
        let state = self.state.unwrap_or_default();
        ToastView {
            state,
            title: self
                .title
                .clone()
                .unwrap_or_else(|| state.default_title().to_string()),
            description: self.description.clone(),
            icon: self
                .icon
                .clone()
                .unwrap_or_else(|| state.icon().to_string()),
            styles: self.styles,
            fill: self.fill.unwrap_or(palette::FILL),
            roundness: self.roundness.unwrap_or(DEFAULT_ROUNDNESS).max(0.0),
            button: self.button.clone(),
            dismiss_on_tap: self.dismiss_on_tap.unwrap_or(false),
        }
    }
}

/// The payload a toast renders.
///
/// Widgets keep their own copy so a content change can be staged while the
/// previous payload is still on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub state: ToastState,
    pub title: String,
    pub description: Option<Description>,
    pub icon: String,
    pub styles: ToastStyles,
    pub fill: Color,
    pub roundness: f32,
    pub button: Option<ToastButton>,
    pub dismiss_on_tap: bool,
}

impl ToastView {
    /// Whether the body has anything to show.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.description.is_some() || self.button.is_some()
    }
}
