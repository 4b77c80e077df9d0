// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Position, ToastState};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the sample toast for a state.
    Show(ToastState),
    /// Start a simulated upload behind a loading toast.
    StartUpload { fail: bool },
    UploadFinished {
        job: u64,
        result: Result<u32, String>,
    },
    Clear,
    PositionSelected(Position),
    Toaster(notifications::Message),
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Default toast position, overriding the configured one.
    pub position: Option<Position>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
