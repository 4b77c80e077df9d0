// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`notifications`] - Toast notification system

pub mod design_tokens;
pub mod notifications;
