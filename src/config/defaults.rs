// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the toaster. Constants are organized by category.
//!
//! # Categories
//!
//! - **Geometry**: Pill and body dimensions
//! - **Timing**: Durations, exit and swap delays
//! - **Autopilot**: Automatic expand/collapse delays
//! - **Gestures**: Swipe-to-dismiss thresholds

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Height of the collapsed pill (and of the header row once expanded).
pub const HEIGHT: f32 = 40.0;

/// Width of the canvas a toast is laid out in.
pub const WIDTH: f32 = 350.0;

/// Default corner roundness of the pill and body.
pub const DEFAULT_ROUNDNESS: f32 = 16.0;

/// Ratio between roundness and the blur radius of the merge filter.
pub const BLUR_RATIO: f32 = 0.5;

/// Horizontal padding added around the measured header content.
pub const PILL_PADDING: f32 = 10.0;

/// Smallest expanded height, as a multiple of [`HEIGHT`].
pub const MIN_EXPAND_RATIO: f32 = 2.25;

/// Default distance between a viewport and the window edges.
pub const DEFAULT_VIEWPORT_OFFSET: f32 = 16.0;

// ==========================================================================
// Timing Defaults (milliseconds)
// ==========================================================================

/// Default time a toast stays on screen before it is dismissed.
pub const DEFAULT_DURATION_MS: u64 = 6000;

/// Delay between a dismissal and the removal of the record.
pub const DEFAULT_EXIT_DELAY_MS: u64 = 600;

/// Minimum allowed exit delay.
pub const MIN_EXIT_DELAY_MS: u64 = 0;

/// Maximum allowed exit delay.
pub const MAX_EXIT_DELAY_MS: u64 = 5000;

/// Upper bound of the collapse that precedes a staged content swap.
pub const SWAP_COLLAPSE_MS: u64 = 200;

/// Lifetime of the previous header layer during a crossfade.
pub const HEADER_EXIT_MS: u64 = 420;

// ==========================================================================
// Autopilot Defaults (milliseconds)
// ==========================================================================

/// Delay before a fresh toast expands on its own.
pub const DEFAULT_AUTO_EXPAND_MS: u64 = 150;

/// Delay before an auto-expanded toast collapses again.
pub const DEFAULT_AUTO_COLLAPSE_MS: u64 = 4000;

// ==========================================================================
// Gesture Defaults (logical pixels)
// ==========================================================================

/// Vertical drag distance past which a release dismisses the toast.
pub const SWIPE_DISMISS: f32 = 30.0;

/// Largest visual offset applied while dragging.
pub const SWIPE_MAX: f32 = 20.0;

const _: () = {
    assert!(SWIPE_MAX < SWIPE_DISMISS);
    assert!(MIN_EXPAND_RATIO > 1.0);
    assert!(HEIGHT < WIDTH);
    assert!(DEFAULT_AUTO_EXPAND_MS < DEFAULT_AUTO_COLLAPSE_MS);
    assert!(HEADER_EXIT_MS < DEFAULT_EXIT_DELAY_MS);
};
