// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification system for the Iced GUI framework.
//!
//! Toasts start as a compact pill and expand to show a description and an
//! optional action button. A [`ui::notifications::Store`] holds the ordered
//! toasts; a [`ui::notifications::Toaster`] turns them into widgets, drives
//! their timers and renders them per screen position.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
