// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all toaster constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Durations**: Per-type auto-dismiss lifetimes
//! - **Unmount**: Grace period between dismissal and removal
//! - **Layout**: Spacing between stacked toasts
//! - **Tick**: Polling interval for hosts without a timer driver

// ==========================================================================
// Duration Defaults (milliseconds)
// ==========================================================================

/// Auto-dismiss delay for blank toasts.
pub const DEFAULT_BLANK_DURATION_MS: u64 = 4000;

/// Auto-dismiss delay for error toasts.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 4000;

/// Auto-dismiss delay for success toasts.
pub const DEFAULT_SUCCESS_DURATION_MS: u64 = 2000;

/// Auto-dismiss delay for custom toasts.
pub const DEFAULT_CUSTOM_DURATION_MS: u64 = 4000;

// Loading toasts never auto-dismiss.

// ==========================================================================
// Unmount Defaults
// ==========================================================================

/// Time a dismissed toast stays in the collection so its exit can play.
pub const DEFAULT_UNMOUNT_DELAY_MS: u64 = 500;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Spacing in pixels between stacked toasts.
pub const DEFAULT_GUTTER: f32 = 8.0;

/// Padding in pixels between the screen edge and the toast stack.
pub const DEFAULT_CONTAINER_PADDING: f32 = 16.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the UI tick subscription.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SUCCESS_DURATION_MS > 0);
    assert!(DEFAULT_BLANK_DURATION_MS >= DEFAULT_SUCCESS_DURATION_MS);
    assert!(DEFAULT_ERROR_DURATION_MS >= DEFAULT_SUCCESS_DURATION_MS);
    assert!(DEFAULT_CUSTOM_DURATION_MS > 0);

    // Exit animation has to finish well before a short toast would expire
    assert!(DEFAULT_UNMOUNT_DELAY_MS < DEFAULT_SUCCESS_DURATION_MS);

    assert!(DEFAULT_GUTTER >= 0.0);
    assert!(DEFAULT_CONTAINER_PADDING >= 0.0);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < DEFAULT_UNMOUNT_DELAY_MS);
};
