// SPDX-License-Identifier: MPL-2.0
//! Timers driving the toast lifecycle.
//!
//! # Components
//!
//! - [`Clock`] - Time source (`SystemClock`, `ManualClock`)
//! - [`TimerQueue`] - One-shot timers stored as data, cancellable by handle
//! - [`RemovalQueue`] - Deferred removal after dismissal
//! - [`DismissTimers`] - Auto-dismiss generation, re-derived on every change
//! - [`driver`] - Tokio task firing timers at their deadlines

mod clock;
mod dismiss;
pub mod driver;
mod queue;
mod removal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dismiss::DismissTimers;
pub use queue::{TimerHandle, TimerQueue};
pub use removal::RemovalQueue;

use crate::toast::ToastId;

/// What a store timer does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Auto-dismiss after the toast's lifetime elapsed.
    Dismiss(ToastId),
    /// Physical removal after the unmount delay.
    Remove(ToastId),
}
