// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timers.
//!
//! The scheduler owns exactly one generation of dismiss timers. Each
//! re-derivation cancels the whole previous generation before arming the
//! next, so a timer computed from stale state can never fire.

use super::{TimerEvent, TimerHandle, TimerQueue};
use crate::store::State;
use crate::toast::ToastId;
use std::time::Instant;
use tracing::trace;

/// The current generation of auto-dismiss timers.
#[derive(Debug, Default)]
pub struct DismissTimers {
    generation: Vec<TimerHandle>,
}

impl DismissTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the armed generation with one derived from `state` at `now`.
    ///
    /// While the state is paused nothing is armed. Returns the visible toasts
    /// whose time already ran out; the caller dismisses them right away.
    pub fn rearm(
        &mut self,
        timers: &mut TimerQueue<TimerEvent>,
        state: &State,
        now: Instant,
    ) -> Vec<ToastId> {
        for handle in self.generation.drain(..) {
            timers.cancel(handle);
        }

        if state.is_paused() {
            trace!("paused, dismiss timers frozen");
            return Vec::new();
        }

        let mut overdue = Vec::new();
        for toast in state.toasts() {
            let Some(remaining) = toast.remaining(now) else {
                continue;
            };

            if remaining.is_zero() {
                if toast.visible() {
                    overdue.push(toast.id().clone());
                }
                continue;
            }

            // A deadline past the clock's range never comes.
            let Some(deadline) = now.checked_add(remaining) else {
                continue;
            };
            let handle = timers.arm(deadline, TimerEvent::Dismiss(toast.id().clone()));
            self.generation.push(handle);
        }

        trace!(armed = self.generation.len(), overdue = overdue.len(), "dismiss timers rearmed");
        overdue
    }

    /// Forgets a handle of this generation that just fired.
    pub fn fired(&mut self, handle: TimerHandle) {
        self.generation.retain(|h| *h != handle);
    }

    /// Number of armed timers in the current generation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generation.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generation.is_empty()
    }
}
