// SPDX-License-Identifier: MPL-2.0
//! Deferred removal of dismissed toasts.
//!
//! A dismissed toast stays in the collection for its unmount delay so the
//! renderer can play its exit. The first scheduling for an ID wins; later
//! requests are ignored until the removal fires or is cancelled.

use super::{TimerEvent, TimerHandle, TimerQueue};
use crate::toast::ToastId;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

/// Pending removals keyed by toast ID.
#[derive(Debug, Default)]
pub struct RemovalQueue {
    pending: HashMap<ToastId, TimerHandle>,
}

impl RemovalQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a removal for `id` after `delay`. No-op if one is already pending.
    ///
    /// Returns `true` if a new timer was armed. A delay reaching past the
    /// clock's range arms nothing: the toast stays until removed by hand.
    pub fn schedule(
        &mut self,
        timers: &mut TimerQueue<TimerEvent>,
        id: &ToastId,
        delay: Duration,
        now: Instant,
    ) -> bool {
        if self.pending.contains_key(id) {
            return false;
        }
        let Some(deadline) = now.checked_add(delay) else {
            trace!(%id, ?delay, "removal delay out of range, not scheduled");
            return false;
        };
        let handle = timers.arm(deadline, TimerEvent::Remove(id.clone()));
        trace!(%id, ?delay, "removal scheduled");
        self.pending.insert(id.clone(), handle);
        true
    }

    /// Cancels the pending removal for `id`, if any.
    pub fn unschedule(&mut self, timers: &mut TimerQueue<TimerEvent>, id: &ToastId) -> bool {
        match self.pending.remove(id) {
            Some(handle) => {
                timers.cancel(handle);
                trace!(%id, "removal cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancels every pending removal.
    pub fn clear(&mut self, timers: &mut TimerQueue<TimerEvent>) {
        for (_, handle) in self.pending.drain() {
            timers.cancel(handle);
        }
    }

    /// Forgets the entry of a removal timer that just fired.
    pub fn fired(&mut self, id: &ToastId, handle: TimerHandle) {
        if self.pending.get(id) == Some(&handle) {
            self.pending.remove(id);
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: &ToastId) -> bool {
        self.pending.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_scheduling_wins() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        let mut removals = RemovalQueue::new();
        let id = ToastId::from("a");

        assert!(removals.schedule(&mut timers, &id, Duration::from_millis(500), now));
        assert!(!removals.schedule(&mut timers, &id, Duration::from_millis(10), now));

        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(now + Duration::from_millis(500)));
    }

    #[test]
    fn unschedule_cancels_timer() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        let mut removals = RemovalQueue::new();
        let id = ToastId::from("a");

        removals.schedule(&mut timers, &id, Duration::from_millis(500), now);
        assert!(removals.unschedule(&mut timers, &id));
        assert!(!removals.is_pending(&id));
        assert!(timers.pop_due(now + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn unschedule_unknown_is_noop() {
        let mut timers = TimerQueue::new();
        let mut removals = RemovalQueue::new();
        assert!(!removals.unschedule(&mut timers, &ToastId::from("ghost")));
    }

    #[test]
    fn fired_forgets_entry_and_allows_rescheduling() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        let mut removals = RemovalQueue::new();
        let id = ToastId::from("a");

        removals.schedule(&mut timers, &id, Duration::ZERO, now);
        let (handle, _, event) = timers.pop_due(now).unwrap();
        assert_eq!(event, TimerEvent::Remove(id.clone()));

        removals.fired(&id, handle);
        assert!(removals.is_empty());
        assert!(removals.schedule(&mut timers, &id, Duration::ZERO, now));
    }

    #[test]
    fn clear_cancels_everything() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        let mut removals = RemovalQueue::new();
        for name in ["a", "b", "c"] {
            removals.schedule(&mut timers, &ToastId::from(name), Duration::ZERO, now);
        }

        removals.clear(&mut timers);
        assert!(removals.is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn out_of_range_delay_arms_nothing() {
        let now = Instant::now();
        let mut timers = TimerQueue::new();
        let mut removals = RemovalQueue::new();
        let id = ToastId::from("a");

        assert!(!removals.schedule(&mut timers, &id, Duration::MAX, now));
        assert!(!removals.is_pending(&id));
        assert!(timers.is_empty());
    }
}
