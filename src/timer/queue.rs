// SPDX-License-Identifier: MPL-2.0
//! One-shot timers stored as data.
//!
//! A timer is a deadline plus an event. Timers only fire when the owner pops
//! them, so cancelling a handle removes the entry and the event can never be
//! delivered afterwards.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle to an armed timer. Never reused within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Deadline-ordered set of one-shot timers.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_handle: u64,
    /// Ordered by deadline, then by arming order.
    armed: BTreeMap<(Instant, TimerHandle), E>,
    deadlines: HashMap<TimerHandle, Instant>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            armed: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer that fires `event` at `deadline`.
    pub fn arm(&mut self, deadline: Instant, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.armed.insert((deadline, handle), event);
        self.deadlines.insert(handle, deadline);
        handle
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.armed.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerHandle, Instant, E)> {
        let (&(deadline, handle), _) = self.armed.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&handle);
        let event = self.armed.remove(&(deadline, handle))?;
        Some((handle, deadline, event))
    }

    /// Earliest armed deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.first_key_value().map(|(&(deadline, _), _)| deadline)
    }

    #[must_use]
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn pops_in_deadline_order() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();
        queue.arm(at(base, 300), "late");
        queue.arm(at(base, 100), "early");
        queue.arm(at(base, 200), "middle");

        let now = at(base, 1000);
        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(now))
            .map(|(_, _, e)| e)
            .collect();
        assert_eq!(order, vec!["early", "middle", "late"]);
    }

    #[test]
    fn equal_deadlines_fire_in_arming_order() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();
        queue.arm(at(base, 100), 1);
        queue.arm(at(base, 100), 2);

        assert_eq!(queue.pop_due(at(base, 100)).map(|(_, _, e)| e), Some(1));
        assert_eq!(queue.pop_due(at(base, 100)).map(|(_, _, e)| e), Some(2));
    }

    #[test]
    fn nothing_pops_before_deadline() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();
        queue.arm(at(base, 100), ());
        assert!(queue.pop_due(at(base, 99)).is_none());
        assert!(queue.pop_due(at(base, 100)).is_some());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.arm(at(base, 10), ());

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert!(queue.pop_due(at(base, 1000)).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn fired_timer_cannot_be_cancelled() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.arm(at(base, 10), ());
        queue.pop_due(at(base, 10));

        assert!(!queue.is_armed(handle));
        assert!(!queue.cancel(handle));
    }

    #[test]
    fn next_deadline_tracks_earliest() {
        let base = Instant::now();
        let mut queue = TimerQueue::new();
        assert!(queue.next_deadline().is_none());

        let late = queue.arm(at(base, 50), ());
        let early = queue.arm(at(base, 20), ());
        assert_eq!(queue.next_deadline(), Some(at(base, 20)));

        queue.cancel(early);
        assert_eq!(queue.next_deadline(), Some(at(base, 50)));
        queue.cancel(late);
        assert_eq!(queue.len(), 0);
    }
}
