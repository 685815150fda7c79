// SPDX-License-Identifier: MPL-2.0
//! The toast store: collection, reducer, and timer ownership.
//!
//! `ToastStore` is a cheap, clonable handle. All mutation goes through
//! [`ToastStore::dispatch`] (or timers firing in [`ToastStore::fire_due`]),
//! each applied under a single lock, so no reader ever sees an action half
//! applied. After every action the auto-dismiss generation is re-derived and
//! the change revision is bumped.
//!
//! # Example
//!
//! ```
//! use iced_toaster::store::{Action, ToastStore};
//! use iced_toaster::config::ToasterConfig;
//! use iced_toaster::toast::{Toast, ToastId, ToastType};
//!
//! let store = ToastStore::new(ToasterConfig::default());
//! let toast = Toast::new(ToastId::from("hello"), ToastType::Blank, "Hi".into(), store.now());
//! store.dispatch(Action::Add(toast));
//! assert_eq!(store.toasts().len(), 1);
//! ```

mod action;
mod state;

pub use action::Action;
pub use state::State;

use crate::config::ToasterConfig;
use crate::timer::{
    Clock, DismissTimers, RemovalQueue, SystemClock, TimerEvent, TimerQueue,
};
use crate::toast::{Toast, ToastId, ToastPatch};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::sync::watch;
use tracing::debug;

/// Shared handle to one toast collection.
#[derive(Clone)]
pub struct ToastStore {
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
    changes: watch::Sender<u64>,
}

#[derive(Debug)]
struct Inner {
    state: State,
    timers: TimerQueue<TimerEvent>,
    removals: RemovalQueue,
    dismiss: DismissTimers,
    config: ToasterConfig,
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ToastStore")
            .field("toasts", &inner.state.len())
            .field("paused", &inner.state.is_paused())
            .field("armed_timers", &inner.timers.len())
            .finish()
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToasterConfig::default())
    }
}

impl ToastStore {
    /// Creates a store on the system clock.
    #[must_use]
    pub fn new(config: ToasterConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a store on a custom clock.
    #[must_use]
    pub fn with_clock(config: ToasterConfig, clock: Arc<dyn Clock>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    state: State::default(),
                    timers: TimerQueue::new(),
                    removals: RemovalQueue::new(),
                    dismiss: DismissTimers::new(),
                    config,
                }),
                clock,
                changes,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every action is applied under one guard, so a poisoned lock still
        // holds a consistent state.
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.shared.changes.send_modify(|revision| *revision += 1);
    }

    /// Current instant on the store's clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.shared.clock.now()
    }

    /// Applies an action, then re-derives the auto-dismiss timers.
    pub fn dispatch(&self, action: Action) {
        let now = self.now();
        self.lock().dispatch(action, now);
        self.notify();
    }

    /// Fires every timer due at the current instant, in deadline order.
    ///
    /// Returns the number of timers fired.
    pub fn fire_due(&self) -> usize {
        let now = self.now();
        let fired = self.lock().fire_due(now);
        if fired > 0 {
            self.notify();
        }
        fired
    }

    /// Earliest armed timer deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lock().timers.next_deadline()
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> State {
        self.lock().state.clone()
    }

    /// A copy of the current toasts, newest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().state.toasts.clone()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<Toast> {
        self.lock().state.get(id).cloned()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.lock().state.is_paused()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().state.is_empty()
    }

    /// Whether a removal is pending for `id`.
    #[must_use]
    pub fn removal_pending(&self, id: &ToastId) -> bool {
        self.lock().removals.is_pending(id)
    }

    /// Number of armed timers (auto-dismiss and removal).
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.lock().timers.len()
    }

    /// Receiver whose value is bumped after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.changes.subscribe()
    }

    /// Number of changes applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.shared.changes.borrow()
    }

    /// Records the rendered height of a toast. Skipped when unchanged.
    ///
    /// Used by hosts computing [`layout::offset`](crate::layout::offset);
    /// the built-in overlay does not measure.
    pub fn report_height(&self, id: &ToastId, height: f32) {
        let unchanged = self
            .lock()
            .state
            .get(id)
            .is_none_or(|t| t.height() == Some(height));
        if !unchanged {
            self.dispatch(Action::Update(ToastPatch::new(id.clone()).height(height)));
        }
    }

    /// Pointer entered the toast area: pause every countdown.
    pub fn pointer_entered(&self) {
        self.dispatch(Action::StartPause(self.now()));
    }

    /// Pointer left the toast area: resume every countdown.
    pub fn pointer_left(&self) {
        self.dispatch(Action::EndPause(self.now()));
    }

    #[must_use]
    pub fn config(&self) -> ToasterConfig {
        self.lock().config.clone()
    }

    /// Merges container options into the configuration.
    ///
    /// Container fields left unset keep their previous value; the default
    /// toast options are replaced as a whole.
    pub fn set_config(&self, props: ToasterConfig) {
        {
            let mut inner = self.lock();
            inner.config = inner.config.merge(props);
        }
        self.notify();
    }

    /// Whether both handles point at the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &ToastStore) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Inner {
    fn dispatch(&mut self, action: Action, now: Instant) {
        debug!(action = action.name(), "dispatch");
        self.reduce(action, now);

        let overdue = self.dismiss.rearm(&mut self.timers, &self.state, now);
        for id in overdue {
            debug!(%id, "toast overdue, dismissing");
            self.dispatch(Action::Dismiss(Some(id)), now);
        }
    }

    fn reduce(&mut self, action: Action, now: Instant) {
        match action {
            Action::Add(toast) => {
                let id = toast.id().clone();
                if self.state.contains(&id) {
                    self.removals.unschedule(&mut self.timers, &id);
                    self.state.toasts.retain(|t| t.id() != &id);
                }
                debug!(%id, kind = ?toast.kind(), "toast added");
                self.state.toasts.insert(0, toast);
            }
            Action::Dismiss(Some(id)) => {
                if let Some(toast) = self.state.get_mut(&id) {
                    toast.visible = false;
                    let delay = toast.unmount_delay();
                    self.removals.schedule(&mut self.timers, &id, delay, now);
                    debug!(%id, "toast dismissed");
                }
            }
            Action::Dismiss(None) => {
                for toast in &mut self.state.toasts {
                    toast.visible = false;
                    self.removals
                        .schedule(&mut self.timers, toast.id(), toast.unmount_delay, now);
                }
                debug!(count = self.state.len(), "all toasts dismissed");
            }
            Action::Remove(Some(id)) => {
                self.removals.unschedule(&mut self.timers, &id);
                let before = self.state.len();
                self.state.toasts.retain(|t| t.id() != &id);
                if self.state.len() < before {
                    debug!(%id, "toast removed");
                }
            }
            Action::Remove(None) => {
                self.removals.clear(&mut self.timers);
                self.state.toasts.clear();
                debug!("all toasts removed");
            }
            Action::Update(patch) => {
                self.removals.unschedule(&mut self.timers, &patch.id);
                if let Some(toast) = self.state.get_mut(&patch.id) {
                    toast.apply(patch);
                }
            }
            Action::Upsert(toast) => {
                let id = toast.id().clone();
                if !self.state.contains(&id) {
                    self.reduce(Action::Add(toast), now);
                    return;
                }
                self.removals.unschedule(&mut self.timers, &id);
                if let Some(existing) = self.state.get_mut(&id) {
                    *existing = toast;
                }
                debug!(%id, "toast updated");
            }
            Action::StartPause(at) => {
                if self.state.paused_at.is_some() {
                    return;
                }
                self.state.paused_at = Some(at);
                for toast in &mut self.state.toasts {
                    toast.paused = true;
                }
            }
            Action::EndPause(at) => {
                let Some(paused_at) = self.state.paused_at.take() else {
                    return;
                };
                let interval = at.saturating_duration_since(paused_at);
                for toast in &mut self.state.toasts {
                    toast.pause_duration += interval;
                    toast.paused = false;
                }
                debug!(?interval, "pause ended");
            }
        }
    }

    fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((handle, deadline, event)) = self.timers.pop_due(now) {
            fired += 1;
            match event {
                TimerEvent::Dismiss(id) => {
                    self.dismiss.fired(handle);
                    self.dispatch(Action::Dismiss(Some(id)), deadline);
                }
                TimerEvent::Remove(id) => {
                    self.removals.fired(&id, handle);
                    self.dispatch(Action::Remove(Some(id)), deadline);
                }
            }
        }
        fired
    }
}
