// SPDX-License-Identifier: MPL-2.0
//! Snapshot of the toast collection.

use crate::toast::{Position, Toast, ToastId};
use std::time::Instant;

/// The toast collection (newest first) and the global pause timestamp.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) paused_at: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// When the current global pause started.
    #[must_use]
    pub fn paused_at(&self) -> Option<Instant> {
        self.paused_at
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Toasts anchored at `position`, newest first.
    pub fn at(&self, position: Position) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.position() == position)
    }

    /// Toasts not yet dismissed.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|t| t.visible())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
