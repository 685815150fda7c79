// SPDX-License-Identifier: MPL-2.0
//! Actions accepted by [`ToastStore::dispatch`](super::ToastStore::dispatch).

use crate::toast::{Toast, ToastId, ToastPatch};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Action {
    /// Prepends a toast (newest first). A record with the same ID is replaced.
    Add(Toast),
    /// Hides one toast, or all of them, and schedules their removal.
    Dismiss(Option<ToastId>),
    /// Deletes one toast, or clears the collection.
    Remove(Option<ToastId>),
    /// Merges a partial record and cancels any pending removal for its ID.
    Update(ToastPatch),
    /// Update if the ID exists, add otherwise.
    Upsert(Toast),
    /// Freezes every auto-dismiss countdown.
    StartPause(Instant),
    /// Resumes countdowns, crediting the paused interval to every toast.
    EndPause(Instant),
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Dismiss(_) => "dismiss",
            Action::Remove(_) => "remove",
            Action::Update(_) => "update",
            Action::Upsert(_) => "upsert",
            Action::StartPause(_) => "start-pause",
            Action::EndPause(_) => "end-pause",
        }
    }
}
