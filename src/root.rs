// SPDX-License-Identifier: MPL-2.0
//! Process-wide active toaster.
//!
//! Mounting a [`ToastStore`] makes it the target of the free functions
//! ([`toast()`], [`success()`], ...). Only one store can be mounted at a time;
//! calls made while nothing is mounted fail with [`Error::NoActiveToaster`].
//!
//! Code that can carry a [`Toaster`] around should prefer it over this
//! module.

use crate::error::{Error, Result};
use crate::store::ToastStore;
use crate::toast::{Content, ToastId, ToastOptions};
use crate::toaster::{PromiseMessages, Toaster};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

static ACTIVE: Mutex<Option<ToastStore>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<ToastStore>> {
    ACTIVE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps a store mounted. Unmounts it when dropped.
#[derive(Debug)]
#[must_use = "the store is unmounted as soon as the guard is dropped"]
pub struct MountGuard {
    store: ToastStore,
}

impl MountGuard {
    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    #[must_use]
    pub fn toaster(&self) -> Toaster {
        Toaster::new(self.store.clone())
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        let mut slot = slot();
        if slot.as_ref().is_some_and(|s| s.ptr_eq(&self.store)) {
            *slot = None;
            debug!("toaster root unmounted");
        }
    }
}

/// Installs `store` as the active toaster.
///
/// # Errors
///
/// Returns [`Error::AlreadyMounted`] if another store is mounted.
pub fn mount(store: ToastStore) -> Result<MountGuard> {
    let mut slot = slot();
    if slot.is_some() {
        return Err(Error::AlreadyMounted);
    }
    *slot = Some(store.clone());
    debug!("toaster root mounted");
    Ok(MountGuard { store })
}

/// Returns a handle to the mounted store.
///
/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn active() -> Result<Toaster> {
    slot()
        .as_ref()
        .map(|store| Toaster::new(store.clone()))
        .ok_or(Error::NoActiveToaster)
}

#[must_use]
pub fn is_mounted() -> bool {
    slot().is_some()
}

/// Shows a blank toast on the active toaster.
///
/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn toast(message: impl Into<Content>, options: ToastOptions) -> Result<ToastId> {
    Ok(active()?.toast(message, options))
}

/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn success(message: impl Into<Content>, options: ToastOptions) -> Result<ToastId> {
    Ok(active()?.success(message, options))
}

/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn error(message: impl Into<Content>, options: ToastOptions) -> Result<ToastId> {
    Ok(active()?.error(message, options))
}

/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn loading(message: impl Into<Content>, options: ToastOptions) -> Result<ToastId> {
    Ok(active()?.loading(message, options))
}

/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn custom(message: impl Into<Content>, options: ToastOptions) -> Result<ToastId> {
    Ok(active()?.custom(message, options))
}

/// Dismisses one toast, or all of them when `id` is `None`.
///
/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn dismiss(id: Option<&ToastId>) -> Result<()> {
    active()?.dismiss(id);
    Ok(())
}

/// Removes one toast, or all of them when `id` is `None`.
///
/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn remove(id: Option<&ToastId>) -> Result<()> {
    active()?.remove(id);
    Ok(())
}

/// Tracks `future` on the active toaster. See [`Toaster::promise`].
///
/// The loading toast is shown before this returns, so the root has to be
/// mounted at call time.
///
/// # Errors
///
/// Returns [`Error::NoActiveToaster`] when nothing is mounted.
pub fn promise<F, T, E>(
    future: F,
    messages: PromiseMessages<T, E>,
    options: ToastOptions,
) -> Result<impl Future<Output = std::result::Result<T, E>>>
where
    F: Future<Output = std::result::Result<T, E>>,
{
    Ok(active()?.promise(future, messages, options))
}
