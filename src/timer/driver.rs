// SPDX-License-Identifier: MPL-2.0
//! Async driver that fires store timers on time.
//!
//! Hosts with their own periodic tick can call [`ToastStore::fire_due`]
//! instead. The driver sleeps until the earliest armed deadline, waking early
//! whenever the store changes, since a dispatch may have armed an earlier
//! timer or cancelled the one being waited on.
//!
//! Deadlines are compared against the tokio clock, so the driver is meant for
//! stores running on [`SystemClock`](super::SystemClock).

use crate::store::ToastStore;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::debug;

/// Fires due timers until the store's change channel closes.
///
/// The task holds a clone of the store, so in practice it runs until aborted.
pub async fn run(store: ToastStore) {
    let mut changes = store.subscribe();
    loop {
        store.fire_due();

        tokio::select! {
            () = sleep_until(store.next_deadline()) => {}
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
    debug!("timer driver stopped");
}

/// Spawns [`run`] on the current tokio runtime.
pub fn spawn(store: ToastStore) -> JoinHandle<()> {
    tokio::spawn(run(store))
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToasterConfig;
    use crate::toast::{ToastOptions, ToastType};
    use crate::Toaster;
    use std::time::Duration;

    #[tokio::test]
    async fn driver_dismisses_and_removes_on_time() {
        let store = ToastStore::new(ToasterConfig::default());
        let toaster = Toaster::new(store.clone());
        let driver = spawn(store.clone());

        let id = toaster.create(
            ToastType::Blank,
            "short".into(),
            ToastOptions::new()
                .with_duration(Duration::from_millis(30))
                .with_unmount_delay(Duration::from_millis(20)),
        );
        assert!(store.get(&id).is_some_and(|t| t.visible()));

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(store.get(&id).is_none());

        driver.abort();
    }

    #[tokio::test]
    async fn driver_leaves_infinite_toasts_alone() {
        let store = ToastStore::new(ToasterConfig::default());
        let toaster = Toaster::new(store.clone());
        let driver = spawn(store.clone());

        let id = toaster.loading("working", ToastOptions::new());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(store.get(&id).is_some_and(|t| t.visible()));

        driver.abort();
    }
}
