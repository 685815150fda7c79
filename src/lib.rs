// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` shows toast notifications in Iced applications.
//!
//! Toasts live in a [`ToastStore`]: a reducer over typed actions that owns
//! two kinds of timers, auto-dismiss and deferred removal. Hovering the
//! toasts pauses every countdown. The [`ui`] module renders the store as an
//! overlay; everything else is toolkit-agnostic.
//!
//! ```
//! use iced_toaster::{ToastStore, Toaster};
//! use iced_toaster::toast::ToastOptions;
//!
//! let toaster = Toaster::new(ToastStore::default());
//! let id = toaster.success("Saved", ToastOptions::new());
//! assert!(toaster.store().get(&id).is_some());
//! ```
//!
//! Applications with a single window usually [`root::mount`] their store
//! once and call the free functions ([`toast()`], [`success()`], ...) from
//! anywhere.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod config;
pub mod error;
pub mod layout;
pub mod root;
pub mod store;
pub mod timer;
pub mod toast;
pub mod toaster;
pub mod ui;

pub use error::{Error, Result};
pub use root::{custom, dismiss, error, loading, mount, promise, remove, success, toast};
pub use store::ToastStore;
pub use toaster::Toaster;
