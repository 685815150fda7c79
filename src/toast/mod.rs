// SPDX-License-Identifier: MPL-2.0
//! Toast records and the options used to build them.
//!
//! # Components
//!
//! - [`ToastId`] - Caller-supplied or generated identifier
//! - [`Toast`] - One notification and its lifecycle fields
//! - [`Content`] - Static or dynamically resolved message
//! - [`ToastOptions`] - Partial, layerable per-call options

mod content;
mod id;
mod options;
mod record;

pub use content::Content;
pub use id::ToastId;
pub use options::{Lifetime, Position, Rgba, ToastOptions, ToastStyle};
pub use record::{Toast, ToastPatch, ToastType};
