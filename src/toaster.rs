// SPDX-License-Identifier: MPL-2.0
//! The user-facing toast API.
//!
//! A [`Toaster`] builds toast records from a message and options and
//! dispatches them against one [`ToastStore`]. Construction is synchronous:
//! the ID is returned right away even though dismissal happens later.
//!
//! # Usage
//!
//! ```
//! use iced_toaster::{ToastStore, Toaster};
//! use iced_toaster::toast::ToastOptions;
//!
//! let toaster = Toaster::new(ToastStore::default());
//!
//! let id = toaster.loading("Saving...", ToastOptions::new());
//! // Later, replace it in place.
//! toaster.success("Saved", ToastOptions::new().with_id(id.clone()));
//!
//! toaster.dismiss(Some(&id));
//! ```

use crate::config::defaults::DEFAULT_UNMOUNT_DELAY_MS;
use crate::config::ToasterConfig;
use crate::store::{Action, ToastStore};
use crate::toast::{Content, Toast, ToastId, ToastOptions, ToastType};
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

/// Toast API bound to one store.
#[derive(Debug, Clone)]
pub struct Toaster {
    store: ToastStore,
}

impl Toaster {
    #[must_use]
    pub fn new(store: ToastStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    /// Shows a blank toast.
    pub fn toast(&self, message: impl Into<Content>, options: ToastOptions) -> ToastId {
        self.create(ToastType::Blank, message.into(), options)
    }

    pub fn success(&self, message: impl Into<Content>, options: ToastOptions) -> ToastId {
        self.create(ToastType::Success, message.into(), options)
    }

    pub fn error(&self, message: impl Into<Content>, options: ToastOptions) -> ToastId {
        self.create(ToastType::Error, message.into(), options)
    }

    /// Shows a loading toast. Stays until replaced or dismissed unless a
    /// duration is given.
    pub fn loading(&self, message: impl Into<Content>, options: ToastOptions) -> ToastId {
        self.create(ToastType::Loading, message.into(), options)
    }

    pub fn custom(&self, message: impl Into<Content>, options: ToastOptions) -> ToastId {
        self.create(ToastType::Custom, message.into(), options)
    }

    /// Creates or updates a toast of the given type.
    ///
    /// When `options.id` names a live toast, that record is replaced in place.
    /// Its resolved settings and measured height carry over unless `options`
    /// overrides them.
    pub fn create(&self, kind: ToastType, message: Content, options: ToastOptions) -> ToastId {
        let existing = options
            .id
            .as_ref()
            .filter(|id| !id.is_empty())
            .and_then(|id| self.store.get(id));
        let config = self.store.config();
        let toast = build_toast(
            kind,
            message,
            &options,
            existing.as_ref(),
            &config,
            self.store.now(),
        );
        let id = toast.id().clone();
        self.store.dispatch(Action::Upsert(toast));
        id
    }

    /// Dismisses one toast, or every toast when `id` is `None`.
    pub fn dismiss(&self, id: Option<&ToastId>) {
        self.store.dispatch(Action::Dismiss(id.cloned()));
    }

    /// Removes one toast immediately, or every toast when `id` is `None`.
    pub fn remove(&self, id: Option<&ToastId>) {
        self.store.dispatch(Action::Remove(id.cloned()));
    }

    /// Tracks an async operation with a toast.
    ///
    /// A loading toast is shown immediately. The returned future awaits
    /// `future`, replaces the loading toast in place with a success or error
    /// toast, and yields the operation's outcome unchanged.
    pub fn promise<F, T, E>(
        &self,
        future: F,
        messages: PromiseMessages<T, E>,
        options: ToastOptions,
    ) -> impl Future<Output = Result<T, E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        let PromiseMessages {
            loading,
            success,
            error,
        } = messages;
        let id = self.loading(loading, options.clone());
        let toaster = self.clone();
        let options = options.with_id(id);

        async move {
            let outcome = future.await;
            match &outcome {
                Ok(value) => {
                    toaster.success(success.resolve(value), options);
                }
                Err(err) => {
                    toaster.error(error.resolve(err), options);
                }
            }
            outcome
        }
    }
}

/// Builds a record, layering defaults < configured options < the existing
/// record's fields < explicit options.
fn build_toast(
    kind: ToastType,
    message: Content,
    explicit: &ToastOptions,
    existing: Option<&Toast>,
    config: &ToasterConfig,
    now: Instant,
) -> Toast {
    let requested = match existing {
        Some(toast) => explicit.layered_over(&toast.as_options()),
        None => explicit.layered_over(&ToastOptions::default()),
    };
    let resolved = requested.layered_over(&config.toast_options);

    let id = requested.id.clone().unwrap_or_else(ToastId::generate);
    let duration = resolved
        .duration
        .unwrap_or_else(|| kind.default_lifetime());
    let position = resolved
        .position
        .or(config.position)
        .unwrap_or_default();
    let unmount_delay = resolved
        .unmount_delay()
        .unwrap_or(Duration::from_millis(DEFAULT_UNMOUNT_DELAY_MS));

    let mut toast = Toast::new(id, kind, message, now)
        .with_duration(duration)
        .with_position(position)
        .with_unmount_delay(unmount_delay)
        .with_style(resolved.style.clone());
    toast.icon = resolved.icon;
    toast.height = existing.and_then(Toast::height);
    toast
}

/// Message shown when a tracked operation settles.
pub enum PromiseMessage<V> {
    /// Same content whatever the value.
    Fixed(Content),
    /// Content computed from the settled value.
    FromValue(Box<dyn FnOnce(&V) -> Content + Send>),
}

impl<V> PromiseMessage<V> {
    /// Builds the message from the settled value.
    pub fn from_value<F, C>(render: F) -> Self
    where
        F: FnOnce(&V) -> C + Send + 'static,
        C: Into<Content>,
    {
        PromiseMessage::FromValue(Box::new(move |value| render(value).into()))
    }

    fn resolve(self, value: &V) -> Content {
        match self {
            PromiseMessage::Fixed(content) => content,
            PromiseMessage::FromValue(render) => render(value),
        }
    }
}

impl<V> fmt::Debug for PromiseMessage<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromiseMessage::Fixed(content) => f.debug_tuple("Fixed").field(content).finish(),
            PromiseMessage::FromValue(_) => f.write_str("FromValue(..)"),
        }
    }
}

impl<V> From<Content> for PromiseMessage<V> {
    fn from(content: Content) -> Self {
        PromiseMessage::Fixed(content)
    }
}

impl<V> From<&str> for PromiseMessage<V> {
    fn from(text: &str) -> Self {
        PromiseMessage::Fixed(text.into())
    }
}

impl<V> From<String> for PromiseMessage<V> {
    fn from(text: String) -> Self {
        PromiseMessage::Fixed(text.into())
    }
}

/// Messages for the three stages of [`Toaster::promise`].
#[derive(Debug)]
pub struct PromiseMessages<T, E> {
    pub loading: Content,
    pub success: PromiseMessage<T>,
    pub error: PromiseMessage<E>,
}

impl<T, E> PromiseMessages<T, E> {
    pub fn new(
        loading: impl Into<Content>,
        success: impl Into<PromiseMessage<T>>,
        error: impl Into<PromiseMessage<E>>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success: success.into(),
            error: error.into(),
        }
    }
}
