// SPDX-License-Identifier: MPL-2.0
//! Toast message content.
//!
//! A message is either fixed text or a function of the toast it belongs to.
//! Dynamic content is resolved every time it is read, so it always reflects
//! the record as it is at that moment (for example its `visible` flag).

use super::Toast;
use std::fmt;
use std::sync::Arc;

type Render = dyn Fn(&Toast) -> String + Send + Sync;

/// The message of a toast.
#[derive(Clone)]
pub enum Content {
    /// Fixed text.
    Text(String),
    /// Text computed from the current toast snapshot.
    Dynamic(Arc<Render>),
}

impl Content {
    /// Creates content computed from the toast at render time.
    pub fn dynamic<F>(render: F) -> Self
    where
        F: Fn(&Toast) -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(render))
    }

    /// Resolves the content against the given toast. Never cached.
    #[must_use]
    pub fn resolve(&self, toast: &Toast) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Dynamic(render) => render(toast),
        }
    }

    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Content::Dynamic(_))
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ToastId, ToastType};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    fn toast(message: Content) -> Toast {
        Toast::new(ToastId::from("t"), ToastType::Blank, message, Instant::now())
    }

    #[test]
    fn text_resolves_to_itself() {
        let t = toast("hello".into());
        assert_eq!(t.message().resolve(&t), "hello");
    }

    #[test]
    fn dynamic_content_sees_current_visibility() {
        let mut t = toast(Content::dynamic(|t| {
            if t.visible() {
                "shown".to_string()
            } else {
                "leaving".to_string()
            }
        }));
        assert_eq!(t.message().resolve(&t), "shown");

        t.visible = false;
        assert_eq!(t.message().resolve(&t), "leaving");
    }

    #[test]
    fn dynamic_content_is_not_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let t = toast(Content::dynamic(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            String::new()
        }));

        t.message().resolve(&t);
        t.message().resolve(&t);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_hides_closure() {
        let content = Content::dynamic(|_| String::new());
        assert_eq!(format!("{content:?}"), "Dynamic(..)");
    }
}
