// SPDX-License-Identifier: MPL-2.0
//! Toast identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a toast.
///
/// Either supplied by the caller or generated from a process-wide counter,
/// in which case it is the counter value as a string (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    /// Wraps a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates the next identifier from the process-wide counter.
    #[must_use]
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let next = COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
        Self(next.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty identifiers are treated as "not supplied".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = ToastId::generate();
        let b = ToastId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_increase() {
        let a: u64 = ToastId::generate().as_str().parse().unwrap();
        let b: u64 = ToastId::generate().as_str().parse().unwrap();
        assert!(b > a);
    }

    #[test]
    fn display_matches_inner_string() {
        assert_eq!(ToastId::from("t1").to_string(), "t1");
    }

    #[test]
    fn empty_id_is_detected() {
        assert!(ToastId::new("").is_empty());
        assert!(!ToastId::new("x").is_empty());
    }
}
