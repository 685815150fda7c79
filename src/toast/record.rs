// SPDX-License-Identifier: MPL-2.0
//! The toast record and the partial updates applied to it.

use super::{Content, Lifetime, Position, ToastId, ToastOptions, ToastStyle};
use crate::config::defaults::{
    DEFAULT_BLANK_DURATION_MS, DEFAULT_CUSTOM_DURATION_MS, DEFAULT_ERROR_DURATION_MS,
    DEFAULT_SUCCESS_DURATION_MS, DEFAULT_UNMOUNT_DELAY_MS,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Kind of toast. Determines the default lifetime and the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastType {
    /// Plain message without icon.
    #[default]
    Blank,
    Success,
    Error,
    /// Operation in progress; stays until replaced or dismissed.
    Loading,
    /// Rendered from its content only, without the default card chrome.
    Custom,
}

impl ToastType {
    /// Returns the lifetime used when neither the call nor the
    /// configuration asks for one.
    #[must_use]
    pub fn default_lifetime(self) -> Lifetime {
        match self {
            ToastType::Blank => Lifetime::from_millis(DEFAULT_BLANK_DURATION_MS),
            ToastType::Success => Lifetime::from_millis(DEFAULT_SUCCESS_DURATION_MS),
            ToastType::Error => Lifetime::from_millis(DEFAULT_ERROR_DURATION_MS),
            ToastType::Loading => Lifetime::Infinite,
            ToastType::Custom => Lifetime::from_millis(DEFAULT_CUSTOM_DURATION_MS),
        }
    }
}

/// A single notification.
///
/// Fields are read through accessors; the store is the only writer. In
/// particular `pause_duration` only grows when a global pause ends.
#[derive(Debug, Clone)]
pub struct Toast {
    pub(crate) id: ToastId,
    pub(crate) kind: ToastType,
    pub(crate) message: Content,
    pub(crate) visible: bool,
    pub(crate) paused: bool,
    pub(crate) created_at: Instant,
    pub(crate) pause_duration: Duration,
    pub(crate) duration: Lifetime,
    pub(crate) unmount_delay: Duration,
    pub(crate) position: Position,
    pub(crate) height: Option<f32>,
    pub(crate) style: ToastStyle,
    pub(crate) icon: Option<String>,
}

impl Toast {
    /// Creates a visible toast with the defaults of its type.
    pub fn new(id: ToastId, kind: ToastType, message: Content, created_at: Instant) -> Self {
        Self {
            id,
            kind,
            message,
            visible: true,
            paused: false,
            created_at,
            pause_duration: Duration::ZERO,
            duration: kind.default_lifetime(),
            unmount_delay: Duration::from_millis(DEFAULT_UNMOUNT_DELAY_MS),
            position: Position::default(),
            height: None,
            style: ToastStyle::default(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<Lifetime>) -> Self {
        self.duration = duration.into();
        self
    }

    #[must_use]
    pub fn with_unmount_delay(mut self, delay: Duration) -> Self {
        self.unmount_delay = delay;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastType {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &Content {
        &self.message
    }

    /// Resolves the message against the current state of this toast.
    #[must_use]
    pub fn resolved_message(&self) -> String {
        self.message.resolve(self)
    }

    /// `false` once dismissed, until the record is removed.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Total time spent paused since creation.
    #[must_use]
    pub fn pause_duration(&self) -> Duration {
        self.pause_duration
    }

    #[must_use]
    pub fn duration(&self) -> Lifetime {
        self.duration
    }

    #[must_use]
    pub fn unmount_delay(&self) -> Duration {
        self.unmount_delay
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Measured rendered height, once the renderer reported it.
    #[must_use]
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    #[must_use]
    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// This record's resolved settings as an option layer. Calls reusing the
    /// ID are merged over it.
    #[must_use]
    pub fn as_options(&self) -> ToastOptions {
        let options = ToastOptions::new()
            .with_id(self.id.clone())
            .with_duration(self.duration)
            .with_position(self.position)
            .with_unmount_delay(self.unmount_delay)
            .with_style(self.style.clone());
        match &self.icon {
            Some(icon) => options.with_icon(icon.clone()),
            None => options,
        }
    }

    /// Time left before auto-dismiss at `now`, pauses excluded.
    ///
    /// `None` for infinite toasts. Elapsed toasts report `Duration::ZERO`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let budget = self
            .duration
            .as_duration()?
            .saturating_add(self.pause_duration);
        let age = now.saturating_duration_since(self.created_at);
        Some(budget.saturating_sub(age))
    }

    /// Merges the fields set in `patch` into this record.
    pub(crate) fn apply(&mut self, patch: ToastPatch) {
        let ToastPatch {
            id: _,
            kind,
            message,
            visible,
            duration,
            unmount_delay,
            position,
            height,
            style,
            icon,
        } = patch;

        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(message) = message {
            self.message = message;
        }
        if let Some(visible) = visible {
            self.visible = visible;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(delay) = unmount_delay {
            self.unmount_delay = delay;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(height) = height {
            self.height = Some(height);
        }
        if let Some(style) = style {
            self.style = style;
        }
        if let Some(icon) = icon {
            self.icon = Some(icon);
        }
    }
}

/// A partial toast keyed by ID, merged into the existing record by UPDATE.
#[derive(Debug, Clone)]
pub struct ToastPatch {
    pub id: ToastId,
    pub kind: Option<ToastType>,
    pub message: Option<Content>,
    pub visible: Option<bool>,
    pub duration: Option<Lifetime>,
    pub unmount_delay: Option<Duration>,
    pub position: Option<Position>,
    pub height: Option<f32>,
    pub style: Option<ToastStyle>,
    pub icon: Option<String>,
}

impl ToastPatch {
    /// An empty patch for the given toast.
    pub fn new(id: impl Into<ToastId>) -> Self {
        Self {
            id: id.into(),
            kind: None,
            message: None,
            visible: None,
            duration: None,
            unmount_delay: None,
            position: None,
            height: None,
            style: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<Content>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<Lifetime>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(kind: ToastType) -> Toast {
        Toast::new(ToastId::from("t1"), kind, "hi".into(), Instant::now())
    }

    #[test]
    fn new_toast_is_visible_and_unpaused() {
        let t = toast(ToastType::Blank);
        assert!(t.visible());
        assert!(!t.paused());
        assert_eq!(t.pause_duration(), Duration::ZERO);
        assert!(t.height().is_none());
    }

    #[test]
    fn loading_toasts_are_infinite_by_default() {
        assert!(toast(ToastType::Loading).duration().is_infinite());
        assert!(!toast(ToastType::Success).duration().is_infinite());
    }

    #[test]
    fn success_is_shorter_than_error() {
        let success = ToastType::Success.default_lifetime().as_duration().unwrap();
        let error = ToastType::Error.default_lifetime().as_duration().unwrap();
        assert!(success < error);
    }

    #[test]
    fn remaining_counts_pause_time() {
        let start = Instant::now();
        let mut t = Toast::new(ToastId::from("t"), ToastType::Blank, "x".into(), start)
            .with_duration(Duration::from_millis(1000));
        t.pause_duration = Duration::from_millis(300);

        let now = start + Duration::from_millis(900);
        assert_eq!(t.remaining(now), Some(Duration::from_millis(400)));

        let later = start + Duration::from_millis(5000);
        assert_eq!(t.remaining(later), Some(Duration::ZERO));
    }

    #[test]
    fn remaining_is_none_for_infinite() {
        let t = toast(ToastType::Loading);
        assert_eq!(t.remaining(Instant::now()), None);
    }

    #[test]
    fn as_options_carries_resolved_settings() {
        let t = toast(ToastType::Loading)
            .with_position(Position::BottomLeft)
            .with_icon("*");
        let options = t.as_options();
        assert_eq!(options.id, Some(ToastId::from("t1")));
        assert_eq!(options.duration, Some(Lifetime::Infinite));
        assert_eq!(options.position, Some(Position::BottomLeft));
        assert_eq!(options.unmount_delay(), Some(t.unmount_delay()));
        assert_eq!(options.icon.as_deref(), Some("*"));
    }

    #[test]
    fn remaining_saturates_for_huge_durations() {
        let mut t = toast(ToastType::Blank).with_duration(Duration::MAX);
        t.pause_duration = Duration::from_secs(60);
        assert_eq!(t.remaining(t.created_at()), Some(Duration::MAX));
    }

    #[test]
    fn apply_merges_only_set_fields() {
        let mut t = toast(ToastType::Blank);
        t.visible = false;
        t.apply(ToastPatch::new("t1").height(42.0).message("changed"));

        assert_eq!(t.height(), Some(42.0));
        assert_eq!(t.resolved_message(), "changed");
        assert!(!t.visible(), "visibility is untouched unless patched");
        assert_eq!(t.kind(), ToastType::Blank);
    }
}
