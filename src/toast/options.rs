// SPDX-License-Identifier: MPL-2.0
//! Per-toast options and the value types they carry.
//!
//! Options are partial: every field may be left unset, and option sets are
//! layered so that later layers override earlier ones field by field.

use super::ToastId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long a toast stays before it is dismissed automatically.
///
/// In configuration files a finite lifetime is written in milliseconds and
/// an infinite one as the string `"infinite"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LifetimeRepr", into = "LifetimeRepr")]
pub enum Lifetime {
    /// Auto-dismiss after the given time (not counting pauses).
    Finite(Duration),
    /// Only an explicit dismiss removes the toast.
    Infinite,
}

impl Lifetime {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Lifetime::Finite(Duration::from_millis(ms))
    }

    /// Returns the finite duration, or `None` for infinite lifetimes.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Lifetime::Finite(duration) => Some(duration),
            Lifetime::Infinite => None,
        }
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Lifetime::Infinite)
    }
}

impl From<Duration> for Lifetime {
    fn from(duration: Duration) -> Self {
        Lifetime::Finite(duration)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LifetimeRepr {
    Millis(u64),
    Keyword(String),
}

impl TryFrom<LifetimeRepr> for Lifetime {
    type Error = String;

    fn try_from(repr: LifetimeRepr) -> Result<Self, Self::Error> {
        match repr {
            LifetimeRepr::Millis(ms) => Ok(Lifetime::from_millis(ms)),
            LifetimeRepr::Keyword(word) => match word.as_str() {
                "infinite" | "never" => Ok(Lifetime::Infinite),
                other => Err(format!(
                    "invalid duration `{other}`: expected milliseconds or \"infinite\""
                )),
            },
        }
    }
}

impl From<Lifetime> for LifetimeRepr {
    fn from(lifetime: Lifetime) -> Self {
        match lifetime {
            Lifetime::Finite(duration) => {
                LifetimeRepr::Millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
            }
            Lifetime::Infinite => LifetimeRepr::Keyword("infinite".to_string()),
        }
    }
}

/// Screen anchor a toast is stacked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// All anchors, top row first.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown position `{s}`"))
    }
}

/// A color with straight alpha, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Style overrides. Opaque to the store, interpreted by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
}

impl ToastStyle {
    /// Returns `self` with every field set in `over` replaced.
    #[must_use]
    pub fn merge(&self, over: &ToastStyle) -> ToastStyle {
        ToastStyle {
            background: over.background.or(self.background),
            text: over.text.or(self.text),
            accent: over.accent.or(self.accent),
            width: over.width.or(self.width),
            padding: over.padding.or(self.padding),
        }
    }
}

/// Options accepted by every toast call and by the global configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastOptions {
    /// Reuse (and update in place) the toast with this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ToastId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Lifetime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unmount_delay_ms: Option<u64>,
    /// Replaces the type icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub style: ToastStyle,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<Lifetime>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Shorthand for a toast that stays until dismissed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_duration(Lifetime::Infinite)
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_unmount_delay(mut self, delay: Duration) -> Self {
        self.unmount_delay_ms = Some(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
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

    /// Returns these options layered over `base`: fields set here win,
    /// unset fields fall back to `base`. Styles merge field by field.
    #[must_use]
    pub fn layered_over(&self, base: &ToastOptions) -> ToastOptions {
        ToastOptions {
            id: self
                .id
                .clone()
                .filter(|id| !id.is_empty())
                .or_else(|| base.id.clone().filter(|id| !id.is_empty())),
            duration: self.duration.or(base.duration),
            position: self.position.or(base.position),
            unmount_delay_ms: self.unmount_delay_ms.or(base.unmount_delay_ms),
            icon: self.icon.clone().or_else(|| base.icon.clone()),
            style: base.style.merge(&self.style),
        }
    }

    #[must_use]
    pub fn unmount_delay(&self) -> Option<Duration> {
        self.unmount_delay_ms.map(Duration::from_millis)
    }
}
