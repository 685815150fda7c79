// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster configuration: container placement, spacing
//! and the default options applied to every toast. It can be built in code or
//! loaded from a `toaster.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, ToasterConfig};
//! use iced_toaster::toast::Position;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::BottomCenter);
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("toaster.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.position, Some(Position::BottomCenter));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use crate::toast::{Position, ToastOptions};
use defaults::{DEFAULT_CONTAINER_PADDING, DEFAULT_GUTTER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "iced_toaster";

/// Style of the container holding every toast stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
}

/// Options of one mounted toaster root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToasterConfig {
    /// Anchor for toasts that do not ask for one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Spacing in pixels between stacked toasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter: Option<f32>,
    /// Passed through to renderers that style by class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_class_name: Option<String>,
    pub container_style: ContainerStyle,
    /// Defaults layered under every toast call.
    pub toast_options: ToastOptions,
}

impl ToasterConfig {
    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    #[must_use]
    pub fn gutter(&self) -> f32 {
        self.gutter.unwrap_or(DEFAULT_GUTTER)
    }

    #[must_use]
    pub fn container_padding(&self) -> f32 {
        self.container_style
            .padding
            .unwrap_or(DEFAULT_CONTAINER_PADDING)
    }

    /// Merges the options of a (re)mounted root into this configuration.
    ///
    /// Container fields left unset in `props` keep their current value;
    /// `toast_options` is replaced as a whole.
    #[must_use]
    pub fn merge(&self, props: ToasterConfig) -> ToasterConfig {
        ToasterConfig {
            position: props.position.or(self.position),
            gutter: props.gutter.or(self.gutter),
            container_class_name: props
                .container_class_name
                .or_else(|| self.container_class_name.clone()),
            container_style: ContainerStyle {
                padding: props
                    .container_style
                    .padding
                    .or(self.container_style.padding),
            },
            toast_options: props.toast_options,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, or the
/// defaults when no file exists.
pub fn load() -> Result<ToasterConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToasterConfig::default())
}

pub fn save(config: &ToasterConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a configuration file. A file that fails to parse yields the
/// defaults and a warning.
pub fn load_from_path(path: &Path) -> Result<ToasterConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(path = %path.display(), %err, "invalid toaster config, using defaults");
            Ok(ToasterConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToasterConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Lifetime;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = ToasterConfig {
            position: Some(Position::BottomLeft),
            gutter: Some(12.0),
            toast_options: ToastOptions::new().persistent(),
            ..ToasterConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toaster.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, ToasterConfig::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn parses_hand_written_file() {
        let text = r#"
            position = "bottom-center"
            gutter = 4.0

            [toast_options]
            duration = 2500
            unmount_delay_ms = 200

            [toast_options.style]
            width = 280.0
        "#;
        let config: ToasterConfig = toml::from_str(text).unwrap();
        assert_eq!(config.position(), Position::BottomCenter);
        assert_eq!(config.gutter(), 4.0);
        assert_eq!(
            config.toast_options.duration,
            Some(Lifetime::from_millis(2500))
        );
        assert_eq!(config.toast_options.unmount_delay_ms, Some(200));
        assert_eq!(config.toast_options.style.width, Some(280.0));
    }

    #[test]
    fn defaults_fill_unset_fields() {
        let config = ToasterConfig::default();
        assert_eq!(config.position(), Position::TopRight);
        assert_eq!(config.gutter(), DEFAULT_GUTTER);
        assert_eq!(config.container_padding(), DEFAULT_CONTAINER_PADDING);
    }

    #[test]
    fn merge_keeps_unset_container_fields_and_replaces_toast_options() {
        let current = ToasterConfig {
            position: Some(Position::BottomRight),
            gutter: Some(10.0),
            toast_options: ToastOptions::new().with_icon("!"),
            ..ToasterConfig::default()
        };
        let props = ToasterConfig {
            gutter: Some(2.0),
            ..ToasterConfig::default()
        };

        let merged = current.merge(props);
        assert_eq!(merged.position, Some(Position::BottomRight));
        assert_eq!(merged.gutter, Some(2.0));
        assert_eq!(merged.toast_options, ToastOptions::default());
    }
}
