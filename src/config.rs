// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted theme preference, loading and saving it
//! to a `theme.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, ThemeConfig};
//! use iced_snackbar::theme::ThemeMode;
//!
//! // Load the existing preference
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.mode = ThemeMode::Dark;
//!
//! // Save the modified preference
//! config::save(&config).expect("Failed to save config");
//!
//! // Build the theme the preference describes
//! let theme = config.theme();
//! ```

use crate::error::Result;
use crate::theme::{Theme, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "theme.toml";
const APP_NAME: &str = "iced_snackbar";

/// Persisted theme preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default)]
    pub contrast_threshold: Option<f32>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::System,
            contrast_threshold: None,
        }
    }
}

impl ThemeConfig {
    /// Builds the theme described by this preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let theme = Theme::from_mode(self.mode);
        match self.contrast_threshold {
            Some(threshold) => theme.with_contrast_threshold(threshold),
            None => theme,
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

pub fn load() -> Result<ThemeConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ThemeConfig::default())
}

pub fn save(config: &ThemeConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ThemeConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ThemeConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
