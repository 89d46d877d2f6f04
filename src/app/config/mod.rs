// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Default category, fetch delay, image cache size
//! - `[appwrite]` - Document database connection
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Appwrite connection fields can additionally be overridden with
//! `ICED_FOLIO_APPWRITE_*` environment variables.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let settings = config.appwrite_settings();
//! println!("fetching from {}", settings.documents_url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::Category;
use crate::error::Result;
use crate::infrastructure::AppwriteSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Category slug shown at startup when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,

    /// Pause before each category fetch, in milliseconds.
    #[serde(
        default = "default_fetch_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetch_delay_ms: Option<u64>,

    /// Number of downloaded images kept in memory.
    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_category: None,
            fetch_delay_ms: default_fetch_delay_ms(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

/// Appwrite document database connection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppwriteConfig {
    /// API root, e.g. `https://cloud.appwrite.io/v1`.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    /// Maximum documents requested per category.
    #[serde(
        default = "default_query_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub query_limit: Option<u32>,
}

impl Default for AppwriteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            project_id: None,
            database_id: None,
            collection_id: None,
            query_limit: default_query_limit(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub appwrite: AppwriteConfig,
}

impl Config {
    /// Category to show when the command line names none.
    ///
    /// An unknown configured slug is logged and replaced by the default.
    #[must_use]
    pub fn default_category(&self) -> Category {
        let resolution = Category::resolve_route(self.gallery.default_category.as_deref());
        if let crate::domain::gallery::RouteResolution::Redirected {
            requested: Some(slug),
            ..
        } = &resolution
        {
            tracing::warn!(%slug, "unknown default_category in settings; using default");
        }
        resolution.category()
    }

    /// Clamped fetch delay.
    #[must_use]
    pub fn fetch_delay(&self) -> Duration {
        let millis = self
            .gallery
            .fetch_delay_ms
            .unwrap_or(DEFAULT_FETCH_DELAY_MS)
            .min(MAX_FETCH_DELAY_MS);
        Duration::from_millis(millis)
    }

    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.gallery
            .image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
    }

    /// Builds Appwrite settings, applying `ICED_FOLIO_APPWRITE_*` environment overrides.
    #[must_use]
    pub fn appwrite_settings(&self) -> AppwriteSettings {
        self.appwrite_settings_with_env(|key| std::env::var(key).ok())
    }

    /// Builds Appwrite settings with a custom environment lookup.
    pub fn appwrite_settings_with_env<F>(&self, env: F) -> AppwriteSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, configured: &Option<String>| {
            env(key)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| configured.clone())
                .unwrap_or_default()
        };

        AppwriteSettings {
            endpoint: pick(ENV_APPWRITE_ENDPOINT, &self.appwrite.endpoint),
            project_id: pick(ENV_APPWRITE_PROJECT, &self.appwrite.project_id),
            database_id: pick(ENV_APPWRITE_DATABASE, &self.appwrite.database_id),
            collection_id: pick(ENV_APPWRITE_COLLECTION, &self.appwrite.collection_id),
            query_limit: self
                .appwrite
                .query_limit
                .unwrap_or(DEFAULT_QUERY_LIMIT)
                .clamp(1, MAX_QUERY_LIMIT),
            fetch_delay: self.fetch_delay(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fetch_delay_ms() -> Option<u64> {
    Some(DEFAULT_FETCH_DELAY_MS)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_APPWRITE_ENDPOINT.to_string())
}

fn default_query_limit() -> Option<u32> {
    Some(DEFAULT_QUERY_LIMIT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings; using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
