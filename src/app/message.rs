// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// An image download finished.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, String>,
    },
}

impl From<gallery::Message> for Message {
    fn from(message: gallery::Message) -> Self {
        Message::Gallery(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional category slug to open on startup (e.g. `logo-design`).
    /// Unknown slugs redirect to the default category.
    pub category: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
