// SPDX-License-Identifier: MPL-2.0
//! Location of the gallery's `settings.toml`.
//!
//! The directory comes from the first source that provides one:
//! an explicit path passed by the caller, the `--config-dir` flag recorded
//! by [`init_cli_overrides`], the `ICED_FOLIO_CONFIG_DIR` variable, and
//! finally `IcedFolio/` under the platform config directory from `dirs`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory created under the platform config directory.
const APP_DIR_NAME: &str = "IcedFolio";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

/// Directory holding `settings.toml`, or `None` when the platform has no
/// config directory and nothing overrides it.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    resolve_config_dir(
        explicit,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

fn resolve_config_dir(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|dir| !dir.trim().is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|dir| dir.join(APP_DIR_NAME)))
}
