//! Centralized path definitions for ecoinspect
//!
//! Single source of truth for where configuration is looked up.
//!
//! ## Lookup order
//!
//! ```text
//! --config <PATH>                         # explicit, must exist
//! $ECOINSPECT_CONFIG                      # explicit, must exist
//! ./ecoinspect.toml                       # project-level, optional
//! <config dir>/ecoinspect/config.toml     # user-level, optional
//! ```
//!
//! `<config dir>` is the platform config directory (`~/.config` on Linux).

use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "ECOINSPECT_CONFIG";

/// Project-level config filename
pub const PROJECT_CONFIG: &str = "ecoinspect.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "ecoinspect";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project-level config file in `dir`.
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Get the global ecoinspect config directory.
///
/// Returns `<config dir>/ecoinspect/`, falling back to `~/.ecoinspect/`
/// when the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".ecoinspect"),
        |dir| dir.join(GLOBAL_DIR),
    )
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Explicit config path from the environment, if set and non-empty.
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
