//! Configuration management
//!
//! Settings are read from a TOML file (see [`crate::paths`] for the lookup
//! order). Every section is optional; a missing file means defaults.
//!
//! ```toml
//! [keywords]
//! positive = ["adequate"]
//! negative = ["missing"]
//!
//! [access.routes]
//! reports = ["admin", "staff"]
//!
//! [server]
//! port = 8080
//!
//! [output]
//! color = true
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::models::AccessPolicy;
use crate::core::services::{KeywordError, ResponseClassifier, RouteTable};
use crate::paths;

/// Template written by `ecoinspect config init`
pub const CONFIG_TEMPLATE: &str = r#"# ecoinspect configuration

# Extra words recognized by the response classifier. Words are matched
# after trimming and lowercasing; a word may not appear in both lists.
[keywords]
positive = []
negative = []

# Route access overrides: route name -> allowed roles (admin, staff, user).
# Routes not listed keep their standard policy.
[access.routes]
# reports = ["admin", "staff"]

[server]
host = "127.0.0.1"
port = 8080

[output]
color = true
"#;

/// ecoinspect configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Keyword set extensions
    #[serde(default)]
    pub keywords: KeywordConfig,
    /// Route access overrides
    #[serde(default)]
    pub access: AccessConfig,
    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Extra classifier keywords
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Extra positive words
    #[serde(default)]
    pub positive: Vec<String>,
    /// Extra negative words
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Route access overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Route name to allowed roles
    #[serde(default)]
    pub routes: BTreeMap<String, AccessPolicy>,
}

/// HTTP API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration using the standard lookup order
    ///
    /// An explicit path (argument or `$ECOINSPECT_CONFIG`) must exist and
    /// parse. Project and global files are optional; a malformed one is
    /// reported and skipped.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_in(explicit, &cwd)
    }

    /// Like [`Config::load`], looking for the project file in `project_dir`
    pub fn load_in(explicit: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = paths::env_config() {
            return Self::load_from(&path);
        }

        for path in [paths::project_config(project_dir), paths::global_config()] {
            if !path.is_file() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Ignoring config: {e:#}"),
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the response classifier, applying keyword extensions
    pub fn classifier(&self) -> Result<ResponseClassifier, KeywordError> {
        ResponseClassifier::extended(&self.keywords.positive, &self.keywords.negative)
    }

    /// Build the route table, applying access overrides
    #[must_use]
    pub fn route_table(&self) -> RouteTable {
        RouteTable::standard().with_overrides(&self.access.routes)
    }
}
