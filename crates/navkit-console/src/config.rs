//! TOML configuration.
//!
//! Looked up at `--config`, else `<config dir>/navkit/config.toml`; every
//! field has a default so a missing file is not an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use navkit_protocol::DEFAULT_HOME_PATH;
use navkit_routes::MissingParamPolicy;

/// Where the route tree comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Build routes from a permission tree.
    #[default]
    Permission,
    /// Use a statically declared route tree as is.
    Module,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub mode: RouteMode,
    /// Fallback for unresolvable paths and target of `close-all`.
    pub home_path: String,
    pub missing_params: MissingParamPolicy,
    /// JSON file with permissions (or routes in module mode).
    pub source: PathBuf,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: RouteMode::Permission,
            home_path: DEFAULT_HOME_PATH.to_string(),
            missing_params: MissingParamPolicy::PassThrough,
            source: PathBuf::from("permissions.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavkitConfig {
    pub router: RouterConfig,
    pub logging: LoggingConfig,
}

impl NavkitConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("navkit").join("config.toml"))
    }

    pub fn from_toml(raw: &str) -> Result<Self, anyhow::Error> {
        toml::from_str(raw).context("invalid navkit configuration")
    }

    pub fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parse config file {}", path.display()))
    }

    /// Load `explicit` (which must exist), else the default location if
    /// present, else built-in defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, anyhow::Error> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
