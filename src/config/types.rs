//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigWarning;
use crate::error::MenuResult;

use super::loader;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the TOML store file, relative to the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Menu rendered when the command line names none
    #[serde(default)]
    pub default_menu: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            default_menu: None,
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("menu.toml")
}

/// Tree rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default)]
    pub color: ColorMode,

    /// Spaces per depth level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            color: ColorMode::default(),
            indent: default_indent(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default tracing filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }

    /// Map a `-v` count, keeping the configured level when higher.
    pub fn raised_by(self, count: u8) -> Self {
        let from_flags = match count {
            0 => return self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        match (self, from_flags) {
            (Verbosity::Debug, _) => Verbosity::Debug,
            (_, level) => level,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// First config file found for `project_root`, see [`loader::discover`].
    pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (MENUTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
