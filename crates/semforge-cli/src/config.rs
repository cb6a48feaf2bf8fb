//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, then `./semforge.toml`, then the user dir)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Batch generation settings.
    pub batch: BatchConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Defaults for `semforge generate` when flags are not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Tools to generate when none are named on the command line.
    pub tools: Vec<String>,
    /// Launcher prefix prepended to every tool invocation.
    pub launcher: Vec<String>,
    /// Repair known-malformed descriptor families before parsing.
    pub compat: bool,
    /// Append X-resource overrides to every generated wrapper.
    pub redirect_x: bool,
    /// Root directory for the generated package tree.
    pub output_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            tools: Vec::new(),
            launcher: Vec::new(),
            compat: false,
            redirect_x: false,
            output_dir: PathBuf::from("generated"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; an explicit
    /// path that cannot be read or parsed is an error.  With `None`, the
    /// default locations are probed in order and a missing file simply falls
    /// through to the built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::read_file(path);
        }

        let local = PathBuf::from("semforge.toml");
        if local.exists() {
            return Self::read_file(&local);
        }

        let user = Self::config_path();
        if user.exists() {
            return Self::read_file(&user);
        }

        Ok(Self::default())
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.semforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "semforge", "semforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".semforge.toml"))
    }
}
