//! Settings and configuration utilities.
//!
//! This module reads settings from $HOME/.githublink/settings.json and uses
//! them as a fallback for environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::link::HostConfig;

/// Environment variable overriding the hosting service's web host.
pub const HOST_ENV: &str = "GITHUBLINK_HOST";

/// Environment variable overriding the SSH shorthand prefix.
pub const SSH_PREFIX_ENV: &str = "GITHUBLINK_SSH_PREFIX";

/// Environment variable naming the command that opens links.
pub const BROWSER_ENV: &str = "GITHUBLINK_BROWSER";

/// Settings loaded from $HOME/.githublink/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Web host of the hosting service, e.g. "github.com".
    #[serde(default)]
    pub host: Option<String>,

    /// SSH shorthand prefix, e.g. "git@github.com:".
    #[serde(default, rename = "sshPrefix")]
    pub ssh_prefix: Option<String>,

    /// Command used to open links instead of the system browser.
    #[serde(default)]
    pub browser: Option<String>,

    /// Environment variable fallbacks.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // A missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".githublink").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }

    /// Returns the configured browser command, if any.
    ///
    /// `GITHUBLINK_BROWSER` (or its `env` fallback) wins over the `browser`
    /// key. Blank values count as unset.
    pub fn browser_command(&self) -> Option<String> {
        self.get_env_var(BROWSER_ENV)
            .or_else(|| self.browser.clone())
            .filter(|c| !c.trim().is_empty())
    }

    /// Builds the hosting service configuration.
    ///
    /// Environment variables (or their `env` fallbacks) take precedence
    /// over the `host` and `sshPrefix` keys. An unset prefix follows the
    /// host.
    pub fn host_config(&self) -> HostConfig {
        let host = self
            .get_env_var(HOST_ENV)
            .or_else(|| self.host.clone())
            .filter(|h| !h.is_empty());
        let config = host.map_or_else(HostConfig::default, HostConfig::new);

        match self
            .get_env_var(SSH_PREFIX_ENV)
            .or_else(|| self.ssh_prefix.clone())
            .filter(|p| !p.is_empty())
        {
            Some(prefix) => config.with_ssh_prefix(prefix),
            None => config,
        }
    }
}
