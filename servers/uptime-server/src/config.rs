//! Configuration loading
//!
//! The only knobs are the bind host and port. Precedence, highest first:
//! command line / environment, `.uptime.toml`, built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".uptime.toml";

/// Find a config file by walking up from `start`
///
/// Returns the first `filename` found in `start` or any of its ancestors.
fn find_config_file_from(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Find a config file by walking up the directory tree, then checking global config.
///
/// Search order:
/// 1. Current directory and parent directories (walking up to root)
/// 2. Global config at ~/.config/uptime-server/config.toml
fn find_config_file() -> Option<PathBuf> {
    if let Some(found) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file_from(&cwd, CONFIG_FILE_NAME))
    {
        return Some(found);
    }

    // Fallback: Check global config
    let global_path = dirs::config_dir()?.join("uptime-server").join("config.toml");
    global_path.is_file().then_some(global_path)
}

/// Top-level file configuration (from .uptime.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` section
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl FileConfig {
    /// Load from `explicit` if given, otherwise from the first discovered file
    ///
    /// A missing explicit file is an error; finding nothing during discovery
    /// yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Effective server settings after all overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Apply command-line overrides on top of the file configuration
    pub fn resolve(file: FileConfig, host: Option<String>, port: Option<u16>) -> Self {
        Self {
            host: host.unwrap_or(file.server.host),
            port: port.unwrap_or(file.server.port),
        }
    }

    /// `host:port` suitable for binding; IPv6 literals are bracketed
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), None, None)
    }
}
