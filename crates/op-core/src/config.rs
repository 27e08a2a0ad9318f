//! Application configuration

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Log verbosity selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Debug/logging options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log verbosity
    #[serde(default)]
    pub log_level: LogLevel,
    /// Mirror log output to a file
    #[serde(default)]
    pub log_to_file: bool,
    /// Log file location when `log_to_file` is set
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("oxidized-pad.log")
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_to_file: false,
            log_path: default_log_path(),
        }
    }
}

/// Input options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding controller profiles
    #[serde(default = "default_profile_dir")]
    pub profile_dir: PathBuf,
    /// Profile loaded for each pad port at startup
    #[serde(default)]
    pub port_profiles: Vec<String>,
}

fn default_profile_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oxidized-pad")
        .join("profiles")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            profile_dir: default_profile_dir(),
            port_profiles: Vec::new(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: DebugConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("oxidized-pad")
            .join("config.toml")
    }

    /// Load the configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Save the configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| CoreError::Config(format!("no parent directory for {}", path.display())))?;
        fs::create_dir_all(parent)?;
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
