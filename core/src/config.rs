//! Configuration management for conshow

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from file, falling back to built-in defaults.
    ///
    /// This method loads user configuration from
    /// `~/.config/conshow/config.toml`. A missing or malformed file yields
    /// the defaults; user settings never abort startup.
    ///
    /// # Returns
    ///
    /// The loaded configuration.
    #[must_use]
    pub fn load() -> Self {
        if let Some(user_config_path) = Self::get_config_path()
            && let Ok(content) = std::fs::read_to_string(&user_config_path)
        {
            return Self::parse(&content);
        }

        Self::default()
    }

    /// Parse configuration file content, falling back to defaults on error.
    ///
    /// User settings never abort startup; a malformed file is logged and
    /// ignored.
    fn parse(content: &str) -> Self {
        match toml::from_str::<Self>(content) {
            Ok(user_config) => user_config,
            Err(e) => {
                tracing::debug!("Ignoring malformed config file: {e}");
                Self::default()
            },
        }
    }

    /// Get the configuration file path.
    ///
    /// Follows XDG Base Directory specification:
    /// - `$XDG_CONFIG_HOME/conshow/config.toml` (if XDG_CONFIG_HOME is set)
    /// - `~/.config/conshow/config.toml` (default)
    ///
    /// # Returns
    ///
    /// The path to the configuration file, or `None` if the config directory
    /// cannot be determined.
    fn get_config_path() -> Option<PathBuf> {
        let config_dir = dirs::config_dir().map(|p| p.join("conshow"));

        if let Some(ref dir) = config_dir {
            return Some(dir.join("config.toml"));
        }

        None
    }
}

/// Output configuration loaded from file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Whether the CLI decorates its banner and separators with terminal
    /// attributes. Never affects the primitive output lines themselves.
    #[serde(default = "default_styled")]
    pub styled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            styled: default_styled(),
        }
    }
}

/// Default for [`OutputConfig::styled`].
const fn default_styled() -> bool {
    true
}

/// Application configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Current working directory
    pub cwd: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// None required - uses current working directory as default.
    ///
    /// # Returns
    ///
    /// Returns the configuration with defaults applied.
    #[must_use]
    pub fn from_env() -> Self {
        let cwd =
            std::env::current_dir().map_or_else(|_| ".".to_string(), |p| p.display().to_string());

        Self { cwd }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
