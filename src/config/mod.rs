//! Configuration module for markr
//!
//! Manages the store location, page size and output settings.
//! Configuration is stored in the user's config directory
//! (`~/.config/markr/config.toml` on Linux).

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MarkrConfig {
    /// Location of the bookmark store; the data directory is used when unset
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Number of bookmarks per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for MarkrConfig {
    fn default() -> Self {
        Self {
            database: None,
            page_size: DEFAULT_PAGE_SIZE,
            quiet: false,
        }
    }
}

impl MarkrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("markr").join("config.toml"))
    }

    /// Default store location under the user's data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the data directory cannot be determined.
    pub fn default_database_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("markr").join("bookmarks"))
    }

    /// Load configuration from `path`, writing defaults if the file is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or holds an
    /// invalid value.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, running first-time setup if it doesn't exist yet
    ///
    /// Setup only runs when stdin is a terminal; otherwise defaults are
    /// written without prompting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() || !std::io::stdin().is_terminal() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Resolve the store location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no location is configured and the data
    /// directory cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Self::default_database_path(),
        }
    }

    /// Set a value from its key and textual form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "page_size" => {
                let page_size = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        ConfigError::Message(format!(
                            "Invalid value for page_size: '{value}'. Use a positive number"
                        ))
                    })?;
                self.page_size = page_size;
            }
            "database" => {
                self.database = Some(PathBuf::from(value));
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Get a value's textual form by key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "page_size" => Ok(self.page_size.to_string()),
            "database" => Ok(self.database_path()?.display().to_string()),
            _ => Err(unknown_key(key)),
        }
    }
}

/// Keys accepted by `config set` and `config get`
pub const CONFIG_KEYS: &[&str] = &["quiet", "page_size", "database"];

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
