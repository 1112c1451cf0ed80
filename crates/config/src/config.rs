//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the bmi application.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::display::DisplayConfig;
use crate::error::Result;
use crate::form::FormDefaults;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the bmi application.
///
/// # Examples
///
/// ```
/// use bmi_config::{Config, DisplayConfig, FormDefaults};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.form.is_empty());
///
/// // Create a custom config
/// let config = Config {
///     display: DisplayConfig::minimal(),
///     form: FormDefaults::new(Some(180.0), Some(75.0)),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Result card display options.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Values pre-filled into the form at startup.
    #[serde(default)]
    pub form: FormDefaults,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./bmi.json5` or `./bmi.json`
    /// 2. User: `~/.config/bmi/config.json5` or `~/.config/bmi/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bmi_config::Config;
    ///
    /// # async fn example() -> bmi_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Show icon: {}", config.display.show_icon);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "loading config file");
                Self::load_from(path)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bmi_config::Config;
    ///
    /// # fn example() -> bmi_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        write_config_file(path, self)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a form pre-fill value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_config::{Config, FormDefaults};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.form = FormDefaults::new(Some(0.0), None);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.form.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.display.show_icon);
        assert!(config.display.show_scale);
        assert!(config.form.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        let config = Config::new();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn validate_invalid_prefill() {
        let config = Config {
            form: FormDefaults::new(None, Some(-1.0)),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let config = Config {
            display: DisplayConfig {
                show_icon: false,
                show_scale: true,
            },
            form: FormDefaults::new(Some(172.5), Some(68.0)),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                display: { show_scale: false },
                form: { height_cm: 165, weight_kg: 50.37 },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.display.show_icon);
        assert!(!config.display.show_scale);
        assert_eq!(config.form.height_cm, Some(165.0));
        assert_eq!(config.form.weight_kg, Some(50.37));
    }

    #[test]
    fn load_from_rejects_invalid_prefill() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ form: { height_cm: 0 } }").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            display: DisplayConfig::minimal(),
            form: FormDefaults::new(Some(180.0), None),
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }
}
