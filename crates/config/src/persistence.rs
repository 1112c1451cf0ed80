//! Configuration file reading and writing.
//!
//! # File Formats
//!
//! Files are read with a JSON5 parser, which also accepts plain JSON.
//! Files are written as pretty-printed JSON, since `serde_json5` cannot
//! serialize.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./bmi.json5` or `./bmi.json`
//! 2. User: `~/.config/bmi/config.json5` or `~/.config/bmi/config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["bmi.json5", "bmi.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "bmi";

/// User config file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Returns every location a configuration file may live at, in priority
/// order. The paths are not checked for existence.
///
/// # Examples
///
/// ```
/// use bmi_config::persistence::candidate_paths;
///
/// let paths = candidate_paths();
/// assert_eq!(paths[0].to_str(), Some("bmi.json5"));
/// ```
#[must_use]
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = LOCAL_FILE_NAMES.iter().map(PathBuf::from).collect();
    if let Ok(dir) = user_config_dir() {
        paths.extend(USER_FILE_NAMES.iter().map(|name| dir.join(name)));
    }
    paths
}

/// Finds the first existing configuration file.
///
/// Returns `None` when no candidate exists.
///
/// # Examples
///
/// ```no_run
/// use bmi_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    candidate_paths().into_iter().find(|path| {
        let exists = path.exists();
        debug!(path = %path.display(), exists, "probing config location");
        exists
    })
}

/// Returns the user configuration directory (`~/.config/bmi/` on Linux).
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config
/// directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the path the settings panel saves to.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config
/// directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
///
/// # Examples
///
/// ```no_run
/// use bmi_config::persistence::read_config_file;
/// use bmi_config::Config;
///
/// # fn main() -> bmi_config::Result<()> {
/// let config: Config = read_config_file("bmi.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the file
/// cannot be written, or the value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        debug!(dir = %parent.display(), "creating config directory");
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        height_cm: f64,
        label: String,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{"height_cm": 180.5, "label": "me"}"#).unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.height_cm, 180.5);
        assert_eq!(sample.label, "me");
    }

    #[test]
    fn read_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // comments and trailing commas are fine
                height_cm: 172,
                label: 'me',
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(sample.height_cm, 172.0);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<Sample> = read_config_file("/nonexistent/bmi.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<Sample> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("bmi").join("config.json");

        let sample = Sample {
            height_cm: 160.0,
            label: "nested".to_string(),
        };

        write_config_file(&path, &sample).unwrap();
        let loaded: Sample = read_config_file(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn local_candidates_come_first() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from("bmi.json5"));
        assert_eq!(paths[1], PathBuf::from("bmi.json"));
    }

    #[test]
    fn default_user_config_path_is_json5() {
        // Environments without a home directory have no user config path
        if dirs::config_dir().is_some() {
            let path = default_user_config_path().unwrap();
            assert!(path.ends_with("bmi/config.json5"));
        }
    }
}
