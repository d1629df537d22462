use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "oxalate-lookup.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Startup settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV file loaded at startup.
    pub dataset_path: PathBuf,
    /// Maximum number of entries in the suggestion list.
    pub suggestion_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("oxalates.csv"),
            suggestion_limit: 10,
        }
    }
}

impl AppConfig {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings for this process: the settings file (if any), then a
    /// dataset path given as the first command-line argument.
    pub fn load(args: impl IntoIterator<Item = String>) -> Self {
        let config = Self::from_file(Path::new(CONFIG_FILE))
            .unwrap_or_else(|e| {
                log::warn!("{e}; using default settings");
                Self::default()
            })
            .with_args(args);
        log::debug!("Using {config:?}");
        config
    }

    /// Apply command-line overrides; `args` includes the program name.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        if let Some(path) = args.into_iter().nth(1) {
            self.dataset_path = PathBuf::from(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.suggestion_limit, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "suggestion_limit": 5 }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.dataset_path, PathBuf::from("oxalates.csv"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            AppConfig::from_file(dir.path()),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn first_argument_overrides_dataset_path() {
        let base = AppConfig {
            dataset_path: PathBuf::from("from-settings.csv"),
            suggestion_limit: 5,
        };
        let args = vec!["oxalate-lookup".to_string(), "foods.csv".to_string()];

        let config = base.with_args(args);
        assert_eq!(config.dataset_path, PathBuf::from("foods.csv"));
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    fn no_argument_keeps_base_config() {
        let base = AppConfig {
            dataset_path: PathBuf::from("from-settings.csv"),
            suggestion_limit: 5,
        };
        let config = base.clone().with_args(vec!["oxalate-lookup".to_string()]);
        assert_eq!(config, base);
    }
}
