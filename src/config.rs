use crate::todo::models::TaskFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const KEYS: [&str; 2] = ["default_filter", "history_limit"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub default_filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_filter: TaskFilter::All.as_str().to_string(),
            history_limit: None,
        }
    }
}

impl Config {
    /// Missing config file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_filter" => {
                TaskFilter::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
                self.default_filter = value.to_string();
            }
            "history_limit" => {
                if value.is_empty() || value == "none" {
                    self.history_limit = None;
                } else {
                    let limit = value
                        .parse::<usize>()
                        .ok()
                        .filter(|limit| *limit > 0)
                        .ok_or_else(|| ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })?;
                    self.history_limit = Some(limit);
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "default_filter" => Ok(self.default_filter.clone()),
            "history_limit" => Ok(self
                .history_limit
                .map(|limit| limit.to_string())
                .unwrap_or_else(|| "none".to_string())),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Validated on load, so this only falls back for hand-built configs.
    pub fn filter(&self) -> TaskFilter {
        TaskFilter::parse(&self.default_filter).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if TaskFilter::parse(&self.default_filter).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "default_filter".to_string(),
                value: self.default_filter.clone(),
            });
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "history_limit".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

pub fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("todo-history").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error("Unknown configuration key '{0}'. Supported keys: default_filter, history_limit")]
    UnknownKey(String),
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.filter(), TaskFilter::All);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("default_filter", "pending").unwrap();
        config.set("history_limit", "50").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.filter(), TaskFilter::Pending);
        assert_eq!(loaded.history_limit, Some(50));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_limit = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_filter, "all");
        assert_eq!(config.history_limit, Some(5));
    }

    #[test]
    fn test_invalid_filter_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_filter = \"done\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_filter = \n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();

        assert!(config.set("default_filter", "Pending").is_err());
        assert!(config.set("history_limit", "0").is_err());
        assert!(config.set("history_limit", "-3").is_err());
        assert!(matches!(
            config.set("file_path", "todo.md"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_history_limit_can_be_cleared() {
        let mut config = Config::default();
        config.set("history_limit", "10").unwrap();
        assert_eq!(config.get("history_limit").unwrap(), "10");

        config.set("history_limit", "none").unwrap();
        assert_eq!(config.get("history_limit").unwrap(), "none");
    }
}
