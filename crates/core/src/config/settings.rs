use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::OverflowPolicy;

/// Name of the configuration file looked up by [`EvalConfig::find_config_file`]
pub const CONFIG_FILE_NAME: &str = ".opcalc.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EvalConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl EvalConfig {
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk from `start_path` up through its ancestors looking for a config file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        start_path
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config above `start_path`, or defaults if there is none.
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No {} found above {}", CONFIG_FILE_NAME, start_path.display());
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization() {
        let config = EvalConfig::default().with_overflow(OverflowPolicy::Wrapping);
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains(r#""overflow": "wrapping""#));

        let parsed: EvalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let parsed: EvalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<EvalConfig>(r#"{"overflw": "checked"}"#).is_err());
    }

    #[test]
    fn test_load_reports_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let err = EvalConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(msg) if msg.contains("Failed to parse")));
    }

    #[test]
    fn test_discover_without_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = EvalConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config, EvalConfig::default());
    }
}
