use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::Defaults;

const APP_DIR: &str = "timecalc";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shown in the info panel.
    #[serde(default = "default_author")]
    pub author: String,
    /// Values the form starts with.
    #[serde(default)]
    pub defaults: Defaults,
}

fn default_author() -> String {
    env!("CARGO_PKG_AUTHORS").to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            defaults: Defaults::default(),
        }
    }
}

impl AppConfig {
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or(Error::NoDirectory("config"))?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Settings document written by the bundled service.
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.json"))
    }

    pub fn local_storage_path() -> Result<PathBuf> {
        Ok(dirs::data_local_dir()
            .ok_or(Error::NoDirectory("data"))?
            .join(APP_DIR)
            .join("local_storage.db"))
    }

    /// Load config from the platform config dir. Missing file means defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_value::TimeValue;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.defaults.start, TimeValue::new(7, 30));
    }

    #[test]
    fn partial_file_fills_in_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
author = "Jo Doe"

[defaults]
StartTime = { h = 6, m = 0 }
WorkTime = { h = 7, m = 48 }
LunchTime = { h = 0, m = 45 }
OvertimeGoal = { h = 0, m = 0 }
CompTimeGoal = { h = 1, m = 0 }
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.author, "Jo Doe");
        assert_eq!(config.defaults.work, TimeValue::new(7, 48));
        assert_eq!(config.defaults.comp_time_goal, TimeValue::new(1, 0));

        std::fs::write(&path, "author = \"Solo\"\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.defaults, Defaults::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "author = [").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(Error::Config(_))));
    }
}
