//! In-process calculation service backing the [`Bridge`].

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::bridge::Bridge;
use crate::calc;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::types::{CalculationPayload, UserInfo};

pub struct LocalService {
    config: AppConfig,
    settings_path: PathBuf,
}

impl LocalService {
    pub fn new(config: AppConfig, settings_path: PathBuf) -> Self {
        Self {
            config,
            settings_path,
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    fn read_settings(&self) -> Result<Map<String, Value>> {
        if !self.settings_path.exists() {
            return Ok(Map::new());
        }
        let raw = std::fs::read_to_string(&self.settings_path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::Service(format!(
                "{} does not hold a JSON object",
                self.settings_path.display()
            ))),
        }
    }

    fn write_settings(&self, settings: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.settings_path, raw)?;
        Ok(())
    }
}

fn login_name() -> String {
    ["USER", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

#[async_trait(?Send)]
impl Bridge for LocalService {
    async fn calculate(&self, payload: &str) -> Result<String> {
        let payload: CalculationPayload = serde_json::from_str(payload)?;
        debug!(?payload, "calculate");
        Ok(calc::summarize(&payload))
    }

    async fn get_defaults(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.config.defaults)?)
    }

    async fn get_userinfo(&self) -> Result<UserInfo> {
        Ok(UserInfo {
            author: self.config.author.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            fullname: login_name(),
        })
    }

    async fn get_settings(&self) -> Result<String> {
        if !self.settings_path.exists() {
            return Ok("{}".to_string());
        }
        Ok(std::fs::read_to_string(&self.settings_path)?)
    }

    async fn set_theme(&self, stylesheet: &str) -> Result<()> {
        let mut settings = self.read_settings()?;
        settings.insert("theme".to_string(), Value::String(stylesheet.to_string()));
        self.write_settings(&settings)?;
        info!("Theme saved to {}", self.settings_path.display());
        Ok(())
    }
}
