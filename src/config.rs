use crate::{error::Result, EditorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Edit locally without a backend; no persistence calls are made.
    #[serde(default)]
    pub offline: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            offline: false,
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir()
        .ok_or_else(|| EditorError::Internal("Failed to get config directory".to_string()))?;

    path.push("course-studio");
    fs::create_dir_all(&path)?;

    path.push("config.json");
    Ok(path)
}

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        let default_config = Config::default();
        save_config(&default_config)?;
        return Ok(default_config);
    }

    let content = fs::read_to_string(&config_path)?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| EditorError::Internal(format!("Failed to parse config: {}", e)))?;
    let config: Config = serde_json::from_value(value.clone())
        .map_err(|e| EditorError::Internal(format!("Failed to parse config: {}", e)))?;

    // Persist fields added after the config file was first written.
    let needs_backfill = value
        .as_object()
        .map(|obj| !obj.contains_key("request_timeout_secs") || !obj.contains_key("offline"))
        .unwrap_or(false);
    if needs_backfill {
        save_config(&config)?;
    }

    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let config_path = get_config_path()?;

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| EditorError::Internal(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, content)?;

    Ok(())
}
