use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = ".tgwatch";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "changes.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the account gateway (the authenticated session exposed
    /// over HTTP).
    pub gateway_url: String,
    /// Bearer token for the gateway; falls back to TGWATCH_TOKEN env.
    pub api_token: Option<String>,
    /// Explicit change-log location; defaults to ~/.tgwatch/changes.json.
    pub log_file: Option<PathBuf>,
    /// How many recent messages the dialog window may hold.
    pub dialog_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:8081".to_string(),
            api_token: None,
            log_file: None,
            dialog_limit: 100,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let value: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config TOML at {}", path.display()))?;
        Ok(value)
    }

    pub fn save(&self) -> Result<()> {
        let dir = config_dir_path()?;
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
        let path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn resolve_token(&self) -> Option<String> {
        self.api_token
            .clone()
            .or_else(|| std::env::var("TGWATCH_TOKEN").ok())
    }

    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        Ok(config_dir_path()?.join(LOG_FILE_NAME))
    }
}

fn config_dir_path() -> Result<PathBuf> {
    let home = home_dir().context("Cannot resolve home directory")?;
    Ok(home.join(APP_DIR_NAME))
}

fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir_path()?.join(CONFIG_FILE_NAME))
}
