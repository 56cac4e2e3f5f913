use crate::backend::gate::{DEFAULT_LOGIN_PATH, GatePaths};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub login_path: String,
    pub auth_prefix: String,
    pub admin_home: String,
    pub member_home: String,
    /// Usernames the local session source signs in as administrators.
    pub admin_users: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f64,
    pub window_height: f64,
    pub announcement_clear_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let paths = GatePaths::default();
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            auth_prefix: paths.auth_prefix,
            admin_home: paths.admin_home,
            member_home: paths.member_home,
            admin_users: vec!["admin".to_string()],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 832.0,
            announcement_clear_ms: 1000,
        }
    }
}

impl AuthConfig {
    pub fn gate_paths(&self) -> GatePaths {
        GatePaths {
            auth_prefix: self.auth_prefix.clone(),
            admin_home: self.admin_home.clone(),
            member_home: self.member_home.clone(),
        }
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    /// Loads `config.json` from `dir`, writing defaults when it is missing.
    /// A malformed file is left alone and defaults are used.
    pub fn load(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let config_path = dir.join("config.json");

        let config = if config_path.exists() {
            match Self::load_config(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Using default config, {} is invalid: {e}",
                        config_path.display()
                    );
                    AppConfig::default()
                }
            }
        } else {
            let default_config = AppConfig::default();
            Self::save_config(&config_path, &default_config)?;
            log::info!("Wrote default config to {}", config_path.display());
            default_config
        };

        Ok(Self { config })
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(path: &Path) -> Result<AppConfig> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }
}
