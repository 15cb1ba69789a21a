use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::io::atomic::atomic_write;

pub fn default_data_dir() -> Option<PathBuf> {
    // ~\Users\you\.securevault on Windows; ~/.securevault elsewhere
    dirs_next::home_dir().map(|h| h.join(".securevault"))
}

pub fn default_config_path() -> Option<PathBuf> {
    default_data_dir().map(|d| d.join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Settings-page toggles. All of this is decorative preference state; the
/// switches guard nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub two_factor: bool,
    pub fingerprint_login: bool,
    pub auto_lock: bool,
    pub session_timeout_minutes: u64,
    pub notifications: NotificationPrefs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPrefs {
    pub suspicious_activity: bool,
    pub weak_password_reminders: bool,
    pub security_updates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            two_factor: true,
            fingerprint_login: false,
            auto_lock: true,
            session_timeout_minutes: 30,
            notifications: NotificationPrefs::default(),
        }
    }
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            suspicious_activity: true,
            weak_password_reminders: true,
            security_updates: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).context("serialize config")?;
        atomic_write(path, text).with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }
}
