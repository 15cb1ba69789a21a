use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::cli::{SettingKey, SettingsCommand};
use crate::config::AppConfig;

pub fn dispatch(command: SettingsCommand, config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.ok_or_else(|| anyhow!("cannot resolve a settings path"))?;
    let mut config = AppConfig::load(&path)?;

    match command {
        SettingsCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
                return Ok(());
            }
            let toggle = |on: bool| if on { "on" } else { "off" };
            println!("--- Settings ({}) ---", path.display());
            println!("two-factor:              {}", toggle(config.two_factor));
            println!("fingerprint-login:       {}", toggle(config.fingerprint_login));
            println!("auto-lock:               {}", toggle(config.auto_lock));
            println!(
                "session-timeout:         {} minutes",
                config.session_timeout_minutes
            );
            println!(
                "suspicious-activity:     {}",
                toggle(config.notifications.suspicious_activity)
            );
            println!(
                "weak-password-reminders: {}",
                toggle(config.notifications.weak_password_reminders)
            );
            println!(
                "security-updates:        {}",
                toggle(config.notifications.security_updates)
            );
            Ok(())
        }
        SettingsCommand::Set { key, value } => {
            apply(&mut config, key, &value)?;
            config.save(&path)?;
            println!("Changes saved. Your account settings have been updated.");
            Ok(())
        }
    }
}

fn apply(config: &mut AppConfig, key: SettingKey, value: &str) -> Result<()> {
    match key {
        SettingKey::SessionTimeout => {
            config.session_timeout_minutes = value
                .parse()
                .with_context(|| format!("session-timeout needs minutes, got '{value}'"))?;
        }
        SettingKey::TwoFactor => config.two_factor = parse_toggle(value)?,
        SettingKey::FingerprintLogin => config.fingerprint_login = parse_toggle(value)?,
        SettingKey::AutoLock => config.auto_lock = parse_toggle(value)?,
        SettingKey::SuspiciousActivity => {
            config.notifications.suspicious_activity = parse_toggle(value)?
        }
        SettingKey::WeakPasswordReminders => {
            config.notifications.weak_password_reminders = parse_toggle(value)?
        }
        SettingKey::SecurityUpdates => config.notifications.security_updates = parse_toggle(value)?,
    }
    Ok(())
}

fn parse_toggle(value: &str) -> Result<bool> {
    match value {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => bail!("expected on|off, got '{other}'"),
    }
}
