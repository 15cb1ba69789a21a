//! Local key/value store behind every session flag and user record.
//!
//! One JSON document on disk, string keys to JSON values, write-through on
//! every mutation. The key schema is fixed:
//!
//! - `isLoggedIn`, `userEmail`, `userStatus`, `userPlan`, `planStartDate` —
//!   user session flags (stored as strings, `"true"` for booleans)
//! - `isAdmin`, `adminEmail` — admin session flags
//! - `user_<email>` — JSON-serialized user record
//! - `notes`, `documents` — JSON arrays for the notes and files pages
//!
//! Reads are validated: a malformed document or a value of the wrong shape
//! is an error with context, not a panic. Last write wins; a single process
//! is assumed.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::accounts::{PlanTier, UserStatus};
use crate::config::default_data_dir;
use crate::io::atomic::atomic_write;

pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_IS_ADMIN: &str = "isAdmin";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_USER_STATUS: &str = "userStatus";
pub const KEY_USER_PLAN: &str = "userPlan";
pub const KEY_PLAN_START_DATE: &str = "planStartDate";
pub const KEY_ADMIN_EMAIL: &str = "adminEmail";
pub const KEY_NOTES: &str = "notes";
pub const KEY_DOCUMENTS: &str = "documents";
pub const USER_KEY_PREFIX: &str = "user_";

pub fn user_key(email: &str) -> String {
    format!("{USER_KEY_PREFIX}{email}")
}

#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl LocalStore {
    pub fn open_default() -> Result<Self> {
        let mut path = default_data_dir().ok_or_else(|| anyhow!("home directory not found"))?;
        path.push("local_store.json");
        Self::from_path(path)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("read store {}", path.display()))?;
        let entries: BTreeMap<String, Value> = serde_json::from_str(&data)
            .with_context(|| format!("parse store {}", path.display()))?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Typed read. A value that does not match `T` is an error naming the
    /// offending key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => {
                let parsed = serde_json::from_value(value.clone())
                    .with_context(|| format!("store key '{key}' has unexpected shape"))?;
                Ok(Some(parsed))
            }
        }
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        self.get::<String>(key)
    }

    /// Boolean flags are stored as the strings "true"/"false", never as
    /// JSON booleans.
    pub fn get_flag(&self, key: &str) -> Result<bool> {
        Ok(self.get_string(key)?.as_deref() == Some("true"))
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("serialize store key '{key}'"))?;
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key, &value.to_string())
    }

    pub fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.set_string(key, if value { "true" } else { "false" })
    }

    pub fn remove(&mut self, key: &str) -> Result<bool> {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, serialized)
            .with_context(|| format!("persist store {}", self.path.display()))?;
        Ok(())
    }
}

/// Typed view over the session keys, loaded and validated in one place.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub logged_in: bool,
    pub email: Option<String>,
    pub status: Option<UserStatus>,
    pub plan: Option<PlanTier>,
    pub plan_start: Option<String>,
    pub admin: bool,
    pub admin_email: Option<String>,
}

impl Session {
    pub fn load(store: &LocalStore) -> Result<Self> {
        let status = match store.get_string(KEY_USER_STATUS)? {
            Some(s) => Some(s.parse::<UserStatus>().context("session status key")?),
            None => None,
        };
        let plan = match store.get_string(KEY_USER_PLAN)? {
            Some(s) => Some(s.parse::<PlanTier>().context("session plan key")?),
            None => None,
        };
        Ok(Self {
            logged_in: store.get_flag(KEY_IS_LOGGED_IN)?,
            email: store.get_string(KEY_USER_EMAIL)?,
            status,
            plan,
            plan_start: store.get_string(KEY_PLAN_START_DATE)?,
            admin: store.get_flag(KEY_IS_ADMIN)?,
            admin_email: store.get_string(KEY_ADMIN_EMAIL)?,
        })
    }
}
