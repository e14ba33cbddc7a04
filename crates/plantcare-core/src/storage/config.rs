//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Reminder window for the "upcoming" view
//! - Vacation planning and calendar export settings
//! - An optional extra species file merged over the built-in catalog
//!
//! Configuration is stored at `~/.config/plantcare/config.toml`.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::calendar::CalendarOptions;
use crate::error::{ConfigError, Result};
use crate::species::SpeciesTable;
use crate::vacation::PlannerConfig;

/// Reminder view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersConfig {
    #[serde(default = "default_window_days")]
    pub upcoming_window_days: u32,
}

/// Vacation planning and export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationConfig {
    #[serde(default = "default_mist_every_days")]
    pub mist_every_days: u32,
    #[serde(default = "default_task_start_hour")]
    pub task_start_hour: u32,
    #[serde(default = "default_task_duration_minutes")]
    pub task_duration_minutes: u32,
    /// Name signed on helper summaries.
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
}

/// Species catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a TOML file of `[[species]]` entries; empty means built-in only.
    #[serde(default)]
    pub species_file: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/plantcare/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reminders: RemindersConfig,
    #[serde(default)]
    pub vacation: VacationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// Default functions
fn default_window_days() -> u32 {
    7
}
fn default_mist_every_days() -> u32 {
    2
}
fn default_task_start_hour() -> u32 {
    9
}
fn default_task_duration_minutes() -> u32 {
    30
}
fn default_owner_name() -> String {
    "The plant owner".into()
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: default_window_days(),
        }
    }
}

impl Default for VacationConfig {
    fn default() -> Self {
        Self {
            mist_every_days: default_mist_every_days(),
            task_start_hour: default_task_start_hour(),
            task_duration_minutes: default_task_duration_minutes(),
            owner_name: default_owner_name(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if the file is missing.
    ///
    /// Only a missing file is replaced with defaults; any other read error
    /// is returned so an unreadable config is never overwritten.
    pub fn load_from(path: &Path) -> Result<Self> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| load_failed(e.to_string()))?;
                Ok(cfg)
            }
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(load_failed(e.to_string()).into()),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
        }
    }

    /// Persist to the data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Built-in species plus the configured species file, if any.
    pub fn species_table(&self) -> Result<SpeciesTable> {
        let mut table = SpeciesTable::builtin();
        let file = self.catalog.species_file.trim();
        if !file.is_empty() {
            table.merge_file(Path::new(file))?;
        }
        Ok(table)
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            mist_every_days: self.vacation.mist_every_days,
        }
    }

    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions {
            start_hour: self.vacation.task_start_hour,
            duration_minutes: i64::from(self.vacation.task_duration_minutes),
        }
    }
}
