//! Persistence: TOML configuration and the SQLite garden store.

mod config;
pub mod garden_db;
pub mod migrations;

pub use config::{CatalogConfig, Config, RemindersConfig, VacationConfig};
pub use garden_db::GardenDb;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/plantcare[-dev]/` based on PLANTCARE_ENV.
///
/// Set PLANTCARE_ENV=dev to use the development data directory.
/// PLANTCARE_HOME replaces `~/.config` as the base.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = match std::env::var_os("PLANTCARE_HOME") {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };

    let env = std::env::var("PLANTCARE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("plantcare-dev")
    } else {
        base_dir.join("plantcare")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
