//! Sync settings (`[sync]` in `~/.config/reelsync/settings.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::error::SettingsError;

/// Upper bound on the default worker count.
const MAX_DEFAULT_WORKERS: usize = 20;

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("reelsync").join("settings.toml")
}

fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("reelsync").join("catalog.db")
}

fn default_known_titles_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("reelsync").join("known_titles.toml")
}

/// Twice the available parallelism, capped at 20.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(2)
        .min(MAX_DEFAULT_WORKERS)
}

/// Tunables for one sync run. Every field has a default, so a partial
/// `[sync]` table is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub language: String,
    pub region: String,
    /// Pages of the popularity listing to read per kind.
    pub popular_pages: u32,
    /// Last page read for any one year of the year sweep.
    pub sweep_last_page: u32,
    /// First release year of the year sweep.
    pub first_year: i32,
    pub workers: usize,
    /// Delay each fetch worker observes before its first request.
    pub pace_ms: u64,
    pub item_timeout_secs: u64,
    pub review_pages: u32,
    pub photo_limit: usize,
    /// Records per persistence transaction.
    pub batch_size: usize,
    /// Six-field cron expression (seconds first).
    pub schedule: String,
    pub requests_per_second: u32,
    pub db_path: PathBuf,
    pub known_titles_path: PathBuf,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: "US".to_string(),
            popular_pages: 500,
            sweep_last_page: 500,
            first_year: 1920,
            workers: default_workers(),
            pace_ms: 250,
            item_timeout_secs: 90,
            review_pages: 10,
            photo_limit: 6,
            batch_size: 500,
            schedule: "0 0 3 * * Mon".to_string(),
            requests_per_second: 40,
            db_path: default_db_path(),
            known_titles_path: default_known_titles_path(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    sync: SyncSettings,
}

impl SyncSettings {
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }

    pub fn item_timeout(&self) -> Duration {
        Duration::from_secs(self.item_timeout_secs)
    }

    /// Load from the canonical settings file. A missing file yields defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let settings = match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str::<SettingsFile>(&contents)?.sync,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Write the settings to `path`, replacing the file atomically.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(&SettingsFile { sync: self.clone() })?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, message: &str| {
            Err(SettingsError::Invalid {
                field,
                message: message.to_string(),
            })
        };
        if self.workers == 0 {
            return invalid("workers", "must be at least 1");
        }
        if self.batch_size == 0 {
            return invalid("batch_size", "must be at least 1");
        }
        if self.item_timeout_secs == 0 {
            return invalid("item_timeout_secs", "must be at least 1");
        }
        if self.requests_per_second == 0 {
            return invalid("requests_per_second", "must be at least 1");
        }
        Ok(())
    }
}
