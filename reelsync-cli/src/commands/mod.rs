pub(crate) mod config;
pub(crate) mod schedule;
pub(crate) mod stats;
pub(crate) mod sync;

use std::sync::Arc;

use reelsync_import::{SqliteStore, SyncCoordinator, SyncSettings, TomlKnownTitles};
use reelsync_tmdb::{Credentials, TmdbClient};

use crate::CliError;
use crate::cli_types::SyncArgs;

/// Load `[sync]` settings and apply command-line overrides.
pub(crate) fn load_settings(args: &SyncArgs) -> Result<SyncSettings, CliError> {
    let mut settings = SyncSettings::load()
        .map_err(|e| CliError::config(format!("Failed to load settings: {}", e)))?;
    args.apply(&mut settings);
    settings
        .validate()
        .map_err(|e| CliError::config(e.to_string()))?;
    Ok(settings)
}

/// Wire the TMDB client, catalog database and known-title file into a
/// coordinator.
pub(crate) fn build_coordinator(settings: SyncSettings) -> Result<SyncCoordinator, CliError> {
    let creds = Credentials::load().map_err(|e| CliError::config(e.to_string()))?;
    let client = TmdbClient::new(creds, settings.requests_per_second)
        .map_err(|e| CliError::api(format!("Failed to create API client: {}", e)))?;
    let store = SqliteStore::open(&settings.db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database {}: {}",
            settings.db_path.display(),
            e
        ))
    })?;
    let known = TomlKnownTitles::new(settings.known_titles_path.clone());

    log::debug!("Catalog database: {}", settings.db_path.display());
    log::debug!("Known titles: {}", settings.known_titles_path.display());

    Ok(SyncCoordinator::new(
        Arc::new(client),
        Box::new(store),
        Arc::new(known),
        settings,
    ))
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}
