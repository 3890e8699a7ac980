//! Known-title providers.
//!
//! A run starts by loading the four known-title lists. They seed the
//! title-lookup strategy and drive the must-watch and award tags, so a
//! provider failure aborts the run.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reelsync_core::{KnownTitleSet, KnownTitles};
use serde::Deserialize;

use crate::error::KnownTitlesError;

#[async_trait]
pub trait KnownTitleSource: Send + Sync {
    async fn load(&self) -> Result<KnownTitles, KnownTitlesError>;
}

/// A fixed set, handed out as is.
#[async_trait]
impl KnownTitleSource for KnownTitles {
    async fn load(&self) -> Result<KnownTitles, KnownTitlesError> {
        Ok(self.clone())
    }
}

/// Reads the lists from a TOML file:
///
/// ```toml
/// top_rated_movies = ["The Godfather", "Seven Samurai"]
/// top_rated_series = ["The Wire"]
/// award_winning_movies = ["Parasite"]
/// award_winning_series = ["Succession"]
/// ```
///
/// Missing arrays are empty; a missing file is an error.
#[derive(Debug, Clone)]
pub struct TomlKnownTitles {
    path: PathBuf,
}

impl TomlKnownTitles {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KnownTitlesFile {
    top_rated_movies: Vec<String>,
    top_rated_series: Vec<String>,
    award_winning_movies: Vec<String>,
    award_winning_series: Vec<String>,
}

/// Parse the TOML known-title format.
pub fn parse_known_titles(contents: &str) -> Result<KnownTitles, toml::de::Error> {
    let file: KnownTitlesFile = toml::from_str(contents)?;
    let set = |names: Vec<String>| names.iter().collect::<KnownTitleSet>();
    Ok(KnownTitles {
        top_rated_movies: set(file.top_rated_movies),
        top_rated_series: set(file.top_rated_series),
        award_winning_movies: set(file.award_winning_movies),
        award_winning_series: set(file.award_winning_series),
    })
}

#[async_trait]
impl KnownTitleSource for TomlKnownTitles {
    async fn load(&self) -> Result<KnownTitles, KnownTitlesError> {
        let path = self.path.display().to_string();
        let contents = std::fs::read_to_string(&self.path).map_err(|source| {
            KnownTitlesError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let known =
            parse_known_titles(&contents).map_err(|source| KnownTitlesError::Parse { path, source })?;
        log::info!(
            "Loaded {} known titles from {}",
            known.total(),
            self.path.display()
        );
        Ok(known)
    }
}
