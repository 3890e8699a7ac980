use std::path::{Path, PathBuf};

use crate::error::TmdbError;

pub const TOKEN_ENV_VAR: &str = "TMDB_API_TOKEN";

/// Credentials for the TMDB v3 API (a v4 read access token, sent as a
/// bearer header).
#[derive(Clone)]
pub struct Credentials {
    pub api_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Where the API token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    tmdb: Option<TmdbConfig>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct TmdbConfig {
    api_token: Option<String>,
}

impl Credentials {
    /// Load the token from `TMDB_API_TOKEN`, falling back to the
    /// `[tmdb] api_token` entry in the credentials file.
    pub fn load() -> Result<Self, TmdbError> {
        let from_file = config_path().and_then(|p| read_token(&p));
        Self::resolve(std::env::var(TOKEN_ENV_VAR).ok(), from_file)
    }

    /// Load from an explicit credentials file, still honoring the env var.
    pub fn load_from(path: &Path) -> Result<Self, TmdbError> {
        Self::resolve(std::env::var(TOKEN_ENV_VAR).ok(), read_token(path))
    }

    fn resolve(env: Option<String>, file: Option<String>) -> Result<Self, TmdbError> {
        let api_token = env
            .filter(|t| !t.trim().is_empty())
            .or(file)
            .ok_or_else(|| {
                TmdbError::Config(format!(
                    "Missing API token. Set {TOKEN_ENV_VAR} or add [tmdb] api_token to the credentials file"
                ))
            })?;
        Ok(Self {
            api_token: api_token.trim().to_string(),
        })
    }
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("reelsync").join("credentials.toml"))
}

/// Determine where the API token is coming from.
pub fn credential_source() -> CredentialSource {
    if std::env::var(TOKEN_ENV_VAR).is_ok_and(|t| !t.trim().is_empty()) {
        CredentialSource::EnvVar(TOKEN_ENV_VAR)
    } else if config_path().and_then(|p| read_token(&p)).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    }
}

/// Write the token to the credentials file, creating parent directories.
pub fn save_to_file(path: &Path, creds: &Credentials) -> Result<(), TmdbError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let config = ConfigFile {
        tmdb: Some(TmdbConfig {
            api_token: Some(creds.api_token.clone()),
        }),
    };
    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| TmdbError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

fn read_token(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config
        .tmdb?
        .api_token
        .filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_file() {
        let creds =
            Credentials::resolve(Some("from-env".into()), Some("from-file".into())).unwrap();
        assert_eq!(creds.api_token, "from-env");
    }

    #[test]
    fn blank_env_falls_back_to_file() {
        let creds = Credentials::resolve(Some("  ".into()), Some("from-file".into())).unwrap();
        assert_eq!(creds.api_token, "from-file");
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = Credentials::resolve(None, None).unwrap_err();
        assert!(matches!(err, TmdbError::Config(_)));
    }

    #[test]
    fn saved_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.toml");
        save_to_file(&path, &Credentials { api_token: "abc123".into() }).unwrap();
        assert_eq!(read_token(&path).as_deref(), Some("abc123"));
    }

    #[test]
    fn debug_hides_token() {
        let creds = Credentials { api_token: "secret".into() };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
