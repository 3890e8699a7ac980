/// Errors returned by the upstream catalog.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API token rejected by TMDB")]
    Unauthorized,

    #[error("Rate limited by TMDB")]
    RateLimit,

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
