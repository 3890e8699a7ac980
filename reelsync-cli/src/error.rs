use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried
    #[error("Database error: {0}")]
    Database(String),

    /// Settings or credentials problem
    #[error("Config error: {0}")]
    Config(String),

    /// Upstream API error outside a sync run
    #[error("API error: {0}")]
    Api(String),

    /// Runtime creation or scheduler error
    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Sync failed: {0}")]
    Sync(#[from] reelsync_import::SyncError),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
