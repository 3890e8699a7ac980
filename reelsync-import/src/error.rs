use reelsync_db::OperationError;
use reelsync_tmdb::TmdbError;
use thiserror::Error;

/// A failure that aborts a fetch or discovery phase.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An upstream call failed. `target` names the title key or listing.
    #[error("Upstream {op} failed for {target}: {source}")]
    Upstream {
        op: &'static str,
        target: String,
        #[source]
        source: TmdbError,
    },
    #[error("{op} for {target} timed out after {secs}s")]
    Timeout {
        op: &'static str,
        target: String,
        secs: u64,
    },
    /// A worker task panicked or was cancelled by the runtime.
    #[error("Worker task failed: {0}")]
    Worker(String),
}

impl PipelineError {
    pub(crate) fn upstream(op: &'static str, target: impl ToString, source: TmdbError) -> Self {
        Self::Upstream {
            op,
            target: target.to_string(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum KnownTitlesError {
    #[error("Cannot read known titles from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid known titles file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid setting {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Why a sync run did not complete.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("A sync run is already in progress")]
    AlreadyRunning,
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    KnownTitles(#[from] KnownTitlesError),
    #[error("Persistence failed: {0}")]
    Store(#[from] OperationError),
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Scheduler error: {0}")]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),
}
