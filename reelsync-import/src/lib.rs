//! Ingestion for the reelsync catalog.
//!
//! A [`SyncCoordinator`] run discovers candidate titles through three
//! strategies, fetches and scores each one with bounded concurrency,
//! deduplicates actors through a run-scoped [`ActorRegistry`], and replaces
//! the stored dataset in batches.

pub mod discovery;
pub mod error;
pub mod events;
pub mod known_titles;
pub mod pipeline;
pub mod resolver;
pub mod schedule;
pub mod settings;
pub mod store;
pub mod sync;
pub mod transform;

pub use discovery::DiscoveryStrategy;
pub use error::{KnownTitlesError, PipelineError, ScheduleError, SettingsError, SyncError};
pub use events::{SyncEvent, run_with_events};
pub use known_titles::{KnownTitleSource, TomlKnownTitles, parse_known_titles};
pub use pipeline::{FetchStats, RunState, fetch_all};
pub use resolver::ActorRegistry;
pub use schedule::start_weekly;
pub use settings::{SyncSettings, settings_path};
pub use store::{DatasetStore, SqliteStore};
pub use sync::{SyncCoordinator, SyncPhase, SyncReport};
