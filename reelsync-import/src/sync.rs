//! The sync run: discover, fetch, then replace the stored dataset.
//!
//! One run at a time per coordinator. A run walks the three discovery
//! strategies (popular, title lookup, year sweep), each for movies then
//! series, growing one shared [`RunState`]. Once everything has joined it
//! deletes the stored dataset and inserts the new one in fixed-size
//! batches: actors first, then titles.
//!
//! The delete and the inserts are separate transactions. A failure between
//! them leaves the store empty until the next successful run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Datelike, Utc};
use reelsync_core::{Actor, Kind, MediaKind, Title};
use reelsync_tmdb::CatalogApi;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{Duration, Instant};

use crate::discovery::{self, DiscoveryStrategy};
use crate::error::SyncError;
use crate::events::SyncEvent;
use crate::known_titles::KnownTitleSource;
use crate::pipeline::{self, RunState};
use crate::settings::SyncSettings;
use crate::store::DatasetStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Discovering,
    Fetching,
    Persisting,
}

impl std::fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Discovering => "discovering",
            Self::Fetching => "fetching",
            Self::Persisting => "persisting",
        })
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub movies: usize,
    pub series: usize,
    pub shorts: usize,
    pub actors: usize,
    /// Rows removed from the previous dataset.
    pub replaced_titles: usize,
    pub replaced_actors: usize,
    pub elapsed: Duration,
}

impl SyncReport {
    pub fn titles(&self) -> usize {
        self.movies + self.series + self.shorts
    }
}

pub struct SyncCoordinator {
    api: Arc<dyn CatalogApi>,
    store: Mutex<Box<dyn DatasetStore>>,
    known_titles: Arc<dyn KnownTitleSource>,
    settings: Arc<SyncSettings>,
    phase: Mutex<SyncPhase>,
    running: AtomicBool,
}

/// Marks the coordinator busy; resets it to idle when dropped, whether the
/// run finished or failed.
struct RunGuard<'a> {
    coordinator: &'a SyncCoordinator,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        *self
            .coordinator
            .phase
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = SyncPhase::Idle;
        self.coordinator.running.store(false, Ordering::Release);
    }
}

impl SyncCoordinator {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        store: Box<dyn DatasetStore>,
        known_titles: Arc<dyn KnownTitleSource>,
        settings: SyncSettings,
    ) -> Self {
        Self {
            api,
            store: Mutex::new(store),
            known_titles,
            settings: Arc::new(settings),
            phase: Mutex::new(SyncPhase::Idle),
            running: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    pub fn phase(&self) -> SyncPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Run a full sync using the current calendar year as the sweep end and
    /// release-year fallback.
    pub async fn run(&self, events: &UnboundedSender<SyncEvent>) -> Result<SyncReport, SyncError> {
        self.run_for_year(Utc::now().year(), events).await
    }

    /// Run a full sync with an explicit current year.
    pub async fn run_for_year(
        &self,
        current_year: i32,
        events: &UnboundedSender<SyncEvent>,
    ) -> Result<SyncReport, SyncError> {
        let _guard = self.begin()?;
        let started = Instant::now();
        let started_at = Utc::now().to_rfc3339();
        log::info!("Sync started (current year {})", current_year);

        self.set_phase(SyncPhase::Discovering, events);
        let known = self.known_titles.load().await?;
        let state = Arc::new(RunState::new(current_year, known));

        for strategy in DiscoveryStrategy::ALL {
            for &media in MediaKind::all() {
                self.set_phase(SyncPhase::Discovering, events);
                let api = self.api.as_ref();
                let ids = match strategy {
                    DiscoveryStrategy::Popular => {
                        discovery::popular_ids(api, media, &self.settings).await?
                    }
                    DiscoveryStrategy::TitleLookup => {
                        discovery::lookup_ids(api, &state.known, media, &self.settings).await?
                    }
                    DiscoveryStrategy::YearSweep => {
                        discovery::year_sweep_ids(api, &state, media, &self.settings).await?
                    }
                };
                let _ = events.send(SyncEvent::CandidatesFound {
                    media,
                    strategy,
                    candidates: ids.len(),
                });

                self.set_phase(SyncPhase::Fetching, events);
                pipeline::fetch_all(
                    self.api.clone(),
                    state.clone(),
                    self.settings.clone(),
                    media,
                    ids,
                    events,
                )
                .await?;
            }
        }

        self.set_phase(SyncPhase::Persisting, events);
        let (actors, titles) = RunState::into_dataset(state);
        let mut report = self.persist(&started_at, &actors, &titles)?;
        let _ = events.send(SyncEvent::Persisted {
            titles: titles.len(),
            actors: actors.len(),
        });

        report.elapsed = started.elapsed();
        log::info!(
            "Sync finished: {} titles ({} movies, {} series, {} shorts), {} actors in {:.1}s",
            report.titles(),
            report.movies,
            report.series,
            report.shorts,
            report.actors,
            report.elapsed.as_secs_f64()
        );
        let _ = events.send(SyncEvent::Done(report.clone()));
        Ok(report)
    }

    fn begin(&self) -> Result<RunGuard<'_>, SyncError> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SyncError::AlreadyRunning)?;
        Ok(RunGuard { coordinator: self })
    }

    fn set_phase(&self, phase: SyncPhase, events: &UnboundedSender<SyncEvent>) {
        let mut current = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != phase {
            *current = phase;
            log::debug!("Sync phase: {}", phase);
            let _ = events.send(SyncEvent::PhaseChanged(phase));
        }
    }

    /// Replace the stored dataset with `actors` and `titles`.
    fn persist(
        &self,
        started_at: &str,
        actors: &[Arc<Actor>],
        titles: &[Title],
    ) -> Result<SyncReport, SyncError> {
        let batch_size = self.settings.batch_size.max(1);
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);

        let deleted = store.delete_all()?;
        log::info!(
            "Removed previous dataset ({} titles, {} actors)",
            deleted.titles,
            deleted.actors
        );
        for batch in actors.chunks(batch_size) {
            store.insert_actors(batch)?;
        }
        for batch in titles.chunks(batch_size) {
            store.insert_titles(batch)?;
        }
        store.record_run(started_at, titles.len(), actors.len())?;

        let count = |kind: Kind| titles.iter().filter(|t| t.kind == kind).count();
        Ok(SyncReport {
            movies: count(Kind::Movie),
            series: count(Kind::Series),
            shorts: count(Kind::Short),
            actors: actors.len(),
            replaced_titles: deleted.titles,
            replaced_actors: deleted.actors,
            elapsed: Duration::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_totals_titles() {
        let report = SyncReport {
            movies: 3,
            series: 2,
            shorts: 1,
            ..SyncReport::default()
        };
        assert_eq!(report.titles(), 6);
    }

    #[test]
    fn phase_names() {
        assert_eq!(SyncPhase::Persisting.to_string(), "persisting");
        assert_eq!(SyncPhase::Idle.to_string(), "idle");
    }
}
