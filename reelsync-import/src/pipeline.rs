//! Bounded-concurrency fetch of candidate titles.
//!
//! [`fetch_all`] turns a set of candidate ids into titles in the run's shared
//! [`RunState`]. Each candidate runs as its own tokio task; at most
//! `workers` are in flight. A worker waits the pacing delay, then fetches and
//! assembles one title under a per-item timeout.
//!
//! The first failure sets a cancel flag: workers that have not started their
//! fetch return immediately, in-flight workers finish, and the error is
//! returned once the stream has drained.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use futures::stream::{self, StreamExt};
use reelsync_core::{Actor, KnownTitles, MediaKind, Title, TitleKey};
use reelsync_tmdb::CatalogApi;
use tokio::sync::mpsc::UnboundedSender;

use crate::error::PipelineError;
use crate::events::SyncEvent;
use crate::resolver::ActorRegistry;
use crate::settings::SyncSettings;
use crate::transform;

/// Everything one sync run accumulates.
///
/// Shared by every worker of every phase through an `Arc`. `titles` doubles
/// as the produced-identity set that later strategies check before fetching.
#[derive(Debug)]
pub struct RunState {
    /// Fallback release year for titles without a usable date.
    pub current_year: i32,
    pub known: KnownTitles,
    pub actors: ActorRegistry,
    pub titles: DashMap<TitleKey, Title>,
}

impl RunState {
    pub fn new(current_year: i32, known: KnownTitles) -> Self {
        Self {
            current_year,
            known,
            actors: ActorRegistry::new(),
            titles: DashMap::new(),
        }
    }

    pub fn contains(&self, key: &TitleKey) -> bool {
        self.titles.contains_key(key)
    }

    /// Actors ordered by id and titles ordered by key.
    ///
    /// Moves the titles out when this is the last reference, which is the
    /// case once every phase has joined.
    pub fn into_dataset(state: Arc<Self>) -> (Vec<Arc<Actor>>, Vec<Title>) {
        let actors = state.actors.snapshot();
        let mut titles: Vec<Title> = match Arc::try_unwrap(state) {
            Ok(state) => state.titles.into_iter().map(|(_, t)| t).collect(),
            Err(shared) => shared.titles.iter().map(|e| e.value().clone()).collect(),
        };
        titles.sort_by_key(|t| t.key);
        (actors, titles)
    }
}

/// Counts from one [`fetch_all`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchStats {
    pub fetched: usize,
    /// Candidates another strategy (or worker) had already produced.
    pub skipped: usize,
}

enum FetchOutcome {
    Fetched { key: TitleKey, name: String },
    Duplicate,
    Cancelled,
    Failed(PipelineError),
}

/// Fetch and assemble every candidate not already in `state`.
pub async fn fetch_all(
    api: Arc<dyn CatalogApi>,
    state: Arc<RunState>,
    settings: Arc<SyncSettings>,
    media: MediaKind,
    ids: BTreeSet<u64>,
    events: &UnboundedSender<SyncEvent>,
) -> Result<FetchStats, PipelineError> {
    let total = ids.len();
    let max_workers = settings.workers.max(1);
    let cancel = Arc::new(AtomicBool::new(false));

    let pool_cancel = cancel.clone();
    let mut stream = stream::iter(ids)
        .map(move |id| {
            let key = TitleKey::new(media, id);
            let api = api.clone();
            let state = state.clone();
            let settings = settings.clone();
            let cancel = pool_cancel.clone();
            // Spawned so each fetch progresses independently of how the
            // stream is polled; buffer_unordered still bounds concurrency.
            tokio::spawn(async move {
                if cancel.load(Ordering::Relaxed) {
                    return FetchOutcome::Cancelled;
                }
                if state.contains(&key) {
                    return FetchOutcome::Duplicate;
                }
                tokio::time::sleep(settings.pace()).await;
                if cancel.load(Ordering::Relaxed) {
                    return FetchOutcome::Cancelled;
                }

                log::debug!("Fetching {}", key);
                match tokio::time::timeout(
                    settings.item_timeout(),
                    transform::build_title(api.as_ref(), key, &state, &settings),
                )
                .await
                {
                    Ok(Ok(title)) => {
                        let name = title.name.clone();
                        state.titles.insert(key, title);
                        FetchOutcome::Fetched { key, name }
                    }
                    Ok(Err(e)) => {
                        cancel.store(true, Ordering::Relaxed);
                        FetchOutcome::Failed(e)
                    }
                    Err(_) => {
                        cancel.store(true, Ordering::Relaxed);
                        FetchOutcome::Failed(PipelineError::Timeout {
                            op: "fetch",
                            target: key.to_string(),
                            secs: settings.item_timeout_secs,
                        })
                    }
                }
            })
        })
        .buffer_unordered(max_workers);

    let mut stats = FetchStats::default();
    let mut first_error: Option<PipelineError> = None;

    while let Some(joined) = stream.next().await {
        match joined {
            Ok(FetchOutcome::Fetched { key, name }) => {
                stats.fetched += 1;
                let _ = events.send(SyncEvent::TitleFetched {
                    key,
                    name,
                    done: stats.fetched + stats.skipped,
                    total,
                });
            }
            Ok(FetchOutcome::Duplicate) => stats.skipped += 1,
            Ok(FetchOutcome::Cancelled) => {}
            Ok(FetchOutcome::Failed(e)) => {
                if first_error.is_none() {
                    log::error!("Aborting {} fetch: {}", media.label(), e);
                    first_error = Some(e);
                } else {
                    log::debug!("Further failure after abort: {}", e);
                }
            }
            Err(join_err) => {
                cancel.store(true, Ordering::Relaxed);
                log::error!("Fetch task failed: {}", join_err);
                first_error.get_or_insert(PipelineError::Worker(join_err.to_string()));
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => {
            log::info!(
                "Fetched {} {} titles ({} already present)",
                stats.fetched,
                media.label(),
                stats.skipped
            );
            Ok(stats)
        }
    }
}
