//! Candidate id discovery.
//!
//! Each strategy produces a set of upstream ids for one media kind; the
//! fetch pipeline consumes them. Listing calls run on a bounded stream and
//! the first failure aborts the strategy.

use std::collections::BTreeSet;

use futures::stream::{self, StreamExt, TryStreamExt};
use reelsync_core::{KnownTitles, MediaKind, TitleKey};
use reelsync_tmdb::{CatalogApi, ListPage};

use crate::error::PipelineError;
use crate::pipeline::RunState;
use crate::settings::SyncSettings;

/// The three ways a run enumerates candidates, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscoveryStrategy {
    Popular,
    TitleLookup,
    YearSweep,
}

impl DiscoveryStrategy {
    pub const ALL: [DiscoveryStrategy; 3] = [Self::Popular, Self::TitleLookup, Self::YearSweep];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::TitleLookup => "title lookup",
            Self::YearSweep => "year sweep",
        }
    }
}

impl std::fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ids from pages `1..=popular_pages` of the popularity listing.
///
/// Page 1 is read first to learn the page count; the rest run concurrently.
pub async fn popular_ids(
    api: &dyn CatalogApi,
    media: MediaKind,
    settings: &SyncSettings,
) -> Result<BTreeSet<u64>, PipelineError> {
    if settings.popular_pages == 0 {
        return Ok(BTreeSet::new());
    }
    let fetch_page = |page: u32| async move {
        api.list_popular(media, page, &settings.language, &settings.region)
            .await
            .map_err(|e| PipelineError::upstream("list popular", format!("{} page {page}", media), e))
    };

    let first = fetch_page(1).await?;
    let last_page = settings.popular_pages.min(first.total_pages.max(1));
    let mut ids: BTreeSet<u64> = first.ids.into_iter().collect();

    let rest: Vec<ListPage> = stream::iter(2..=last_page)
        .map(fetch_page)
        .buffer_unordered(settings.workers.max(1))
        .try_collect()
        .await?;
    ids.extend(rest.into_iter().flat_map(|p| p.ids));

    log::info!("Popular {}: {} candidates from {} pages", media.label(), ids.len(), last_page);
    Ok(ids)
}

/// Ids from a per-year popularity sweep, `first_year..=current_year`.
///
/// Years run concurrently. Within a year pages are read in order and the
/// year stops at the first page that adds nothing the run has not already
/// produced, at the last upstream page, or at `sweep_last_page`.
pub async fn year_sweep_ids(
    api: &dyn CatalogApi,
    state: &RunState,
    media: MediaKind,
    settings: &SyncSettings,
) -> Result<BTreeSet<u64>, PipelineError> {
    let years = settings.first_year..=state.current_year;
    let per_year: Vec<BTreeSet<u64>> = stream::iter(years)
        .map(|year| sweep_year(api, state, media, year, settings))
        .buffer_unordered(settings.workers.max(1))
        .try_collect()
        .await?;

    let ids: BTreeSet<u64> = per_year.into_iter().flatten().collect();
    log::info!(
        "Year sweep {} {}..={}: {} candidates",
        media.label(),
        settings.first_year,
        state.current_year,
        ids.len()
    );
    Ok(ids)
}

async fn sweep_year(
    api: &dyn CatalogApi,
    state: &RunState,
    media: MediaKind,
    year: i32,
    settings: &SyncSettings,
) -> Result<BTreeSet<u64>, PipelineError> {
    tokio::time::sleep(settings.pace()).await;

    let mut ids = BTreeSet::new();
    for page in 1..=settings.sweep_last_page {
        let listing = api
            .discover_by_year(media, year, page, &settings.language)
            .await
            .map_err(|e| {
                PipelineError::upstream("discover", format!("{media} {year} page {page}"), e)
            })?;
        let before = ids.len();
        ids.extend(
            listing
                .ids
                .iter()
                .copied()
                .filter(|&id| !state.contains(&TitleKey::new(media, id))),
        );
        if ids.len() == before || page >= listing.total_pages {
            log::debug!("Year {} {} stopped at page {}", year, media, page);
            break;
        }
    }
    Ok(ids)
}

/// Ids for the known top-rated and award-winning names of `media`.
///
/// Names without a search hit are skipped.
pub async fn lookup_ids(
    api: &dyn CatalogApi,
    known: &KnownTitles,
    media: MediaKind,
    settings: &SyncSettings,
) -> Result<BTreeSet<u64>, PipelineError> {
    let names: Vec<String> = known
        .lookup_names(media)
        .into_iter()
        .map(str::to_owned)
        .collect();
    if names.is_empty() {
        return Ok(BTreeSet::new());
    }

    let hits: Vec<Option<u64>> = stream::iter(names)
        .map(|name| search_one(api, media, name, settings))
        .buffer_unordered(settings.workers.max(1))
        .try_collect()
        .await?;

    let ids: BTreeSet<u64> = hits.into_iter().flatten().collect();
    log::info!("Title lookup {}: {} candidates", media.label(), ids.len());
    Ok(ids)
}

async fn search_one(
    api: &dyn CatalogApi,
    media: MediaKind,
    name: String,
    settings: &SyncSettings,
) -> Result<Option<u64>, PipelineError> {
    let hit = api
        .search_title(media, &name, &settings.language, &settings.region)
        .await
        .map_err(|e| PipelineError::upstream("search", format!("{media} '{name}'"), e))?;
    if hit.is_none() {
        log::debug!("No {} match for known title '{}'", media.label(), name);
    }
    Ok(hit)
}
