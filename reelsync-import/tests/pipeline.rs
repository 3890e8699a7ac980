mod common;

use std::collections::BTreeSet;
use std::sync::Arc;

use common::*;
use reelsync_core::{KnownTitles, MediaKind, Title, TitleKey};
use reelsync_import::discovery::{lookup_ids, popular_ids, year_sweep_ids};
use reelsync_import::*;
use reelsync_tmdb::CatalogApi;
use tokio::sync::mpsc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn fetch_all_skips_already_produced_ids() {
    let api = Arc::new(FakeCatalog::default());
    let state = Arc::new(RunState::new(2020, KnownTitles::default()));
    let existing = TitleKey::movie(2);
    state.titles.insert(existing, Title::new(existing, "Already Here"));

    let (tx, _rx) = mpsc::unbounded_channel();
    let stats = fetch_all(
        api.clone() as Arc<dyn CatalogApi>,
        state.clone(),
        Arc::new(test_settings()),
        MediaKind::Movie,
        BTreeSet::from([1, 2, 3]),
        &tx,
    )
    .await
    .unwrap();

    assert_eq!(stats, FetchStats { fetched: 2, skipped: 1 });
    assert_eq!(api.details_calls(existing), 0);
    assert_eq!(state.titles.get(&existing).unwrap().name, "Already Here");
    assert_eq!(state.titles.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_fetches_share_one_actor() {
    let api = Arc::new(FakeCatalog::default());
    let state = Arc::new(RunState::new(2020, KnownTitles::default()));
    let (tx, _rx) = mpsc::unbounded_channel();
    fetch_all(
        api as Arc<dyn CatalogApi>,
        state.clone(),
        Arc::new(SyncSettings {
            workers: 8,
            ..test_settings()
        }),
        MediaKind::Movie,
        (1..=40).collect(),
        &tx,
    )
    .await
    .unwrap();

    let shared = state.actors.get(SHARED_ACTOR).unwrap();
    for entry in state.titles.iter() {
        assert!(Arc::ptr_eq(&entry.value().cast[0].actor, &shared));
    }
    assert_eq!(state.actors.len(), 41);
}

#[tokio::test]
async fn year_sweep_filters_ids_already_in_state() {
    let api = FakeCatalog::default()
        .with_discover(MediaKind::Movie, 2019, 1, &[1, 2])
        .with_discover(MediaKind::Movie, 2019, 2, &[1, 2])
        .with_discover(MediaKind::Movie, 2020, 1, &[10])
        .with_discover(MediaKind::Movie, 2020, 2, &[11]);
    let state = RunState::new(2020, KnownTitles::default());
    state
        .titles
        .insert(TitleKey::movie(11), Title::new(TitleKey::movie(11), "Seen"));
    let settings = SyncSettings {
        first_year: 2019,
        ..test_settings()
    };

    let ids = year_sweep_ids(&api, &state, MediaKind::Movie, &settings)
        .await
        .unwrap();
    assert_eq!(ids, BTreeSet::from([1, 2, 10]));

    let mut calls = api.discover_calls.lock().unwrap().clone();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            (MediaKind::Movie, 2019, 1),
            (MediaKind::Movie, 2019, 2),
            (MediaKind::Movie, 2020, 1),
            (MediaKind::Movie, 2020, 2),
        ]
    );
}

#[tokio::test]
async fn year_sweep_with_floor_after_current_year_is_empty() {
    let api = FakeCatalog::default();
    let state = RunState::new(2020, KnownTitles::default());
    let settings = SyncSettings {
        first_year: 2021,
        ..test_settings()
    };
    let ids = year_sweep_ids(&api, &state, MediaKind::Series, &settings)
        .await
        .unwrap();
    assert!(ids.is_empty());
    assert!(api.discover_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn lookup_ignores_unmatched_names() {
    let api = FakeCatalog::default().with_search(MediaKind::Movie, "Heat", 949);
    let mut known = known_movies(&["Heat", "Nonexistent Film"]);
    known.award_winning_movies.insert("heat");

    let ids = lookup_ids(&api, &known, MediaKind::Movie, &test_settings())
        .await
        .unwrap();
    assert_eq!(ids, BTreeSet::from([949]));

    let series = lookup_ids(&api, &known, MediaKind::Series, &test_settings())
        .await
        .unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn popular_reads_first_page_only_when_listing_is_short() {
    let api = FakeCatalog::default().with_popular(MediaKind::Series, &[5, 6, 5]);
    let ids = popular_ids(&api, MediaKind::Series, &test_settings())
        .await
        .unwrap();
    assert_eq!(ids, BTreeSet::from([5, 6]));
}
