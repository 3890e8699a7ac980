//! In-memory catalog and store used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reelsync_core::{Actor, KnownTitles, MediaKind, Title, TitleKey};
use reelsync_db::{DeleteStats, OperationError};
use reelsync_import::{DatasetStore, SyncSettings};
use reelsync_tmdb::{
    CastMember, CatalogApi, Credits, CrewMember, Image, ListPage, ReviewEntry, ReviewPage,
    TitleDetails, TmdbError,
};
use tokio::sync::Semaphore;
use tokio::time::Duration;

/// Actor credited on every fake title.
pub const SHARED_ACTOR: u64 = 1;

pub struct FakeCatalog {
    pub popular: HashMap<MediaKind, Vec<u64>>,
    /// (media, year, page) -> ids; missing pages are empty.
    pub discover: HashMap<(MediaKind, i32, u32), Vec<u64>>,
    /// Lowercased search query -> id.
    pub search: HashMap<(MediaKind, String), u64>,
    pub names: HashMap<TitleKey, String>,
    pub fail_details: Option<TitleKey>,
    pub stall_details: Option<TitleKey>,
    /// Delay for every details call that neither fails nor stalls.
    pub details_delay: Duration,
    /// Popular listings wait here for a permit.
    pub gate: Semaphore,
    pub details_calls: Mutex<HashMap<TitleKey, usize>>,
    pub discover_calls: Mutex<Vec<(MediaKind, i32, u32)>>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            popular: HashMap::new(),
            discover: HashMap::new(),
            search: HashMap::new(),
            names: HashMap::new(),
            fail_details: None,
            stall_details: None,
            details_delay: Duration::ZERO,
            gate: Semaphore::new(Semaphore::MAX_PERMITS),
            details_calls: Mutex::new(HashMap::new()),
            discover_calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeCatalog {
    pub fn with_popular(mut self, media: MediaKind, ids: &[u64]) -> Self {
        self.popular.insert(media, ids.to_vec());
        self
    }

    pub fn with_discover(mut self, media: MediaKind, year: i32, page: u32, ids: &[u64]) -> Self {
        self.discover.insert((media, year, page), ids.to_vec());
        self
    }

    pub fn with_search(mut self, media: MediaKind, query: &str, id: u64) -> Self {
        self.search.insert((media, query.to_lowercase()), id);
        self
    }

    pub fn with_name(mut self, key: TitleKey, name: &str) -> Self {
        self.names.insert(key, name.to_string());
        self
    }

    pub fn details_calls(&self, key: TitleKey) -> usize {
        self.details_calls
            .lock()
            .unwrap()
            .get(&key)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_details_calls(&self) -> usize {
        self.details_calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_popular(
        &self,
        media: MediaKind,
        page: u32,
        _language: &str,
        _region: &str,
    ) -> Result<ListPage, TmdbError> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| TmdbError::Config(e.to_string()))?;
        let ids = if page == 1 {
            self.popular.get(&media).cloned().unwrap_or_default()
        } else {
            Vec::new()
        };
        Ok(ListPage {
            ids,
            page,
            total_pages: 1,
        })
    }

    async fn discover_by_year(
        &self,
        media: MediaKind,
        year: i32,
        page: u32,
        _language: &str,
    ) -> Result<ListPage, TmdbError> {
        self.discover_calls.lock().unwrap().push((media, year, page));
        Ok(ListPage {
            ids: self
                .discover
                .get(&(media, year, page))
                .cloned()
                .unwrap_or_default(),
            page,
            total_pages: 50,
        })
    }

    async fn get_details(
        &self,
        media: MediaKind,
        id: u64,
        _language: &str,
    ) -> Result<TitleDetails, TmdbError> {
        let key = TitleKey::new(media, id);
        *self.details_calls.lock().unwrap().entry(key).or_insert(0) += 1;

        if self.fail_details == Some(key) {
            return Err(TmdbError::ServerError {
                status: 500,
                message: "boom".into(),
            });
        }
        if self.stall_details == Some(key) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        } else if !self.details_delay.is_zero() {
            tokio::time::sleep(self.details_delay).await;
        }

        Ok(TitleDetails {
            id,
            name: self
                .names
                .get(&key)
                .cloned()
                .unwrap_or_else(|| format!("Title {key}")),
            overview: "A story.".into(),
            vote_average: 6.5,
            vote_count: 40,
            popularity: 5.0,
            release_date: Some("2020-06-01".into()),
            runtime: Some(100),
            episode_run_time: vec![45],
            genres: vec!["Drama".into()],
            creators: vec!["Showrunner".into()],
            ..TitleDetails::default()
        })
    }

    async fn get_credits(
        &self,
        _media: MediaKind,
        id: u64,
        _language: &str,
    ) -> Result<Credits, TmdbError> {
        Ok(Credits {
            cast: vec![
                CastMember {
                    id: SHARED_ACTOR,
                    name: "Common Face".into(),
                    character: format!("Role in {id}"),
                    profile_path: Some("/common.jpg".into()),
                },
                CastMember {
                    id: 1000 + id,
                    name: format!("Lead {id}"),
                    character: "Lead".into(),
                    profile_path: None,
                },
            ],
            crew: vec![CrewMember {
                id: 9,
                name: "Dana Director".into(),
                job: "Director".into(),
            }],
        })
    }

    async fn get_trailer(
        &self,
        _media: MediaKind,
        id: u64,
        _language: &str,
    ) -> Result<Option<String>, TmdbError> {
        Ok(Some(format!("https://www.youtube.com/watch?v=t{id}")))
    }

    async fn get_photos(
        &self,
        _media: MediaKind,
        id: u64,
        _language: &str,
    ) -> Result<Vec<Image>, TmdbError> {
        Ok(vec![Image {
            file_path: format!("/backdrop{id}.jpg"),
            vote_average: 5.0,
        }])
    }

    async fn get_keywords(&self, _media: MediaKind, _id: u64) -> Result<Vec<String>, TmdbError> {
        Ok(vec![])
    }

    async fn get_reviews(
        &self,
        _media: MediaKind,
        _id: u64,
        _language: &str,
        page: u32,
    ) -> Result<ReviewPage, TmdbError> {
        Ok(ReviewPage {
            results: vec![ReviewEntry {
                author: format!("reviewer {page}"),
                avatar_path: None,
                content: "Fine.".into(),
                rating: Some(6.0),
                created_at: None,
            }],
            page,
            total_pages: 1,
        })
    }

    async fn get_certifications(
        &self,
        _media: MediaKind,
        _id: u64,
    ) -> Result<Vec<String>, TmdbError> {
        Ok(vec!["PG-13".into()])
    }

    async fn search_title(
        &self,
        media: MediaKind,
        title: &str,
        _language: &str,
        _region: &str,
    ) -> Result<Option<u64>, TmdbError> {
        Ok(self.search.get(&(media, title.to_lowercase())).copied())
    }
}

/// What a [`RecordingStore`] was asked to do.
#[derive(Debug, Default)]
pub struct Recorded {
    /// Operation log: "delete", "actors:<n>", "titles:<n>", "run".
    pub ops: Vec<String>,
    pub actors: Vec<Arc<Actor>>,
    pub titles: Vec<Title>,
}

/// Store that keeps everything in memory behind a shared handle.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub recorded: Arc<Mutex<Recorded>>,
}

impl DatasetStore for RecordingStore {
    fn delete_all(&mut self) -> Result<DeleteStats, OperationError> {
        let mut r = self.recorded.lock().unwrap();
        let stats = DeleteStats {
            titles: r.titles.len(),
            actors: r.actors.len(),
        };
        r.ops.push("delete".into());
        r.titles.clear();
        r.actors.clear();
        Ok(stats)
    }

    fn insert_actors(&mut self, actors: &[Arc<Actor>]) -> Result<usize, OperationError> {
        let mut r = self.recorded.lock().unwrap();
        r.ops.push(format!("actors:{}", actors.len()));
        r.actors.extend(actors.iter().cloned());
        Ok(actors.len())
    }

    fn insert_titles(&mut self, titles: &[Title]) -> Result<usize, OperationError> {
        let mut r = self.recorded.lock().unwrap();
        r.ops.push(format!("titles:{}", titles.len()));
        r.titles.extend(titles.iter().cloned());
        Ok(titles.len())
    }

    fn record_run(
        &mut self,
        _started_at: &str,
        _titles: usize,
        _actors: usize,
    ) -> Result<(), OperationError> {
        self.recorded.lock().unwrap().ops.push("run".into());
        Ok(())
    }
}

/// Fast settings: no pacing, single-year sweep over 2020.
pub fn test_settings() -> SyncSettings {
    SyncSettings {
        workers: 4,
        pace_ms: 0,
        item_timeout_secs: 5,
        popular_pages: 3,
        sweep_last_page: 10,
        first_year: 2020,
        review_pages: 3,
        batch_size: 500,
        ..SyncSettings::default()
    }
}

pub fn known_movies(names: &[&str]) -> KnownTitles {
    let mut known = KnownTitles::default();
    for name in names {
        known.top_rated_movies.insert(name);
    }
    known
}
