//! The upstream catalog seen by the pipeline.
//!
//! [`CatalogApi`] is the seam between the ingestion pipeline and the network.
//! [`TmdbClient`](crate::TmdbClient) implements it over HTTP; tests implement
//! it in memory. The DTOs here are neutral: they carry only what the
//! pipeline reads, not the full upstream payloads.

use async_trait::async_trait;
use reelsync_core::MediaKind;

use crate::error::TmdbError;

/// One page of a listing (popular, discover, search).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPage {
    pub ids: Vec<u64>,
    pub page: u32,
    pub total_pages: u32,
}

/// Core title metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleDetails {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub vote_average: f64,
    pub vote_count: u32,
    pub popularity: f64,
    /// Upstream release (or first air) date, unparsed.
    pub release_date: Option<String>,
    /// Movie runtime in minutes.
    pub runtime: Option<u32>,
    /// Series episode runtimes in minutes.
    pub episode_run_time: Vec<u32>,
    /// Relative poster path.
    pub poster_path: Option<String>,
    /// Upstream genre names.
    pub genres: Vec<String>,
    pub budget: u64,
    pub revenue: u64,
    /// Series creators, in listed order.
    pub creators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    /// Relative file path.
    pub file_path: String,
    pub vote_average: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewEntry {
    pub author: String,
    /// Avatar path as returned upstream; may be relative or absolute.
    pub avatar_path: Option<String>,
    pub content: String,
    pub rating: Option<f64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPage {
    pub results: Vec<ReviewEntry>,
    pub page: u32,
    pub total_pages: u32,
}

/// Typed operations against the upstream catalog.
///
/// Every call is independent and may fail with a [`TmdbError`]; callers in
/// the pipeline treat any failure as fatal for the run. Retry, if any,
/// belongs inside the implementation.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_popular(
        &self,
        media: MediaKind,
        page: u32,
        language: &str,
        region: &str,
    ) -> Result<ListPage, TmdbError>;

    /// Popularity-ordered listing restricted to one release year.
    async fn discover_by_year(
        &self,
        media: MediaKind,
        year: i32,
        page: u32,
        language: &str,
    ) -> Result<ListPage, TmdbError>;

    async fn get_details(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<TitleDetails, TmdbError>;

    async fn get_credits(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<Credits, TmdbError>;

    /// Absolute trailer URL, or `None` when no trailer or teaser exists.
    async fn get_trailer(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<Option<String>, TmdbError>;

    /// Backdrop images.
    async fn get_photos(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<Vec<Image>, TmdbError>;

    async fn get_keywords(&self, media: MediaKind, id: u64) -> Result<Vec<String>, TmdbError>;

    async fn get_reviews(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
        page: u32,
    ) -> Result<ReviewPage, TmdbError>;

    /// Every certification string attached to the title's releases, across
    /// all countries, duplicates included.
    async fn get_certifications(&self, media: MediaKind, id: u64)
    -> Result<Vec<String>, TmdbError>;

    /// Best-matching id for a title string, if any.
    async fn search_title(
        &self,
        media: MediaKind,
        title: &str,
        language: &str,
        region: &str,
    ) -> Result<Option<u64>, TmdbError>;
}
