//! Raw TMDB response shapes and their conversion into the neutral DTOs.
//!
//! Movie and TV endpoints return near-identical payloads with different
//! field names; `alias` attributes let one struct read both.

use serde::Deserialize;

use crate::api::{CastMember, Credits, CrewMember, Image, ListPage, ReviewEntry, ReviewPage, TitleDetails};

#[derive(Debug, Deserialize)]
pub struct PagedIds {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<ListItem>,
}

#[derive(Debug, Deserialize)]
pub struct ListItem {
    pub id: u64,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
}

impl From<PagedIds> for ListPage {
    fn from(raw: PagedIds) -> Self {
        Self {
            ids: raw.results.into_iter().map(|r| r.id).collect(),
            page: raw.page,
            total_pages: raw.total_pages,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NamedItem {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub id: u64,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default, alias = "first_air_date")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<NamedItem>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub created_by: Vec<NamedItem>,
}

impl From<DetailsResponse> for TitleDetails {
    fn from(raw: DetailsResponse) -> Self {
        Self {
            id: raw.id,
            name: raw.title,
            overview: raw.overview.unwrap_or_default(),
            vote_average: raw.vote_average,
            vote_count: raw.vote_count,
            popularity: raw.popularity,
            release_date: raw.release_date.filter(|d| !d.is_empty()),
            runtime: raw.runtime,
            episode_run_time: raw.episode_run_time,
            poster_path: raw.poster_path,
            genres: raw.genres.into_iter().map(|g| g.name).collect(),
            budget: raw.budget,
            revenue: raw.revenue,
            creators: raw.created_by.into_iter().map(|c| c.name).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<RawCast>,
    #[serde(default)]
    pub crew: Vec<RawCrew>,
}

#[derive(Debug, Deserialize)]
pub struct RawCast {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCrew {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
}

impl From<CreditsResponse> for Credits {
    fn from(raw: CreditsResponse) -> Self {
        Self {
            cast: raw
                .cast
                .into_iter()
                .map(|c| CastMember {
                    id: c.id,
                    name: c.name,
                    character: c.character.unwrap_or_default(),
                    profile_path: c.profile_path,
                })
                .collect(),
            crew: raw
                .crew
                .into_iter()
                .map(|c| CrewMember {
                    id: c.id,
                    name: c.name,
                    job: c.job.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub backdrops: Vec<RawImage>,
}

#[derive(Debug, Deserialize)]
pub struct RawImage {
    pub file_path: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl From<RawImage> for Image {
    fn from(raw: RawImage) -> Self {
        Self {
            file_path: raw.file_path,
            vote_average: raw.vote_average,
        }
    }
}

/// Movie keywords arrive under `keywords`, TV keywords under `results`.
#[derive(Debug, Deserialize)]
pub struct KeywordsResponse {
    #[serde(default, alias = "results")]
    pub keywords: Vec<NamedItem>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<RawReview>,
}

#[derive(Debug, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_details: Option<AuthorDetails>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorDetails {
    #[serde(default)]
    pub avatar_path: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl From<ReviewsResponse> for ReviewPage {
    fn from(raw: ReviewsResponse) -> Self {
        Self {
            page: raw.page,
            total_pages: raw.total_pages,
            results: raw
                .results
                .into_iter()
                .map(|r| {
                    let (avatar_path, rating) = match r.author_details {
                        Some(d) => (d.avatar_path, d.rating),
                        None => (None, None),
                    };
                    ReviewEntry {
                        author: r.author,
                        avatar_path,
                        content: r.content,
                        rating,
                        created_at: r.created_at,
                    }
                })
                .collect(),
        }
    }
}

/// `/movie/{id}/release_dates`
#[derive(Debug, Deserialize)]
pub struct ReleaseDatesResponse {
    #[serde(default)]
    pub results: Vec<CountryReleases>,
}

#[derive(Debug, Deserialize)]
pub struct CountryReleases {
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseDate {
    #[serde(default)]
    pub certification: String,
}

/// `/tv/{id}/content_ratings`
#[derive(Debug, Deserialize)]
pub struct ContentRatingsResponse {
    #[serde(default)]
    pub results: Vec<ContentRating>,
}

#[derive(Debug, Deserialize)]
pub struct ContentRating {
    #[serde(default)]
    pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticationResponse {
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
