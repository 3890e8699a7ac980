use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reelsync_core::MediaKind;
use serde::de::DeserializeOwned;
use tokio::time::Duration;

use crate::api::{CatalogApi, Credits, Image, ListPage, ReviewPage, TitleDetails};
use crate::credentials::Credentials;
use crate::error::TmdbError;
use crate::media::{best_match, pick_trailer};
use crate::types::{
    AuthenticationResponse, ContentRatingsResponse, CreditsResponse, DetailsResponse,
    ImagesResponse, KeywordsResponse, PagedIds, ReleaseDatesResponse, ReviewsResponse,
    VideosResponse,
};

const BASE_URL: &str = "https://api.themoviedb.org/3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 40;

/// HTTP client for the TMDB v3 API with a client-side request quota.
pub struct TmdbClient {
    http: reqwest::Client,
    creds: Credentials,
    base_url: String,
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl TmdbClient {
    pub fn new(creds: Credentials, requests_per_second: u32) -> Result<Self, TmdbError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let per_second = NonZeroU32::new(requests_per_second).ok_or_else(|| {
            TmdbError::Config("requests_per_second must be greater than zero".to_string())
        })?;
        Ok(Self {
            http,
            creds,
            base_url: BASE_URL.to_string(),
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(per_second))),
        })
    }

    /// Point the client at a different API root (proxies, staging).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check that the token is accepted.
    pub async fn check_auth(&self) -> Result<(), TmdbError> {
        let resp: AuthenticationResponse = self.get("/authentication", &[]).await?;
        if resp.success {
            Ok(())
        } else {
            Err(TmdbError::Unauthorized)
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        self.limiter.until_ready().await;

        log::debug!("GET {}", path);
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.creds.api_token)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TmdbError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TmdbError::RateLimit);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TmdbError::NotFound {
                path: path.to_string(),
            });
        }

        let text = resp.text().await?;
        if !status.is_success() {
            return Err(TmdbError::ServerError {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&text).map_err(|e| TmdbError::Decode {
            path: path.to_string(),
            message: format!("{e}. Response: {}", text.chars().take(200).collect::<String>()),
        })
    }
}

fn segment(media: MediaKind) -> &'static str {
    match media {
        MediaKind::Movie => "movie",
        MediaKind::Series => "tv",
    }
}

#[async_trait]
impl CatalogApi for TmdbClient {
    async fn list_popular(
        &self,
        media: MediaKind,
        page: u32,
        language: &str,
        region: &str,
    ) -> Result<ListPage, TmdbError> {
        let page = page.to_string();
        let raw: PagedIds = self
            .get(
                &format!("/{}/popular", segment(media)),
                &[("page", page.as_str()), ("language", language), ("region", region)],
            )
            .await?;
        Ok(raw.into())
    }

    async fn discover_by_year(
        &self,
        media: MediaKind,
        year: i32,
        page: u32,
        language: &str,
    ) -> Result<ListPage, TmdbError> {
        let page = page.to_string();
        let year = year.to_string();
        let year_param = match media {
            MediaKind::Movie => "primary_release_year",
            MediaKind::Series => "first_air_date_year",
        };
        let raw: PagedIds = self
            .get(
                &format!("/discover/{}", segment(media)),
                &[
                    ("page", page.as_str()),
                    ("language", language),
                    (year_param, year.as_str()),
                    ("sort_by", "popularity.desc"),
                ],
            )
            .await?;
        Ok(raw.into())
    }

    async fn get_details(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<TitleDetails, TmdbError> {
        let raw: DetailsResponse = self
            .get(&format!("/{}/{}", segment(media), id), &[("language", language)])
            .await?;
        Ok(raw.into())
    }

    async fn get_credits(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<Credits, TmdbError> {
        let raw: CreditsResponse = self
            .get(
                &format!("/{}/{}/credits", segment(media), id),
                &[("language", language)],
            )
            .await?;
        Ok(raw.into())
    }

    async fn get_trailer(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<Option<String>, TmdbError> {
        let raw: VideosResponse = self
            .get(
                &format!("/{}/{}/videos", segment(media), id),
                &[("language", language)],
            )
            .await?;
        Ok(pick_trailer(&raw.results))
    }

    async fn get_photos(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
    ) -> Result<Vec<Image>, TmdbError> {
        // Untagged backdrops are the majority; include them alongside the
        // requested language.
        let languages = format!("{language},null");
        let raw: ImagesResponse = self
            .get(
                &format!("/{}/{}/images", segment(media), id),
                &[("include_image_language", languages.as_str())],
            )
            .await?;
        Ok(raw.backdrops.into_iter().map(Image::from).collect())
    }

    async fn get_keywords(&self, media: MediaKind, id: u64) -> Result<Vec<String>, TmdbError> {
        let raw: KeywordsResponse = self
            .get(&format!("/{}/{}/keywords", segment(media), id), &[])
            .await?;
        Ok(raw.keywords.into_iter().map(|k| k.name).collect())
    }

    async fn get_reviews(
        &self,
        media: MediaKind,
        id: u64,
        language: &str,
        page: u32,
    ) -> Result<ReviewPage, TmdbError> {
        let page = page.to_string();
        let raw: ReviewsResponse = self
            .get(
                &format!("/{}/{}/reviews", segment(media), id),
                &[("language", language), ("page", page.as_str())],
            )
            .await?;
        Ok(raw.into())
    }

    async fn get_certifications(
        &self,
        media: MediaKind,
        id: u64,
    ) -> Result<Vec<String>, TmdbError> {
        let certs = match media {
            MediaKind::Movie => {
                let raw: ReleaseDatesResponse = self
                    .get(&format!("/movie/{}/release_dates", id), &[])
                    .await?;
                raw.results
                    .into_iter()
                    .flat_map(|country| country.release_dates)
                    .map(|r| r.certification)
                    .collect()
            }
            MediaKind::Series => {
                let raw: ContentRatingsResponse = self
                    .get(&format!("/tv/{}/content_ratings", id), &[])
                    .await?;
                raw.results.into_iter().map(|r| r.rating).collect()
            }
        };
        Ok(certs)
    }

    async fn search_title(
        &self,
        media: MediaKind,
        title: &str,
        language: &str,
        region: &str,
    ) -> Result<Option<u64>, TmdbError> {
        let raw: PagedIds = self
            .get(
                &format!("/search/{}", segment(media)),
                &[("query", title), ("language", language), ("region", region)],
            )
            .await?;
        Ok(best_match(title, &raw.results))
    }
}
