//! Per-title fetch and assembly.
//!
//! [`build_title`] issues the seven upstream calls for one title and
//! [`assemble`] turns their results into a scored [`Title`]. Assembly is
//! synchronous and touches shared state only through the actor registry.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use reelsync_core::{CastCredit, Genre, MediaKind, Review, Title, TitleKey};
use reelsync_scoring::{TitleSignals, classify_kind, score};
use reelsync_tmdb::{CatalogApi, Credits, Image, ReviewEntry, TitleDetails, TmdbError, image_url};

use crate::error::PipelineError;
use crate::pipeline::RunState;
use crate::settings::SyncSettings;

/// Episode runtime assumed for a series that lists none.
pub const DEFAULT_SERIES_DURATION: u32 = 30;

const DIRECTOR_JOBS: [&str; 2] = ["Director", "Producer"];

/// Raw upstream results for one title.
#[derive(Debug, Clone, Default)]
pub struct FetchedParts {
    pub details: TitleDetails,
    pub credits: Credits,
    pub trailer: Option<String>,
    pub photos: Vec<Image>,
    pub keywords: Vec<String>,
    pub certifications: Vec<String>,
    pub reviews: Vec<ReviewEntry>,
}

/// Fetch everything needed for one title and assemble it.
pub async fn build_title(
    api: &dyn CatalogApi,
    key: TitleKey,
    state: &RunState,
    settings: &SyncSettings,
) -> Result<Title, PipelineError> {
    let parts = fetch_parts(api, key, settings).await?;
    Ok(assemble(key, parts, state, settings.photo_limit))
}

async fn fetch_parts(
    api: &dyn CatalogApi,
    key: TitleKey,
    settings: &SyncSettings,
) -> Result<FetchedParts, PipelineError> {
    let TitleKey { media, source_id: id } = key;
    let lang = settings.language.as_str();
    let wrap = |op: &'static str| move |e: TmdbError| PipelineError::upstream(op, key, e);

    let (details, credits, trailer, photos, keywords, certifications, reviews) = tokio::try_join!(
        async { api.get_details(media, id, lang).await.map_err(wrap("details")) },
        async { api.get_credits(media, id, lang).await.map_err(wrap("credits")) },
        async { api.get_trailer(media, id, lang).await.map_err(wrap("trailer")) },
        async { api.get_photos(media, id, lang).await.map_err(wrap("photos")) },
        async { api.get_keywords(media, id).await.map_err(wrap("keywords")) },
        async { api.get_certifications(media, id).await.map_err(wrap("certifications")) },
        async {
            fetch_reviews(api, media, id, lang, settings.review_pages)
                .await
                .map_err(wrap("reviews"))
        },
    )?;

    Ok(FetchedParts {
        details,
        credits,
        trailer,
        photos,
        keywords,
        certifications,
        reviews,
    })
}

/// Read review pages in order until the last page or `max_pages`.
async fn fetch_reviews(
    api: &dyn CatalogApi,
    media: MediaKind,
    id: u64,
    language: &str,
    max_pages: u32,
) -> Result<Vec<ReviewEntry>, TmdbError> {
    let mut reviews = Vec::new();
    for page in 1..=max_pages {
        let batch = api.get_reviews(media, id, language, page).await?;
        let last = batch.results.is_empty() || batch.page >= batch.total_pages;
        reviews.extend(batch.results);
        if last {
            break;
        }
    }
    Ok(reviews)
}

/// Build a scored title from its upstream parts.
pub fn assemble(key: TitleKey, parts: FetchedParts, state: &RunState, photo_limit: usize) -> Title {
    let FetchedParts {
        details,
        credits,
        trailer,
        photos,
        keywords,
        certifications,
        reviews,
    } = parts;
    let media = key.media;

    let mut title = Title::new(key, details.name);
    title.overview = details.overview;
    title.rating = details.vote_average;
    title.vote_count = details.vote_count;
    title.popularity = details.popularity;
    title.release_year = parse_release_year(details.release_date.as_deref(), state.current_year);
    title.duration = match media {
        MediaKind::Movie => details.runtime.unwrap_or(0),
        MediaKind::Series => details
            .episode_run_time
            .first()
            .copied()
            .unwrap_or(DEFAULT_SERIES_DURATION),
    };
    title.poster = details.poster_path.as_deref().map(image_url);
    title.trailer = trailer;
    title.photos = top_photos(photos, photo_limit);
    title.director = match media {
        MediaKind::Movie => credits
            .crew
            .iter()
            .find(|c| DIRECTOR_JOBS.iter().any(|j| c.job.eq_ignore_ascii_case(j)))
            .map(|c| c.name.clone()),
        MediaKind::Series => details.creators.first().cloned(),
    };
    title.genres = details
        .genres
        .iter()
        .flat_map(|name| {
            let mapped = Genre::from_upstream_name(name);
            if mapped.is_empty() {
                log::debug!("{}: dropping unknown genre '{}'", key, name);
            }
            mapped
        })
        .collect();
    title.cast = credits
        .cast
        .into_iter()
        .map(|member| {
            let actor = state.actors.resolve(member.id, || {
                reelsync_core::Actor::new(
                    member.id,
                    member.name.clone(),
                    member.profile_path.as_deref().map(image_url),
                )
            });
            CastCredit {
                actor,
                role: member.character,
            }
        })
        .collect();
    title.reviews = reviews
        .into_iter()
        .map(|r| Review {
            author: r.author,
            avatar: r.avatar_path.as_deref().map(image_url),
            content: r.content,
            rating: r.rating,
            created_at: r.created_at,
        })
        .collect();

    let signals = TitleSignals {
        name: &title.name,
        overview: &title.overview,
        keywords: &keywords,
        rating: title.rating,
        vote_count: title.vote_count,
        popularity: title.popularity,
        release_year: title.release_year,
        budget: details.budget,
        revenue: details.revenue,
    };
    let scores = score(media, &signals, &title.genres, &certifications, &state.known);
    title.categories = scores.categories;
    title.moods = scores.moods;
    title.top_lists = scores.top_lists;
    title.kind = classify_kind(media, title.duration);

    title
}

/// Year of a well-formed `YYYY-MM-DD` date, else `current_year`.
pub fn parse_release_year(date: Option<&str>, current_year: i32) -> i32 {
    date.filter(|d| d.len() == 10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.year())
        .unwrap_or(current_year)
}

fn top_photos(mut photos: Vec<Image>, limit: usize) -> BTreeSet<String> {
    photos.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
    photos
        .iter()
        .take(limit)
        .map(|p| image_url(&p.file_path))
        .collect()
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
