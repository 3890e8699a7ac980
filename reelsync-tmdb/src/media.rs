//! URL rendering and selection helpers for images, trailers and search hits.

use crate::types::{ListItem, Video};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Render an upstream image path as an absolute URL.
///
/// Paths that are already absolute are returned unchanged (review avatars
/// sometimes arrive as `/https://...` pointing at an external host).
pub fn image_url(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if path.starts_with('/') {
        format!("{IMAGE_BASE_URL}{path}")
    } else {
        format!("{IMAGE_BASE_URL}/{path}")
    }
}

/// First YouTube trailer, else first YouTube teaser, rendered as a watch URL.
pub fn pick_trailer(videos: &[Video]) -> Option<String> {
    ["Trailer", "Teaser"].iter().find_map(|kind| {
        videos
            .iter()
            .find(|v| v.site == "YouTube" && v.video_type == *kind && !v.key.is_empty())
            .map(|v| format!("{YOUTUBE_WATCH_URL}{}", v.key))
    })
}

/// Choose the search hit for `query`: an exact (case-insensitive) title
/// match wins, otherwise the first result.
pub fn best_match(query: &str, results: &[ListItem]) -> Option<u64> {
    let wanted = query.trim().to_lowercase();
    results
        .iter()
        .find(|r| {
            r.title
                .as_deref()
                .is_some_and(|t| t.trim().to_lowercase() == wanted)
        })
        .or_else(|| results.first())
        .map(|r| r.id)
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
