//! Deterministic tagging for catalog titles.
//!
//! Every function here is pure: the same inputs always produce the same tag
//! sets, independent of input order. Rule tables live in [`rules`].

pub mod categories;
pub mod kind;
pub mod moods;
pub mod rules;
pub mod top_lists;

pub use categories::classify_categories;
pub use kind::classify_kind;
pub use moods::compute_moods;
pub use top_lists::compute_top_lists;

use std::collections::BTreeSet;

use reelsync_core::{Category, Genre, KnownTitles, MediaKind, Mood, TopList};

/// Title attributes the predicate rules read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSignals<'a> {
    pub name: &'a str,
    pub overview: &'a str,
    pub keywords: &'a [String],
    pub rating: f64,
    pub vote_count: u32,
    pub popularity: f64,
    pub release_year: i32,
    /// Production budget in dollars; zero when unknown or not applicable.
    pub budget: u64,
    /// Box office revenue in dollars; zero when unknown or not applicable.
    pub revenue: u64,
}

/// All three tag sets for one title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scores {
    pub categories: BTreeSet<Category>,
    pub moods: BTreeSet<Mood>,
    pub top_lists: BTreeSet<TopList>,
}

/// Run every scoring rule for one title.
pub fn score(
    media: MediaKind,
    signals: &TitleSignals<'_>,
    genres: &BTreeSet<Genre>,
    certifications: &[String],
    known: &KnownTitles,
) -> Scores {
    Scores {
        categories: classify_categories(signals, known.top_rated(media)),
        moods: compute_moods(genres, certifications),
        top_lists: compute_top_lists(media, signals, known.award_winning(media)),
    }
}
