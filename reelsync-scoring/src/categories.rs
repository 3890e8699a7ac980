use std::collections::BTreeSet;

use reelsync_core::{Category, KnownTitleSet};

use crate::TitleSignals;
use crate::rules::*;

/// Classify a title into descriptive categories.
///
/// Each predicate is independent; the result is the union of every match.
/// `top_rated` is the known top-rated list for the title's kind.
pub fn classify_categories(
    signals: &TitleSignals<'_>,
    top_rated: &KnownTitleSet,
) -> BTreeSet<Category> {
    let mut categories = BTreeSet::new();

    if mentions_any(signals, TRUE_STORY_MARKERS) {
        categories.insert(Category::BasedOnATrueStory);
    }
    if top_rated.contains(signals.name) {
        categories.insert(Category::ImdTop250);
        categories.insert(Category::MustWatchList);
    }
    if signals.rating >= ACCLAIMED_MIN_RATING && signals.vote_count >= ACCLAIMED_MIN_VOTES {
        categories.insert(Category::CriticallyAcclaimed);
    }
    if signals.rating >= HIDDEN_GEM_MIN_RATING && HIDDEN_GEM_VOTES.contains(&signals.vote_count) {
        categories.insert(Category::HiddenGems);
    }
    if signals.popularity >= TRENDING_MIN_POPULARITY {
        categories.insert(Category::TrendingNow);
    }
    if keyword_matches(signals.keywords, CULT_KEYWORDS) {
        categories.insert(Category::CultClassic);
    }
    if keyword_matches(signals.keywords, MIND_BENDING_KEYWORDS) {
        categories.insert(Category::MindBending);
    }

    categories
}

fn mentions_any(signals: &TitleSignals<'_>, markers: &[&str]) -> bool {
    let overview = signals.overview.to_lowercase();
    markers.iter().any(|m| overview.contains(m)) || keyword_matches(signals.keywords, markers)
}

fn keyword_matches(keywords: &[String], markers: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        let kw = kw.to_lowercase();
        markers.iter().any(|m| kw.contains(m))
    })
}

#[cfg(test)]
#[path = "tests/categories_tests.rs"]
mod tests;
