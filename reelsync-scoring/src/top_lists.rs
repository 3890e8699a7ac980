use std::collections::BTreeSet;

use reelsync_core::{KnownTitleSet, MediaKind, TopList};

use crate::TitleSignals;
use crate::rules::*;

/// Compute honorary top-list membership.
///
/// Budget and revenue only apply to movies; binge-worthiness only to series.
/// `award_winners` is the known award list for `media`.
pub fn compute_top_lists(
    media: MediaKind,
    signals: &TitleSignals<'_>,
    award_winners: &KnownTitleSet,
) -> BTreeSet<TopList> {
    let mut lists = BTreeSet::new();

    if award_winners.contains(signals.name) {
        lists.insert(match media {
            MediaKind::Movie => TopList::OscarWinners,
            MediaKind::Series => TopList::EmmyWinners,
        });
    }

    if media == MediaKind::Movie {
        if signals.revenue >= BOX_OFFICE_MIN_REVENUE {
            lists.insert(TopList::BoxOfficeHits);
        }
        if signals.budget >= BIG_BUDGET_MIN {
            lists.insert(TopList::BigBudget);
        }
    }

    if signals.release_year < CLASSIC_BEFORE_YEAR
        && signals.rating >= CLASSIC_MIN_RATING
        && signals.vote_count >= CLASSIC_MIN_VOTES
    {
        lists.insert(TopList::TimelessClassics);
    }
    if signals.release_year >= MODERN_FROM_YEAR
        && signals.rating >= MODERN_MIN_RATING
        && signals.vote_count >= MODERN_MIN_VOTES
    {
        lists.insert(TopList::ModernMasterpieces);
    }
    if media == MediaKind::Series
        && signals.rating >= BINGE_MIN_RATING
        && signals.vote_count >= BINGE_MIN_VOTES
    {
        lists.insert(TopList::BingeWorthy);
    }
    if signals.vote_count >= FAN_FAVORITE_MIN_VOTES && signals.rating >= FAN_FAVORITE_MIN_RATING {
        lists.insert(TopList::FanFavorites);
    }

    lists
}
