use std::collections::{BTreeMap, BTreeSet};

use reelsync_core::{Genre, Mood};

use crate::rules::{certification_weights, genre_weights};

/// Compute the mood tags for a title.
///
/// Weights from every genre and every recognized certification occurrence
/// are summed per mood. Only the moods tied at the highest total are kept;
/// everything below the maximum is dropped. No weights at all yields an
/// empty set.
pub fn compute_moods(genres: &BTreeSet<Genre>, certifications: &[String]) -> BTreeSet<Mood> {
    let mut totals: BTreeMap<Mood, u32> = BTreeMap::new();

    for genre in genres {
        for &(mood, weight) in genre_weights(*genre) {
            *totals.entry(mood).or_default() += weight;
        }
    }
    for cert in certifications {
        match certification_weights(cert) {
            Some(weights) => {
                for &(mood, weight) in weights {
                    *totals.entry(mood).or_default() += weight;
                }
            }
            None if !cert.trim().is_empty() => {
                log::debug!("Ignoring unrecognized certification '{}'", cert);
            }
            None => {}
        }
    }

    let Some(max) = totals.values().copied().max() else {
        return BTreeSet::new();
    };
    totals
        .into_iter()
        .filter(|&(_, weight)| weight == max)
        .map(|(mood, _)| mood)
        .collect()
}

#[cfg(test)]
#[path = "tests/moods_tests.rs"]
mod tests;
