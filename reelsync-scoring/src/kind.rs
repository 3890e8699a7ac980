use reelsync_core::{Kind, MediaKind};

use crate::rules::SHORT_DURATION_MINUTES;

/// Final kind of a title given how it was discovered and its runtime.
///
/// A movie with a known runtime below the short threshold becomes `Short`.
/// A zero runtime means unknown and leaves the movie as is. Series are never
/// reclassified.
pub fn classify_kind(media: MediaKind, duration_minutes: u32) -> Kind {
    match media {
        MediaKind::Movie if duration_minutes > 0 && duration_minutes < SHORT_DURATION_MINUTES => {
            Kind::Short
        }
        other => Kind::from(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_movies() {
        assert_eq!(classify_kind(MediaKind::Movie, 25), Kind::Short);
        assert_eq!(classify_kind(MediaKind::Movie, 39), Kind::Short);
        assert_eq!(classify_kind(MediaKind::Movie, 40), Kind::Movie);
        assert_eq!(classify_kind(MediaKind::Movie, 0), Kind::Movie);
    }

    #[test]
    fn series_are_never_short() {
        for minutes in [0, 1, 25, 45] {
            assert_eq!(classify_kind(MediaKind::Series, minutes), Kind::Series);
        }
    }
}
