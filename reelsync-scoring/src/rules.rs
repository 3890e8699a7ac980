//! Static rule tables and thresholds.

use reelsync_core::{Genre, Mood};

use Mood::*;

/// Movies shorter than this (and non-zero) are classified as shorts.
pub const SHORT_DURATION_MINUTES: u32 = 40;

/// Release certifications that carry mood weights.
pub const CERTIFICATIONS: &[&str] = &["G", "PG", "PG-13", "R", "NC-17", "N-13", "NC16"];

/// Mood weights contributed by a genre.
pub fn genre_weights(genre: Genre) -> &'static [(Mood, u32)] {
    match genre {
        Genre::Family => &[(MakeMeChill, 9), (MakeMeFeelGood, 9), (MakeMeDream, 9)],
        Genre::Romance => &[(MakeMeDream, 8), (MakeMeFeelGood, 8)],
        Genre::Music => &[(MakeMeDream, 6), (MakeMeFeelGood, 6)],
        Genre::Documentary => &[(MakeMeCurious, 10)],
        Genre::History => &[(MakeMeCurious, 9)],
        Genre::Fantasy => &[(MakeMeDream, 10), (TakeMeToAnotherWorld, 10)],
        Genre::Animation => &[(MakeMeChill, 9), (MakeMeFeelGood, 9)],
        Genre::Crime => &[(KeepMeOnEdge, 7)],
        Genre::Western => &[(TakeMeToAnotherWorld, 6), (MakeMeCurious, 6)],
        Genre::Action => &[(KeepMeOnEdge, 8), (BlowMyMind, 8)],
        Genre::War => &[(MakeMeCurious, 8), (BlowMyMind, 8)],
        Genre::Adventure => &[(TakeMeToAnotherWorld, 7), (MakeMeDream, 7), (BlowMyMind, 7)],
        Genre::Horror => &[(ScaryMeSilly, 10)],
        Genre::Comedy => &[(MakeMeChill, 10), (MakeMeFeelGood, 10)],
        Genre::ScienceFiction => &[(BlowMyMind, 10), (TakeMeToAnotherWorld, 10)],
        Genre::Thriller => &[(KeepMeOnEdge, 10)],
        Genre::Drama => &[(MakeMeFeelGood, 6), (MakeMeDream, 6), (MakeMeCurious, 5)],
        Genre::Mystery => &[(MakeMeCurious, 7), (KeepMeOnEdge, 7)],
        Genre::TvMovie => &[],
    }
}

/// Mood weights contributed by a certification, or `None` if the string is
/// outside the recognized vocabulary.
pub fn certification_weights(certification: &str) -> Option<&'static [(Mood, u32)]> {
    let weights: &'static [(Mood, u32)] = match certification.trim() {
        "G" | "PG" => &[(MakeMeChill, 9), (MakeMeFeelGood, 9), (MakeMeDream, 7)],
        "PG-13" => &[
            (MakeMeFeelGood, 8),
            (BlowMyMind, 8),
            (MakeMeDream, 8),
            (MakeMeCurious, 5),
        ],
        "R" => &[(BlowMyMind, 6), (KeepMeOnEdge, 6), (MakeMeCurious, 6)],
        "NC-17" => &[
            (ScaryMeSilly, 5),
            (KeepMeOnEdge, 5),
            (BlowMyMind, 5),
            (MakeMeCurious, 6),
        ],
        "N-13" => &[(TakeMeToAnotherWorld, 7), (MakeMeDream, 6), (ScaryMeSilly, 6)],
        "NC16" => &[(BlowMyMind, 9), (KeepMeOnEdge, 9), (ScaryMeSilly, 9)],
        _ => return None,
    };
    Some(weights)
}

// Category thresholds.
pub const ACCLAIMED_MIN_RATING: f64 = 8.0;
pub const ACCLAIMED_MIN_VOTES: u32 = 5_000;
pub const HIDDEN_GEM_MIN_RATING: f64 = 7.5;
pub const HIDDEN_GEM_VOTES: std::ops::Range<u32> = 100..1_000;
pub const TRENDING_MIN_POPULARITY: f64 = 100.0;

/// Phrases in the overview or keywords marking a true story.
pub const TRUE_STORY_MARKERS: &[&str] = &[
    "true story",
    "based on a true",
    "based on true",
    "true events",
    "real events",
    "biography",
    "biographical",
];

pub const CULT_KEYWORDS: &[&str] = &["cult film", "cult classic", "midnight movie"];

pub const MIND_BENDING_KEYWORDS: &[&str] = &[
    "twist ending",
    "plot twist",
    "time loop",
    "mind bending",
    "mindfuck",
    "nonlinear timeline",
    "alternate reality",
    "dream within a dream",
];

// Top-list thresholds.
pub const BOX_OFFICE_MIN_REVENUE: u64 = 500_000_000;
pub const BIG_BUDGET_MIN: u64 = 150_000_000;
pub const CLASSIC_BEFORE_YEAR: i32 = 1980;
pub const CLASSIC_MIN_RATING: f64 = 7.5;
pub const CLASSIC_MIN_VOTES: u32 = 1_000;
pub const MODERN_FROM_YEAR: i32 = 2000;
pub const MODERN_MIN_RATING: f64 = 8.0;
pub const MODERN_MIN_VOTES: u32 = 10_000;
pub const BINGE_MIN_RATING: f64 = 8.0;
pub const BINGE_MIN_VOTES: u32 = 1_000;
pub const FAN_FAVORITE_MIN_VOTES: u32 = 20_000;
pub const FAN_FAVORITE_MIN_RATING: f64 = 7.0;
