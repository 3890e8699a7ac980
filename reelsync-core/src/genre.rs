use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Genre tags used by the catalog.
///
/// Mirrors the upstream movie genre list. Series-only combined genres
/// ("Action & Adventure", "Sci-Fi & Fantasy", ...) are expanded into these
/// by [`Genre::from_upstream_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Mystery,
    Romance,
    ScienceFiction,
    TvMovie,
    Thriller,
    War,
    Western,
}

const ALL_GENRES: &[Genre] = &[
    Genre::Action,
    Genre::Adventure,
    Genre::Animation,
    Genre::Comedy,
    Genre::Crime,
    Genre::Documentary,
    Genre::Drama,
    Genre::Family,
    Genre::Fantasy,
    Genre::History,
    Genre::Horror,
    Genre::Music,
    Genre::Mystery,
    Genre::Romance,
    Genre::ScienceFiction,
    Genre::TvMovie,
    Genre::Thriller,
    Genre::War,
    Genre::Western,
];

impl Genre {
    pub fn all() -> &'static [Genre] {
        ALL_GENRES
    }

    /// Upstream display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Documentary => "Documentary",
            Self::Drama => "Drama",
            Self::Family => "Family",
            Self::Fantasy => "Fantasy",
            Self::History => "History",
            Self::Horror => "Horror",
            Self::Music => "Music",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::ScienceFiction => "Science Fiction",
            Self::TvMovie => "TV Movie",
            Self::Thriller => "Thriller",
            Self::War => "War",
            Self::Western => "Western",
        }
    }

    /// Stable identifier used in storage (`SCIENCE_FICTION`, `TV_MOVIE`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Adventure => "ADVENTURE",
            Self::Animation => "ANIMATION",
            Self::Comedy => "COMEDY",
            Self::Crime => "CRIME",
            Self::Documentary => "DOCUMENTARY",
            Self::Drama => "DRAMA",
            Self::Family => "FAMILY",
            Self::Fantasy => "FANTASY",
            Self::History => "HISTORY",
            Self::Horror => "HORROR",
            Self::Music => "MUSIC",
            Self::Mystery => "MYSTERY",
            Self::Romance => "ROMANCE",
            Self::ScienceFiction => "SCIENCE_FICTION",
            Self::TvMovie => "TV_MOVIE",
            Self::Thriller => "THRILLER",
            Self::War => "WAR",
            Self::Western => "WESTERN",
        }
    }

    /// Map an upstream genre name to zero or more catalog genres.
    ///
    /// Series listings use combined names; those expand to every
    /// constituent genre. Names with no catalog counterpart (e.g. "News",
    /// "Talk") yield an empty list.
    pub fn from_upstream_name(name: &str) -> Vec<Genre> {
        match normalize(name).as_str() {
            "actionadventure" => vec![Genre::Action, Genre::Adventure],
            "scififantasy" => vec![Genre::ScienceFiction, Genre::Fantasy],
            "warpolitics" => vec![Genre::War],
            "kids" => vec![Genre::Family],
            _ => name.parse::<Genre>().map(|g| vec![g]).unwrap_or_default(),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' ', '&', '_'], "")
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error produced when a string does not name a [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre: {input}")]
pub struct GenreParseError {
    pub input: String,
}

impl FromStr for Genre {
    type Err = GenreParseError;

    /// Accepts display names and storage identifiers, ignoring case,
    /// spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let genre = match normalize(s).as_str() {
            "action" => Genre::Action,
            "adventure" => Genre::Adventure,
            "animation" => Genre::Animation,
            "comedy" => Genre::Comedy,
            "crime" => Genre::Crime,
            "documentary" => Genre::Documentary,
            "drama" => Genre::Drama,
            "family" => Genre::Family,
            "fantasy" => Genre::Fantasy,
            "history" => Genre::History,
            "horror" => Genre::Horror,
            "music" => Genre::Music,
            "mystery" => Genre::Mystery,
            "romance" => Genre::Romance,
            "sciencefiction" | "scifi" => Genre::ScienceFiction,
            "tvmovie" => Genre::TvMovie,
            "thriller" => Genre::Thriller,
            "war" => Genre::War,
            "western" => Genre::Western,
            _ => return Err(GenreParseError { input: s.to_string() }),
        };
        Ok(genre)
    }
}
