use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The upstream listing a title was discovered through.
///
/// This is the identity discriminator: the upstream catalog numbers movies
/// and series independently, so `42` as a movie and `42` as a series are
/// different titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// Both discovery kinds, in the order a sync run processes them.
    pub fn all() -> &'static [MediaKind] {
        &[MediaKind::Movie, MediaKind::Series]
    }

    /// Prefix used in the composite key string (`movie:550`, `tv:1399`).
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "tv",
        }
    }

    /// Human-readable plural label for progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Movie => "movies",
            Self::Series => "series",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Final classification of a title.
///
/// `Short` is never discovered directly; it is derived from the runtime of
/// something discovered as a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Movie,
    Series,
    Short,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "MOVIE",
            Self::Series => "SERIES",
            Self::Short => "SHORT",
        }
    }
}

impl From<MediaKind> for Kind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Movie => Kind::Movie,
            MediaKind::Series => Kind::Series,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOVIE" => Ok(Self::Movie),
            "SERIES" => Ok(Self::Series),
            "SHORT" => Ok(Self::Short),
            _ => Err(format!("unknown kind: '{}'", s)),
        }
    }
}

/// Composite identity of a title within one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TitleKey {
    pub media: MediaKind,
    pub source_id: u64,
}

impl TitleKey {
    pub fn new(media: MediaKind, source_id: u64) -> Self {
        Self { media, source_id }
    }

    pub fn movie(source_id: u64) -> Self {
        Self::new(MediaKind::Movie, source_id)
    }

    pub fn series(source_id: u64) -> Self {
        Self::new(MediaKind::Series, source_id)
    }
}

impl std::fmt::Display for TitleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.media.prefix(), self.source_id)
    }
}

/// Error returned when a string is not a valid `TitleKey`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid title key: '{0}'")]
pub struct TitleKeyParseError(pub String);

impl std::str::FromStr for TitleKey {
    type Err = TitleKeyParseError;

    /// Parse the `prefix:id` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TitleKeyParseError(s.to_string());
        let (prefix, id) = s.split_once(':').ok_or_else(err)?;
        let media = match prefix {
            "movie" => MediaKind::Movie,
            "tv" => MediaKind::Series,
            _ => return Err(err()),
        };
        let source_id = id.parse::<u64>().map_err(|_| err())?;
        Ok(Self { media, source_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_with_same_id_differ_by_kind() {
        assert_ne!(TitleKey::movie(42), TitleKey::series(42));
        assert_eq!(TitleKey::movie(42).to_string(), "movie:42");
        assert_eq!(TitleKey::series(42).to_string(), "tv:42");
    }

    #[test]
    fn key_parses_display_form() {
        let key: TitleKey = "tv:1399".parse().unwrap();
        assert_eq!(key, TitleKey::series(1399));
        assert!("show:1".parse::<TitleKey>().is_err());
        assert!("movie:abc".parse::<TitleKey>().is_err());
        assert!("movie".parse::<TitleKey>().is_err());
    }

    #[test]
    fn kind_parses_storage_form() {
        assert_eq!("SHORT".parse::<Kind>().unwrap(), Kind::Short);
        assert_eq!("series".parse::<Kind>().unwrap(), Kind::Series);
        assert!("tv".parse::<Kind>().is_err());
    }

    #[test]
    fn media_kind_maps_to_kind() {
        assert_eq!(Kind::from(MediaKind::Movie), Kind::Movie);
        assert_eq!(Kind::from(MediaKind::Series), Kind::Series);
    }
}
