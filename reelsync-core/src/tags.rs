//! Derived tags assigned by the scoring engine.
//!
//! All three enums are closed vocabularies. They are never persisted as
//! entities of their own; a title stores the set it was assigned, using the
//! `SCREAMING_SNAKE_CASE` identifiers returned by `as_str()`.

use serde::{Deserialize, Serialize};

/// Emotional tenor of a title ("vibe").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    MakeMeChill,
    MakeMeFeelGood,
    MakeMeDream,
    MakeMeCurious,
    TakeMeToAnotherWorld,
    KeepMeOnEdge,
    BlowMyMind,
    ScaryMeSilly,
}

impl Mood {
    pub fn all() -> &'static [Mood] {
        &[
            Mood::MakeMeChill,
            Mood::MakeMeFeelGood,
            Mood::MakeMeDream,
            Mood::MakeMeCurious,
            Mood::TakeMeToAnotherWorld,
            Mood::KeepMeOnEdge,
            Mood::BlowMyMind,
            Mood::ScaryMeSilly,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MakeMeChill => "MAKE_ME_CHILL",
            Self::MakeMeFeelGood => "MAKE_ME_FEEL_GOOD",
            Self::MakeMeDream => "MAKE_ME_DREAM",
            Self::MakeMeCurious => "MAKE_ME_CURIOUS",
            Self::TakeMeToAnotherWorld => "TAKE_ME_TO_ANOTHER_WORLD",
            Self::KeepMeOnEdge => "KEEP_ME_ON_EDGE",
            Self::BlowMyMind => "BLOW_MY_MIND",
            Self::ScaryMeSilly => "SCARY_ME_SILLY",
        }
    }
}

/// Descriptive category derived from predicate rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    BasedOnATrueStory,
    MustWatchList,
    #[serde(rename = "IMD_TOP_250")]
    ImdTop250,
    CriticallyAcclaimed,
    HiddenGems,
    TrendingNow,
    CultClassic,
    MindBending,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::BasedOnATrueStory,
            Category::MustWatchList,
            Category::ImdTop250,
            Category::CriticallyAcclaimed,
            Category::HiddenGems,
            Category::TrendingNow,
            Category::CultClassic,
            Category::MindBending,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasedOnATrueStory => "BASED_ON_A_TRUE_STORY",
            Self::MustWatchList => "MUST_WATCH_LIST",
            Self::ImdTop250 => "IMD_TOP_250",
            Self::CriticallyAcclaimed => "CRITICALLY_ACCLAIMED",
            Self::HiddenGems => "HIDDEN_GEMS",
            Self::TrendingNow => "TRENDING_NOW",
            Self::CultClassic => "CULT_CLASSIC",
            Self::MindBending => "MIND_BENDING",
        }
    }
}

/// Honorary collection a title belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopList {
    OscarWinners,
    EmmyWinners,
    BoxOfficeHits,
    BigBudget,
    TimelessClassics,
    ModernMasterpieces,
    BingeWorthy,
    FanFavorites,
}

impl TopList {
    pub fn all() -> &'static [TopList] {
        &[
            TopList::OscarWinners,
            TopList::EmmyWinners,
            TopList::BoxOfficeHits,
            TopList::BigBudget,
            TopList::TimelessClassics,
            TopList::ModernMasterpieces,
            TopList::BingeWorthy,
            TopList::FanFavorites,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OscarWinners => "OSCAR_WINNERS",
            Self::EmmyWinners => "EMMY_WINNERS",
            Self::BoxOfficeHits => "BOX_OFFICE_HITS",
            Self::BigBudget => "BIG_BUDGET",
            Self::TimelessClassics => "TIMELESS_CLASSICS",
            Self::ModernMasterpieces => "MODERN_MASTERPIECES",
            Self::BingeWorthy => "BINGE_WORTHY",
            Self::FanFavorites => "FAN_FAVORITES",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ident, $err:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
                $ty::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| format!(concat!($err, ": '{}'"), s))
            }
        }
    };
}

display_and_parse!(Mood, "unknown mood");
display_and_parse!(Category, "unknown category");
display_and_parse!(TopList, "unknown top list");

#[cfg(test)]
#[path = "tests/tags_tests.rs"]
mod tests;
