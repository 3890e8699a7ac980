use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::actor::Actor;
use crate::genre::Genre;
use crate::kind::{Kind, TitleKey};
use crate::tags::{Category, Mood, TopList};

/// One credited appearance of an actor in a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastCredit {
    pub actor: Arc<Actor>,
    /// Character name as credited; may be empty.
    pub role: String,
}

/// A user review attached to a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub avatar: Option<String>,
    pub content: String,
    pub rating: Option<f64>,
    /// Upstream creation timestamp, stored verbatim.
    pub created_at: Option<String>,
}

/// A fully assembled, scored title ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub key: TitleKey,
    pub kind: Kind,
    pub name: String,
    pub overview: String,
    pub rating: f64,
    pub vote_count: u32,
    pub popularity: f64,
    pub release_year: i32,
    /// Runtime in minutes (episode runtime for series).
    pub duration: u32,
    pub poster: Option<String>,
    pub trailer: Option<String>,
    pub photos: BTreeSet<String>,
    pub director: Option<String>,
    pub genres: BTreeSet<Genre>,
    pub cast: Vec<CastCredit>,
    pub reviews: Vec<Review>,
    pub categories: BTreeSet<Category>,
    pub moods: BTreeSet<Mood>,
    pub top_lists: BTreeSet<TopList>,
}

impl Title {
    /// A bare title with only identity and name set.
    pub fn new(key: TitleKey, name: impl Into<String>) -> Self {
        Self {
            key,
            kind: Kind::from(key.media),
            name: name.into(),
            overview: String::new(),
            rating: 0.0,
            vote_count: 0,
            popularity: 0.0,
            release_year: 0,
            duration: 0,
            poster: None,
            trailer: None,
            photos: BTreeSet::new(),
            director: None,
            genres: BTreeSet::new(),
            cast: Vec::new(),
            reviews: Vec::new(),
            categories: BTreeSet::new(),
            moods: BTreeSet::new(),
            top_lists: BTreeSet::new(),
        }
    }

    /// Iterate the distinct actors credited on this title.
    pub fn actors(&self) -> impl Iterator<Item = &Arc<Actor>> {
        self.cast.iter().map(|c| &c.actor)
    }
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
