//! Core data model for the reelsync catalog.
//!
//! Defines the closed enumerations the scoring engine reads and writes
//! (genres, moods, categories, top lists), the composite title identity, and
//! the normalized `Title` / `Actor` records produced by one sync run.

pub mod actor;
pub mod genre;
pub mod kind;
pub mod known;
pub mod tags;
pub mod title;

pub use actor::Actor;
pub use genre::{Genre, GenreParseError};
pub use kind::{Kind, MediaKind, TitleKey, TitleKeyParseError};
pub use known::{KnownTitleSet, KnownTitles};
pub use tags::{Category, Mood, TopList};
pub use title::{CastCredit, Review, Title};
