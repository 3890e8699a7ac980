//! Read queries over the stored dataset.

use std::str::FromStr;
use std::sync::Arc;

use reelsync_core::{
    Actor, CastCredit, Category, Genre, Kind, Mood, Review, Title, TitleKey, TopList,
};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::operations::{FACET_CATEGORY, FACET_GENRE, FACET_MOOD, FACET_TOP_LIST, OperationError};

/// Summary statistics for the dataset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DatasetStats {
    pub movies: i64,
    pub series: i64,
    pub shorts: i64,
    pub actors: i64,
    pub credits: i64,
    pub reviews: i64,
    /// Finish time of the most recent recorded run.
    pub last_sync: Option<String>,
}

impl DatasetStats {
    pub fn titles(&self) -> i64 {
        self.movies + self.series + self.shorts
    }
}

/// The listing view of a title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSummary {
    pub key: TitleKey,
    pub kind: Kind,
    pub name: String,
    pub release_year: i32,
    pub rating: f64,
    pub vote_count: u32,
}

/// Get dataset statistics.
pub fn dataset_stats(conn: &Connection) -> Result<DatasetStats, OperationError> {
    let count_kind = |kind: Kind| -> Result<i64, rusqlite::Error> {
        conn.query_row(
            "SELECT COUNT(*) FROM titles WHERE kind = ?1",
            params![kind.as_str()],
            |r| r.get(0),
        )
    };
    let movies = count_kind(Kind::Movie)?;
    let series = count_kind(Kind::Series)?;
    let shorts = count_kind(Kind::Short)?;
    let actors: i64 = conn.query_row("SELECT COUNT(*) FROM actors", [], |r| r.get(0))?;
    let credits: i64 = conn.query_row("SELECT COUNT(*) FROM title_cast", [], |r| r.get(0))?;
    let reviews: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |r| r.get(0))?;
    let last_sync: Option<String> = conn.query_row(
        "SELECT MAX(finished_at) FROM sync_runs",
        [],
        |r| r.get(0),
    )?;

    Ok(DatasetStats {
        movies,
        series,
        shorts,
        actors,
        credits,
        reviews,
        last_sync,
    })
}

const SUMMARY_COLUMNS: &str = "t.key, t.kind, t.name, t.release_year, t.rating, t.vote_count";

/// Titles on a top list, best rated first.
pub fn titles_in_top_list(
    conn: &Connection,
    list: TopList,
) -> Result<Vec<TitleSummary>, OperationError> {
    titles_with_tag(conn, FACET_TOP_LIST, list.as_str())
}

/// Titles tagged with a mood, best rated first.
pub fn titles_with_mood(conn: &Connection, mood: Mood) -> Result<Vec<TitleSummary>, OperationError> {
    titles_with_tag(conn, FACET_MOOD, mood.as_str())
}

fn titles_with_tag(
    conn: &Connection,
    facet: &str,
    tag: &str,
) -> Result<Vec<TitleSummary>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SUMMARY_COLUMNS}
         FROM titles t
         JOIN title_tags g ON g.title_key = t.key
         WHERE g.facet = ?1 AND g.tag = ?2
         ORDER BY t.rating DESC, t.vote_count DESC, t.key"
    ))?;
    let rows = stmt.query_map(params![facet, tag], row_to_summary)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Look up one title's summary by key.
pub fn load_title_summary(
    conn: &Connection,
    key: &TitleKey,
) -> Result<Option<TitleSummary>, OperationError> {
    conn.query_row(
        &format!("SELECT {SUMMARY_COLUMNS} FROM titles t WHERE t.key = ?1"),
        params![key.to_string()],
        row_to_summary,
    )
    .optional()
    .map_err(Into::into)
}

/// Load a full title with tags, photos, cast and reviews.
///
/// Actors are materialized fresh per call; identity sharing across titles
/// only holds within a sync run.
pub fn load_title(conn: &Connection, key: &TitleKey) -> Result<Option<Title>, OperationError> {
    let key_str = key.to_string();
    let title = conn
        .query_row(
            "SELECT kind, name, overview, rating, vote_count, popularity, release_year,
                    duration, poster, trailer, director
             FROM titles WHERE key = ?1",
            params![key_str],
            |row| {
                let mut title = Title::new(*key, row.get::<_, String>(1)?);
                title.kind = parse_column(row, 0)?;
                title.overview = row.get(2)?;
                title.rating = row.get(3)?;
                title.vote_count = row.get(4)?;
                title.popularity = row.get(5)?;
                title.release_year = row.get(6)?;
                title.duration = row.get(7)?;
                title.poster = row.get(8)?;
                title.trailer = row.get(9)?;
                title.director = row.get(10)?;
                Ok(title)
            },
        )
        .optional()?;
    let Some(mut title) = title else {
        return Ok(None);
    };

    let mut stmt = conn.prepare("SELECT facet, tag FROM title_tags WHERE title_key = ?1")?;
    let tags = stmt.query_map(params![key_str], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    for tag in tags {
        let (facet, tag) = tag?;
        let invalid = |message: String| OperationError::InvalidValue {
            column: format!("title_tags.{facet}"),
            message,
        };
        match facet.as_str() {
            FACET_GENRE => {
                title
                    .genres
                    .insert(Genre::from_str(&tag).map_err(|e| invalid(e.to_string()))?);
            }
            FACET_MOOD => {
                title.moods.insert(Mood::from_str(&tag).map_err(invalid)?);
            }
            FACET_CATEGORY => {
                title
                    .categories
                    .insert(Category::from_str(&tag).map_err(invalid)?);
            }
            FACET_TOP_LIST => {
                title.top_lists.insert(TopList::from_str(&tag).map_err(invalid)?);
            }
            other => log::warn!("Ignoring unknown tag facet '{}' on {}", other, key_str),
        }
    }

    let mut stmt = conn.prepare("SELECT url FROM title_photos WHERE title_key = ?1")?;
    for url in stmt.query_map(params![key_str], |row| row.get::<_, String>(0))? {
        title.photos.insert(url?);
    }

    let mut stmt = conn.prepare(
        "SELECT a.id, a.name, a.photo, c.role
         FROM title_cast c JOIN actors a ON a.id = c.actor_id
         WHERE c.title_key = ?1
         ORDER BY c.position",
    )?;
    let cast = stmt.query_map(params![key_str], |row| {
        let id: i64 = row.get(0)?;
        Ok(CastCredit {
            actor: Arc::new(Actor::new(id as u64, row.get::<_, String>(1)?, row.get(2)?)),
            role: row.get(3)?,
        })
    })?;
    title.cast = cast.collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT author, avatar, content, rating, created_at
         FROM reviews WHERE title_key = ?1 ORDER BY id",
    )?;
    let reviews = stmt.query_map(params![key_str], |row| {
        Ok(Review {
            author: row.get(0)?,
            avatar: row.get(1)?,
            content: row.get(2)?,
            rating: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;
    title.reviews = reviews.collect::<Result<Vec<_>, _>>()?;

    Ok(Some(title))
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

fn row_to_summary(row: &Row<'_>) -> rusqlite::Result<TitleSummary> {
    Ok(TitleSummary {
        key: parse_column(row, 0)?,
        kind: parse_column(row, 1)?,
        name: row.get(2)?,
        release_year: row.get(3)?,
        rating: row.get(4)?,
        vote_count: row.get(5)?,
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.to_string().into())
    })
}
