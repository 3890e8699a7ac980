//! Bulk write operations used by a sync run.
//!
//! A run replaces the whole dataset: [`delete_all`] first, then
//! [`insert_actors`] and [`insert_titles`] in fixed-size batches. Each
//! batch is one transaction; the replace as a whole is not.

use std::sync::Arc;

use reelsync_core::{Actor, Title};
use rusqlite::{Connection, Transaction, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
    #[error("Invalid stored value in {column}: {message}")]
    InvalidValue { column: String, message: String },
}

/// Row counts removed by [`delete_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteStats {
    pub titles: usize,
    pub actors: usize,
}

// ── Delete ──────────────────────────────────────────────────────────────────

/// Remove every title and actor (and everything hanging off them).
pub fn delete_all(conn: &mut Connection) -> Result<DeleteStats, OperationError> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM reviews", [])?;
    tx.execute("DELETE FROM title_cast", [])?;
    tx.execute("DELETE FROM title_photos", [])?;
    tx.execute("DELETE FROM title_tags", [])?;
    let titles = tx.execute("DELETE FROM titles", [])?;
    let actors = tx.execute("DELETE FROM actors", [])?;
    tx.commit()?;
    log::debug!("Deleted {} titles and {} actors", titles, actors);
    Ok(DeleteStats { titles, actors })
}

// ── Actor Inserts ───────────────────────────────────────────────────────────

/// Insert one batch of actors in a single transaction.
///
/// An actor id already present is overwritten with the new name and photo.
pub fn insert_actors(conn: &mut Connection, actors: &[Arc<Actor>]) -> Result<usize, OperationError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO actors (id, name, photo) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 photo = excluded.photo",
        )?;
        for actor in actors {
            stmt.execute(params![actor.source_id as i64, actor.name, actor.photo])?;
        }
    }
    tx.commit()?;
    Ok(actors.len())
}

// ── Title Inserts ───────────────────────────────────────────────────────────

/// Insert one batch of titles in a single transaction, with their tags,
/// photos, cast credits and reviews.
///
/// Every credited actor must already be stored.
pub fn insert_titles(conn: &mut Connection, titles: &[Title]) -> Result<usize, OperationError> {
    let tx = conn.transaction()?;
    for title in titles {
        insert_title(&tx, title)?;
    }
    tx.commit()?;
    Ok(titles.len())
}

fn insert_title(tx: &Transaction<'_>, title: &Title) -> Result<(), OperationError> {
    let key = title.key.to_string();
    tx.execute(
        "INSERT INTO titles (key, media, source_id, kind, name, overview, rating, vote_count,
                             popularity, release_year, duration, poster, trailer, director)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            key,
            title.key.media.prefix(),
            title.key.source_id as i64,
            title.kind.as_str(),
            title.name,
            title.overview,
            title.rating,
            title.vote_count,
            title.popularity,
            title.release_year,
            title.duration,
            title.poster,
            title.trailer,
            title.director,
        ],
    )?;

    let mut tag_stmt =
        tx.prepare_cached("INSERT INTO title_tags (title_key, facet, tag) VALUES (?1, ?2, ?3)")?;
    for genre in &title.genres {
        tag_stmt.execute(params![key, FACET_GENRE, genre.as_str()])?;
    }
    for mood in &title.moods {
        tag_stmt.execute(params![key, FACET_MOOD, mood.as_str()])?;
    }
    for category in &title.categories {
        tag_stmt.execute(params![key, FACET_CATEGORY, category.as_str()])?;
    }
    for list in &title.top_lists {
        tag_stmt.execute(params![key, FACET_TOP_LIST, list.as_str()])?;
    }

    let mut photo_stmt =
        tx.prepare_cached("INSERT INTO title_photos (title_key, url) VALUES (?1, ?2)")?;
    for url in &title.photos {
        photo_stmt.execute(params![key, url])?;
    }

    let mut cast_stmt = tx.prepare_cached(
        "INSERT INTO title_cast (title_key, position, actor_id, role) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for (position, credit) in title.cast.iter().enumerate() {
        cast_stmt.execute(params![
            key,
            position as i64,
            credit.actor.source_id as i64,
            credit.role
        ])?;
    }

    let mut review_stmt = tx.prepare_cached(
        "INSERT INTO reviews (title_key, author, avatar, content, rating, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for review in &title.reviews {
        review_stmt.execute(params![
            key,
            review.author,
            review.avatar,
            review.content,
            review.rating,
            review.created_at
        ])?;
    }

    Ok(())
}

// ── Sync Runs ───────────────────────────────────────────────────────────────

/// Record a completed run.
pub fn record_sync_run(
    conn: &Connection,
    started_at: &str,
    titles: usize,
    actors: usize,
) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO sync_runs (started_at, titles, actors) VALUES (?1, ?2, ?3)",
        params![started_at, titles as i64, actors as i64],
    )?;
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

pub(crate) const FACET_GENRE: &str = "genre";
pub(crate) const FACET_MOOD: &str = "mood";
pub(crate) const FACET_CATEGORY: &str = "category";
pub(crate) const FACET_TOP_LIST: &str = "top_list";
