//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent; safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a dataset database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Performers, keyed by upstream person id
CREATE TABLE IF NOT EXISTS actors (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    photo TEXT
);

-- Titles, keyed by composite key ("movie:550", "tv:1399")
CREATE TABLE IF NOT EXISTS titles (
    key TEXT PRIMARY KEY,
    media TEXT NOT NULL,
    source_id INTEGER NOT NULL,
    kind TEXT NOT NULL,
    name TEXT NOT NULL,
    overview TEXT NOT NULL DEFAULT '',
    rating REAL NOT NULL DEFAULT 0,
    vote_count INTEGER NOT NULL DEFAULT 0,
    popularity REAL NOT NULL DEFAULT 0,
    release_year INTEGER NOT NULL,
    duration INTEGER NOT NULL DEFAULT 0,
    poster TEXT,
    trailer TEXT,
    director TEXT,
    synced_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_titles_kind ON titles(kind);

-- Genre, mood, category and top-list tags
CREATE TABLE IF NOT EXISTS title_tags (
    title_key TEXT NOT NULL REFERENCES titles(key) ON DELETE CASCADE,
    facet TEXT NOT NULL,
    tag TEXT NOT NULL,
    PRIMARY KEY (title_key, facet, tag)
);
CREATE INDEX IF NOT EXISTS idx_title_tags_lookup ON title_tags(facet, tag);

CREATE TABLE IF NOT EXISTS title_photos (
    title_key TEXT NOT NULL REFERENCES titles(key) ON DELETE CASCADE,
    url TEXT NOT NULL,
    PRIMARY KEY (title_key, url)
);

-- Credited appearances, in billing order
CREATE TABLE IF NOT EXISTS title_cast (
    title_key TEXT NOT NULL REFERENCES titles(key) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    actor_id INTEGER NOT NULL REFERENCES actors(id),
    role TEXT NOT NULL DEFAULT '',
    PRIMARY KEY (title_key, position)
);
CREATE INDEX IF NOT EXISTS idx_title_cast_actor ON title_cast(actor_id);

CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title_key TEXT NOT NULL REFERENCES titles(key) ON DELETE CASCADE,
    author TEXT NOT NULL,
    avatar TEXT,
    content TEXT NOT NULL,
    rating REAL,
    created_at TEXT
);
CREATE INDEX IF NOT EXISTS idx_reviews_title ON reviews(title_key);

-- One row per completed sync run
CREATE TABLE IF NOT EXISTS sync_runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    started_at TEXT NOT NULL,
    finished_at TEXT NOT NULL DEFAULT (datetime('now')),
    titles INTEGER NOT NULL,
    actors INTEGER NOT NULL
);
"#;
