//! Persistence seam for the sync coordinator.

use std::path::Path;
use std::sync::Arc;

use reelsync_core::{Actor, Title};
use reelsync_db::{DeleteStats, OperationError, SchemaError};
use rusqlite::Connection;

/// Bulk operations a run needs from the dataset store.
///
/// Called from one thread at a time, after all fetch work has joined.
pub trait DatasetStore: Send {
    fn delete_all(&mut self) -> Result<DeleteStats, OperationError>;

    fn insert_actors(&mut self, actors: &[Arc<Actor>]) -> Result<usize, OperationError>;

    /// Every credited actor has already been inserted.
    fn insert_titles(&mut self, titles: &[Title]) -> Result<usize, OperationError>;

    fn record_run(
        &mut self,
        started_at: &str,
        titles: usize,
        actors: usize,
    ) -> Result<(), OperationError>;
}

/// [`DatasetStore`] over the SQLite catalog.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self::new(reelsync_db::open_database(path)?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl DatasetStore for SqliteStore {
    fn delete_all(&mut self) -> Result<DeleteStats, OperationError> {
        reelsync_db::delete_all(&mut self.conn)
    }

    fn insert_actors(&mut self, actors: &[Arc<Actor>]) -> Result<usize, OperationError> {
        reelsync_db::insert_actors(&mut self.conn, actors)
    }

    fn insert_titles(&mut self, titles: &[Title]) -> Result<usize, OperationError> {
        reelsync_db::insert_titles(&mut self.conn, titles)
    }

    fn record_run(
        &mut self,
        started_at: &str,
        titles: usize,
        actors: usize,
    ) -> Result<(), OperationError> {
        reelsync_db::record_sync_run(&self.conn, started_at, titles, actors)
    }
}
