//! SQLite persistence for the synced catalog dataset.
//!
//! Provides schema creation, the bulk replace operations a sync run needs
//! (delete everything, then insert in batches), and read queries over the
//! stored dataset.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    delete_all, insert_actors, insert_titles, record_sync_run, DeleteStats, OperationError,
};
pub use queries::{
    dataset_stats, load_title, load_title_summary, titles_in_top_list, titles_with_mood,
    DatasetStats, TitleSummary,
};
pub use schema::{open_database, open_memory, SchemaError};
