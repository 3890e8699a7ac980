use reelsync_db::schema::{CURRENT_VERSION, get_schema_version};
use reelsync_db::*;

#[test]
fn memory_database_has_current_version() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn file_database_reopens_without_recreating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("catalog.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO actors (id, name) VALUES (1, 'Somebody')",
            [],
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM actors", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
    let versions: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |r| r.get(0))
        .unwrap();
    assert_eq!(versions, 1);
}
