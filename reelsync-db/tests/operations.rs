use std::sync::Arc;

use reelsync_core::*;
use reelsync_db::*;

fn actor(id: u64, name: &str) -> Arc<Actor> {
    Arc::new(Actor::new(id, name, Some(format!("https://img/{id}.jpg"))))
}

fn title_with_cast(key: TitleKey, name: &str, cast: &[&Arc<Actor>]) -> Title {
    let mut title = Title::new(key, name);
    title.release_year = 2001;
    title.genres.insert(Genre::Drama);
    title.moods.insert(Mood::MakeMeCurious);
    title.photos.insert(format!("https://img/{}/1.jpg", key.source_id));
    title.cast = cast
        .iter()
        .map(|a| CastCredit {
            actor: Arc::clone(a),
            role: format!("Role of {}", a.name),
        })
        .collect();
    title.reviews.push(Review {
        author: "critic".into(),
        avatar: None,
        content: "Fine.".into(),
        rating: Some(6.0),
        created_at: Some("2024-01-01T00:00:00.000Z".into()),
    });
    title
}

fn count(conn: &rusqlite::Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
        .unwrap()
}

#[test]
fn insert_batches_and_delete_all() {
    let mut conn = open_memory().unwrap();
    let a = actor(1, "A");
    let b = actor(2, "B");

    assert_eq!(insert_actors(&mut conn, &[a.clone(), b.clone()]).unwrap(), 2);
    let titles = vec![
        title_with_cast(TitleKey::movie(10), "Ten", &[&a, &b]),
        title_with_cast(TitleKey::series(10), "Ten (series)", &[&a]),
    ];
    assert_eq!(insert_titles(&mut conn, &titles).unwrap(), 2);

    assert_eq!(count(&conn, "titles"), 2);
    assert_eq!(count(&conn, "title_cast"), 3);
    assert_eq!(count(&conn, "reviews"), 2);
    assert_eq!(count(&conn, "title_tags"), 4);

    let deleted = delete_all(&mut conn).unwrap();
    assert_eq!(deleted, DeleteStats { titles: 2, actors: 2 });
    for table in ["titles", "actors", "title_cast", "title_tags", "title_photos", "reviews"] {
        assert_eq!(count(&conn, table), 0, "{table}");
    }
}

#[test]
fn title_referencing_unknown_actor_fails_whole_batch() {
    let mut conn = open_memory().unwrap();
    let known = actor(1, "Known");
    let ghost = actor(99, "Ghost");
    insert_actors(&mut conn, &[known.clone()]).unwrap();

    let batch = vec![
        title_with_cast(TitleKey::movie(1), "Fine", &[&known]),
        title_with_cast(TitleKey::movie(2), "Broken", &[&ghost]),
    ];
    assert!(insert_titles(&mut conn, &batch).is_err());
    assert_eq!(count(&conn, "titles"), 0);
}

#[test]
fn duplicate_actor_rows_update_in_place() {
    let mut conn = open_memory().unwrap();
    insert_actors(&mut conn, &[actor(5, "Old Name")]).unwrap();
    insert_actors(&mut conn, &[actor(5, "New Name")]).unwrap();
    let name: String = conn
        .query_row("SELECT name FROM actors WHERE id = 5", [], |r| r.get(0))
        .unwrap();
    assert_eq!(name, "New Name");
    assert_eq!(count(&conn, "actors"), 1);
}

#[test]
fn full_title_reads_back() {
    let mut conn = open_memory().unwrap();
    let a = actor(1, "A");
    insert_actors(&mut conn, &[a.clone()]).unwrap();

    let mut title = title_with_cast(TitleKey::movie(77), "Seventy Seven", &[&a]);
    title.kind = Kind::Short;
    title.duration = 22;
    title.categories.insert(Category::ImdTop250);
    title.top_lists.insert(TopList::OscarWinners);
    title.trailer = Some("https://www.youtube.com/watch?v=x".into());
    insert_titles(&mut conn, std::slice::from_ref(&title)).unwrap();

    let loaded = load_title(&conn, &title.key).unwrap().unwrap();
    assert_eq!(loaded, title);
    assert!(load_title(&conn, &TitleKey::series(77)).unwrap().is_none());
}
