use super::*;

#[test]
fn new_title_takes_kind_from_key() {
    let movie = Title::new(TitleKey::movie(1), "Heat");
    assert_eq!(movie.kind, Kind::Movie);

    let series = Title::new(TitleKey::series(1), "Heat");
    assert_eq!(series.kind, Kind::Series);
    assert_ne!(movie.key, series.key);
}

#[test]
fn actors_share_identity_across_titles() {
    let actor = Arc::new(Actor::new(7, "Al Pacino", None));

    let mut a = Title::new(TitleKey::movie(1), "Heat");
    a.cast.push(CastCredit {
        actor: Arc::clone(&actor),
        role: "Vincent Hanna".into(),
    });
    let mut b = Title::new(TitleKey::movie(2), "Serpico");
    b.cast.push(CastCredit {
        actor: Arc::clone(&actor),
        role: "Frank Serpico".into(),
    });

    let from_a = a.actors().next().unwrap();
    let from_b = b.actors().next().unwrap();
    assert!(Arc::ptr_eq(from_a, from_b));
}

#[test]
fn title_serializes_tag_identifiers() {
    let mut title = Title::new(TitleKey::movie(3), "Alien");
    title.moods.insert(Mood::ScaryMeSilly);
    title.categories.insert(Category::ImdTop250);
    let json = serde_json::to_value(&title).unwrap();
    assert_eq!(json["moods"][0], "SCARY_ME_SILLY");
    assert_eq!(json["categories"][0], "IMD_TOP_250");
    assert_eq!(json["kind"], "MOVIE");
}
