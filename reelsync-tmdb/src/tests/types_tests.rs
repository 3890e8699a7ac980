use super::*;

#[test]
fn movie_details_decode() {
    let json = r#"{
        "id": 550,
        "title": "Fight Club",
        "overview": "A ticking-time-bomb insomniac...",
        "vote_average": 8.4,
        "vote_count": 27000,
        "popularity": 61.4,
        "release_date": "1999-10-15",
        "runtime": 139,
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "genres": [{"id": 18, "name": "Drama"}],
        "budget": 63000000,
        "revenue": 100853753
    }"#;
    let raw: DetailsResponse = serde_json::from_str(json).unwrap();
    let details = TitleDetails::from(raw);
    assert_eq!(details.name, "Fight Club");
    assert_eq!(details.release_date.as_deref(), Some("1999-10-15"));
    assert_eq!(details.runtime, Some(139));
    assert_eq!(details.genres, vec!["Drama"]);
    assert!(details.creators.is_empty());
}

#[test]
fn series_details_decode_with_tv_field_names() {
    let json = r#"{
        "id": 1399,
        "name": "Game of Thrones",
        "overview": null,
        "first_air_date": "2011-04-17",
        "episode_run_time": [60, 55],
        "genres": [{"id": 10765, "name": "Sci-Fi & Fantasy"}],
        "created_by": [{"id": 9813, "name": "David Benioff"}, {"id": 228068, "name": "D. B. Weiss"}]
    }"#;
    let raw: DetailsResponse = serde_json::from_str(json).unwrap();
    let details = TitleDetails::from(raw);
    assert_eq!(details.name, "Game of Thrones");
    assert_eq!(details.overview, "");
    assert_eq!(details.release_date.as_deref(), Some("2011-04-17"));
    assert_eq!(details.episode_run_time, vec![60, 55]);
    assert_eq!(details.creators[0], "David Benioff");
    assert_eq!(details.budget, 0);
}

#[test]
fn empty_release_date_becomes_none() {
    let raw: DetailsResponse =
        serde_json::from_str(r#"{"id": 1, "title": "X", "release_date": ""}"#).unwrap();
    assert_eq!(TitleDetails::from(raw).release_date, None);
}

#[test]
fn keywords_decode_under_either_key() {
    let movie: KeywordsResponse =
        serde_json::from_str(r#"{"id": 1, "keywords": [{"id": 9, "name": "true story"}]}"#)
            .unwrap();
    let tv: KeywordsResponse =
        serde_json::from_str(r#"{"id": 1, "results": [{"id": 9, "name": "time loop"}]}"#)
            .unwrap();
    assert_eq!(movie.keywords[0].name, "true story");
    assert_eq!(tv.keywords[0].name, "time loop");
}

#[test]
fn reviews_carry_author_details() {
    let json = r#"{
        "page": 1, "total_pages": 3,
        "results": [
            {"author": "a", "author_details": {"avatar_path": "/x.jpg", "rating": 7.0},
             "content": "good", "created_at": "2020-01-01T00:00:00.000Z"},
            {"author": "b", "content": "meh"}
        ]
    }"#;
    let page = ReviewPage::from(serde_json::from_str::<ReviewsResponse>(json).unwrap());
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.results[0].rating, Some(7.0));
    assert_eq!(page.results[0].avatar_path.as_deref(), Some("/x.jpg"));
    assert_eq!(page.results[1].avatar_path, None);
}

#[test]
fn list_page_keeps_result_order() {
    let json = r#"{"page": 2, "total_pages": 500, "results": [{"id": 3}, {"id": 1}, {"id": 2}]}"#;
    let page = ListPage::from(serde_json::from_str::<PagedIds>(json).unwrap());
    assert_eq!(page.ids, vec![3, 1, 2]);
    assert_eq!(page.page, 2);
}
