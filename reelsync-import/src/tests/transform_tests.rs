use std::sync::Arc;

use reelsync_core::{Category, Kind, KnownTitles, TopList};
use reelsync_tmdb::{CastMember, CrewMember, IMAGE_BASE_URL};

use super::*;

fn state() -> RunState {
    let mut known = KnownTitles::default();
    known.top_rated_movies.insert("Small Hours");
    known.award_winning_series.insert("Harbor Lights");
    RunState::new(2024, known)
}

fn movie_parts() -> FetchedParts {
    FetchedParts {
        details: TitleDetails {
            id: 11,
            name: "Small Hours".into(),
            overview: "Inspired by true events in a night shift.".into(),
            vote_average: 7.9,
            vote_count: 900,
            popularity: 12.0,
            release_date: Some("1999-03-14".into()),
            runtime: Some(24),
            poster_path: Some("/poster.jpg".into()),
            genres: vec!["Drama".into(), "Sci-Fi & Fantasy".into(), "Telenovela".into()],
            ..TitleDetails::default()
        },
        credits: Credits {
            cast: vec![CastMember {
                id: 500,
                name: "Mara Quill".into(),
                character: "Night Nurse".into(),
                profile_path: Some("/mara.jpg".into()),
            }],
            crew: vec![
                CrewMember { id: 1, name: "Writer One".into(), job: "Writer".into() },
                CrewMember { id: 2, name: "Pat Reyes".into(), job: "producer".into() },
                CrewMember { id: 3, name: "Lee Park".into(), job: "Director".into() },
            ],
        },
        trailer: Some("https://www.youtube.com/watch?v=abc".into()),
        photos: vec![
            Image { file_path: "/low.jpg".into(), vote_average: 1.0 },
            Image { file_path: "/high.jpg".into(), vote_average: 9.0 },
            Image { file_path: "/mid.jpg".into(), vote_average: 5.0 },
        ],
        keywords: vec![],
        certifications: vec!["PG-13".into()],
        reviews: vec![ReviewEntry {
            author: "critic".into(),
            avatar_path: Some("/https://example.org/a.png".into()),
            content: "Good.".into(),
            rating: Some(8.0),
            created_at: None,
        }],
    }
}

#[test]
fn release_year_from_well_formed_date() {
    assert_eq!(parse_release_year(Some("2020-05-01"), 2024), 2020);
}

#[test]
fn release_year_falls_back_to_current_year() {
    assert_eq!(parse_release_year(None, 2024), 2024);
    assert_eq!(parse_release_year(Some(""), 2024), 2024);
    assert_eq!(parse_release_year(Some("2020"), 2024), 2024);
    assert_eq!(parse_release_year(Some("2020-13-45"), 2024), 2024);
    assert_eq!(parse_release_year(Some("not-a-date"), 2024), 2024);
}

#[test]
fn assembles_movie_fields() {
    let state = state();
    let title = assemble(TitleKey::movie(11), movie_parts(), &state, 2);

    assert_eq!(title.name, "Small Hours");
    assert_eq!(title.release_year, 1999);
    assert_eq!(title.duration, 24);
    assert_eq!(title.kind, Kind::Short);
    assert_eq!(title.poster.as_deref(), Some(format!("{IMAGE_BASE_URL}/poster.jpg").as_str()));
    // First crew member whose job is Director or Producer, in listed order.
    assert_eq!(title.director.as_deref(), Some("Pat Reyes"));
    assert_eq!(
        title.photos.iter().cloned().collect::<Vec<_>>(),
        vec![format!("{IMAGE_BASE_URL}/high.jpg"), format!("{IMAGE_BASE_URL}/mid.jpg")]
    );
    assert_eq!(
        title.genres,
        [Genre::Drama, Genre::ScienceFiction, Genre::Fantasy].into_iter().collect()
    );
    assert_eq!(title.reviews[0].avatar.as_deref(), Some("https://example.org/a.png"));
    assert_eq!(title.cast[0].role, "Night Nurse");
    assert_eq!(
        title.cast[0].actor.photo.as_deref(),
        Some(format!("{IMAGE_BASE_URL}/mara.jpg").as_str())
    );
}

#[test]
fn assembles_scores_from_known_titles() {
    let state = state();
    let title = assemble(TitleKey::movie(11), movie_parts(), &state, 6);
    assert!(title.categories.contains(&Category::MustWatchList));
    assert!(title.categories.contains(&Category::BasedOnATrueStory));
    assert!(title.top_lists.is_empty());
}

#[test]
fn zero_runtime_stays_movie() {
    let state = state();
    let mut parts = movie_parts();
    parts.details.runtime = None;
    let title = assemble(TitleKey::movie(11), parts, &state, 6);
    assert_eq!(title.duration, 0);
    assert_eq!(title.kind, Kind::Movie);
}

#[test]
fn series_uses_creator_and_default_runtime() {
    let state = state();
    let parts = FetchedParts {
        details: TitleDetails {
            id: 77,
            name: "Harbor Lights".into(),
            release_date: None,
            creators: vec!["Iris Dale".into(), "Second Creator".into()],
            ..TitleDetails::default()
        },
        credits: Credits {
            cast: vec![],
            crew: vec![CrewMember { id: 9, name: "Not Used".into(), job: "Director".into() }],
        },
        ..FetchedParts::default()
    };
    let title = assemble(TitleKey::series(77), parts, &state, 6);

    assert_eq!(title.kind, Kind::Series);
    assert_eq!(title.duration, DEFAULT_SERIES_DURATION);
    assert_eq!(title.release_year, 2024);
    assert_eq!(title.director.as_deref(), Some("Iris Dale"));
    assert!(title.top_lists.contains(&TopList::EmmyWinners));
}

#[test]
fn short_series_runtime_is_not_reclassified() {
    let state = state();
    let parts = FetchedParts {
        details: TitleDetails {
            id: 78,
            name: "Quick Bits".into(),
            episode_run_time: vec![12, 25],
            ..TitleDetails::default()
        },
        ..FetchedParts::default()
    };
    let title = assemble(TitleKey::series(78), parts, &state, 6);
    assert_eq!(title.duration, 12);
    assert_eq!(title.kind, Kind::Series);
}

#[test]
fn shared_actor_across_titles() {
    let state = state();
    let first = assemble(TitleKey::movie(11), movie_parts(), &state, 6);
    let mut second_parts = movie_parts();
    second_parts.details.id = 12;
    second_parts.credits.cast[0].character = "Ghost".into();
    let second = assemble(TitleKey::movie(12), second_parts, &state, 6);

    assert!(Arc::ptr_eq(&first.cast[0].actor, &second.cast[0].actor));
    assert_eq!(second.cast[0].role, "Ghost");
    assert_eq!(state.actors.len(), 1);
}
