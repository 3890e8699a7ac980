use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use reelsync_core::{Mood, TitleKey, TopList};
use reelsync_db::TitleSummary;
use reelsync_import::SyncSettings;
use rusqlite::Connection;

use crate::CliError;

fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match db {
        Some(path) => Ok(path),
        None => SyncSettings::load()
            .map(|s| s.db_path)
            .map_err(|e| CliError::config(format!("Failed to load settings: {}", e))),
    }
}

fn open_existing(db: Option<PathBuf>) -> Result<Option<(PathBuf, Connection)>, CliError> {
    let db_path = resolve_db_path(db)?;
    if !db_path.exists() {
        log::warn!("No catalog database found at {}", db_path.display());
        log::info!("Run 'reelsync sync' to create one.");
        return Ok(None);
    }
    let conn = reelsync_db::open_database(&db_path)
        .map_err(|e| CliError::database(format!("Failed to open catalog database: {}", e)))?;
    Ok(Some((db_path, conn)))
}

pub(crate) fn run_stats(
    db: Option<PathBuf>,
    top_list: Option<TopList>,
    mood: Option<Mood>,
    limit: usize,
) -> Result<(), CliError> {
    let Some((db_path, conn)) = open_existing(db)? else {
        return Ok(());
    };

    let stats = reelsync_db::dataset_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query dataset stats: {}", e)))?;

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Movies:         {:>8}", stats.movies);
    log::info!("  Series:         {:>8}", stats.series);
    log::info!("  Shorts:         {:>8}", stats.shorts);
    log::info!("  Actors:         {:>8}", stats.actors);
    log::info!("  Credits:        {:>8}", stats.credits);
    log::info!("  Reviews:        {:>8}", stats.reviews);
    log::info!(
        "  Last sync:      {}",
        stats.last_sync.as_deref().unwrap_or("never"),
    );

    if let Some(list) = top_list {
        let titles = reelsync_db::titles_in_top_list(&conn, list)
            .map_err(|e| CliError::database(e.to_string()))?;
        print_titles(&format!("Top list {}", list), &titles, limit);
    }
    if let Some(mood) = mood {
        let titles = reelsync_db::titles_with_mood(&conn, mood)
            .map_err(|e| CliError::database(e.to_string()))?;
        print_titles(&format!("Mood {}", mood), &titles, limit);
    }

    Ok(())
}

fn print_titles(heading: &str, titles: &[TitleSummary], limit: usize) {
    crate::log_blank();
    log::info!(
        "{} {}",
        heading.if_supports_color(Stdout, |t| t.bold()),
        format!("({} titles)", titles.len()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    for t in titles.iter().take(limit) {
        log::info!(
            "  {:>4.1} {:<40} {} {}",
            t.rating,
            t.name,
            t.release_year,
            t.key.if_supports_color(Stdout, |k| k.dimmed()),
        );
    }
    if titles.len() > limit {
        log::info!("  ... and {} more", titles.len() - limit);
    }
}

fn join(items: Vec<&str>) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Print one stored title.
pub(crate) fn run_show(key: TitleKey, db: Option<PathBuf>) -> Result<(), CliError> {
    let Some((_, conn)) = open_existing(db)? else {
        return Ok(());
    };
    let Some(title) = reelsync_db::load_title(&conn, &key)
        .map_err(|e| CliError::database(e.to_string()))?
    else {
        log::warn!("No title {} in the catalog", key);
        return Ok(());
    };

    log::info!(
        "{} ({}) {}",
        title.name.if_supports_color(Stdout, |t| t.bold()),
        title.release_year,
        title.kind.if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Rating:     {:.1} ({} votes), popularity {:.1}",
        title.rating,
        title.vote_count,
        title.popularity
    );
    log::info!("  Duration:   {} min", title.duration);
    log::info!("  Director:   {}", title.director.as_deref().unwrap_or("-"));
    log::info!(
        "  Genres:     {}",
        join(title.genres.iter().map(|g| g.display_name()).collect())
    );
    log::info!(
        "  Moods:      {}",
        join(title.moods.iter().map(|m| m.as_str()).collect())
    );
    log::info!(
        "  Categories: {}",
        join(title.categories.iter().map(|c| c.as_str()).collect())
    );
    log::info!(
        "  Top lists:  {}",
        join(title.top_lists.iter().map(|l| l.as_str()).collect())
    );
    log::info!(
        "  Cast:       {}",
        join(title.cast.iter().take(5).map(|c| c.actor.name.as_str()).collect())
    );
    log::info!("  Reviews:    {}", title.reviews.len());
    if let Some(trailer) = &title.trailer {
        log::info!("  Trailer:    {}", trailer);
    }
    if !title.overview.is_empty() {
        crate::log_blank();
        log::info!("  {}", title.overview);
    }
    Ok(())
}
