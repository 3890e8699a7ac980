use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use reelsync_import::{SyncCoordinator, SyncEvent, SyncReport, run_with_events};
use tokio::sync::mpsc;

use crate::CliError;
use crate::cli_types::SyncArgs;

use super::{build_coordinator, load_settings, runtime};

/// Run one full sync.
pub(crate) fn run_sync(args: &SyncArgs, quiet: bool) -> Result<(), CliError> {
    let settings = load_settings(args)?;
    log::info!(
        "{}",
        "Syncing catalog".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {} workers, {}ms pacing, years {}.., {} pages",
        settings.workers,
        settings.pace_ms,
        settings.first_year,
        settings.popular_pages,
    );
    crate::log_blank();

    let coordinator = build_coordinator(settings)?;
    let rt = runtime()?;
    let report = rt.block_on(run_once(&coordinator, quiet))?;
    print_report(&report);
    Ok(())
}

/// Run a sync while showing progress from its events.
pub(crate) async fn run_once(
    coordinator: &SyncCoordinator,
    quiet: bool,
) -> Result<SyncReport, CliError> {
    let (tx, rx) = mpsc::unbounded_channel();

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    };
    let bar_style = ProgressStyle::with_template(
        "  {spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("=> ");

    let task = async move { coordinator.run(&tx).await };
    let result = run_with_events(task, rx, |event| match event {
        SyncEvent::PhaseChanged(phase) => {
            pb.set_message(phase.to_string());
        }
        SyncEvent::CandidatesFound {
            media,
            strategy,
            candidates,
        } => {
            pb.set_style(bar_style.clone());
            pb.set_length(candidates as u64);
            pb.set_position(0);
            pb.set_message(format!("{} {}", strategy, media.label()));
            log::debug!("{} {}: {} candidates", strategy, media.label(), candidates);
        }
        SyncEvent::TitleFetched { name, done, .. } => {
            pb.set_position(done as u64);
            log::debug!("  fetched {}", name);
        }
        SyncEvent::Persisted { titles, actors } => {
            pb.set_message(format!("stored {} titles, {} actors", titles, actors));
        }
        SyncEvent::Done(_) => {}
    })
    .await;
    pb.finish_and_clear();

    result.map_err(CliError::from)
}

pub(crate) fn print_report(report: &SyncReport) {
    log::info!(
        "{} Sync complete in {:.1}s",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.elapsed.as_secs_f64(),
    );
    log::info!("  Movies:   {:>8}", report.movies);
    log::info!("  Series:   {:>8}", report.series);
    log::info!("  Shorts:   {:>8}", report.shorts);
    log::info!("  Actors:   {:>8}", report.actors);
    log::info!(
        "  {}",
        format!(
            "replaced {} titles and {} actors",
            report.replaced_titles, report.replaced_actors
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
}
