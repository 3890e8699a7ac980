use std::sync::Arc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::SyncArgs;

use super::sync::{print_report, run_once};
use super::{build_coordinator, load_settings, runtime};

/// Start the weekly scheduler and block until Ctrl-C.
pub(crate) fn run_schedule(
    args: &SyncArgs,
    cron: Option<String>,
    run_now: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = load_settings(args)?;
    let cron = cron.unwrap_or_else(|| settings.schedule.clone());
    let coordinator = Arc::new(build_coordinator(settings)?);
    let rt = runtime()?;

    rt.block_on(async {
        if run_now {
            match run_once(&coordinator, quiet).await {
                Ok(report) => print_report(&report),
                // A failed run does not stop the schedule.
                Err(e) => log::error!(
                    "{} Initial sync failed: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e,
                ),
            }
        }

        let mut sched = reelsync_import::start_weekly(coordinator.clone(), &cron)
            .await
            .map_err(|e| CliError::runtime(e.to_string()))?;
        log::info!(
            "Waiting for schedule {} (Ctrl-C to stop)",
            cron.if_supports_color(Stdout, |t| t.cyan()),
        );

        tokio::signal::ctrl_c().await?;
        log::info!("Stopping scheduler");
        sched
            .shutdown()
            .await
            .map_err(|e| CliError::runtime(e.to_string()))?;
        Ok::<(), CliError>(())
    })
}
