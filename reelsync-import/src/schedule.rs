//! Cron-triggered sync runs.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::ScheduleError;
use crate::events::SyncEvent;
use crate::sync::SyncCoordinator;

/// Register a sync on `cron` (six fields, seconds first) and start the
/// scheduler. A trigger that fires while a run is active is skipped.
///
/// The returned scheduler keeps running until it is shut down or dropped
/// with the runtime.
pub async fn start_weekly(
    coordinator: Arc<SyncCoordinator>,
    cron: &str,
) -> Result<JobScheduler, ScheduleError> {
    let sched = JobScheduler::new().await?;
    let job = Job::new_async(cron, move |_uuid, _l| {
        let coordinator = coordinator.clone();
        Box::pin(async move {
            if coordinator.is_running() {
                log::warn!("Scheduled sync skipped: a run is already in progress");
                return;
            }
            let (tx, mut rx) = mpsc::unbounded_channel();
            let drain = tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    if let SyncEvent::CandidatesFound {
                        media,
                        strategy,
                        candidates,
                    } = event
                    {
                        log::info!("{} {}: {} candidates", strategy, media.label(), candidates);
                    }
                }
            });
            match coordinator.run(&tx).await {
                Ok(report) => log::info!(
                    "Scheduled sync stored {} titles and {} actors",
                    report.titles(),
                    report.actors
                ),
                Err(e) => log::error!("Scheduled sync failed: {}", e),
            }
            drop(tx);
            let _ = drain.await;
        })
    })?;
    sched.add(job).await?;
    sched.start().await?;
    log::info!("Sync scheduled on '{}'", cron);
    Ok(sched)
}
