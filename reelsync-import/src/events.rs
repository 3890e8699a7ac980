//! Progress events emitted by a sync run, and a helper for consuming them.

use std::future::Future;

use reelsync_core::{MediaKind, TitleKey};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Duration, Instant};

use crate::discovery::DiscoveryStrategy;
use crate::sync::{SyncPhase, SyncReport};

/// Maximum time to drain remaining events after the task completes.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub enum SyncEvent {
    PhaseChanged(SyncPhase),
    /// Discovery for one strategy and kind joined; fetching these
    /// candidates starts next.
    CandidatesFound {
        media: MediaKind,
        strategy: DiscoveryStrategy,
        candidates: usize,
    },
    TitleFetched {
        key: TitleKey,
        name: String,
        /// Candidates handled so far in this strategy, fetched or skipped.
        done: usize,
        total: usize,
    },
    Persisted {
        titles: usize,
        actors: usize,
    },
    Done(SyncReport),
}

/// Drive an async task while processing events from its channel.
///
/// Runs `task` to completion, calling `on_event` for each event received on
/// `event_rx`. Returns the task's result after the channel is drained, or
/// after [`DRAIN_TIMEOUT`] if a sender outlives the task.
pub async fn run_with_events<F, E, R>(
    task: F,
    mut event_rx: UnboundedReceiver<E>,
    mut on_event: impl FnMut(E),
) -> R
where
    F: Future<Output = R>,
{
    tokio::pin!(task);
    let mut result = None;
    let mut event_count: u64 = 0;

    loop {
        tokio::select! {
            r = &mut task, if result.is_none() => {
                log::debug!("run_with_events: task completed after {} events", event_count);
                result = Some(r);
                break;
            }
            event = event_rx.recv() => {
                match event {
                    Some(e) => {
                        event_count += 1;
                        on_event(e);
                    }
                    None => break,
                }
            }
        }
    }

    let Some(result) = result else {
        // Every sender dropped first; nothing left to drain.
        return task.await;
    };

    let deadline = Instant::now() + DRAIN_TIMEOUT;
    loop {
        match tokio::time::timeout_at(deadline, event_rx.recv()).await {
            Ok(Some(e)) => on_event(e),
            Ok(None) => break,
            Err(_) => {
                log::warn!(
                    "run_with_events: drain timed out after {}s, senders likely leaked",
                    DRAIN_TIMEOUT.as_secs()
                );
                break;
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[tokio::test]
    async fn delivers_every_event_and_returns_result() {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = async move {
            for i in 0..5 {
                tx.send(i).unwrap();
                tokio::task::yield_now().await;
            }
            "done"
        };
        let mut seen = Vec::new();
        let result = run_with_events(task, rx, |e| seen.push(e)).await;
        assert_eq!(result, "done");
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn channel_closed_before_task_finishes() {
        let (tx, rx) = mpsc::unbounded_channel::<u32>();
        drop(tx);
        let result = run_with_events(async { 7 }, rx, |_| {}).await;
        assert_eq!(result, 7);
    }
}
