use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

use crate::birthday::BirthdayDataset;
use crate::feed::{FeedError, FeedLoader};

/// Start the task that reloads the feed on a cron schedule
///
/// Each successful load replaces the published snapshot. A failed load keeps
/// the previous one. The task ends once every receiver has been dropped.
pub fn start_refresh_manager(
    loader: FeedLoader,
    schedule: cron::Schedule,
    snapshot_tx: watch::Sender<Arc<BirthdayDataset>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Feed refresh manager started");

        loop {
            let Some(wait_duration) = next_run_delay(&schedule, Utc::now()) else {
                warn!("No upcoming time found for feed refresh schedule");
                break;
            };

            info!(
                "Next feed refresh will run in {} minutes",
                wait_duration.as_secs() / 60
            );

            tokio::select! {
                _ = sleep(wait_duration) => {
                    if let Err(e) = refresh_once(&loader, &snapshot_tx).await {
                        error!("Failed to refresh birthday feed: {}", e);
                    }
                }
                _ = snapshot_tx.closed() => {
                    break;
                }
            }
        }

        info!("Feed refresh manager stopped");
    })
}

/// Reload the feed and publish the new snapshot
pub async fn refresh_once(
    loader: &FeedLoader,
    snapshot_tx: &watch::Sender<Arc<BirthdayDataset>>,
) -> Result<usize, FeedError> {
    let dataset = loader.load().await?;
    let count = dataset.len();
    snapshot_tx.send_replace(Arc::new(dataset));
    info!("Published refreshed feed with {} person(s)", count);
    Ok(count)
}

/// Time until the schedule next fires after `now`
fn next_run_delay(schedule: &cron::Schedule, now: DateTime<Utc>) -> Option<Duration> {
    let next_time = schedule.after(&now).next()?;
    Some(
        (next_time - now)
            .to_std()
            .unwrap_or(Duration::from_secs(60)),
    )
}
