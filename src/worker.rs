//! Periodic extract worker.
//!
//! Drives the extract on an immediate-then-interval cadence:
//! one run fires on startup, then the loop re-arms every `interval` after
//! the previous run has finished, so at most one run is ever in flight.
//!
//! Failure handling:
//! - a failed run (source or export) is logged and never stops the loop;
//!   the next scheduled tick is the retry mechanism
//! - only cancellation exits, and the inter-run sleep is interruptible,
//!   so a stop signal takes effect within one tick
//! - an in-flight run is allowed to finish before the loop exits

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::clock::Clock;
use crate::error::WorkerError;
use crate::export;
use crate::position::aggregate::aggregate;
use crate::trades::source::TradeSource;

pub struct ExtractWorker<S: TradeSource> {
    source: Arc<S>,
    clock: Arc<dyn Clock>,
    folder: PathBuf,
    interval: Duration,
}

impl<S: TradeSource> ExtractWorker<S> {
    pub fn new(
        source: Arc<S>,
        clock: Arc<dyn Clock>,
        folder: PathBuf,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            clock,
            folder,
            interval,
        }
    }

    /// Runs the extract loop until `cancel` fires.
    pub async fn run(self, cancel: CancellationToken) {
        info!(
            folder = %self.folder.display(),
            every_ms = self.interval.as_millis() as u64,
            "extract worker started"
        );

        // First immediate run, regardless of the configured interval.
        if let Err(e) = self.run_once().await {
            error!(error = %e, "initial extract run failed");
        }

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("extract worker cancellation requested");
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }

            if let Err(e) = self.run_once().await {
                error!(error = %e, "scheduled extract run failed");
            }
        }
    }

    /// One extract: fetch, aggregate, write.
    ///
    /// Failures are returned to the loop, which logs them; nothing here
    /// retries. "Now" is recomputed per run, so each run stamps its own
    /// file name and re-derives the trading date.
    async fn run_once(&self) -> Result<(), WorkerError> {
        let now = self.clock.now_local();
        let file_name = format!("PowerPosition_{}.csv", now.format("%Y%m%d_%H%M"));
        let path = self.folder.join(&file_name);

        info!(file = %file_name, "starting power position extract");

        let trades = self
            .source
            .get_trades(now.date())
            .await
            .map_err(|e| WorkerError::TradeSource(format!("{e:#}")))?;

        let records = aggregate(&trades, now.date());
        export::write_csv(&records, &path)?;

        info!(file = %file_name, rows = records.len(), "power position file written");
        Ok(())
    }
}
