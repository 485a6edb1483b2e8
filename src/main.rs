use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;

use powerpos::{
    clock::SystemClock,
    config::AppConfig,
    logger::init_tracing,
    trades::{
        source::TradeSource,
        types::{PeriodVolume, Trade},
    },
    worker::ExtractWorker,
};

/// Stand-in trade source emitting a fixed book.
struct StubTradeSource;

#[async_trait::async_trait]
impl TradeSource for StubTradeSource {
    async fn get_trades(&self, date: NaiveDate) -> anyhow::Result<Vec<Trade>> {
        // TODO: replace with the real trading-system client once API access
        // is provisioned.
        let periods = (1..=24)
            .map(|period| PeriodVolume {
                period,
                volume: Decimal::new(100, 0),
            })
            .collect();
        Ok(vec![Trade::new(date, periods)])
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env();
    init_tracing(cfg.log_json);

    tracing::info!("starting power position worker");

    // Resolve the output folder against the working directory and make
    // sure it exists before the first run.
    let folder = std::env::current_dir()?.join(&cfg.csv_folder);
    std::fs::create_dir_all(&folder)?;

    let worker = ExtractWorker::new(
        Arc::new(StubTradeSource),
        Arc::new(SystemClock::new(cfg.timezone)),
        folder,
        Duration::from_secs(cfg.extract_interval_minutes * 60),
    );

    let cancel = CancellationToken::new();
    let handle = tokio::spawn(worker.run(cancel.clone()));

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");

    // Stop taking new runs; an in-flight run is allowed to finish.
    cancel.cancel();
    handle.await?;

    Ok(())
}
