use async_trait::async_trait;
use chrono::NaiveDate;

use crate::trades::types::Trade;

/// Abstraction over the external trading system.
///
/// This trait intentionally hides:
/// - transport and auth
/// - vendor error formats
///
/// Failures surface as `anyhow` errors and are handled at the run boundary,
/// never inside the aggregation core.
#[async_trait]
pub trait TradeSource: Send + Sync + 'static {
    async fn get_trades(&self, date: NaiveDate) -> anyhow::Result<Vec<Trade>>;
}
