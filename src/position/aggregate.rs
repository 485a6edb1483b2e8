use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::position::periods::{UNKNOWN_TIME, period_time_map};
use crate::trades::types::Trade;

/// Fractional digits kept in reported volumes.
const VOLUME_DP: u32 = 3;

/// Final per-period output row: local start time and summed volume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PositionRecord {
    #[serde(rename = "LocalTime")]
    pub local_time: String,

    #[serde(rename = "Volume")]
    pub volume: Decimal,
}

/// Aggregates per-period volumes across `trades` for `local_date`.
///
/// Volumes reported for the same period add, never overwrite. Sums use
/// exact `Decimal` arithmetic and are rounded exactly once, at the end, to
/// three decimal places with round-half-to-even; the figures feed
/// downstream reconciliation at the lot level, so the rounding mode is part
/// of the contract.
///
/// Output is ordered ascending by period number. Labels wrap past midnight
/// (23:00, 00:00, ...), so ordering by label would be wrong.
pub fn aggregate(trades: &[Trade], local_date: NaiveDate) -> Vec<PositionRecord> {
    let labels = period_time_map(local_date);

    // BTreeMap keyed by period gives grouping and ascending order in one go.
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for trade in trades {
        for pv in &trade.periods {
            *totals.entry(pv.period).or_default() += pv.volume;
        }
    }

    totals
        .into_iter()
        .map(|(period, total)| {
            let local_time = if (1..=24).contains(&period) {
                labels[(period - 1) as usize].clone()
            } else {
                UNKNOWN_TIME.to_string()
            };
            PositionRecord {
                local_time,
                volume: total.round_dp(VOLUME_DP),
            }
        })
        .collect()
}
