use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One trade fetched for a trading date, carrying its per-period volumes.
///
/// Owned transiently by a single extract run; never persisted here.
#[derive(Clone, Debug)]
pub struct Trade {
    pub trade_date: NaiveDate,
    pub periods: Vec<PeriodVolume>,
}

impl Trade {
    pub fn new(trade_date: NaiveDate, periods: Vec<PeriodVolume>) -> Self {
        Self {
            trade_date,
            periods,
        }
    }
}

/// Volume reported for one trading period.
///
/// Periods are numbered 1..=24: period 1 covers 23:00-00:00 of the day
/// before the trade date, period 24 covers 22:00-23:00 of the trade date
/// itself. Several trades may report the same period; their volumes add.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodVolume {
    pub period: i32,
    pub volume: Decimal,
}
