//! Power position extract worker.
//!
//! Periodically pulls a trading day's power trades from the trading system,
//! aggregates per-period volumes into 24 hourly buckets anchored to the
//! trading location's local time, and writes the result as a CSV snapshot.

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod position;
pub mod trades;
pub mod worker;
