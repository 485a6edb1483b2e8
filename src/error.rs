use thiserror::Error;

/// Failures a single extract run can produce.
///
/// Cancellation is deliberately not represented here; a stop signal is a
/// clean exit, not an error.
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("trade source failure: {0}")]
    TradeSource(String),

    #[error("failed to write {file}: {source}")]
    Export { file: String, source: csv::Error },
}
