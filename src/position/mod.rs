pub mod aggregate;
pub mod periods;

pub use aggregate::{PositionRecord, aggregate};
pub use periods::{UNKNOWN_TIME, period_time_map};
