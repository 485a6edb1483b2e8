pub mod source;
pub mod types;

pub use source::TradeSource;
pub use types::{PeriodVolume, Trade};
