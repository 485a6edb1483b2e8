use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Source of "now" in the trading location's civil time.
///
/// Injected rather than read ambiently so tests can pin the clock to a
/// specific instant (including DST-boundary dates) deterministically.
pub trait Clock: Send + Sync + 'static {
    fn now_local(&self) -> NaiveDateTime;
}

/// Wall clock converted into a named IANA time zone.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}
