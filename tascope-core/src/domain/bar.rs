//! Bar: one OHLCV observation for a fixed period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar. For daily bars `date` is the trading day; for aggregated bars it
/// is the date of the last daily record folded into the bucket.
///
/// Bars are built once by the series builder and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Typical price: (high + low + close) / 3.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}
