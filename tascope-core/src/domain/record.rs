//! PriceRecord: one row of stored daily history, as handed to the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored daily price observation.
///
/// `high`, `low` and `volume` may be missing in the upstream store. Aggregated
/// buckets fall back to the record's own open for a missing high/low, daily
/// bars to the open/close body, and volume to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    pub close: f64,
    /// Traded volume in quote currency (`volume_to` in the upstream store).
    #[serde(default, alias = "volume_to")]
    pub volume: Option<f64>,
}

impl PriceRecord {
    pub fn high_or_open(&self) -> f64 {
        self.high.unwrap_or(self.open)
    }

    pub fn low_or_open(&self) -> f64 {
        self.low.unwrap_or(self.open)
    }

    pub fn volume_or_zero(&self) -> f64 {
        self.volume.unwrap_or(0.0)
    }
}
