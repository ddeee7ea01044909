//! Analysis timeframes and their positional bucket sizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation granularity of a series.
///
/// Weekly and monthly bars are positional buckets of 7 and 30 daily records,
/// not calendar weeks or months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// All timeframes in evaluation order.
    pub const ALL: [Timeframe; 3] = [Timeframe::Daily, Timeframe::Weekly, Timeframe::Monthly];

    /// Number of daily records folded into one bar.
    pub fn window(self) -> usize {
        match self {
            Timeframe::Daily => 1,
            Timeframe::Weekly => 7,
            Timeframe::Monthly => 30,
        }
    }

    /// Suffix appended to the symbol to name the series.
    pub fn suffix(self) -> &'static str {
        match self {
            Timeframe::Daily => "_D",
            Timeframe::Weekly => "_W",
            Timeframe::Monthly => "_M",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        }
    }

    /// Number of bars a history of `records` daily rows produces.
    pub fn bar_count(self, records: usize) -> usize {
        records.div_ceil(self.window())
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
