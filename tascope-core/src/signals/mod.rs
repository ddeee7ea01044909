//! Signals: directional votes derived from one timeframe's indicator snapshot.
//!
//! Rules map a single indicator value to a `TaSignal`; the evaluator tallies
//! oscillator and moving-average votes; the resolver combines both tallies
//! into the filtered per-timeframe summary.

pub mod evaluator;
pub mod resolver;
pub mod rules;

pub use evaluator::{evaluate_moving_averages, evaluate_oscillators};
pub use resolver::resolve;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaSignal {
    Buy,
    Sell,
    #[default]
    Neutral,
}

impl TaSignal {
    pub fn as_str(self) -> &'static str {
        match self {
            TaSignal::Buy => "BUY",
            TaSignal::Sell => "SELL",
            TaSignal::Neutral => "NEUTRAL",
        }
    }

    pub fn is_neutral(self) -> bool {
        self == TaSignal::Neutral
    }
}

impl fmt::Display for TaSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vote counts behind a verdict. `buy + sell + neutral` equals the number
/// of votes tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalStats {
    pub buy: u32,
    pub sell: u32,
    pub neutral: u32,
}

impl SignalStats {
    pub fn tally(votes: &[TaSignal]) -> Self {
        votes.iter().fold(Self::default(), |mut stats, vote| {
            match vote {
                TaSignal::Buy => stats.buy += 1,
                TaSignal::Sell => stats.sell += 1,
                TaSignal::Neutral => stats.neutral += 1,
            }
            stats
        })
    }

    pub fn total(&self) -> u32 {
        self.buy + self.sell + self.neutral
    }

    /// Strict majority: a side wins only if it beats both other counts.
    /// Ties and all-neutral tallies are NEUTRAL.
    pub fn majority(&self) -> TaSignal {
        if self.buy > self.sell && self.buy > self.neutral {
            TaSignal::Buy
        } else if self.sell > self.buy && self.sell > self.neutral {
            TaSignal::Sell
        } else {
            TaSignal::Neutral
        }
    }

    /// Element-wise sum of two tallies.
    pub fn combine(&self, other: &SignalStats) -> Self {
        Self {
            buy: self.buy + other.buy,
            sell: self.sell + other.sell,
            neutral: self.neutral + other.neutral,
        }
    }
}

/// Why a summary verdict differs from its base majority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterReason {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "ADX filter (weak trend)")]
    AdxWeakTrend,
    #[serde(rename = "Bollinger Bands conflict")]
    BollingerConflict,
}

impl FilterReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterReason::None => "NONE",
            FilterReason::AdxWeakTrend => "ADX filter (weak trend)",
            FilterReason::BollingerConflict => "Bollinger Bands conflict",
        }
    }
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict with the votes behind it.
///
/// For the oscillator and moving-average blocks `base_signal` equals
/// `signal` and `filter_reason` is `None`; only the summary block is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeSignal {
    pub signal: TaSignal,
    pub stats: SignalStats,
    pub base_signal: TaSignal,
    pub filter_reason: FilterReason,
}

impl TimeframeSignal {
    /// Unfiltered verdict: the strict majority of `stats`.
    pub fn from_stats(stats: SignalStats) -> Self {
        let signal = stats.majority();
        Self {
            signal,
            stats,
            base_signal: signal,
            filter_reason: FilterReason::None,
        }
    }
}
