//! The engine's single error kind.

use thiserror::Error;

use crate::domain::Timeframe;

/// Errors produced by the analysis engine.
///
/// There is exactly one kind: a data-sufficiency failure. It is terminal for
/// the call; callers decide whether to omit the technical view, show the
/// message, or retry with more history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InsufficientData(String),
}

impl AnalysisError {
    /// History shorter than the minimum record count.
    pub fn not_enough_history(records: usize, required: usize) -> Self {
        Self::InsufficientData(format!(
            "Not enough historical data to perform technical analysis \
             (got {records} records, need {required})."
        ))
    }

    /// Derived series shorter than the indicator engine's minimum.
    pub fn not_enough_bars(timeframe: Timeframe, bars: usize, required: usize) -> Self {
        Self::InsufficientData(format!(
            "Not enough data to compute {timeframe} technical indicators \
             (got {bars} bars, need {required})."
        ))
    }

    /// Post-computation validation found a required indicator unset.
    pub fn unusable_indicators(timeframe: Timeframe) -> Self {
        Self::InsufficientData(format!(
            "Not enough data to evaluate {timeframe} technical indicators."
        ))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InsufficientData(message) => message,
        }
    }
}
