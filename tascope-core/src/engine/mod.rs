//! Analysis engine: per-call orchestration over the three timeframes.
//!
//! One call takes an ascending daily history, builds the daily, weekly and
//! monthly series and runs each through the indicator engine, the signal
//! evaluator, the summary resolver and the report builder. The first
//! sufficiency failure (history, then daily, weekly, monthly) aborts the
//! whole call; partial results are never returned.

pub mod frame;
pub mod precompute;
pub mod result;
pub mod timeframe;

pub use frame::{validate, FrameIndicators, IndicatorEngine, MIN_SERIES_BARS};
pub use precompute::precompute_indicators;
pub use result::AnalysisResult;
pub use timeframe::{analyze_timeframe, TimeframeAnalysis};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::build_series;
use crate::domain::{PriceRecord, Timeframe};
use crate::error::AnalysisError;

/// Daily records required before anything is computed.
pub const MIN_HISTORY_RECORDS: usize = 30;

/// Execution options for one analysis call. None of them change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Run the three timeframe pipelines on the rayon pool instead of in turn.
    #[serde(default)]
    pub parallel_timeframes: bool,
}

/// Analyse `history` (ascending by date) with default options.
pub fn analyze(symbol: &str, history: &[PriceRecord]) -> Result<AnalysisResult, AnalysisError> {
    analyze_with(symbol, history, &AnalysisOptions::default())
}

pub fn analyze_with(
    symbol: &str,
    history: &[PriceRecord],
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    if history.len() < MIN_HISTORY_RECORDS {
        return Err(AnalysisError::not_enough_history(
            history.len(),
            MIN_HISTORY_RECORDS,
        ));
    }

    debug!(
        symbol,
        records = history.len(),
        parallel = options.parallel_timeframes,
        "starting analysis"
    );

    let engine = IndicatorEngine::standard();
    let run = |timeframe: Timeframe| {
        let series = build_series(history, symbol, timeframe);
        analyze_timeframe(&engine, &series)
    };

    let (daily, weekly, monthly) = if options.parallel_timeframes {
        let (daily, (weekly, monthly)) = rayon::join(
            || run(Timeframe::Daily),
            || rayon::join(|| run(Timeframe::Weekly), || run(Timeframe::Monthly)),
        );
        // same error precedence as the sequential path
        (daily?, weekly?, monthly?)
    } else {
        let daily = run(Timeframe::Daily)?;
        let weekly = run(Timeframe::Weekly)?;
        let monthly = run(Timeframe::Monthly)?;
        (daily, weekly, monthly)
    };

    Ok(AnalysisResult {
        symbol: symbol.to_string(),
        daily,
        weekly,
        monthly,
    })
}
