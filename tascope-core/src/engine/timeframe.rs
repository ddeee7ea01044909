//! One timeframe's pipeline: indicators, votes, summary, detail rows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Series, Timeframe};
use crate::error::AnalysisError;
use crate::report::{build_indicator_table, IndicatorRow};
use crate::signals::{evaluate_moving_averages, evaluate_oscillators, resolve, TimeframeSignal};

use super::frame::{validate, FrameIndicators, IndicatorEngine};

/// Everything derived from a single series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeAnalysis {
    pub timeframe: Timeframe,
    pub bar_count: usize,
    pub last_close: f64,
    pub indicators: FrameIndicators,
    pub oscillators: TimeframeSignal,
    pub moving_averages: TimeframeSignal,
    pub summary: TimeframeSignal,
    pub details: Vec<IndicatorRow>,
}

/// Run the engine, evaluator, resolver and report builder over `series`.
///
/// Every rule compares against this series' own last close.
pub fn analyze_timeframe(
    engine: &IndicatorEngine,
    series: &Series,
) -> Result<TimeframeAnalysis, AnalysisError> {
    let timeframe = series.timeframe();
    let indicators = engine.compute(series)?;
    validate(&indicators, timeframe)?;

    // compute() has already rejected short (and therefore empty) series
    let last_close = series
        .last_close()
        .ok_or_else(|| AnalysisError::not_enough_bars(timeframe, 0, super::MIN_SERIES_BARS))?;

    let oscillators = evaluate_oscillators(&indicators);
    let moving_averages = evaluate_moving_averages(&indicators, last_close);
    let summary = resolve(&oscillators, &moving_averages, &indicators, last_close);
    let details = build_indicator_table(&indicators, last_close);

    debug!(
        series = series.name(),
        bars = series.len(),
        summary = %summary.signal,
        base = %summary.base_signal,
        reason = %summary.filter_reason,
        "timeframe analysed"
    );

    Ok(TimeframeAnalysis {
        timeframe,
        bar_count: series.len(),
        last_close,
        indicators,
        oscillators,
        moving_averages,
        summary,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;
    use crate::signals::{FilterReason, TaSignal};

    #[test]
    fn steady_uptrend_is_a_confirmed_buy() {
        // closes climb by 1 with a pullback every third bar, keeping RSI below 100
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + i as f64 - if i % 3 == 2 { 1.5 } else { 0.0 })
            .collect();
        let series = Series::new("UP_D", Timeframe::Daily, make_bars(&closes));
        let analysis = analyze_timeframe(&IndicatorEngine::standard(), &series).unwrap();

        assert_eq!(analysis.bar_count, 60);
        assert_eq!(analysis.last_close, *closes.last().unwrap());
        assert_eq!(analysis.moving_averages.signal, TaSignal::Buy);
        assert_eq!(analysis.summary.stats.total(), 10);
        assert_eq!(analysis.details.len(), 10);
        assert_eq!(analysis.summary.base_signal, TaSignal::Buy);
        assert_eq!(analysis.summary.signal, TaSignal::Buy);
        assert_eq!(analysis.summary.filter_reason, FilterReason::None);
        assert!(analysis.indicators.adx.is_some_and(|adx| adx >= 25.0));
    }

    #[test]
    fn short_series_fails_with_timeframe_message() {
        let series = Series::new("X_M", Timeframe::Monthly, make_bars(&[1.0; 5]));
        let err = analyze_timeframe(&IndicatorEngine::standard(), &series).unwrap_err();
        assert!(err.message().contains("monthly"));
    }
}
