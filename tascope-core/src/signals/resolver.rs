//! SummaryResolver: combined majority, then ADX and Bollinger filters.

use crate::engine::FrameIndicators;

use super::rules::{bollinger_signal, is_strong_trend};
use super::{FilterReason, TaSignal, TimeframeSignal};

/// Combine the oscillator and moving-average tallies into the summary verdict.
///
/// 1. `base_signal` is the strict majority of the ten combined votes.
/// 2. Without a strong trend (ADX >= 25) a directional base is neutralised.
/// 3. A directional Bollinger signal that differs from the verdict so far
///    neutralises it and takes over the reason, including after step 2.
pub fn resolve(
    oscillators: &TimeframeSignal,
    moving_averages: &TimeframeSignal,
    fi: &FrameIndicators,
    last_close: f64,
) -> TimeframeSignal {
    let stats = oscillators.stats.combine(&moving_averages.stats);
    let base_signal = stats.majority();

    let mut signal = base_signal;
    let mut filter_reason = FilterReason::None;

    if !is_strong_trend(fi.adx) && !signal.is_neutral() {
        signal = TaSignal::Neutral;
        filter_reason = FilterReason::AdxWeakTrend;
    }

    let band = bollinger_signal(last_close, fi.bollinger_upper, fi.bollinger_lower);
    if !band.is_neutral() && band != signal {
        signal = TaSignal::Neutral;
        filter_reason = FilterReason::BollingerConflict;
    }

    TimeframeSignal {
        signal,
        stats,
        base_signal,
        filter_reason,
    }
}
