//! SignalEvaluator: per-category vote tallies.

use crate::engine::FrameIndicators;

use super::rules::{
    cci_signal, ma_signal, macd_signal, momentum_signal, rsi_signal, stochastic_signal,
};
use super::{SignalStats, TimeframeSignal};

/// Votes of RSI, MACD, %K, CCI and momentum.
pub fn evaluate_oscillators(fi: &FrameIndicators) -> TimeframeSignal {
    let votes = [
        rsi_signal(fi.rsi),
        macd_signal(fi.macd),
        stochastic_signal(fi.stoch),
        cci_signal(fi.cci),
        momentum_signal(fi.momentum),
    ];
    TimeframeSignal::from_stats(SignalStats::tally(&votes))
}

/// Votes of the close against SMA20, EMA20, WMA20, SMA10 and EMA10.
pub fn evaluate_moving_averages(fi: &FrameIndicators, last_close: f64) -> TimeframeSignal {
    let votes = [
        ma_signal(last_close, fi.sma),
        ma_signal(last_close, fi.ema),
        ma_signal(last_close, fi.wma),
        ma_signal(last_close, fi.sma_short),
        ma_signal(last_close, fi.ema_short),
    ];
    TimeframeSignal::from_stats(SignalStats::tally(&votes))
}
