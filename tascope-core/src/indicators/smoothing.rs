//! Shared smoothing building blocks for EMA, MACD and ADX.

use crate::domain::Bar;

/// True Range series.
/// TR[0] = high[0] - low[0] (no previous close).
/// TR[t] = max(high[t]-low[t], |high[t]-close[t-1]|, |low[t]-close[t-1]|).
pub fn true_range(bars: &[Bar]) -> Vec<f64> {
    let mut tr = Vec::with_capacity(bars.len());
    if let Some(first) = bars.first() {
        tr.push(first.high - first.low);
    }
    tr.extend(bars.windows(2).map(|w| {
        let (prev_close, bar) = (w[0].close, &w[1]);
        (bar.high - bar.low)
            .max((bar.high - prev_close).abs())
            .max((bar.low - prev_close).abs())
    }));
    tr
}

/// Exponential smoothing seeded with the first value.
pub fn exponential(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(p) => p + alpha * (value - p),
            None => value,
        };
        prev = Some(next);
        result.push(next);
    }
    result
}

/// Wilder smoothing (alpha = 1/period), seeded with the first value.
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; values.len()];
    }
    exponential(values, 1.0 / period as f64)
}
