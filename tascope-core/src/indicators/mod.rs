//! Concrete indicator implementations.
//!
//! Every indicator implements `Indicator` from `components::indicator` and
//! produces a series aligned with its input bars, `f64::NAN` during warm-up.
//! Close-only indicators also expose a `*_of_series` function over a plain
//! `f64` slice so composed indicators (MACD, Bollinger) can reuse them.
//!
//! Inputs are assumed finite: the loader rejects non-finite prices before
//! history reaches the engine.

pub mod adx;
pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod macd;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod smoothing;
pub mod stochastic;
pub mod wma;

pub use adx::Adx;
pub use bollinger::{Bollinger, BollingerBand};
pub use cci::Cci;
pub use ema::Ema;
pub use macd::Macd;
pub use roc::Roc;
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::Stochastic;
pub use wma::Wma;

use crate::domain::Bar;

/// Close prices of a bar slice.
pub(crate) fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|bar| bar.close).collect()
}

/// Create synthetic bars from close prices for testing.
///
/// open = prev_close (or close for the first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
