//! Per-indicator signal rules.
//!
//! Every threshold is a strict inequality: a value sitting exactly on a
//! threshold is NEUTRAL. A missing value (e.g. %K over a flat range) is
//! also NEUTRAL.

use super::TaSignal;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;
pub const CCI_OVERSOLD: f64 = -100.0;
pub const CCI_OVERBOUGHT: f64 = 100.0;
pub const ADX_STRONG_TREND: f64 = 25.0;

/// BUY below `low`, SELL above `high`.
fn band(value: Option<f64>, low: f64, high: f64) -> TaSignal {
    match value {
        Some(v) if v < low => TaSignal::Buy,
        Some(v) if v > high => TaSignal::Sell,
        _ => TaSignal::Neutral,
    }
}

/// BUY above zero, SELL below zero.
fn sign(value: Option<f64>) -> TaSignal {
    band(value.map(|v| -v), 0.0, 0.0)
}

pub fn rsi_signal(rsi: Option<f64>) -> TaSignal {
    band(rsi, RSI_OVERSOLD, RSI_OVERBOUGHT)
}

pub fn macd_signal(macd: Option<f64>) -> TaSignal {
    sign(macd)
}

pub fn stochastic_signal(k: Option<f64>) -> TaSignal {
    band(k, STOCH_OVERSOLD, STOCH_OVERBOUGHT)
}

pub fn cci_signal(cci: Option<f64>) -> TaSignal {
    band(cci, CCI_OVERSOLD, CCI_OVERBOUGHT)
}

pub fn momentum_signal(roc: Option<f64>) -> TaSignal {
    sign(roc)
}

/// Close above the average is bullish, below is bearish.
pub fn ma_signal(close: f64, ma: Option<f64>) -> TaSignal {
    sign(ma.map(|ma| close - ma))
}

/// Close under the lower band is BUY, over the upper band is SELL.
/// A missing band never triggers.
pub fn bollinger_signal(close: f64, upper: Option<f64>, lower: Option<f64>) -> TaSignal {
    match (upper, lower) {
        (_, Some(lower)) if close < lower => TaSignal::Buy,
        (Some(upper), _) if close > upper => TaSignal::Sell,
        _ => TaSignal::Neutral,
    }
}

/// ADX at or above 25. A missing ADX is treated as a weak trend.
pub fn is_strong_trend(adx: Option<f64>) -> bool {
    adx.is_some_and(|v| v >= ADX_STRONG_TREND)
}
