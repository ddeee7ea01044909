//! IndicatorEngine: the fixed indicator battery for one series.

use serde::{Deserialize, Serialize};

use crate::components::indicator::Indicator;
use crate::domain::{Series, Timeframe};
use crate::error::AnalysisError;
use crate::indicators::{Adx, Bollinger, Cci, Ema, Macd, Roc, Rsi, Sma, Stochastic, Wma};

use super::precompute::precompute_indicators;

/// Bars a series needs before the engine computes anything.
pub const MIN_SERIES_BARS: usize = 20;

/// Point-in-time indicator snapshot at the last bar of a series.
///
/// A field is `None` when its indicator has not warmed up at that bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameIndicators {
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub stoch: Option<f64>,
    pub adx: Option<f64>,
    pub cci: Option<f64>,
    pub momentum: Option<f64>,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub wma: Option<f64>,
    pub sma_short: Option<f64>,
    pub ema_short: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_lower: Option<f64>,
}

/// RSI(14), MACD(12,26), %K(14), ADX(14), CCI(20), ROC(10),
/// SMA/EMA/WMA(20), SMA/EMA(10) and Bollinger(20, 2).
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    rsi: Rsi,
    macd: Macd,
    stoch: Stochastic,
    adx: Adx,
    cci: Cci,
    momentum: Roc,
    sma: Sma,
    ema: Ema,
    wma: Wma,
    sma_short: Sma,
    ema_short: Ema,
    bollinger_upper: Bollinger,
    bollinger_lower: Bollinger,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl IndicatorEngine {
    pub fn standard() -> Self {
        Self {
            rsi: Rsi::new(14),
            macd: Macd::new(12, 26),
            stoch: Stochastic::new(14),
            adx: Adx::new(14),
            cci: Cci::new(20),
            momentum: Roc::new(10),
            sma: Sma::new(20),
            ema: Ema::new(20),
            wma: Wma::new(20),
            sma_short: Sma::new(10),
            ema_short: Ema::new(10),
            bollinger_upper: Bollinger::upper(20, 2.0),
            bollinger_lower: Bollinger::lower(20, 2.0),
        }
    }

    fn indicators(&self) -> [&dyn Indicator; 13] {
        [
            &self.rsi,
            &self.macd,
            &self.stoch,
            &self.adx,
            &self.cci,
            &self.momentum,
            &self.sma,
            &self.ema,
            &self.wma,
            &self.sma_short,
            &self.ema_short,
            &self.bollinger_upper,
            &self.bollinger_lower,
        ]
    }

    /// Compute the snapshot at the last bar of `series`.
    ///
    /// Fails when the series is shorter than [`MIN_SERIES_BARS`]. At that
    /// length every indicator of the battery carries a value, except for
    /// degenerate inputs such as a flat %K range.
    pub fn compute(&self, series: &Series) -> Result<FrameIndicators, AnalysisError> {
        let timeframe = series.timeframe();
        if series.len() < MIN_SERIES_BARS {
            return Err(AnalysisError::not_enough_bars(
                timeframe,
                series.len(),
                MIN_SERIES_BARS,
            ));
        }

        let iv = precompute_indicators(series.bars(), &self.indicators());
        let latest = |name: &str| iv.latest(name);

        Ok(FrameIndicators {
            rsi: latest(self.rsi.name()),
            macd: latest(self.macd.name()),
            stoch: latest(self.stoch.name()),
            adx: latest(self.adx.name()),
            cci: latest(self.cci.name()),
            momentum: latest(self.momentum.name()),
            sma: latest(self.sma.name()),
            ema: latest(self.ema.name()),
            wma: latest(self.wma.name()),
            sma_short: latest(self.sma_short.name()),
            ema_short: latest(self.ema_short.name()),
            bollinger_upper: latest(self.bollinger_upper.name()),
            bollinger_lower: latest(self.bollinger_lower.name()),
        })
    }
}

/// Reject a snapshot whose core fields (rsi, sma, ema) are unset.
pub fn validate(fi: &FrameIndicators, timeframe: Timeframe) -> Result<(), AnalysisError> {
    if fi.rsi.is_none() || fi.sma.is_none() || fi.ema.is_none() {
        return Err(AnalysisError::unusable_indicators(timeframe));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    fn series(closes: &[f64]) -> Series {
        Series::new("TEST_D", Timeframe::Daily, make_bars(closes))
    }

    #[test]
    fn short_series_is_rejected() {
        let closes: Vec<f64> = (0..19).map(|i| 100.0 + i as f64).collect();
        let err = IndicatorEngine::standard().compute(&series(&closes)).unwrap_err();
        assert_eq!(
            err.message(),
            "Not enough data to compute daily technical indicators (got 19 bars, need 20)."
        );
    }

    #[test]
    fn twenty_bars_set_every_indicator() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let fi = IndicatorEngine::standard().compute(&series(&closes)).unwrap();

        for (name, value) in [
            ("rsi", fi.rsi),
            ("macd", fi.macd),
            ("stoch", fi.stoch),
            ("adx", fi.adx),
            ("cci", fi.cci),
            ("momentum", fi.momentum),
            ("sma", fi.sma),
            ("ema", fi.ema),
            ("wma", fi.wma),
            ("sma_short", fi.sma_short),
            ("ema_short", fi.ema_short),
            ("bollinger_upper", fi.bollinger_upper),
            ("bollinger_lower", fi.bollinger_lower),
        ] {
            assert!(value.is_some(), "{name} should be set at 20 bars");
        }
        assert!(fi.macd.is_some_and(|v| v > 0.0));
        assert!(fi.adx.is_some_and(|v| v >= 25.0));
        assert!(validate(&fi, Timeframe::Daily).is_ok());
    }

    #[test]
    fn full_snapshot_on_long_series() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64).collect();
        let fi = IndicatorEngine::standard().compute(&series(&closes)).unwrap();

        for (name, value) in [
            ("rsi", fi.rsi),
            ("macd", fi.macd),
            ("stoch", fi.stoch),
            ("adx", fi.adx),
            ("cci", fi.cci),
            ("momentum", fi.momentum),
            ("wma", fi.wma),
            ("sma_short", fi.sma_short),
            ("ema_short", fi.ema_short),
            ("bollinger_lower", fi.bollinger_lower),
        ] {
            assert!(value.is_some(), "{name} should be set after {} bars", closes.len());
        }
        assert!(fi.bollinger_upper >= fi.bollinger_lower);
    }

    #[test]
    fn validate_names_the_timeframe() {
        let fi = FrameIndicators {
            sma: Some(1.0),
            ema: Some(1.0),
            ..Default::default()
        };
        let err = validate(&fi, Timeframe::Monthly).unwrap_err();
        assert_eq!(err.message(), "Not enough data to evaluate monthly technical indicators.");
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let fi = FrameIndicators {
            sma_short: Some(10.0),
            ..Default::default()
        };
        let json = serde_json::to_value(fi).unwrap();
        assert_eq!(json["smaShort"], 10.0);
        assert!(json["bollingerUpper"].is_null());
    }
}
