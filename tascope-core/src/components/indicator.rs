//! Indicator trait and computed indicator values container.
//!
//! Indicators are pure functions: bar history in, numeric series out.
//! The engine computes each one over the whole series and reads the value at
//! the most recent bar.

use crate::domain::Bar;
use std::collections::HashMap;

/// Trait for indicators.
///
/// Indicators take a full bar series and produce a numeric output series of
/// the same length. Bars inside the warm-up window are `f64::NAN`.
///
/// No indicator value at bar t may depend on bar t+1 or later.
pub trait Indicator: Send + Sync {
    /// Key under which the series is stored (e.g., "sma_20", "adx_14").
    fn name(&self) -> &str;

    /// Compute the indicator for the entire bar series.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Named indicator series for one bar sequence.
#[derive(Debug, Clone, Default)]
pub struct IndicatorValues {
    series: HashMap<String, Vec<f64>>,
}

impl IndicatorValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a named indicator series.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.series.insert(name.into(), values);
    }

    /// Value at the most recent bar, or `None` if the series is missing,
    /// empty, or still warming up there.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.series
            .get(name)
            .and_then(|v| v.last().copied())
            .filter(|v| v.is_finite())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_reads_the_last_bar() {
        let mut iv = IndicatorValues::new();
        iv.insert(
            "sma_20",
            vec![f64::NAN; 19]
                .into_iter()
                .chain(vec![100.0, 101.0])
                .collect(),
        );
        assert_eq!(iv.latest("sma_20"), Some(101.0));

        // a NaN at the last bar is unset even when earlier bars had values
        iv.insert("stoch_14", vec![50.0, 60.0, f64::NAN]);
        assert_eq!(iv.latest("stoch_14"), None);
    }

    #[test]
    fn latest_is_none_during_warmup() {
        let mut iv = IndicatorValues::new();
        iv.insert("macd_12_26", vec![f64::NAN; 22]);
        iv.insert("empty", Vec::new());
        assert_eq!(iv.latest("macd_12_26"), None);
        assert_eq!(iv.latest("empty"), None);
        assert_eq!(iv.latest("nonexistent"), None);
        assert_eq!(iv.len(), 2);
    }
}
