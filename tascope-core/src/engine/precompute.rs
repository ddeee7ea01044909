//! Indicator computation over one bar sequence.

use crate::components::indicator::{Indicator, IndicatorValues};
use crate::domain::Bar;

/// Compute every indicator over `bars` and store the series by name.
pub fn precompute_indicators(bars: &[Bar], indicators: &[&dyn Indicator]) -> IndicatorValues {
    let mut iv = IndicatorValues::new();
    for indicator in indicators {
        let series = indicator.compute(bars);
        debug_assert_eq!(
            series.len(),
            bars.len(),
            "indicator '{}' produced {} values for {} bars",
            indicator.name(),
            series.len(),
            bars.len(),
        );
        iv.insert(indicator.name(), series);
    }
    iv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{make_bars, Ema, Sma};

    #[test]
    fn precompute_stores_each_series_by_name() {
        let bars = make_bars(&[10.0, 12.0, 14.0, 13.0]);
        let sma = Sma::new(3);
        let ema = Ema::new(3);
        let iv = precompute_indicators(&bars, &[&sma, &ema]);

        assert_eq!(iv.len(), 2);
        let sma_last = iv.latest("sma_3").unwrap();
        assert!((sma_last - 13.0).abs() < 1e-10);
        assert_eq!(iv.latest("ema_3"), Some(12.75));

        let short = precompute_indicators(&bars[..2], &[&sma]);
        assert_eq!(short.latest("sma_3"), None);
    }
}
