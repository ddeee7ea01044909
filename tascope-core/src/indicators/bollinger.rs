//! Bollinger Bands (upper and lower).
//!
//! Middle = SMA(close, period)
//! Upper  = Middle + multiplier * population_stddev(close, period)
//! Lower  = Middle - multiplier * population_stddev(close, period)
//!
//! Each band is its own `Indicator` so they precompute independently.
//! Lookback: period - 1.

use crate::components::indicator::Indicator;
use crate::domain::Bar;

use super::closes;
use super::sma::sma_of_series;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Lower,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    pub fn new(period: usize, multiplier: f64, band: BollingerBand) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        assert!(multiplier > 0.0, "Bollinger multiplier must be positive");
        let band_name = match band {
            BollingerBand::Upper => "upper",
            BollingerBand::Lower => "lower",
        };
        Self {
            period,
            multiplier,
            band,
            name: format!("bollinger_{band_name}_{period}_{multiplier}"),
        }
    }

    pub fn upper(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Upper)
    }

    pub fn lower(period: usize, multiplier: f64) -> Self {
        Self::new(period, multiplier, BollingerBand::Lower)
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let values = closes(bars);
        let middle = sma_of_series(&values, self.period);
        let sign = match self.band {
            BollingerBand::Upper => 1.0,
            BollingerBand::Lower => -1.0,
        };

        middle
            .iter()
            .enumerate()
            .map(|(i, &mid)| {
                if mid.is_nan() {
                    return f64::NAN;
                }
                let window = &values[i + 1 - self.period..=i];
                let variance = window.iter().map(|v| (v - mid).powi(2)).sum::<f64>()
                    / self.period as f64;
                mid + sign * self.multiplier * variance.sqrt()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn bands_use_population_stddev() {
        // mean 4, population variance 2 → stddev sqrt(2)
        let bars = make_bars(&[2.0, 4.0, 6.0]);
        let upper = Bollinger::upper(3, 2.0).compute(&bars);
        let lower = Bollinger::lower(3, 2.0).compute(&bars);
        assert!(upper[1].is_nan());
        assert_approx(upper[2], 4.0 + 2.0 * 2f64.sqrt(), DEFAULT_EPSILON);
        assert_approx(lower[2], 4.0 - 2.0 * 2f64.sqrt(), DEFAULT_EPSILON);
    }

    #[test]
    fn bands_collapse_on_flat_price() {
        let bars = make_bars(&[7.0; 4]);
        assert_approx(Bollinger::upper(3, 2.0).compute(&bars)[3], 7.0, DEFAULT_EPSILON);
        assert_approx(Bollinger::lower(3, 2.0).compute(&bars)[3], 7.0, DEFAULT_EPSILON);
    }

    #[test]
    fn band_names_are_distinct() {
        assert_eq!(Bollinger::upper(20, 2.0).name(), "bollinger_upper_20_2");
        assert_eq!(Bollinger::lower(20, 2.0).name(), "bollinger_lower_20_2");
    }
}
