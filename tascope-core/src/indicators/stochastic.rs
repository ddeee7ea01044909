//! Stochastic oscillator %K.
//!
//! %K = 100 * (close - lowest_low) / (highest_high - lowest_low) over `period` bars.
//! A flat range (highest_high == lowest_low) is undefined and yields NaN.
//! Lookback: period - 1.

use crate::components::indicator::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Stochastic {
    period: usize,
    name: String,
}

impl Stochastic {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "Stochastic period must be >= 1");
        Self {
            period,
            name: format!("stoch_k_{period}"),
        }
    }
}

impl Indicator for Stochastic {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        for i in (self.period - 1)..n {
            let window = &bars[i + 1 - self.period..=i];
            let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
            let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);
            let range = highest - lowest;
            if range > 0.0 {
                result[i] = 100.0 * (bars[i].close - lowest) / range;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn stochastic_known_value() {
        // window bars 2..=4: highs 13,14,15 / lows 10,11,12 / close 14
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let result = Stochastic::new(3).compute(&bars);
        assert!(result[1].is_nan());
        assert_approx(result[4], 80.0, DEFAULT_EPSILON);
    }

    #[test]
    fn stochastic_flat_range_is_nan() {
        let mut bars = make_bars(&[10.0; 4]);
        for bar in &mut bars {
            bar.high = 10.0;
            bar.low = 10.0;
        }
        let result = Stochastic::new(3).compute(&bars);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn stochastic_bounds() {
        let bars = make_bars(&[100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0]);
        let result = Stochastic::new(3).compute(&bars);
        for &v in result.iter().skip(2) {
            assert!((0.0..=100.0).contains(&v), "%K out of bounds: {v}");
        }
    }
}
