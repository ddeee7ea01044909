//! Weighted Moving Average (WMA).
//!
//! Linear weights 1..=period, most recent bar heaviest.
//! WMA[t] = sum(k * close[t-period+k]) / (period * (period + 1) / 2)
//! Lookback: period - 1.

use crate::components::indicator::Indicator;
use crate::domain::Bar;

use super::closes;

#[derive(Debug, Clone)]
pub struct Wma {
    period: usize,
    name: String,
}

impl Wma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "WMA period must be >= 1");
        Self {
            period,
            name: format!("wma_{period}"),
        }
    }
}

impl Indicator for Wma {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let values = closes(bars);
        let n = values.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        let denominator = (self.period * (self.period + 1)) as f64 / 2.0;
        for i in (self.period - 1)..n {
            let window = &values[i + 1 - self.period..=i];
            let weighted: f64 = window
                .iter()
                .enumerate()
                .map(|(k, v)| (k + 1) as f64 * v)
                .sum();
            result[i] = weighted / denominator;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars, DEFAULT_EPSILON};

    #[test]
    fn wma_weights_recent_bars_more() {
        // (1*1 + 2*2 + 3*3) / 6
        let bars = make_bars(&[1.0, 2.0, 3.0, 4.0]);
        let result = Wma::new(3).compute(&bars);
        assert!(result[1].is_nan());
        assert_approx(result[2], 14.0 / 6.0, DEFAULT_EPSILON);
        // (2 + 6 + 12) / 6
        assert_approx(result[3], 20.0 / 6.0, DEFAULT_EPSILON);
    }

    #[test]
    fn wma_constant_price() {
        let bars = make_bars(&[50.0; 5]);
        let result = Wma::new(5).compute(&bars);
        assert_approx(result[4], 50.0, DEFAULT_EPSILON);
        assert!(result[3].is_nan());
    }
}
