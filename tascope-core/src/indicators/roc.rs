//! Rate of Change (momentum), as a percentage.
//!
//! ROC[t] = 100 * (close[t] - close[t-period]) / close[t-period]
//! A zero reference close is undefined and yields NaN.
//! Lookback: period.

use crate::components::indicator::Indicator;
use crate::domain::Bar;

use super::closes;

#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
    name: String,
}

impl Roc {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ROC period must be >= 1");
        Self {
            period,
            name: format!("roc_{period}"),
        }
    }
}

impl Indicator for Roc {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let values = closes(bars);
        let mut result = vec![f64::NAN; values.len()];

        for i in self.period..values.len() {
            let prev = values[i - self.period];
            if prev != 0.0 {
                result[i] = 100.0 * (values[i] - prev) / prev;
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
    fn roc_percentage() {
        let bars = make_bars(&[100.0, 105.0, 110.0]);
        let result = Roc::new(2).compute(&bars);
        assert!(result[1].is_nan());
        assert_approx(result[2], 10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn roc_negative_on_decline() {
        let bars = make_bars(&[100.0, 90.0, 80.0]);
        let result = Roc::new(1).compute(&bars);
        assert_approx(result[1], -10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn roc_zero_reference_is_nan() {
        let bars = make_bars(&[0.0, 5.0]);
        assert!(Roc::new(1).compute(&bars)[1].is_nan());
    }
}
