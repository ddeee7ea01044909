//! Commodity Channel Index (CCI).
//!
//! Typical price TP = (high + low + close) / 3.
//! CCI = (TP - SMA(TP)) / (0.015 * mean_deviation(TP)) over `period` bars.
//! Zero mean deviation (constant typical price) yields 0.
//! Lookback: period - 1.

use crate::components::indicator::Indicator;
use crate::domain::Bar;

const LAMBERT_CONSTANT: f64 = 0.015;

#[derive(Debug, Clone)]
pub struct Cci {
    period: usize,
    name: String,
}

impl Cci {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "CCI period must be >= 1");
        Self {
            period,
            name: format!("cci_{period}"),
        }
    }
}

impl Indicator for Cci {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let typical: Vec<f64> = bars.iter().map(Bar::typical_price).collect();
        let n = typical.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        let p = self.period as f64;
        for i in (self.period - 1)..n {
            let window = &typical[i + 1 - self.period..=i];
            let mean = window.iter().sum::<f64>() / p;
            let mean_dev = window.iter().map(|tp| (tp - mean).abs()).sum::<f64>() / p;
            result[i] = if mean_dev == 0.0 {
                0.0
            } else {
                (typical[i] - mean) / (LAMBERT_CONSTANT * mean_dev)
            };
        }

        result
    }
}
