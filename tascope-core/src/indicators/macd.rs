//! MACD line: fast EMA minus slow EMA of close.
//!
//! Only the MACD line is reported; no signal line or histogram.
//! Both EMAs are seeded with the first close, so the line starts at 0.

use crate::components::indicator::Indicator;
use crate::domain::Bar;

use super::closes;
use super::ema::ema_of_series;

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    name: String,
}

impl Macd {
    pub fn new(fast: usize, slow: usize) -> Self {
        assert!(fast >= 1, "MACD fast period must be >= 1");
        assert!(fast < slow, "MACD fast period must be shorter than slow period");
        Self {
            fast,
            slow,
            name: format!("macd_{fast}_{slow}"),
        }
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let values = closes(bars);
        let fast = ema_of_series(&values, self.fast);
        let slow = ema_of_series(&values, self.slow);
        fast.iter().zip(&slow).map(|(f, s)| f - s).collect()
    }
}
