//! Series: a named, time-ordered run of bars for one timeframe.

use serde::{Deserialize, Serialize};

use super::{Bar, Timeframe};

/// Ordered bar sequence tagged with a name (`<symbol>_D`, `<symbol>_W`, ...).
///
/// Timestamps are strictly increasing. The input history is ordered and
/// de-duplicated by the loader; the builder preserves that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    timeframe: Timeframe,
    bars: Vec<Bar>,
}

impl Series {
    pub fn new(name: impl Into<String>, timeframe: Timeframe, bars: Vec<Bar>) -> Self {
        debug_assert!(
            bars.windows(2).all(|w| w[0].date < w[1].date),
            "series bars must have strictly increasing dates"
        );
        Self {
            name: name.into(),
            timeframe,
            bars,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Close of the most recent bar, the reference price for every
    /// close-versus-level rule of this timeframe.
    pub fn last_close(&self) -> Option<f64> {
        self.last().map(|bar| bar.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, close: f64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 0.0,
        }
    }

    #[test]
    fn last_close_is_most_recent_bar() {
        let series = Series::new("BTC_D", Timeframe::Daily, vec![bar(1, 10.0), bar(2, 12.0)]);
        assert_eq!(series.last_close(), Some(12.0));
        assert_eq!(series.len(), 2);
        assert_eq!(series.name(), "BTC_D");
    }

    #[test]
    fn empty_series_has_no_close() {
        let series = Series::new("BTC_W", Timeframe::Weekly, Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
    }
}
