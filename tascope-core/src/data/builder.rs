//! Series builder: daily bars from stored history, weekly/monthly by
//! positional bucketing.
//!
//! Buckets are consecutive runs of `window` records counted from the first
//! record; the last bucket may be shorter. There is no calendar alignment and
//! no smoothing.

use crate::domain::{Bar, PriceRecord, Series, Timeframe};

/// Map each record to a bar using its own OHLCV values, preserving order.
///
/// A missing high or low falls back to the edge of the open/close body, so
/// the bar's range always contains its close.
pub fn build_daily(history: &[PriceRecord]) -> Vec<Bar> {
    history
        .iter()
        .map(|record| Bar {
            date: record.date,
            open: record.open,
            high: record.high.unwrap_or(record.open.max(record.close)),
            low: record.low.unwrap_or(record.open.min(record.close)),
            close: record.close,
            volume: record.volume_or_zero(),
        })
        .collect()
}

/// Fold consecutive buckets of `window` records into one bar each.
///
/// open = first open, close = last close, high/low = bucket extremes,
/// volume = bucket sum, date = last record's date. A zero window yields no
/// bars.
pub fn aggregate(history: &[PriceRecord], window: usize) -> Vec<Bar> {
    if window == 0 {
        return Vec::new();
    }

    history
        .chunks(window)
        .filter_map(|bucket| {
            let first = bucket.first()?;
            let last = bucket.last()?;
            let high = bucket
                .iter()
                .map(PriceRecord::high_or_open)
                .fold(f64::NEG_INFINITY, f64::max);
            let low = bucket
                .iter()
                .map(PriceRecord::low_or_open)
                .fold(f64::INFINITY, f64::min);
            let volume = bucket.iter().map(PriceRecord::volume_or_zero).sum();

            Some(Bar {
                date: last.date,
                open: first.open,
                high,
                low,
                close: last.close,
                volume,
            })
        })
        .collect()
}

/// Build the named series for one timeframe from the ascending daily history.
pub fn build_series(history: &[PriceRecord], symbol: &str, timeframe: Timeframe) -> Series {
    let bars = match timeframe {
        Timeframe::Daily => build_daily(history),
        Timeframe::Weekly | Timeframe::Monthly => aggregate(history, timeframe.window()),
    };
    Series::new(format!("{symbol}{}", timeframe.suffix()), timeframe, bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> PriceRecord {
        PriceRecord {
            symbol: "BTC".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(day),
            open,
            high: Some(high),
            low: Some(low),
            close,
            volume: Some(volume),
        }
    }

    fn fourteen_days() -> Vec<PriceRecord> {
        (0..14)
            .map(|i| {
                let base = 100.0 + i as f64;
                record(i, base, base + 2.0, base - 2.0, base + 1.0, 10.0)
            })
            .collect()
    }

    #[test]
    fn daily_keeps_one_bar_per_record() {
        let history = fourteen_days();
        let bars = build_daily(&history);
        assert_eq!(bars.len(), 14);
        assert_eq!(bars[3].open, 103.0);
        assert_eq!(bars[3].high, 105.0);
        assert_eq!(bars[3].date, history[3].date);
    }

    #[test]
    fn weekly_buckets_fourteen_days_into_two_bars() {
        let history = fourteen_days();
        let bars = aggregate(&history, 7);
        assert_eq!(bars.len(), 2);

        let first = &bars[0];
        assert_eq!(first.open, 100.0);
        assert_eq!(first.close, 107.0); // close of record 6
        assert_eq!(first.high, 108.0); // record 6 high
        assert_eq!(first.low, 98.0); // record 0 low
        assert_eq!(first.volume, 70.0);
        assert_eq!(first.date, history[6].date);

        let second = &bars[1];
        assert_eq!(second.open, 107.0);
        assert_eq!(second.close, 114.0);
        assert_eq!(second.date, history[13].date);
    }

    #[test]
    fn last_bucket_may_be_short() {
        let mut history = fourteen_days();
        history.truncate(10);
        let bars = aggregate(&history, 7);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].open, 107.0);
        assert_eq!(bars[1].close, 110.0);
        assert_eq!(bars[1].volume, 30.0);
    }

    #[test]
    fn missing_high_low_fall_back_to_record_open() {
        let mut history = fourteen_days();
        history.truncate(2);
        history[1].high = None;
        history[1].low = None;
        history[1].volume = None;
        history[0].high = Some(100.5);
        history[0].low = Some(100.2);

        let bars = aggregate(&history, 7);
        assert_eq!(bars.len(), 1);
        // record 1 contributes its own open (101.0) to both extremes
        assert_eq!(bars[0].high, 101.0);
        assert_eq!(bars[0].low, 100.2);
        assert_eq!(bars[0].volume, 10.0);

        // daily bars take the open/close body instead: open 101, close 102
        let daily = build_daily(&history);
        assert_eq!(daily[1].high, 102.0);
        assert_eq!(daily[1].low, 101.0);
        assert_eq!(daily[1].volume, 0.0);
    }

    #[test]
    fn daily_range_contains_close_when_extremes_are_missing() {
        let mut history = fourteen_days();
        history[5].high = None;
        history[5].low = None;
        history[5].close = 90.0; // below open 105

        let bar = build_daily(&history)[5];
        assert_eq!(bar.high, 105.0);
        assert_eq!(bar.low, 90.0);
        assert!(bar.low <= bar.close && bar.close <= bar.high);
    }

    #[test]
    fn series_names_carry_timeframe_suffix() {
        let history = fourteen_days();
        let weekly = build_series(&history, "BTC", Timeframe::Weekly);
        assert_eq!(weekly.name(), "BTC_W");
        assert_eq!(weekly.timeframe(), Timeframe::Weekly);
        assert_eq!(weekly.len(), 2);

        let monthly = build_series(&history, "BTC", Timeframe::Monthly);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly.last_close(), Some(114.0));
    }

    #[test]
    fn empty_history_yields_no_bars() {
        assert!(aggregate(&[], 7).is_empty());
        assert!(build_daily(&[]).is_empty());
    }

    #[test]
    fn zero_window_yields_no_bars() {
        assert!(aggregate(&fourteen_days(), 0).is_empty());
    }
}
