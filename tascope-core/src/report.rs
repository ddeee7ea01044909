//! ReportBuilder: per-indicator detail rows.
//!
//! Each row carries the indicator's own rule signal. It is independent of the
//! timeframe's filtered summary and can disagree with it.

use serde::{Deserialize, Serialize};

use crate::engine::FrameIndicators;
use crate::signals::rules::{
    cci_signal, ma_signal, macd_signal, momentum_signal, rsi_signal, stochastic_signal,
};
use crate::signals::TaSignal;

/// One detail row: display label, raw value (null when unset), action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub name: String,
    pub value: Option<f64>,
    pub action: TaSignal,
}

impl IndicatorRow {
    fn new(name: &str, value: Option<f64>, action: TaSignal) -> Self {
        Self {
            name: name.to_string(),
            value,
            action,
        }
    }
}

/// Oscillator rows first, then the five moving averages.
pub fn build_indicator_table(fi: &FrameIndicators, last_close: f64) -> Vec<IndicatorRow> {
    vec![
        IndicatorRow::new("RSI (14)", fi.rsi, rsi_signal(fi.rsi)),
        IndicatorRow::new("MACD (12,26)", fi.macd, macd_signal(fi.macd)),
        IndicatorRow::new("Stochastic %K (14)", fi.stoch, stochastic_signal(fi.stoch)),
        IndicatorRow::new("CCI (20)", fi.cci, cci_signal(fi.cci)),
        IndicatorRow::new("Momentum (10)", fi.momentum, momentum_signal(fi.momentum)),
        IndicatorRow::new("SMA (20)", fi.sma, ma_signal(last_close, fi.sma)),
        IndicatorRow::new("EMA (20)", fi.ema, ma_signal(last_close, fi.ema)),
        IndicatorRow::new("WMA (20)", fi.wma, ma_signal(last_close, fi.wma)),
        IndicatorRow::new("SMA (10)", fi.sma_short, ma_signal(last_close, fi.sma_short)),
        IndicatorRow::new("EMA (10)", fi.ema_short, ma_signal(last_close, fi.ema_short)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_ten_rows_in_display_order() {
        let rows = build_indicator_table(&FrameIndicators::default(), 100.0);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "RSI (14)",
                "MACD (12,26)",
                "Stochastic %K (14)",
                "CCI (20)",
                "Momentum (10)",
                "SMA (20)",
                "EMA (20)",
                "WMA (20)",
                "SMA (10)",
                "EMA (10)",
            ]
        );
        assert!(rows.iter().all(|r| r.value.is_none() && r.action == TaSignal::Neutral));
    }

    #[test]
    fn rows_use_individual_rules() {
        let fi = FrameIndicators {
            rsi: Some(75.0),
            macd: Some(-0.2),
            sma: Some(90.0),
            ema_short: Some(110.0),
            ..Default::default()
        };
        let rows = build_indicator_table(&fi, 100.0);
        assert_eq!(rows[0].value, Some(75.0));
        assert_eq!(rows[0].action, TaSignal::Sell);
        assert_eq!(rows[1].action, TaSignal::Sell);
        assert_eq!(rows[5].action, TaSignal::Buy);
        assert_eq!(rows[9].action, TaSignal::Sell);
    }

    #[test]
    fn unset_value_serializes_as_null() {
        let row = IndicatorRow::new("CCI (20)", None, TaSignal::Neutral);
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["value"].is_null());
        assert_eq!(json["action"], "NEUTRAL");
    }
}
