//! TaScope Core: multi-timeframe technical-analysis verdict engine.
//!
//! This crate contains the pure analysis pipeline:
//! - Domain types (price records, bars, series, timeframes)
//! - Series builder with positional weekly/monthly bucketing
//! - Indicator battery evaluated at the last bar of each series
//! - Per-indicator signal rules and vote tallies
//! - Summary resolution with ADX trend filter and Bollinger override
//! - Per-indicator detail rows
//!
//! No I/O: history arrives already loaded and ordered.

pub mod components;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod report;
pub mod signals;

pub use domain::{Bar, PriceRecord, Series, Timeframe};
pub use engine::{
    analyze, analyze_with, AnalysisOptions, AnalysisResult, FrameIndicators, IndicatorEngine,
    TimeframeAnalysis, MIN_HISTORY_RECORDS, MIN_SERIES_BARS,
};
pub use error::AnalysisError;
pub use report::IndicatorRow;
pub use signals::{FilterReason, SignalStats, TaSignal, TimeframeSignal};
