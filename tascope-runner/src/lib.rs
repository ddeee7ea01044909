//! TaScope Runner: history loading, run configuration, batch analysis, export.
//!
//! This crate builds on `tascope-core` to provide:
//! - CSV/JSON history loading with per-symbol grouping and validation
//! - TOML run configuration
//! - Multi-symbol batch runs with degraded per-symbol reports
//! - JSON, CSV and Markdown export

pub mod config;
pub mod data_loader;
pub mod export;
pub mod runner;

pub use config::{ConfigError, InputConfig, OutputConfig, RunConfig};
pub use data_loader::{load_history, HistoryFormat, LoadError, PriceHistory};
pub use export::{
    export_indicators_csv, export_json, file_stem, generate_summary, import_json, load_report,
    save_outputs,
};
pub use runner::{
    analyze_symbol, run_analysis, run_history, RunError, RunOutcome, SymbolReport, SCHEMA_VERSION,
};
