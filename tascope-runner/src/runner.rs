//! Batch runner: loads history and analyses each requested symbol.
//!
//! Two entry points:
//! - `run_analysis()`: loads the history named by a `RunConfig`, then runs. Used by the CLI.
//! - `run_history()`: takes pre-loaded history. No I/O.
//!
//! A symbol without enough data does not fail the batch. It yields a
//! degraded `SymbolReport` carrying the sufficiency message instead of a result.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use tascope_core::{analyze_with, AnalysisOptions, AnalysisResult, PriceRecord};

use crate::config::{ConfigError, RunConfig};
use crate::data_loader::{load_history, LoadError, PriceHistory};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
    #[error("failed to fingerprint result: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

/// Current schema version for exported reports.
pub const SCHEMA_VERSION: u32 = 1;

/// Outcome for one symbol: a full result, or the message explaining why
/// the technical view is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolReport {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub symbol: String,
    pub records: usize,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    /// BLAKE3 digest of `result` (None when degraded).
    pub fingerprint: Option<String>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl SymbolReport {
    pub fn is_degraded(&self) -> bool {
        self.result.is_none()
    }
}

/// Reports of one batch, in the order the symbols were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub reports: Vec<SymbolReport>,
}

impl RunOutcome {
    pub fn analysed(&self) -> impl Iterator<Item = &SymbolReport> {
        self.reports.iter().filter(|r| !r.is_degraded())
    }

    pub fn degraded(&self) -> impl Iterator<Item = &SymbolReport> {
        self.reports.iter().filter(|r| r.is_degraded())
    }

    pub fn report(&self, symbol: &str) -> Option<&SymbolReport> {
        self.reports.iter().find(|r| r.symbol == symbol)
    }
}

/// Run a batch from a `RunConfig` (loads history from disk).
pub fn run_analysis(config: &RunConfig) -> Result<RunOutcome, RunError> {
    config.validate()?;
    let history = load_history(&config.input.path, config.input.format)?;
    let symbols = if config.input.symbols.is_empty() {
        history.symbols()
    } else {
        config.input.symbols.clone()
    };
    run_history(&history, &symbols, &config.analysis)
}

/// Run a batch over pre-loaded history without touching the filesystem.
///
/// Fails only if a requested symbol is absent from `history`.
pub fn run_history(
    history: &PriceHistory,
    symbols: &[String],
    options: &AnalysisOptions,
) -> Result<RunOutcome, RunError> {
    let mut reports = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let records = history.history_for(symbol)?;
        reports.push(analyze_symbol(symbol, records, options)?);
    }
    Ok(RunOutcome { reports })
}

/// Analyse one symbol, turning a sufficiency failure into a degraded report.
pub fn analyze_symbol(
    symbol: &str,
    records: &[PriceRecord],
    options: &AnalysisOptions,
) -> Result<SymbolReport, RunError> {
    match analyze_with(symbol, records, options) {
        Ok(result) => {
            let fingerprint = result.fingerprint()?;
            info!(
                symbol,
                records = records.len(),
                daily = %result.daily.summary.signal,
                weekly = %result.weekly.summary.signal,
                monthly = %result.monthly.summary.signal,
                "symbol analysed"
            );
            Ok(SymbolReport {
                schema_version: SCHEMA_VERSION,
                symbol: symbol.to_string(),
                records: records.len(),
                result: Some(result),
                error: None,
                fingerprint: Some(fingerprint),
            })
        }
        Err(err) => {
            warn!(symbol, records = records.len(), error = %err, "technical view omitted");
            Ok(SymbolReport {
                schema_version: SCHEMA_VERSION,
                symbol: symbol.to_string(),
                records: records.len(),
                result: None,
                error: Some(err.to_string()),
                fingerprint: None,
            })
        }
    }
}
