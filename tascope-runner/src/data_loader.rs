//! History loading for the runner.
//!
//! Reads daily price records from a CSV or JSON file, groups them by symbol
//! and sorts each group ascending by date. This is the only place malformed
//! input is checked: the core engine trusts the history it is given.
//!
//! Checks:
//! 1. Non-finite open/close → `LoadError::InvalidPrice`
//! 2. Two records for one symbol on the same date → `LoadError::DuplicateDate`
//! 3. Non-finite high/low/volume → field cleared (treated as absent), with a warning

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use tascope_core::PriceRecord;

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot infer history format of '{0}' (expected .csv or .json)")]
    UnknownFormat(PathBuf),

    #[error("history file '{0}' contains no records")]
    Empty(PathBuf),

    #[error("symbol '{0}' not found in loaded history")]
    UnknownSymbol(String),

    #[error("duplicate record for '{symbol}' on {date}")]
    DuplicateDate { symbol: String, date: NaiveDate },

    #[error("non-finite {field} for '{symbol}' on {date}")]
    InvalidPrice {
        symbol: String,
        date: NaiveDate,
        field: &'static str,
    },
}

/// On-disk layout of a history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFormat {
    /// Header row with `symbol,date,open,high,low,close,volume` (or `volume_to`).
    Csv,
    /// A JSON array of records with the same field names.
    Json,
}

impl HistoryFormat {
    /// Infer the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Validated daily history, grouped by symbol and ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    by_symbol: BTreeMap<String, Vec<PriceRecord>>,
}

impl PriceHistory {
    /// Group, sort and validate raw records.
    pub fn from_records(records: Vec<PriceRecord>) -> Result<Self, LoadError> {
        let mut by_symbol: BTreeMap<String, Vec<PriceRecord>> = BTreeMap::new();
        let mut cleared = 0usize;

        for mut record in records {
            for (field, value) in [("open", record.open), ("close", record.close)] {
                if !value.is_finite() {
                    return Err(LoadError::InvalidPrice {
                        symbol: record.symbol,
                        date: record.date,
                        field,
                    });
                }
            }
            for value in [&mut record.high, &mut record.low, &mut record.volume] {
                if value.is_some_and(|v| !v.is_finite()) {
                    *value = None;
                    cleared += 1;
                }
            }
            by_symbol
                .entry(record.symbol.clone())
                .or_default()
                .push(record);
        }

        for (symbol, rows) in &mut by_symbol {
            rows.sort_by_key(|r| r.date);
            if let Some(pair) = rows.windows(2).find(|w| w[0].date == w[1].date) {
                return Err(LoadError::DuplicateDate {
                    symbol: symbol.clone(),
                    date: pair[1].date,
                });
            }
        }

        if cleared > 0 {
            warn!(cleared, "non-finite high/low/volume values treated as absent");
        }

        Ok(Self { by_symbol })
    }

    /// Symbols in the history, sorted.
    pub fn symbols(&self) -> Vec<String> {
        self.by_symbol.keys().cloned().collect()
    }

    /// Ascending daily records of one symbol.
    pub fn history_for(&self, symbol: &str) -> Result<&[PriceRecord], LoadError> {
        self.by_symbol
            .get(symbol)
            .map(Vec::as_slice)
            .ok_or_else(|| LoadError::UnknownSymbol(symbol.to_string()))
    }

    pub fn symbol_count(&self) -> usize {
        self.by_symbol.len()
    }

    /// Total number of records across all symbols.
    pub fn record_count(&self) -> usize {
        self.by_symbol.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// Load a history file. `format` overrides extension-based detection.
pub fn load_history(path: &Path, format: Option<HistoryFormat>) -> Result<PriceHistory, LoadError> {
    let format = format
        .or_else(|| HistoryFormat::from_path(path))
        .ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = match format {
        HistoryFormat::Csv => parse_csv(&text)?,
        HistoryFormat::Json => parse_json(&text)?,
    };
    if records.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let history = PriceHistory::from_records(records)?;
    debug!(
        path = %path.display(),
        symbols = history.symbol_count(),
        records = history.record_count(),
        "history loaded"
    );
    Ok(history)
}

/// Parse CSV text with a header row. Empty high/low/volume cells are absent.
pub fn parse_csv(text: &str) -> Result<Vec<PriceRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<PriceRecord>, _>>()
        .map_err(LoadError::from)
}

pub fn parse_json(text: &str) -> Result<Vec<PriceRecord>, LoadError> {
    Ok(serde_json::from_str(text)?)
}
