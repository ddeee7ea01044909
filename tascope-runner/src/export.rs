//! Reporting and export: JSON, CSV, and Markdown artifact generation.
//!
//! Provides three export formats for analysis reports:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: indicator detail rows with a timeframe column
//! - **Markdown**: batch summary with per-timeframe verdicts and degraded symbols
//!
//! Persisted reports carry a `schemaVersion` field. Newer versions are
//! rejected on load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tascope_core::AnalysisResult;

use crate::runner::{RunOutcome, SymbolReport, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `SymbolReport` to JSON.
pub fn export_json(report: &SymbolReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.context("failed to serialize SymbolReport to JSON")
}

/// Deserialize a `SymbolReport` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<SymbolReport> {
    let report: SymbolReport =
        serde_json::from_str(json).context("failed to deserialize SymbolReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the indicator detail rows of every timeframe as CSV.
///
/// Columns: symbol, timeframe, indicator, value, action
/// An unset value is an empty cell.
pub fn export_indicators_csv(result: &AnalysisResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["symbol", "timeframe", "indicator", "value", "action"])?;

    for block in result.timeframes() {
        for row in &block.details {
            let value = row.value.map(|v| format!("{v:.6}")).unwrap_or_default();
            wtr.write_record([
                result.symbol.as_str(),
                block.timeframe.label(),
                row.name.as_str(),
                value.as_str(),
                row.action.as_str(),
            ])?;
        }
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Markdown report ────────────────────────────────────────────────

/// Generate a Markdown summary for a batch.
pub fn generate_summary(outcome: &RunOutcome) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str("# Technical Analysis Summary\n\n");
    md.push_str("| Symbol | Timeframe | Signal | Base | Filter | Buy | Sell | Neutral |\n");
    md.push_str("| --- | --- | --- | --- | --- | --- | --- | --- |\n");
    for report in outcome.analysed() {
        let Some(result) = &report.result else {
            continue;
        };
        for block in result.timeframes() {
            let s = &block.summary;
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                report.symbol,
                block.timeframe,
                s.signal,
                s.base_signal,
                s.filter_reason,
                s.stats.buy,
                s.stats.sell,
                s.stats.neutral
            ));
        }
    }
    md.push('\n');

    for report in outcome.analysed() {
        let Some(result) = &report.result else {
            continue;
        };
        md.push_str(&format!("## {}\n\n", report.symbol));
        for block in result.timeframes() {
            md.push_str(&format!(
                "### {} ({} bars, last close {:.2})\n\n",
                block.timeframe, block.bar_count, block.last_close
            ));
            md.push_str("| Indicator | Value | Action |\n");
            md.push_str("| --- | --- | --- |\n");
            for row in &block.details {
                let value = row
                    .value
                    .map(|v| format!("{v:.2}"))
                    .unwrap_or_else(|| "n/a".to_string());
                md.push_str(&format!("| {} | {} | {} |\n", row.name, value, row.action));
            }
            md.push('\n');
        }
    }

    let degraded: Vec<&SymbolReport> = outcome.degraded().collect();
    if !degraded.is_empty() {
        md.push_str("## Omitted\n\n");
        for report in degraded {
            md.push_str(&format!(
                "- **{}** ({} records): {}\n",
                report.symbol,
                report.records,
                report.error.as_deref().unwrap_or("no result")
            ));
        }
        md.push('\n');
    }

    md
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// File stem for a symbol's artifacts. Path separators and other characters
/// outside `[A-Za-z0-9._-]` become `_`, so a pair like `BTC/USDT` stays a
/// single file inside the output directory.
pub fn file_stem(symbol: &str) -> String {
    let stem: String = symbol
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.chars().all(|c| c == '.') {
        // "", "." and ".." would name the directory itself or its parent
        return "_".repeat(stem.len().max(1));
    }
    stem
}

/// Save the artifact set for a batch under `output_dir`:
/// - `{stem}.json`: the `SymbolReport` (degraded ones included)
/// - `{stem}_indicators.csv`: detail rows, for analysed symbols
/// - `summary.md`: the Markdown summary
///
/// `stem` is [`file_stem`] of the symbol. Two symbols mapping to the same stem
/// are rejected before anything is written. Returns the written paths.
pub fn save_outputs(outcome: &RunOutcome, output_dir: &Path, pretty: bool) -> Result<Vec<PathBuf>> {
    let mut stems = HashMap::new();
    for report in &outcome.reports {
        let stem = file_stem(&report.symbol);
        if let Some(other) = stems.insert(stem.clone(), report.symbol.as_str()) {
            bail!(
                "symbols '{other}' and '{}' both map to output file stem '{stem}'",
                report.symbol
            );
        }
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let mut written = Vec::new();
    for report in &outcome.reports {
        let stem = file_stem(&report.symbol);
        let path = output_dir.join(format!("{stem}.json"));
        std::fs::write(&path, export_json(report, pretty)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);

        if let Some(result) = &report.result {
            let path = output_dir.join(format!("{stem}_indicators.csv"));
            std::fs::write(&path, export_indicators_csv(result)?)
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
        }
    }

    let path = output_dir.join("summary.md");
    std::fs::write(&path, generate_summary(outcome))
        .with_context(|| format!("failed to write {}", path.display()))?;
    written.push(path);

    Ok(written)
}

/// Load a `SymbolReport` written by `save_outputs`.
pub fn load_report(path: &Path) -> Result<SymbolReport> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}
