//! TaScope CLI: analyze, run, and inspect commands.
//!
//! Commands:
//! - `analyze`: analyse one symbol of a history file and print its report as JSON
//! - `run`: execute a batch from a TOML config file
//! - `inspect`: report record and bar counts per symbol and which stage would fail
//!
//! Logs go to stderr (`RUST_LOG`, default `info`; `-v` for `debug`), so the
//! JSON on stdout stays machine-readable.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tascope_core::{AnalysisOptions, Timeframe, MIN_HISTORY_RECORDS, MIN_SERIES_BARS};
use tascope_runner::{
    analyze_symbol, export_json, load_history, run_analysis, save_outputs, HistoryFormat,
    PriceHistory, RunConfig, RunOutcome,
};

#[derive(Parser)]
#[command(
    name = "tascope",
    about = "TaScope CLI: multi-timeframe technical-analysis verdicts"
)]
struct Cli {
    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one symbol and print its report as JSON.
    Analyze {
        /// History file (CSV or JSON).
        input: PathBuf,

        /// Symbol to analyse. Required when the file holds more than one.
        #[arg(long)]
        symbol: Option<String>,

        /// File format. Defaults to the file extension.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Run the three timeframes in parallel.
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Pretty-print the JSON report.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Execute a batch from a TOML config file.
    Run {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Output directory. Overrides `[output] dir`.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Report record and bar counts without computing indicators.
    Inspect {
        /// History file (CSV or JSON).
        input: PathBuf,

        /// File format. Defaults to the file extension.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for HistoryFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => HistoryFormat::Csv,
            FormatArg::Json => HistoryFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            input,
            symbol,
            format,
            parallel,
            pretty,
        } => run_analyze(&input, symbol, format.map(Into::into), parallel, pretty),
        Commands::Run { config, output_dir } => run_batch(&config, output_dir),
        Commands::Inspect { input, format } => run_inspect(&input, format.map(Into::into)),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_analyze(
    input: &Path,
    symbol: Option<String>,
    format: Option<HistoryFormat>,
    parallel: bool,
    pretty: bool,
) -> Result<()> {
    let history = load_history(input, format)?;
    let symbol = pick_symbol(&history, symbol)?;
    let options = AnalysisOptions {
        parallel_timeframes: parallel,
    };

    let report = analyze_symbol(&symbol, history.history_for(&symbol)?, &options)?;
    println!("{}", export_json(&report, pretty)?);
    Ok(())
}

fn pick_symbol(history: &PriceHistory, symbol: Option<String>) -> Result<String> {
    if let Some(symbol) = symbol {
        return Ok(symbol);
    }
    let symbols = history.symbols();
    match symbols.as_slice() {
        [only] => Ok(only.clone()),
        _ => bail!(
            "file holds {} symbols ({}); pass --symbol",
            symbols.len(),
            symbols.join(", ")
        ),
    }
}

fn run_batch(config_path: &Path, output_dir: Option<PathBuf>) -> Result<()> {
    let mut config = RunConfig::from_file(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    if output_dir.is_some() {
        config.output.dir = output_dir;
    }

    let outcome = run_analysis(&config)?;
    print_summary(&outcome);

    if let Some(dir) = &config.output.dir {
        let written = save_outputs(&outcome, dir, config.output.pretty)?;
        info!(files = written.len(), dir = %dir.display(), "outputs saved");
        println!("Outputs saved to: {}", dir.display());
    }
    Ok(())
}

fn print_summary(outcome: &RunOutcome) {
    println!(
        "{:<10} {:>8} {:>8} {:>8}",
        "symbol", "daily", "weekly", "monthly"
    );
    for report in &outcome.reports {
        match &report.result {
            Some(result) => println!(
                "{:<10} {:>8} {:>8} {:>8}",
                report.symbol,
                result.daily.summary.signal.as_str(),
                result.weekly.summary.signal.as_str(),
                result.monthly.summary.signal.as_str()
            ),
            None => println!(
                "{:<10} omitted: {}",
                report.symbol,
                report.error.as_deref().unwrap_or("no result")
            ),
        }
    }
}

fn run_inspect(input: &Path, format: Option<HistoryFormat>) -> Result<()> {
    let history = load_history(input, format)?;

    println!(
        "{:<10} {:>8} {:>6} {:>6} {:>7}  status",
        "symbol", "records", "daily", "weekly", "monthly"
    );
    for symbol in history.symbols() {
        let records = history.history_for(&symbol)?.len();
        let [daily, weekly, monthly] = Timeframe::ALL.map(|tf| tf.bar_count(records));
        println!(
            "{:<10} {:>8} {:>6} {:>6} {:>7}  {}",
            symbol,
            records,
            daily,
            weekly,
            monthly,
            sufficiency_status(records)
        );
    }
    Ok(())
}

/// First stage that would reject a history of `records` daily rows.
fn sufficiency_status(records: usize) -> String {
    if records < MIN_HISTORY_RECORDS {
        return format!("history too short (need {MIN_HISTORY_RECORDS} records)");
    }
    match Timeframe::ALL
        .into_iter()
        .find(|tf| tf.bar_count(records) < MIN_SERIES_BARS)
    {
        Some(tf) => format!("{tf} series too short (need {MIN_SERIES_BARS} bars)"),
        None => "ok".to_string(),
    }
}
