//! Criterion benchmarks for TaScope hot paths.
//!
//! Benchmarks:
//! 1. Indicator precompute (single SMA, then the full 13-indicator battery)
//! 2. Full analysis call (three timeframes, sequential and parallel)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tascope_core::components::indicator::Indicator;
use tascope_core::data::build_daily;
use tascope_core::engine::precompute::precompute_indicators;
use tascope_core::indicators::{Adx, Bollinger, Cci, Ema, Macd, Roc, Rsi, Sma, Stochastic, Wma};
use tascope_core::{analyze_with, AnalysisOptions, PriceRecord};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_history(n: usize) -> Vec<PriceRecord> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0 + i as f64 * 0.05;
            let open = close - 0.3;
            PriceRecord {
                symbol: "BENCH".into(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: Some(close + 1.5),
                low: Some(close - 1.5),
                close,
                volume: Some(1_000_000.0),
            }
        })
        .collect()
}

// ── 1. Indicator Precompute ──────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_precompute");

    for &bar_count in &[365, 1825, 3650] {
        let bars = build_daily(&make_history(bar_count));

        let sma = Sma::new(20);
        group.bench_with_input(BenchmarkId::new("sma_20", bar_count), &bar_count, |b, _| {
            b.iter(|| precompute_indicators(black_box(&bars), black_box(&[&sma as &dyn Indicator])));
        });

        let battery: Vec<Box<dyn Indicator>> = vec![
            Box::new(Rsi::new(14)),
            Box::new(Macd::new(12, 26)),
            Box::new(Stochastic::new(14)),
            Box::new(Adx::new(14)),
            Box::new(Cci::new(20)),
            Box::new(Roc::new(10)),
            Box::new(Sma::new(20)),
            Box::new(Ema::new(20)),
            Box::new(Wma::new(20)),
            Box::new(Sma::new(10)),
            Box::new(Ema::new(10)),
            Box::new(Bollinger::upper(20, 2.0)),
            Box::new(Bollinger::lower(20, 2.0)),
        ];
        let refs: Vec<&dyn Indicator> = battery.iter().map(|i| i.as_ref()).collect();
        group.bench_with_input(
            BenchmarkId::new("battery_13", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| precompute_indicators(black_box(&bars), black_box(&refs)));
            },
        );
    }

    group.finish();
}

// ── 2. Full Analysis ─────────────────────────────────────────────────

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for &records in &[600, 1825, 3650] {
        let history = make_history(records);
        for parallel in [false, true] {
            let options = AnalysisOptions {
                parallel_timeframes: parallel,
            };
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, records), &records, |b, _| {
                b.iter(|| analyze_with("BENCH", black_box(&history), &options));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_indicators, bench_analyze);
criterion_main!(benches);
