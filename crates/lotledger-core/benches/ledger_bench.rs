//! Ledger performance benchmarks.
//!
//! Run with: cargo bench -p lotledger-core

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lotledger_core::{LotLedger, Method};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Generate a ledger with N distinct-price lots.
fn generate_ledger(method: Method, num_lots: usize) -> LotLedger {
    let mut ledger = LotLedger::new(method);

    for i in 0..num_lots {
        let price = dec!(100.00) + Decimal::from(i as u32);
        ledger.buy(dec!(10), price).unwrap();
    }

    ledger
}

fn bench_buy(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_buy");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(generate_ledger(Method::Fifo, size)));
        });
    }

    group.finish();
}

fn bench_sell(c: &mut Criterion) {
    for method in [Method::Fifo, Method::Lifo] {
        let mut group = c.benchmark_group(format!("ledger_sell_{method}"));

        for size in [10, 100, 500] {
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
                b.iter_batched(
                    || generate_ledger(method, size),
                    |mut ledger| {
                        // Consume half the lots, one lot-sized sale at a time
                        for _ in 0..size / 2 {
                            let _ = ledger.sell(dec!(10), dec!(250.00));
                        }
                        black_box(ledger)
                    },
                    criterion::BatchSize::SmallInput,
                );
            });
        }

        group.finish();
    }
}

fn bench_book_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_book_value");

    for size in [10, 100, 1000] {
        let ledger = generate_ledger(Method::Fifo, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.book_value()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_buy, bench_sell, bench_book_value);
criterion_main!(benches);
