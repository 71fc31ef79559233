use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use market_csv_charts::domain::order_book::OrderBookAggregator;
use market_csv_charts::domain::supply_demand::EquilibriumFinder;
use market_csv_charts::infrastructure::csv::{
    parse_candlestick_csv, parse_order_book_csv, parse_supply_demand_csv,
};
use std::fmt::Write as _;
use std::hint::black_box;
use std::time::Duration;

/// Candle file with a gentle trend and some noise, one row per day
fn generate_candle_csv(rows: usize) -> String {
    let mut text = String::from("Date,Opening,Closing,Variation,Minimum,Maximum");
    let mut base_price = 100.0_f64;
    for i in 0..rows {
        let day = 1 + i % 28;
        let month = 1 + (i / 28) % 12;
        let year = 2000 + i / (28 * 12);
        let open = base_price + (i as f64 * 0.1).sin();
        let close = open + (i as f64 * 0.3).cos();
        let low = open.min(close) - 0.5;
        let high = open.max(close) + 0.5;
        let variation = ((close - open) / open * 100.0 * 100.0).round() / 100.0;
        let _ = write!(
            text,
            "\n{day:02}/{month:02}/{year},{open:.2},{close:.2},{},{low:.2},{high:.2}",
            variation.to_string().replacen('.', ",", 1)
        );
        base_price = close;
    }
    text
}

fn generate_order_book_csv(rows: usize) -> String {
    let mut text = String::from("Order,Type,Quantity,Price");
    for i in 0..rows {
        let side = if i % 2 == 0 { "Buy" } else { "Sell" };
        let _ = write!(text, "\n{},{},{},\"{},{}\"", i, side, 1 + i % 50, 100 + i % 20, i % 4 * 25);
    }
    text
}

fn generate_supply_demand_csv(rows: usize) -> String {
    let mut text = String::from("Price (R$),Quantity Demanded (tons),Quantity Supplied (tons)");
    for i in (0..rows).rev() {
        let price = i as f64;
        let _ = write!(text, "\n{},{},{}", price, 10_000.0 - price * 2.0, price * 3.0);
    }
    text
}

fn bench_candlestick_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("candlestick_parsing");
    group.measurement_time(Duration::from_secs(10));

    for rows in [100, 1000, 10000].iter() {
        let text = generate_candle_csv(*rows);
        group.bench_with_input(BenchmarkId::new("parse", rows), &text, |b, text| {
            b.iter(|| parse_candlestick_csv(black_box(text)))
        });
    }

    group.finish();
}

fn bench_order_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_book");

    for rows in [100, 1000, 10000].iter() {
        let text = generate_order_book_csv(*rows);
        group.bench_with_input(BenchmarkId::new("parse", rows), &text, |b, text| {
            b.iter(|| parse_order_book_csv(black_box(text)))
        });

        if let Ok(outcome) = parse_order_book_csv(&text) {
            group.bench_with_input(
                BenchmarkId::new("aggregate", rows),
                &outcome.records,
                |b, orders| b.iter(|| OrderBookAggregator::aggregate(black_box(orders))),
            );
        }
    }

    group.finish();
}

fn bench_equilibrium(c: &mut Criterion) {
    let mut group = c.benchmark_group("supply_demand");

    for rows in [100, 5000].iter() {
        let text = generate_supply_demand_csv(*rows);
        group.bench_with_input(BenchmarkId::new("parse_and_find", rows), &text, |b, text| {
            b.iter(|| {
                parse_supply_demand_csv(black_box(text))
                    .ok()
                    .and_then(|outcome| EquilibriumFinder::find(&outcome.records))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_candlestick_parsing, bench_order_book, bench_equilibrium);
criterion_main!(benches);
