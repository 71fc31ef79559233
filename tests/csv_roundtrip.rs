use chrono::{Days, NaiveDate};
use market_csv_charts::domain::market_data::{CandleRecord, Price};
use market_csv_charts::domain::order_book::{OrderRow, Side};
use market_csv_charts::domain::supply_demand::SupplyDemandPoint;
use market_csv_charts::infrastructure::csv::writer::{
    write_candlestick_csv, write_order_book_csv, write_supply_demand_csv,
};
use market_csv_charts::infrastructure::csv::{
    parse_candlestick_csv, parse_order_book_csv, parse_supply_demand_csv,
};
use quickcheck_macros::quickcheck;

fn candle(day: u16, low: i32, span: u16, open: u16, close: u16, variation: i32) -> CandleRecord {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let span = f64::from(span);
    let low = f64::from(low) / 100.0;
    let at = |step: u16| low + (f64::from(step) % (span + 1.0)) / 100.0;
    CandleRecord {
        date: base + Days::new(u64::from(day)),
        open: Price::from(at(open)),
        close: Price::from(at(close)),
        variation: f64::from(variation) / 100.0,
        low: Price::from(low),
        high: Price::from(low + span / 100.0),
    }
}

#[quickcheck]
fn candles_survive_a_round_trip(rows: Vec<(u16, i32, u16, u16, u16, i32)>) -> bool {
    if rows.is_empty() {
        return true;
    }
    let candles: Vec<CandleRecord> = rows
        .into_iter()
        .map(|(day, low, span, open, close, variation)| candle(day, low, span, open, close, variation))
        .collect();

    let outcome = parse_candlestick_csv(&write_candlestick_csv(&candles)).unwrap();
    outcome.is_clean() && outcome.records == candles
}

#[quickcheck]
fn orders_survive_a_round_trip(rows: Vec<(u32, bool, u32, i32)>) -> bool {
    let orders: Vec<OrderRow> = rows
        .into_iter()
        .map(|(id, buy, quantity, cents)| OrderRow {
            id: i64::from(id),
            side: if buy { Side::Buy } else { Side::Sell },
            quantity: i64::from(quantity),
            price: f64::from(cents) / 100.0,
        })
        .collect();

    let outcome = parse_order_book_csv(&write_order_book_csv(&orders)).unwrap();
    outcome.is_clean() && outcome.records == orders
}

#[quickcheck]
fn schedules_survive_a_round_trip(rows: Vec<(i32, u32, u32)>) -> bool {
    if rows.is_empty() {
        return true;
    }
    let mut points: Vec<SupplyDemandPoint> = rows
        .into_iter()
        .map(|(price, demanded, supplied)| {
            SupplyDemandPoint::new(f64::from(price) / 4.0, f64::from(demanded), f64::from(supplied))
        })
        .collect();
    points.sort_by(|a, b| a.price.total_cmp(&b.price));

    let outcome = parse_supply_demand_csv(&write_supply_demand_csv(&points)).unwrap();
    outcome.is_clean() && outcome.records == points
}

#[test]
fn fractional_variation_uses_decimal_comma() {
    let written = write_candlestick_csv(&[candle(0, 900, 300, 100, 200, -123)]);
    assert!(written.ends_with("01/01/2000,10,11,-1,23,9,12\n"));
}
