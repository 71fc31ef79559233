//! Writes records back in the dialects the readers accept.
//!
//! Prices are written with a decimal point, which the comma-decimal reader
//! also takes. The candle variation is the one column written with a
//! decimal comma, since its reader rejoins the split halves.

use std::fmt::Write as _;

use crate::domain::market_data::CandleRecord;
use crate::domain::order_book::OrderRow;
use crate::domain::supply_demand::SupplyDemandPoint;

use super::candlestick::CANDLESTICK_HEADER;
use super::supply_demand::SUPPLY_DEMAND_HEADER;

pub const ORDER_BOOK_HEADER: [&str; 4] = ["Order", "Type", "Quantity", "Price"];

pub fn write_candlestick_csv(candles: &[CandleRecord]) -> String {
    let mut out = CANDLESTICK_HEADER.join(",");
    for candle in candles {
        let _ = write!(
            out,
            "\n{},{},{},{},{},{}",
            candle.date.format("%d/%m/%Y"),
            candle.open,
            candle.close,
            decimal_comma(candle.variation),
            candle.low,
            candle.high,
        );
    }
    out.push('\n');
    out
}

pub fn write_order_book_csv(orders: &[OrderRow]) -> String {
    let mut out = ORDER_BOOK_HEADER.join(",");
    for order in orders {
        let _ = write!(
            out,
            "\n{},{},{},\"{}\"",
            order.id,
            order.side,
            order.quantity,
            decimal_comma(order.price),
        );
    }
    out.push('\n');
    out
}

pub fn write_supply_demand_csv(points: &[SupplyDemandPoint]) -> String {
    let mut out = SUPPLY_DEMAND_HEADER.join(",");
    for point in points {
        let _ = write!(
            out,
            "\n{},{},{}",
            point.price, point.quantity_demanded, point.quantity_supplied
        );
    }
    out.push('\n');
    out
}

fn decimal_comma(value: f64) -> String {
    value.to_string().replacen('.', ",", 1)
}
