use crate::domain::errors::{ParseError, RowError};
use crate::domain::logging::LogComponent;
use crate::domain::order_book::{OrderRow, Side};
use crate::{log_info, log_warn};

use super::{ParseOutcome, data_rows, parse_decimal, parse_int_prefix, parse_rows};

pub const ORDER_BOOK_COLUMNS: usize = 4;

const COMPONENT: LogComponent = LogComponent::Csv("OrderBook");

/// Parses a raw order-book file: `id,side,quantity,price`.
///
/// The first non-blank line is a header and is not checked. Unlike the
/// candlestick and supply/demand readers this one does not validate
/// numbers: an unreadable price stays NaN and an unreadable id or
/// quantity becomes 0, so noisy feeds still aggregate. Only lines with
/// fewer than four fields are dropped.
pub fn parse_order_book_csv(text: &str) -> Result<ParseOutcome<OrderRow>, ParseError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let Some(header_index) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return Err(ParseError::TooFewLines { found: 0, required: 1 });
    };

    let rows = data_rows(&lines[header_index + 1..], header_index + 2);
    log_info!(COMPONENT, "Parsing {} order rows", rows.len());

    let outcome = parse_rows(COMPONENT, &rows, parse_row);
    let unpriced = outcome.records.iter().filter(|order| order.price.is_nan()).count();
    if unpriced > 0 {
        log_warn!(COMPONENT, "{} order(s) have a non-numeric price", unpriced);
    }

    Ok(outcome)
}

fn parse_row(line: &str) -> Result<OrderRow, RowError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < ORDER_BOOK_COLUMNS {
        return Err(RowError::TooFewColumns {
            expected: ORDER_BOOK_COLUMNS,
            found: parts.len(),
        });
    }

    // A quoted comma-decimal price ("12,50") is split in two; rejoin it.
    let price_text = parts[3..].join(",").replace('"', "");

    Ok(OrderRow {
        id: parse_int_prefix(parts[0]).unwrap_or_default(),
        side: Side::from_label(parts[1]),
        quantity: parse_int_prefix(parts[2]).unwrap_or_default(),
        price: parse_decimal(&price_text),
    })
}
