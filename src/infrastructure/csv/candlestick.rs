use crate::domain::errors::{ParseError, RowError};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{CandleRecord, CandleSeriesService, DataValidationService, Price};
use crate::log_info;

use super::{ParseOutcome, is_digits, parse_date, parse_decimal, parse_rows, split_with_header};

pub const CANDLESTICK_HEADER: [&str; 6] = ["Date", "Opening", "Closing", "Variation", "Minimum", "Maximum"];

const COMPONENT: LogComponent = LogComponent::Csv("Candlestick");

/// Parses a candlestick file.
///
/// Rows come back in file order. A row is dropped (and listed in
/// `skipped`) when it has fewer than six columns, an unreadable date or
/// number, a minimum above the maximum, or an opening/closing price
/// outside `[minimum, maximum]`.
pub fn parse_candlestick_csv(text: &str) -> Result<ParseOutcome<CandleRecord>, ParseError> {
    let rows = split_with_header(text, &CANDLESTICK_HEADER)?;
    log_info!(COMPONENT, "Parsing {} candlestick rows", rows.len());

    let validator = DataValidationService::new();
    let outcome = parse_rows(COMPONENT, &rows, |line| parse_row(line, &validator));

    #[cfg(debug_assertions)]
    for record in outcome.records.iter().take(3) {
        crate::log_debug!(COMPONENT, "Parsed row: {:?}", record);
    }
    if let Some((first, last)) = CandleSeriesService::date_range(&outcome.records) {
        log_info!(
            COMPONENT,
            "Parsed {} candles from {} to {}",
            outcome.records.len(),
            first,
            last
        );
    }

    Ok(outcome)
}

fn parse_row(line: &str, validator: &DataValidationService) -> Result<CandleRecord, RowError> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < CANDLESTICK_HEADER.len() {
        return Err(RowError::TooFewColumns {
            expected: CANDLESTICK_HEADER.len(),
            found: parts.len(),
        });
    }

    let date_text = parts[0].trim();
    let open = parse_decimal(parts[1]);
    let close = parse_decimal(parts[2]);

    // "-1,23" arrives as two fields; glue them back when the extra
    // column count allows it.
    let mut variation_text = parts[3].trim().to_string();
    let mut min_index = 4;
    if parts.len() > CANDLESTICK_HEADER.len() && is_digits(parts[4].trim()) {
        variation_text.push(',');
        variation_text.push_str(parts[4].trim());
        min_index = 5;
    }
    let variation = parse_decimal(&variation_text);
    let low = parse_decimal(parts[min_index]);
    let high = parse_decimal(parts[min_index + 1]);

    let date = parse_date(date_text).ok_or_else(|| RowError::InvalidDate(date_text.to_string()))?;

    let numbers = [
        ("Opening", open),
        ("Closing", close),
        ("Variation", variation),
        ("Minimum", low),
        ("Maximum", high),
    ];
    if let Some((column, _)) = numbers.iter().find(|(_, value)| value.is_nan()) {
        return Err(RowError::InvalidNumber(*column));
    }

    validator.validate_prices(open, close, low, high)?;

    Ok(CandleRecord {
        date,
        open: Price::from(open),
        close: Price::from(close),
        variation,
        low: Price::from(low),
        high: Price::from(high),
    })
}
