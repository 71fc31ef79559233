//! Tolerant readers and writers for the three CSV dialects.
//!
//! Files are comma-delimited but numbers use a comma as the decimal
//! separator, so fields are split naively and each parser recovers what
//! it can. Structural problems abort a parse with [`ParseError`]; bad rows
//! are skipped and reported in [`ParseOutcome::skipped`].

pub mod candlestick;
pub mod date;
pub mod order_book;
pub mod supply_demand;
pub mod writer;

pub use candlestick::{CANDLESTICK_HEADER, parse_candlestick_csv};
pub use date::parse_date;
pub use order_book::parse_order_book_csv;
pub use supply_demand::{SUPPLY_DEMAND_HEADER, parse_supply_demand_csv};

use serde::Serialize;

use crate::domain::errors::{ParseError, RowError};
use crate::domain::logging::{LogComponent, get_logger};

/// Data row dropped during a parse, by 1-based file line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: RowError,
}

/// Records accepted from one file plus the rows that were not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

impl<T> ParseOutcome<T> {
    pub fn new() -> Self {
        Self { records: Vec::new(), skipped: Vec::new() }
    }

    pub fn skipped_lines(&self) -> Vec<usize> {
        self.skipped.iter().map(|row| row.line).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl<T> Default for ParseOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Data row borrowed from the source text: (1-based line, trimmed text).
pub(crate) type DataRow<'a> = (usize, &'a str);

/// Splits trimmed text into lines, checks the header against `expected`
/// and returns the non-blank data rows.
pub(crate) fn split_with_header<'a>(
    text: &'a str,
    expected: &[&str],
) -> Result<Vec<DataRow<'a>>, ParseError> {
    let text = text.trim();
    let lines: Vec<&str> = if text.is_empty() { Vec::new() } else { text.split('\n').collect() };
    if lines.len() < 2 {
        return Err(ParseError::TooFewLines { found: lines.len(), required: 2 });
    }

    let got: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    if got != expected {
        return Err(ParseError::HeaderMismatch {
            expected: expected.iter().map(|s| s.to_string()).collect(),
            got: got.into_iter().map(String::from).collect(),
        });
    }

    Ok(data_rows(&lines[1..], 2))
}

/// Non-blank trimmed lines numbered from `first_line`.
pub(crate) fn data_rows<'a>(lines: &[&'a str], first_line: usize) -> Vec<DataRow<'a>> {
    lines
        .iter()
        .enumerate()
        .map(|(offset, line)| (first_line + offset, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}

/// Runs `parse` over every row, keeping file order. Rows run on the rayon
/// pool when the `parallel` feature is on.
pub(crate) fn parse_rows<T, F>(component: LogComponent, rows: &[DataRow<'_>], parse: F) -> ParseOutcome<T>
where
    T: Send,
    F: Fn(&str) -> Result<T, RowError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    let results: Vec<(usize, Result<T, RowError>)> = {
        use rayon::prelude::*;
        rows.par_iter().map(|&(line, text)| (line, parse(text))).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<(usize, Result<T, RowError>)> =
        rows.iter().map(|&(line, text)| (line, parse(text))).collect();

    let mut outcome = ParseOutcome::new();
    for (line, result) in results {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                get_logger().skipped_row(component, line, &reason.to_string());
                outcome.skipped.push(SkippedRow { line, reason });
            }
        }
    }
    outcome
}

/// Parses a comma-decimal number: the first comma becomes the decimal
/// point, then the longest numeric prefix is read.
pub(crate) fn parse_decimal(field: &str) -> f64 {
    parse_float_prefix(&field.trim().replacen(',', ".", 1))
}

/// Longest-prefix float parse: `"12.5kg"` is 12.5, `"kg"` is NaN.
pub(crate) fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Longest-prefix integer parse: `"10.5"` is 10, `"x"` is `None`.
pub(crate) fn parse_int_prefix(text: &str) -> Option<i64> {
    let s = text.trim();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = skip_digits(bytes, sign);
    if end == sign {
        return None;
    }
    s[..end].parse().ok()
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}

/// `^\d+$`
pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
