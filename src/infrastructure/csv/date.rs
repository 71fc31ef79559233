use chrono::{DateTime, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    DayMonthYear,
    YearMonthDay,
}

/// Strict fixed-width pattern: 2-digit day and month, 4-digit year.
#[derive(Debug, Clone, Copy)]
struct FixedFormat {
    separator: char,
    order: FieldOrder,
}

/// Tried in this order; the first calendar-valid match wins.
const FIXED_FORMATS: [FixedFormat; 4] = [
    FixedFormat { separator: '/', order: FieldOrder::DayMonthYear },
    FixedFormat { separator: '-', order: FieldOrder::DayMonthYear },
    FixedFormat { separator: '-', order: FieldOrder::YearMonthDay },
    FixedFormat { separator: '/', order: FieldOrder::YearMonthDay },
];

const FALLBACK_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const FALLBACK_DATE_FORMATS: [&str; 9] = [
    "%m/%d/%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

impl FixedFormat {
    fn widths(&self) -> [usize; 3] {
        match self.order {
            FieldOrder::DayMonthYear => [2, 2, 4],
            FieldOrder::YearMonthDay => [4, 2, 2],
        }
    }

    fn parse(&self, text: &str) -> Option<NaiveDate> {
        let mut parts = text.split(self.separator);
        let mut values = [0u32; 3];
        for (value, width) in values.iter_mut().zip(self.widths()) {
            let part = parts.next()?;
            if part.len() != width || !super::is_digits(part) {
                return None;
            }
            *value = part.parse().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }

        let (day, month, year) = match self.order {
            FieldOrder::DayMonthYear => (values[0], values[1], values[2]),
            FieldOrder::YearMonthDay => (values[2], values[1], values[0]),
        };
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    }
}

/// Parses a date cell.
///
/// The four fixed layouts `DD/MM/YYYY`, `DD-MM-YYYY`, `YYYY-MM-DD` and
/// `YYYY/MM/DD` are tried first. A layout that matches but names an
/// impossible day (`31/02/2024`, month 13) does not count. Anything else
/// goes through a permissive fallback: RFC 3339, RFC 2822, ISO date-times,
/// US `MM/DD/YYYY` and spelled-out month names. Date-times keep the date
/// as written, ignoring any offset.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    FIXED_FORMATS
        .iter()
        .find_map(|format| format.parse(text))
        .or_else(|| parse_fallback(text))
}

fn parse_fallback(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }

    FALLBACK_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}
