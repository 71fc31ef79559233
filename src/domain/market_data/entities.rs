use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::value_objects::Price;

/// Days between 0001-01-01 (CE day 1) and 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;
const SECONDS_PER_DAY: i64 = 86_400;

/// Domain entity - one validated row of a candlestick file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleRecord {
    pub date: NaiveDate,
    pub open: Price,
    pub close: Price,
    pub variation: f64,
    pub low: Price,
    pub high: Price,
}

impl CandleRecord {
    /// Unix seconds at UTC midnight of the candle date.
    pub fn unix_time(&self) -> i64 {
        (i64::from(self.date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE) * SECONDS_PER_DAY
    }

    pub fn to_chart_item(&self) -> ChartCandle {
        ChartCandle {
            time: self.unix_time(),
            open: self.open.value(),
            high: self.high.value(),
            low: self.low.value(),
            close: self.close.value(),
        }
    }
}

/// Point handed to the charting collaborator, keyed by Unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartCandle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
