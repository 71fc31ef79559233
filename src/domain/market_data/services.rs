use chrono::NaiveDate;

use crate::domain::errors::RowError;
use crate::domain::market_data::{CandleRecord, ChartCandle};

/// Domain service for candle price validation
#[derive(Debug, Clone, Copy, Default)]
pub struct DataValidationService;

impl DataValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Checks the candle range rules in file order: the range itself first,
    /// then opening and closing prices against it.
    pub fn validate_prices(&self, open: f64, close: f64, low: f64, high: f64) -> Result<(), RowError> {
        if low > high {
            return Err(RowError::InvertedRange { low, high });
        }

        for (column, value) in [("Opening", open), ("Closing", close)] {
            if value < low || value > high {
                return Err(RowError::PriceOutOfRange { column, value, low, high });
            }
        }

        Ok(())
    }
}

/// Domain service shaping parsed candles for the chart collaborator
pub struct CandleSeriesService;

impl CandleSeriesService {
    /// Chart items ordered by time. Records keep file order, so sorting
    /// happens here.
    pub fn chart_items(candles: &[CandleRecord]) -> Vec<ChartCandle> {
        let mut items: Vec<ChartCandle> = candles.iter().map(CandleRecord::to_chart_item).collect();
        items.sort_by_key(|item| item.time);
        items
    }

    /// Earliest and latest candle dates.
    pub fn date_range(candles: &[CandleRecord]) -> Option<(NaiveDate, NaiveDate)> {
        let first = candles.iter().map(|c| c.date).min()?;
        let last = candles.iter().map(|c| c.date).max()?;
        Some((first, last))
    }
}
