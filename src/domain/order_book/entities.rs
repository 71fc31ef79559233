use serde::{Deserialize, Serialize};

use super::value_objects::Side;

/// Raw order as read from the book file, before aggregation.
///
/// `price` may be NaN: the order-book feed is not numerically validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: i64,
    pub side: Side,
    pub quantity: i64,
    pub price: f64,
}

/// Total quantity resting at one price on one side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub side: Side,
    pub price: f64,
    pub quantity: i64,
}

/// Level plus the running total up to and including it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRow {
    pub price: f64,
    pub quantity: i64,
    pub cumulative: i64,
}

/// Aggregate - bids best (highest) first, asks best (lowest) first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
    pub total_bid_qty: i64,
    pub total_ask_qty: i64,
}

impl OrderBook {
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn bid_ladder(&self) -> Vec<DepthRow> {
        Self::ladder(&self.bids)
    }

    pub fn ask_ladder(&self) -> Vec<DepthRow> {
        Self::ladder(&self.asks)
    }

    /// Percentage of the whole book on the bid side.
    pub fn bid_share(&self) -> Option<f64> {
        self.share(self.total_bid_qty)
    }

    /// Percentage of the whole book on the ask side.
    pub fn ask_share(&self) -> Option<f64> {
        self.share(self.total_ask_qty)
    }

    fn share(&self, side_total: i64) -> Option<f64> {
        let total = self.total_bid_qty as f64 + self.total_ask_qty as f64;
        if total == 0.0 {
            return None;
        }
        Some(side_total as f64 / total * 100.0)
    }

    fn ladder(levels: &[BookLevel]) -> Vec<DepthRow> {
        levels
            .iter()
            .scan(0i64, |running, level| {
                *running = running.saturating_add(level.quantity);
                Some(DepthRow {
                    price: level.price,
                    quantity: level.quantity,
                    cumulative: *running,
                })
            })
            .collect()
    }
}
