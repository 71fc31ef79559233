use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::logging::LogComponent;
use crate::domain::order_book::{BookLevel, OrderBook, OrderRow, Side};
use crate::log_debug;

/// Groups raw orders into price levels.
pub struct OrderBookAggregator;

impl OrderBookAggregator {
    pub fn aggregate(orders: &[OrderRow]) -> OrderBook {
        let mut bids: HashMap<u64, i64> = HashMap::new();
        let mut asks: HashMap<u64, i64> = HashMap::new();

        for order in orders {
            let levels = match order.side {
                Side::Buy => &mut bids,
                Side::Sell => &mut asks,
            };
            let level = levels.entry(price_key(order.price)).or_insert(0);
            *level = level.saturating_add(order.quantity);
        }

        let mut bids = into_levels(bids, Side::Buy);
        let mut asks = into_levels(asks, Side::Sell);
        bids.sort_by(|a, b| compare_prices(a.price, b.price, true));
        asks.sort_by(|a, b| compare_prices(a.price, b.price, false));

        let total_bid_qty = total_quantity(&bids);
        let total_ask_qty = total_quantity(&asks);

        log_debug!(
            LogComponent::Domain("OrderBook"),
            "Aggregated {} orders into {} bid / {} ask levels",
            orders.len(),
            bids.len(),
            asks.len()
        );

        OrderBook { bids, asks, total_bid_qty, total_ask_qty }
    }
}

/// Hash key for a price. Zero and NaN are canonicalized so `-0.0`
/// joins `0.0` and every NaN shares one level.
fn price_key(price: f64) -> u64 {
    if price == 0.0 {
        0.0f64.to_bits()
    } else if price.is_nan() {
        f64::NAN.to_bits()
    } else {
        price.to_bits()
    }
}

/// Quantities come straight from the file and may be huge; totals saturate.
fn total_quantity(levels: &[BookLevel]) -> i64 {
    levels.iter().fold(0i64, |total, level| total.saturating_add(level.quantity))
}

fn into_levels(levels: HashMap<u64, i64>, side: Side) -> Vec<BookLevel> {
    levels
        .into_iter()
        .map(|(key, quantity)| BookLevel { side, price: f64::from_bits(key), quantity })
        .collect()
}

/// Price ordering with NaN after every number in either direction.
fn compare_prices(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, side: Side, quantity: i64, price: f64) -> OrderRow {
        OrderRow { id, side, quantity, price }
    }

    #[test]
    fn sums_quantity_per_price_level() {
        let book = OrderBookAggregator::aggregate(&[
            order(1, Side::Buy, 10, 100.0),
            order(2, Side::Buy, 5, 100.0),
            order(3, Side::Sell, 3, 101.0),
        ]);

        assert_eq!(book.bids, vec![BookLevel { side: Side::Buy, price: 100.0, quantity: 15 }]);
        assert_eq!(book.asks, vec![BookLevel { side: Side::Sell, price: 101.0, quantity: 3 }]);
        assert_eq!(book.total_bid_qty, 15);
        assert_eq!(book.total_ask_qty, 3);
    }

    #[test]
    fn negative_zero_joins_zero_level() {
        let book = OrderBookAggregator::aggregate(&[
            order(1, Side::Sell, 1, 0.0),
            order(2, Side::Sell, 2, -0.0),
        ]);
        assert_eq!(book.asks.len(), 1);
        assert_eq!(book.asks[0].quantity, 3);
    }

    #[test]
    fn nan_prices_form_one_trailing_level() {
        let book = OrderBookAggregator::aggregate(&[
            order(1, Side::Buy, 1, f64::NAN),
            order(2, Side::Buy, 2, 99.0),
            order(3, Side::Buy, 4, f64::NAN),
            order(4, Side::Buy, 8, 101.0),
        ]);
        assert_eq!(book.bids.len(), 3);
        assert_eq!(book.bids[0].price, 101.0);
        assert_eq!(book.bids[1].price, 99.0);
        assert!(book.bids[2].price.is_nan());
        assert_eq!(book.bids[2].quantity, 5);
        assert_eq!(book.total_bid_qty, 15);
    }

    #[test]
    fn oversized_quantities_saturate() {
        let book = OrderBookAggregator::aggregate(&[
            order(1, Side::Buy, i64::MAX, 100.0),
            order(2, Side::Buy, i64::MAX, 100.0),
            order(3, Side::Buy, 1, 99.0),
            order(4, Side::Sell, i64::MIN, 101.0),
            order(5, Side::Sell, -1, 101.0),
        ]);
        assert_eq!(book.bids[0].quantity, i64::MAX);
        assert_eq!(book.total_bid_qty, i64::MAX);
        assert_eq!(book.bid_ladder()[1].cumulative, i64::MAX);
        assert_eq!(book.asks[0].quantity, i64::MIN);
        assert_eq!(book.ask_ladder()[0].cumulative, i64::MIN);
    }
}
