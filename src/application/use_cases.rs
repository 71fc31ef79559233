use serde::Serialize;

use crate::application::config::ParserConfig;
use crate::domain::errors::ParseError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{CandleRecord, CandleSeriesService, ChartCandle};
use crate::domain::order_book::{DepthRow, OrderBook, OrderBookAggregator};
use crate::domain::supply_demand::{EquilibriumFinder, EquilibriumPoint, SupplyDemandPoint};
use crate::infrastructure::csv::{
    ParseOutcome, parse_candlestick_csv, parse_order_book_csv, parse_supply_demand_csv,
};
use crate::{log_error, log_info, log_warn};

/// Message the presentation layer should show after a load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum UserNotice {
    /// The file was rejected as a whole.
    Blocking(String),
    /// Some rows were skipped.
    Warning(String),
}

/// Result of loading one file: always renderable, possibly empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedDataset<T> {
    pub data: T,
    pub skipped_lines: Vec<usize>,
    pub notice: Option<UserNotice>,
}

impl<T> LoadedDataset<T> {
    pub fn is_rejected(&self) -> bool {
        matches!(self.notice, Some(UserNotice::Blocking(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CandleChart {
    /// File order.
    pub candles: Vec<CandleRecord>,
    /// Time order.
    pub items: Vec<ChartCandle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrderBookDepth {
    pub book: OrderBook,
    pub bid_ladder: Vec<DepthRow>,
    pub ask_ladder: Vec<DepthRow>,
    pub bid_share: Option<f64>,
    pub ask_share: Option<f64>,
}

impl From<OrderBook> for OrderBookDepth {
    fn from(book: OrderBook) -> Self {
        Self {
            bid_ladder: book.bid_ladder(),
            ask_ladder: book.ask_ladder(),
            bid_share: book.bid_share(),
            ask_share: book.ask_share(),
            book,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SupplyDemandChart {
    /// Ascending price.
    pub points: Vec<SupplyDemandPoint>,
    pub equilibrium: Option<EquilibriumPoint>,
}

/// Use case: turn an uploaded or fetched CSV text into a chart dataset.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: ParserConfig,
}

impl DatasetLoader {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn load_candles(&self, text: &str) -> LoadedDataset<CandleChart> {
        self.finish("Candles", parse_candlestick_csv(text), |candles| {
            let items = CandleSeriesService::chart_items(&candles);
            CandleChart { candles, items }
        })
    }

    pub fn load_order_book(&self, text: &str) -> LoadedDataset<OrderBookDepth> {
        self.finish("OrderBook", parse_order_book_csv(text), |orders| {
            OrderBookDepth::from(OrderBookAggregator::aggregate(&orders))
        })
    }

    pub fn load_supply_demand(&self, text: &str) -> LoadedDataset<SupplyDemandChart> {
        self.finish("SupplyDemand", parse_supply_demand_csv(text), |points| {
            let equilibrium = EquilibriumFinder::find(&points);
            if let Some(point) = &equilibrium {
                log_info!(
                    LogComponent::Loader("SupplyDemand"),
                    "Equilibrium at price {} / quantity {}",
                    point.price,
                    point.quantity
                );
            } else {
                log_info!(LogComponent::Loader("SupplyDemand"), "Curves do not cross");
            }
            SupplyDemandChart { points, equilibrium }
        })
    }

    fn finish<R, T: Default>(
        &self,
        component: &'static str,
        result: Result<ParseOutcome<R>, ParseError>,
        build: impl FnOnce(Vec<R>) -> T,
    ) -> LoadedDataset<T> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                log_error!(LogComponent::Loader(component), "{}", error);
                return LoadedDataset {
                    data: T::default(),
                    skipped_lines: Vec::new(),
                    notice: Some(UserNotice::Blocking(error.to_string())),
                };
            }
        };

        let skipped_lines = outcome.skipped_lines();
        let notice = self.config.diagnostics.summarize(&outcome.skipped).map(|summary| {
            log_warn!(LogComponent::Loader(component), "{}", summary.detail);
            UserNotice::Warning(summary.user_message)
        });

        log_info!(
            LogComponent::Loader(component),
            "Loaded {} record(s)",
            outcome.records.len()
        );

        LoadedDataset { data: build(outcome.records), skipped_lines, notice }
    }
}
