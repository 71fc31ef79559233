//! Pure domain layer: records, value objects and the services computing
//! on them. Nothing here knows about CSV text or the browser.

pub mod errors;
pub mod logging;
pub mod market_data;
pub mod order_book;
pub mod supply_demand;
