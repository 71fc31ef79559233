use once_cell::sync::OnceCell;
use wasm_bindgen::prelude::*;

use crate::application::config::ParserConfig;
use crate::application::use_cases::DatasetLoader;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::log_info;

static CONFIG: OnceCell<ParserConfig> = OnceCell::new();

fn loader() -> DatasetLoader {
    DatasetLoader::new(CONFIG.get().copied().unwrap_or_default())
}

fn to_js_error(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Parser settings from JSON. Can be applied once, before the first parse.
/// The log profile moves the installed logger's threshold.
pub fn apply_config(json: &str) -> AppResult<ParserConfig> {
    let config = ParserConfig::from_json(json)?;
    CONFIG
        .set(config)
        .map_err(|_| AppError::Configuration("parser configuration already set".to_string()))?;
    get_logger().set_min_level(config.log_profile.min_level());
    log_info!(
        LogComponent::Api("Config"),
        "Parser configuration applied: {:?}",
        config
    );
    Ok(config)
}

pub fn candlestick_json(text: &str) -> AppResult<String> {
    Ok(serde_json::to_string(&loader().load_candles(text))?)
}

pub fn order_book_json(text: &str) -> AppResult<String> {
    Ok(serde_json::to_string(&loader().load_order_book(text))?)
}

pub fn supply_demand_json(text: &str) -> AppResult<String> {
    Ok(serde_json::to_string(&loader().load_supply_demand(text))?)
}

#[wasm_bindgen(js_name = configureParsers)]
pub fn configure_parsers(json: &str) -> Result<(), JsValue> {
    apply_config(json).map(|_| ()).map_err(to_js_error)
}

/// Candlestick CSV text to `{ data: { candles, items }, skipped_lines, notice }`.
#[wasm_bindgen(js_name = parseCandlestickCsv)]
pub fn parse_candlestick(text: &str) -> Result<String, JsValue> {
    candlestick_json(text).map_err(to_js_error)
}

#[wasm_bindgen(js_name = parseOrderBookCsv)]
pub fn parse_order_book(text: &str) -> Result<String, JsValue> {
    order_book_json(text).map_err(to_js_error)
}

#[wasm_bindgen(js_name = parseSupplyDemandCsv)]
pub fn parse_supply_demand(text: &str) -> Result<String, JsValue> {
    supply_demand_json(text).map_err(to_js_error)
}
