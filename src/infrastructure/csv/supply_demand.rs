use crate::domain::errors::{ParseError, RowError};
use crate::domain::logging::LogComponent;
use crate::domain::supply_demand::SupplyDemandPoint;
use crate::{log_debug, log_info};

use super::{ParseOutcome, parse_decimal, parse_rows, split_with_header};

pub const SUPPLY_DEMAND_HEADER: [&str; 3] = [
    "Price (R$)",
    "Quantity Demanded (tons)",
    "Quantity Supplied (tons)",
];

const COMPONENT: LogComponent = LogComponent::Csv("SupplyDemand");

/// Parses a supply/demand schedule and sorts it by ascending price.
pub fn parse_supply_demand_csv(text: &str) -> Result<ParseOutcome<SupplyDemandPoint>, ParseError> {
    let rows = split_with_header(text, &SUPPLY_DEMAND_HEADER)?;
    log_info!(COMPONENT, "Parsing {} supply/demand rows", rows.len());

    let mut outcome = parse_rows(COMPONENT, &rows, parse_row);
    outcome
        .records
        .sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(first) = outcome.records.first() {
        log_debug!(COMPONENT, "Lowest price point: {:?}", first);
    }

    Ok(outcome)
}

fn parse_row(line: &str) -> Result<SupplyDemandPoint, RowError> {
    let mut fields = line.split(',');
    let mut values = [f64::NAN; 3];
    for (value, column) in values.iter_mut().zip(SUPPLY_DEMAND_HEADER) {
        *value = fields.next().map(parse_decimal).unwrap_or(f64::NAN);
        if value.is_nan() {
            return Err(RowError::InvalidNumber(column));
        }
    }

    let [price, quantity_demanded, quantity_supplied] = values;
    Ok(SupplyDemandPoint::new(price, quantity_demanded, quantity_supplied))
}
