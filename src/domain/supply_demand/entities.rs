use serde::{Deserialize, Serialize};

/// One row of a supply/demand schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyDemandPoint {
    pub price: f64,
    pub quantity_demanded: f64,
    pub quantity_supplied: f64,
}

impl SupplyDemandPoint {
    pub fn new(price: f64, quantity_demanded: f64, quantity_supplied: f64) -> Self {
        Self { price, quantity_demanded, quantity_supplied }
    }

    /// Demand minus supply; the curves cross where this changes sign.
    pub fn excess_demand(&self) -> f64 {
        self.quantity_demanded - self.quantity_supplied
    }
}

/// Price/quantity where the interpolated curves meet, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumPoint {
    pub price: f64,
    pub quantity: f64,
}
