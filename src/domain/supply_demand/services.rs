use crate::domain::logging::LogComponent;
use crate::domain::supply_demand::{EquilibriumPoint, SupplyDemandPoint};
use crate::{log_debug, log_warn};

/// Locates the supply/demand crossing by linear interpolation.
pub struct EquilibriumFinder;

impl EquilibriumFinder {
    /// Scans adjacent pairs of a price-ascending schedule and returns the
    /// lowest-price crossing.
    ///
    /// A pair crosses when demand is at or above supply at `current` and at
    /// or below it at `next`. Pairs where both curves move in parallel
    /// (zero denominator) are skipped.
    pub fn find(points: &[SupplyDemandPoint]) -> Option<EquilibriumPoint> {
        for (index, pair) in points.windows(2).enumerate() {
            let (current, next) = (pair[0], pair[1]);
            if current.excess_demand() < 0.0 || next.excess_demand() > 0.0 {
                continue;
            }

            let price_diff = next.price - current.price;
            let demand_diff = current.quantity_demanded - next.quantity_demanded;
            let supply_diff = next.quantity_supplied - current.quantity_supplied;
            let denominator = demand_diff + supply_diff;
            if denominator == 0.0 {
                log_warn!(
                    LogComponent::Domain("Equilibrium"),
                    "Skipping parallel segment between points {} and {}",
                    index,
                    index + 1
                );
                continue;
            }

            let t = current.excess_demand() / denominator;
            let price = current.price + price_diff * t;
            let quantity = current.quantity_demanded - demand_diff * t;
            if !price.is_finite() || !quantity.is_finite() {
                continue;
            }

            log_debug!(
                LogComponent::Domain("Equilibrium"),
                "Crossing between points {} and {} at t={:.4}",
                index,
                index + 1,
                t
            );

            return Some(EquilibriumPoint {
                price: round_cents(price),
                quantity: round_cents(quantity),
            });
        }

        None
    }
}

/// Two-decimal rounding. Values too large to scale are already whole and
/// come back unchanged.
fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(price: f64, demand: f64, supply: f64) -> SupplyDemandPoint {
        SupplyDemandPoint::new(price, demand, supply)
    }

    #[test]
    fn interpolates_between_bracketing_points() {
        let eq = EquilibriumFinder::find(&[point(10.0, 100.0, 20.0), point(20.0, 50.0, 60.0)]);
        // t = 80 / (50 + 40)
        assert_eq!(eq, Some(EquilibriumPoint { price: 18.89, quantity: 55.56 }));
    }

    #[test]
    fn exact_match_on_a_point() {
        let eq = EquilibriumFinder::find(&[
            point(1.0, 90.0, 10.0),
            point(2.0, 50.0, 50.0),
            point(3.0, 10.0, 90.0),
        ]);
        assert_eq!(eq, Some(EquilibriumPoint { price: 2.0, quantity: 50.0 }));
    }

    #[test]
    fn no_crossing_yields_none() {
        let eq = EquilibriumFinder::find(&[point(1.0, 90.0, 10.0), point(2.0, 80.0, 20.0)]);
        assert_eq!(eq, None);
        assert_eq!(EquilibriumFinder::find(&[point(1.0, 1.0, 1.0)]), None);
        assert_eq!(EquilibriumFinder::find(&[]), None);
    }

    #[test]
    fn parallel_segment_is_skipped() {
        // Curves coincide on the first segment, cross on the second.
        let eq = EquilibriumFinder::find(&[
            point(1.0, 40.0, 40.0),
            point(2.0, 40.0, 40.0),
            point(3.0, 30.0, 50.0),
        ]);
        assert_eq!(eq, Some(EquilibriumPoint { price: 2.0, quantity: 40.0 }));
    }

    #[test]
    fn huge_prices_stay_finite() {
        let eq = EquilibriumFinder::find(&[point(1e307, 10.0, 0.0), point(1.5e307, 0.0, 10.0)]).unwrap();
        assert!(eq.price.is_finite());
        assert!((eq.price / 1.25e307 - 1.0).abs() < 1e-12);
        assert_eq!(eq.quantity, 5.0);
    }

    #[test]
    fn finds_lowest_price_crossing() {
        let eq = EquilibriumFinder::find(&[
            point(1.0, 20.0, 10.0),
            point(2.0, 10.0, 20.0),
            point(3.0, 20.0, 10.0),
            point(4.0, 10.0, 20.0),
        ]);
        assert_eq!(eq, Some(EquilibriumPoint { price: 1.5, quantity: 15.0 }));
    }
}
