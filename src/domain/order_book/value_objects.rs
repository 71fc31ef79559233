use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Side {
    #[strum(serialize = "Buy")]
    Buy,
    #[strum(serialize = "Sell")]
    Sell,
}

impl Side {
    /// Anything other than an exact `Buy` label lands on the ask side.
    pub fn from_label(label: &str) -> Self {
        Side::from_str(label.trim()).unwrap_or(Side::Sell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_round_trip() {
        for side in Side::iter() {
            assert_eq!(Side::from_label(side.as_ref()), side);
        }
    }

    #[test]
    fn unknown_labels_are_asks() {
        assert_eq!(Side::from_label(" Buy "), Side::Buy);
        assert_eq!(Side::from_label("buy"), Side::Sell);
        assert_eq!(Side::from_label(""), Side::Sell);
    }
}
