//! Lot type representing one purchase batch.
//!
//! A [`Lot`] is a batch of units bought together at a single unit price.
//! It stays in the ledger until sales have consumed it entirely.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A batch of units purchased at one unit price.
///
/// Lots held by a [`LotLedger`](crate::LotLedger) always have positive
/// units; a lot whose units reach zero is removed rather than stored.
///
/// # Examples
///
/// ```
/// use lotledger_core::Lot;
/// use rust_decimal_macros::dec;
///
/// let lot = Lot::new(dec!(100), dec!(1500));
/// assert_eq!(lot.cost(), dec!(150000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lot {
    /// Units remaining in this batch.
    pub units: Decimal,
    /// Purchase price per unit.
    pub unit_price: Decimal,
}

impl Lot {
    /// Create a new lot.
    #[must_use]
    pub const fn new(units: Decimal, unit_price: Decimal) -> Self {
        Self { units, unit_price }
    }

    /// Total cost of this lot (units times unit price).
    #[must_use]
    pub fn cost(&self) -> Decimal {
        self.units * self.unit_price
    }

    /// Split this lot, taking some units and leaving the rest.
    ///
    /// Returns `(taken, remaining)`. Both halves keep the same unit price.
    #[must_use]
    pub fn split(&self, take_units: Decimal) -> (Self, Self) {
        let taken = Self::new(take_units, self.unit_price);
        let remaining = Self::new(self.units - take_units, self.unit_price);
        (taken, remaining)
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.units, self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost() {
        let lot = Lot::new(dec!(10), dec!(150.00));
        assert_eq!(lot.cost(), dec!(1500.00));
    }

    #[test]
    fn test_split() {
        let lot = Lot::new(dec!(10), dec!(150.00));
        let (taken, remaining) = lot.split(dec!(3));

        assert_eq!(taken.units, dec!(3));
        assert_eq!(remaining.units, dec!(7));

        // Both halves share the price
        assert_eq!(taken.unit_price, lot.unit_price);
        assert_eq!(remaining.unit_price, lot.unit_price);
    }

    #[test]
    fn test_display() {
        let lot = Lot::new(dec!(100), dec!(1500));
        assert_eq!(format!("{lot}"), "100 @ 1500");
    }
}
