//! The lot ledger: ordered purchase lots with LIFO/FIFO consumption.
//!
//! A [`LotLedger`] owns an ordered sequence of [`Lot`]s together with two
//! derived scalars (total units and the units-weighted average purchase
//! price). [`LotLedger::buy`] appends or merges lots; [`LotLedger::sell`]
//! consumes them from the end selected by the ledger's [`Method`] and
//! reports realized profit both against the pre-sale average price and
//! against the historical cost of the specific lots consumed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ConfigError, LedgerConfig};
use crate::Lot;

/// Lot-consumption order applied on sales.
///
/// The method never affects storage order, which is always oldest-first;
/// it only selects which end of the sequence a sale consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Last In, First Out. Sales consume the newest lot first.
    Lifo,
    /// First In, First Out. Sales consume the oldest lot first.
    Fifo,
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIFO" => Ok(Self::Lifo),
            "FIFO" => Ok(Self::Fifo),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lifo => write!(f, "LIFO"),
            Self::Fifo => write!(f, "FIFO"),
        }
    }
}

/// Error that can occur during a buy or sell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Units must be strictly positive.
    #[error("units must be positive, got {0}")]
    InvalidUnits(Decimal),
    /// Unit prices cannot be negative.
    #[error("unit price cannot be negative, got {0}")]
    InvalidPrice(Decimal),
    /// A sale requested more units than the ledger holds.
    #[error("cannot sell {requested} units, only {available} available")]
    Oversell {
        /// Units requested.
        requested: Decimal,
        /// Units available.
        available: Decimal,
    },
}

/// Outcome of a sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleResult {
    /// Units actually sold, after any negative-inventory clamp.
    pub units_sold: Decimal,
    /// Profit against the weighted-average purchase price as it stood
    /// before the sale. `None` only when a clamped sale moved nothing.
    pub profit_by_average: Option<Decimal>,
    /// Realized profit against the historical cost of the lots consumed.
    pub profit_by_lot: Decimal,
}

/// A ledger of purchase lots for a single inventory.
///
/// Lots are stored oldest-first and consumed on sales from the end the
/// configured [`Method`] selects. The ledger keeps a running total of
/// units and a units-weighted average purchase price, updated
/// incrementally on every mutation.
///
/// # Examples
///
/// ```
/// use lotledger_core::{LotLedger, Method};
/// use rust_decimal_macros::dec;
///
/// let mut ledger = LotLedger::new(Method::Lifo);
/// ledger.buy(dec!(100), dec!(1500)).unwrap();
/// ledger.buy(dec!(150), dec!(1600)).unwrap();
///
/// let sale = ledger.sell(dec!(50), dec!(1700)).unwrap();
/// assert_eq!(sale.profit_by_average, Some(dec!(7000)));
/// assert_eq!(sale.profit_by_lot, dec!(5000));
///
/// assert_eq!(ledger.units(), dec!(200));
/// assert_eq!(ledger.average_purchase_price(), Some(dec!(1550)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLedger {
    method: Method,
    allow_negative_inventory: bool,
    lots: VecDeque<Lot>,
    total_units: Decimal,
    average_price: Option<Decimal>,
}

impl LotLedger {
    /// Create an empty ledger with the given method and default options.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self::with_config(LedgerConfig::new(method))
    }

    /// Create an empty ledger from a [`LedgerConfig`].
    #[must_use]
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            method: config.method,
            allow_negative_inventory: config.allow_negative_inventory,
            lots: VecDeque::new(),
            total_units: Decimal::ZERO,
            average_price: None,
        }
    }

    /// The lot-consumption method, fixed at construction.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Whether oversized sales are clamped instead of rejected.
    #[must_use]
    pub const fn allows_negative_inventory(&self) -> bool {
        self.allow_negative_inventory
    }

    /// Total units currently held across all lots.
    #[must_use]
    pub const fn units(&self) -> Decimal {
        self.total_units
    }

    /// Units-weighted average purchase price of the held lots.
    ///
    /// `None` exactly when the ledger holds no lots.
    #[must_use]
    pub const fn average_purchase_price(&self) -> Option<Decimal> {
        self.average_price
    }

    /// Number of lots currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lots.len()
    }

    /// Check if the ledger holds no lots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Iterate over the held lots, oldest first.
    pub fn lots(&self) -> impl Iterator<Item = &Lot> {
        self.lots.iter()
    }

    /// Snapshot of the held lots as `(units, unit_price)` pairs, oldest first.
    #[must_use]
    pub fn inventory(&self) -> Vec<(Decimal, Decimal)> {
        self.lots.iter().map(|l| (l.units, l.unit_price)).collect()
    }

    /// Total cost basis of the held lots.
    #[must_use]
    pub fn book_value(&self) -> Decimal {
        self.lots.iter().map(Lot::cost).sum()
    }

    /// Record a purchase of `units` at `unit_price`.
    ///
    /// A buy at exactly the same price as the newest lot merges into that
    /// lot instead of appending, keeping the sequence compact when
    /// repeated buys occur at one price.
    pub fn buy(&mut self, units: Decimal, unit_price: Decimal) -> Result<(), LedgerError> {
        Self::check_args(units, unit_price)?;

        match self.lots.back_mut() {
            Some(tail) if tail.unit_price == unit_price => tail.units += units,
            _ => self.lots.push_back(Lot::new(units, unit_price)),
        }

        let new_total = self.total_units + units;
        self.average_price = Some(match self.average_price {
            Some(avg) => (self.total_units * avg + units * unit_price) / new_total,
            None => unit_price,
        });
        self.total_units = new_total;
        Ok(())
    }

    /// Record a sale of `units` at `unit_price`.
    ///
    /// Consumes lots from the end selected by the ledger's [`Method`]
    /// until the requested quantity is covered. Requests exceeding the
    /// held total fail with [`LedgerError::Oversell`] unless the ledger
    /// was configured to allow negative inventory, in which case the
    /// request is clamped to the held total. A clamped sale on an empty
    /// ledger moves nothing and returns `None` for the by-average profit.
    pub fn sell(&mut self, units: Decimal, unit_price: Decimal) -> Result<SaleResult, LedgerError> {
        Self::check_args(units, unit_price)?;

        let units_sold = if units > self.total_units {
            if !self.allow_negative_inventory {
                return Err(LedgerError::Oversell {
                    requested: units,
                    available: self.total_units,
                });
            }
            self.total_units
        } else {
            units
        };

        let original_average = self.average_price;
        let mut remaining = units_sold;
        let mut profit_by_lot = Decimal::ZERO;

        while remaining > Decimal::ZERO {
            let Some(mut lot) = self.take_lot() else { break };

            let consumed = remaining.min(lot.units);
            remaining -= consumed;
            profit_by_lot += consumed * (unit_price - lot.unit_price);
            self.retire(consumed, lot.unit_price);

            lot.units -= consumed;
            if lot.units > Decimal::ZERO {
                self.put_back(lot);
            }
        }

        Ok(SaleResult {
            units_sold,
            profit_by_average: original_average.map(|avg| units_sold * (unit_price - avg)),
            profit_by_lot,
        })
    }

    /// Remove the next lot from the consumption end.
    fn take_lot(&mut self) -> Option<Lot> {
        match self.method {
            Method::Lifo => self.lots.pop_back(),
            Method::Fifo => self.lots.pop_front(),
        }
    }

    /// Return a partially consumed lot to the consumption end.
    fn put_back(&mut self, lot: Lot) {
        match self.method {
            Method::Lifo => self.lots.push_back(lot),
            Method::Fifo => self.lots.push_front(lot),
        }
    }

    /// Remove `consumed` units bought at `lot_price` from the running totals.
    ///
    /// Inverse of the weighted-average update in [`Self::buy`]; the
    /// average becomes `None` when the total reaches zero.
    fn retire(&mut self, consumed: Decimal, lot_price: Decimal) {
        let new_total = self.total_units - consumed;
        self.average_price = if new_total.is_zero() {
            None
        } else {
            self.average_price
                .map(|avg| (self.total_units * avg - consumed * lot_price) / new_total)
        };
        self.total_units = new_total;
    }

    fn check_args(units: Decimal, unit_price: Decimal) -> Result<(), LedgerError> {
        if units <= Decimal::ZERO {
            return Err(LedgerError::InvalidUnits(units));
        }
        if unit_price < Decimal::ZERO {
            return Err(LedgerError::InvalidPrice(unit_price));
        }
        Ok(())
    }
}

impl fmt::Display for LotLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lots.is_empty() {
            return write!(f, "(empty)");
        }

        for (i, lot) in self.lots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lot}")?;
        }
        Ok(())
    }
}
