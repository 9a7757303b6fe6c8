//! Lot-tracking ledger for a single inventory.
//!
//! This crate provides the core types for tracking purchase lots and
//! computing realized profit when units are sold:
//!
//! - [`Lot`] - A batch of units purchased at one unit price
//! - [`Method`] - LIFO or FIFO lot-consumption order
//! - [`LedgerConfig`] - Construction options for a ledger
//! - [`LotLedger`] - The ordered lot sequence with buy/sell operations
//! - [`SaleResult`] - The two profit figures produced by a sale
//!
//! Every sale reports profit two ways: against the units-weighted average
//! purchase price of the whole holding, and against the historical cost
//! of the specific lots the sale consumed.
//!
//! # Example
//!
//! ```
//! use lotledger_core::{LotLedger, Method};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = LotLedger::new(Method::Fifo);
//! ledger.buy(dec!(100), dec!(1500))?;
//! ledger.buy(dec!(150), dec!(1600))?;
//!
//! // FIFO: the sale consumes the oldest lot (bought at 1500)
//! let sale = ledger.sell(dec!(50), dec!(1700))?;
//! assert_eq!(sale.profit_by_average, Some(dec!(7000)));
//! assert_eq!(sale.profit_by_lot, dec!(10000));
//!
//! assert_eq!(ledger.units(), dec!(200));
//! assert_eq!(ledger.average_purchase_price(), Some(dec!(1575)));
//! # Ok::<(), lotledger_core::LedgerError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod ledger;
pub mod lot;

pub use config::{ConfigError, LedgerConfig};
pub use ledger::{LedgerError, LotLedger, Method, SaleResult};
pub use lot::Lot;

// Re-export commonly used external types
pub use rust_decimal::Decimal;
