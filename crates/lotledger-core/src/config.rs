//! Ledger construction options.
//!
//! A [`LedgerConfig`] carries the two construction-time settings of a
//! [`LotLedger`](crate::LotLedger): the lot-consumption [`Method`] and the
//! negative-inventory policy. [`LedgerConfig::from_pairs`] builds one from
//! string key/value pairs, for callers driven by external configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Method;

/// Errors that can occur while building a [`LedgerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No lot-consumption method was supplied.
    #[error("no lot-consumption method configured")]
    MissingMethod,
    /// The supplied method is not LIFO or FIFO.
    #[error("unknown lot-consumption method: {0}")]
    UnknownMethod(String),
    /// A configuration key this ledger does not recognize.
    #[error("unrecognized configuration key: {0}")]
    UnknownKey(String),
    /// A recognized key with an unparseable value.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// The offending value.
        value: String,
    },
}

/// Construction options for a [`LotLedger`](crate::LotLedger).
///
/// Both settings are fixed for the lifetime of the ledger.
///
/// # Examples
///
/// ```
/// use lotledger_core::{LedgerConfig, Method};
///
/// let config = LedgerConfig::new(Method::Fifo).with_negative_inventory(true);
/// assert!(config.allow_negative_inventory);
///
/// // Or from key/value pairs
/// let parsed = LedgerConfig::from_pairs([
///     ("method", "fifo"),
///     ("allow_negative_inventory", "true"),
/// ]).unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Which end of the lot sequence sales consume.
    pub method: Method,
    /// Clamp oversized sales at the available total instead of failing.
    pub allow_negative_inventory: bool,
}

impl LedgerConfig {
    /// Create a config with the given method and the defaults otherwise.
    ///
    /// `allow_negative_inventory` defaults to `false`.
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            allow_negative_inventory: false,
        }
    }

    /// Set the negative-inventory policy.
    #[must_use]
    pub const fn with_negative_inventory(mut self, allow: bool) -> Self {
        self.allow_negative_inventory = allow;
        self
    }

    /// Build a config from string key/value pairs.
    ///
    /// Recognized keys are `method` (required, `"lifo"` or `"fifo"`,
    /// case-insensitive) and `allow_negative_inventory` (`"true"`/`"false"`
    /// or `"1"`/`"0"`). Any other key is rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut method = None;
        let mut allow_negative_inventory = false;

        for (key, value) in pairs {
            match key {
                "method" => method = Some(value.parse()?),
                "allow_negative_inventory" => {
                    allow_negative_inventory = match value {
                        "true" | "1" => true,
                        "false" | "0" => false,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                key: key.to_string(),
                                value: value.to_string(),
                            })
                        }
                    };
                }
                _ => return Err(ConfigError::UnknownKey(key.to_string())),
            }
        }

        let method = method.ok_or(ConfigError::MissingMethod)?;
        Ok(Self {
            method,
            allow_negative_inventory,
        })
    }
}
