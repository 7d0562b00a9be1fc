use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{pool::types::FeeAmount, token::TokenId};

pub const DEFAULT_FULL_RANGE_AMOUNT: u128 = 1_000_000;
pub const DEFAULT_AUXILIARY_AMOUNT: u128 = 100;
// Earliest valid timestamp. Only a mock-time manager accepts it.
pub const DEFAULT_DEADLINE: u64 = 1;

/// Initial pool price as `reserve1 / reserve0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialPrice {
    pub reserve1: u128,
    pub reserve0: u128,
}

impl Default for InitialPrice {
    fn default() -> Self {
        Self {
            reserve1: 1,
            reserve0: 1,
        }
    }
}

/// Knobs of a bootstrapped pool. Missing fields take the defaults, which
/// reproduce the stock fixture: MEDIUM fee, price 1:1, 1,000,000 units per
/// token in the full range position, 100 in the narrow ones, deadline 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    pub fee: FeeAmount,
    pub initial_price: InitialPrice,
    pub recipient: TokenId,
    pub deadline: u64,
    pub full_range_amount: u128,
    pub auxiliary_amount: u128,
    /// Check ranges against the pool's tick spacing and the price against
    /// the engine bounds before any call is made.
    pub strict_validation: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        let mut recipient = [0_u8; 20];
        recipient[19] = 1;
        Self {
            fee: FeeAmount::Medium,
            initial_price: InitialPrice::default(),
            recipient: TokenId::new(recipient),
            deadline: DEFAULT_DEADLINE,
            full_range_amount: DEFAULT_FULL_RANGE_AMOUNT,
            auxiliary_amount: DEFAULT_AUXILIARY_AMOUNT,
            strict_validation: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read fixture config: {e}"),
            ConfigError::Json(e) => write!(f, "failed to parse fixture config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FixtureConfig {
    pub fn with_recipient(mut self, recipient: TokenId) -> Self {
        self.recipient = recipient;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Json)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&json)
    }
}
