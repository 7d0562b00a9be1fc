use std::fmt;

use candid::Nat;
use serde::{Deserialize, Serialize};

use crate::{
    libraries::constants::MAX_TICK,
    token::{CanonicalPair, TokenId},
};

/// Fee tiers of the pool engine, in hundredths of a bip.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeAmount {
    Low,
    Medium,
    High,
}

impl FeeAmount {
    pub const fn pips(self) -> u32 {
        match self {
            FeeAmount::Low => 500,
            FeeAmount::Medium => 3000,
            FeeAmount::High => 10000,
        }
    }

    pub const fn tick_spacing(self) -> PoolTickSpacing {
        match self {
            FeeAmount::Low => PoolTickSpacing(10),
            FeeAmount::Medium => PoolTickSpacing(60),
            FeeAmount::High => PoolTickSpacing(200),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFeeAmount(pub String);

impl fmt::Display for InvalidFeeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fee amount: {}", self.0)
    }
}

impl std::error::Error for InvalidFeeAmount {}

impl TryFrom<u32> for FeeAmount {
    type Error = InvalidFeeAmount;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            500 => Ok(FeeAmount::Low),
            3000 => Ok(FeeAmount::Medium),
            10000 => Ok(FeeAmount::High),
            other => Err(InvalidFeeAmount(other.to_string())),
        }
    }
}

impl TryFrom<Nat> for FeeAmount {
    type Error = InvalidFeeAmount;

    fn try_from(value: Nat) -> Result<Self, Self::Error> {
        let fee = u32::try_from(value.0.clone()).map_err(|_| InvalidFeeAmount(value.to_string()))?;
        FeeAmount::try_from(fee)
    }
}

/// Tick spacing of a pool, always in `1..=MAX_TICK` so the usable tick
/// bounds for it are a non-empty range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PoolTickSpacing(i32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTickSpacing(pub i32);

impl fmt::Display for InvalidTickSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tick spacing: {}, expected 1..={MAX_TICK}", self.0)
    }
}

impl std::error::Error for InvalidTickSpacing {}

impl PoolTickSpacing {
    pub const fn new(tick_spacing: i32) -> Result<Self, InvalidTickSpacing> {
        if tick_spacing <= 0 || tick_spacing > MAX_TICK {
            return Err(InvalidTickSpacing(tick_spacing));
        }
        Ok(Self(tick_spacing))
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PoolTickSpacing {
    type Error = InvalidTickSpacing;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PoolTickSpacing> for i32 {
    fn from(value: PoolTickSpacing) -> Self {
        value.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct PoolId {
    pub token0: TokenId,
    pub token1: TokenId,
    pub fee: FeeAmount,
}

impl PoolId {
    pub fn new(pair: CanonicalPair, fee: FeeAmount) -> Self {
        Self {
            token0: pair.token0(),
            token1: pair.token1(),
            fee,
        }
    }

    pub fn tick_spacing(&self) -> PoolTickSpacing {
        self.fee.tick_spacing()
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.token0, self.token1, self.fee.pips())
    }
}
