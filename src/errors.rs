use std::fmt::{self, Debug};

use ethnum::U256;

use crate::{
    libraries::price_encoding::EncodePriceError, pair::events::DecodeEventError,
    pool::types::PoolTickSpacing, tick::types::TickRange,
};

/// Failure of a pool bootstrap.
///
/// `E` is the collaborator's own error. It is carried as is so a failing
/// test reports the pool engine's real cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError<E> {
    InvalidInitialPrice(EncodePriceError),
    InvalidSqrtPriceX96(U256),
    TickNotAlignedWithTickSpacing {
        range: TickRange,
        tick_spacing: PoolTickSpacing,
    },
    NoPositionsRequested,
    CreatePoolFailed(E),
    /// Mint number `step` (zero based) was rejected. Earlier mints stay in
    /// place.
    MintFailed {
        step: usize,
        tick_lower: i32,
        tick_upper: i32,
        error: E,
    },
}

impl<E: Debug> fmt::Display for FixtureError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::InvalidInitialPrice(reason) => {
                write!(f, "invalid initial price: {reason:?}")
            }
            FixtureError::InvalidSqrtPriceX96(price) => {
                write!(f, "sqrt price {price} is outside the pool engine bounds")
            }
            FixtureError::TickNotAlignedWithTickSpacing {
                range,
                tick_spacing,
            } => write!(
                f,
                "tick range {range} is not usable with tick spacing {}",
                tick_spacing.get()
            ),
            FixtureError::NoPositionsRequested => write!(f, "no positions requested"),
            FixtureError::CreatePoolFailed(error) => write!(f, "pool creation failed: {error:?}"),
            FixtureError::MintFailed {
                step,
                tick_lower,
                tick_upper,
                error,
            } => write!(
                f,
                "mint {step} for range [{tick_lower}, {tick_upper}] failed: {error:?}"
            ),
        }
    }
}

impl<E: Debug> std::error::Error for FixtureError<E> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatePairError<E> {
    FactoryCallFailed(E),
    PairAddressNotFound,
    UnexpectedEvent { name: String },
    MalformedEvent(DecodeEventError),
}

impl<E: Debug> fmt::Display for CreatePairError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatePairError::FactoryCallFailed(error) => {
                write!(f, "pair creation failed: {error:?}")
            }
            CreatePairError::PairAddressNotFound => {
                write!(f, "pair address not found in transaction receipt")
            }
            CreatePairError::UnexpectedEvent { name } => {
                write!(f, "expected a PairCreated event, found {name}")
            }
            CreatePairError::MalformedEvent(reason) => {
                write!(f, "malformed PairCreated event: {reason:?}")
            }
        }
    }
}

impl<E: Debug> std::error::Error for CreatePairError<E> {}
