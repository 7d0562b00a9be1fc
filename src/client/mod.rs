//! Collaborator interfaces the fixtures drive.
//!
//! Contract execution, transaction submission and receipt transport live
//! behind these traits. A test harness implements them over whatever
//! execution layer it runs (a local chain, a simulator, a recording mock)
//! and hands the implementation to a [`crate::fixtures::FixtureContext`]
//! or to [`crate::pair::create_pair`].
//!
//! Every method resolves only after the execution layer acknowledged the
//! call. Errors are returned untouched to the caller of the fixture.

use std::fmt::Debug;

use ethnum::U256;

use crate::{
    pair::events::TransactionReceipt, pool::types::PoolTickSpacing, position::types::MintParams,
    token::TokenId,
};

/// Pool factory and position manager in one handle, the way the
/// non-fungible position manager exposes both.
#[allow(async_fn_in_trait)]
pub trait PositionManager {
    /// Transaction handle or receipt returned for each call.
    type Receipt;
    type Error: Debug;

    async fn create_pool_from_factory(
        &mut self,
        token0: TokenId,
        token1: TokenId,
        tick_spacing: PoolTickSpacing,
        sqrt_price_x96: U256,
    ) -> Result<Self::Receipt, Self::Error>;

    async fn mint(&mut self, params: MintParams) -> Result<Self::Receipt, Self::Error>;
}

/// Factory of the simple two-token exchange primitive.
#[allow(async_fn_in_trait)]
pub trait PairFactory {
    type Error: Debug;

    /// Creates the pair and waits for the transaction to be confirmed.
    async fn create_pool(
        &mut self,
        token_a: TokenId,
        token_b: TokenId,
        stable: bool,
    ) -> Result<TransactionReceipt, Self::Error>;
}
