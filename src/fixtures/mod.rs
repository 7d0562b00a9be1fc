//! Ready made pools for tests.
//!
//! A [`FixtureContext`] owns the position manager handle and the fixture
//! config. Each bootstrap canonicalizes the token pair, creates the pool at
//! the configured price and then mints the positions of a
//! [`TickRangePolicy`], strictly one after the other:
//!
//! ```text
//! canonicalize ─► encode price ─► plan ranges ─► create pool ─► mint #0 ─► mint #1 ─► …
//! ```
//!
//! The first failing step ends the bootstrap. Nothing already done is rolled
//! back, the pool and earlier positions stay as the manager left them.

use ethnum::U256;
use ic_canister_log::log;

use crate::{
    client::PositionManager,
    config::FixtureConfig,
    errors::FixtureError,
    libraries::{
        constants::{MAX_SQRT_RATIO, MIN_SQRT_RATIO},
        price_encoding::encode_price_sqrt,
    },
    logs::INFO,
    pool::{create_pool::create_pool, types::PoolId},
    position::{mint_params, mint_positions, types::MintParams},
    tick::{TickRangePolicy, types::RangeKind},
    token::{TokenId, canonicalize},
};


/// Everything a bootstrap will submit, computed without touching the
/// manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub pool_id: PoolId,
    pub sqrt_price_x96: U256,
    pub mints: Vec<MintParams>,
}

pub struct FixtureContext<M> {
    manager: M,
    config: FixtureConfig,
}

impl<M: PositionManager> FixtureContext<M> {
    pub fn new(manager: M, config: FixtureConfig) -> Self {
        Self { manager, config }
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut M {
        &mut self.manager
    }

    pub fn into_manager(self) -> M {
        self.manager
    }

    pub fn plan(
        &self,
        token_a: TokenId,
        token_b: TokenId,
        policy: TickRangePolicy,
    ) -> Result<BootstrapPlan, FixtureError<M::Error>> {
        let pair = canonicalize(token_a, token_b);
        let pool_id = PoolId::new(pair, self.config.fee);
        let tick_spacing = pool_id.tick_spacing();

        let price = self.config.initial_price;
        let sqrt_price_x96 = encode_price_sqrt(price.reserve1, price.reserve0)
            .map_err(FixtureError::InvalidInitialPrice)?;

        let planned = policy.ranges(tick_spacing);

        if self.config.strict_validation {
            if sqrt_price_x96 < *MIN_SQRT_RATIO || sqrt_price_x96 >= *MAX_SQRT_RATIO {
                return Err(FixtureError::InvalidSqrtPriceX96(sqrt_price_x96));
            }
            if let Some(misaligned) = planned
                .iter()
                .find(|p| !p.range.is_usable_with(tick_spacing))
            {
                return Err(FixtureError::TickNotAlignedWithTickSpacing {
                    range: misaligned.range,
                    tick_spacing,
                });
            }
        }

        let mints = planned
            .iter()
            .map(|p| {
                let amount = match p.kind {
                    RangeKind::FullRange => self.config.full_range_amount,
                    RangeKind::Auxiliary => self.config.auxiliary_amount,
                };
                mint_params(
                    pair,
                    tick_spacing,
                    p.range,
                    self.config.recipient,
                    amount,
                    self.config.deadline,
                )
            })
            .collect();

        Ok(BootstrapPlan {
            pool_id,
            sqrt_price_x96,
            mints,
        })
    }

    /// Creates the pool and mints the planned positions, returning the
    /// receipt of the last mint.
    pub async fn execute(
        &mut self,
        plan: BootstrapPlan,
    ) -> Result<M::Receipt, FixtureError<M::Error>> {
        let BootstrapPlan {
            pool_id,
            sqrt_price_x96,
            mints,
        } = plan;
        let positions = mints.len();

        create_pool(&mut self.manager, &pool_id, sqrt_price_x96).await?;
        let receipt = mint_positions(&mut self.manager, mints).await?;

        log!(
            INFO,
            "[bootstrap]: pool {pool_id} ready with {positions} position(s)"
        );
        Ok(receipt)
    }

    pub async fn bootstrap(
        &mut self,
        token_a: TokenId,
        token_b: TokenId,
        policy: TickRangePolicy,
    ) -> Result<M::Receipt, FixtureError<M::Error>> {
        let plan = self.plan(token_a, token_b, policy)?;
        self.execute(plan).await
    }

    /// Pool with a single full range position.
    pub async fn create_pool(
        &mut self,
        token_a: TokenId,
        token_b: TokenId,
    ) -> Result<M::Receipt, FixtureError<M::Error>> {
        self.bootstrap(token_a, token_b, TickRangePolicy::FullRange)
            .await
    }

    /// Full range position plus [-60, 60] and [-120, 120].
    pub async fn create_pool_with_multiple_positions(
        &mut self,
        token_a: TokenId,
        token_b: TokenId,
    ) -> Result<M::Receipt, FixtureError<M::Error>> {
        self.bootstrap(token_a, token_b, TickRangePolicy::Symmetric)
            .await
    }

    /// Full range position plus [0, 60] and [-120, 0], initializing tick zero.
    pub async fn create_pool_with_zero_tick_initialized(
        &mut self,
        token_a: TokenId,
        token_b: TokenId,
    ) -> Result<M::Receipt, FixtureError<M::Error>> {
        self.bootstrap(token_a, token_b, TickRangePolicy::ZeroStraddling)
            .await
    }
}
