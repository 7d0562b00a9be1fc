// Test helpers:
// Recording stand-ins for the position manager and the pair factory. They
// enforce the few rules of the real contracts the fixtures depend on (a pool
// exists once, mints need an initialized pool and ticks on the spacing grid)
// and keep every call in order so tests can check what was submitted.

use std::{collections::BTreeMap, str::FromStr};

use ethnum::U256;

use crate::{
    client::{PairFactory, PositionManager},
    pair::events::{PairCreated, RawEvent, TransactionReceipt},
    pool::types::PoolTickSpacing,
    position::types::MintParams,
    token::{TokenId, canonicalize},
};


pub fn token_x() -> TokenId {
    TokenId::from_str("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA").unwrap()
}

pub fn token_y() -> TokenId {
    TokenId::from_str("0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB").unwrap()
}

pub fn wallet() -> TokenId {
    TokenId::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManagerCall {
    CreatePool {
        token0: TokenId,
        token1: TokenId,
        tick_spacing: PoolTickSpacing,
        sqrt_price_x96: U256,
    },
    Mint(MintParams),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockManagerError {
    PoolAlreadyExists,
    PoolNotInitialized,
    TickNotAlignedWithTickSpacing,
    Rejected(String),
}

#[derive(Default)]
pub struct MockPositionManager {
    pub calls: Vec<ManagerCall>,
    pub pools: BTreeMap<(TokenId, TokenId, PoolTickSpacing), U256>,
    pub positions: Vec<MintParams>,
    /// Zero based index of a mint to reject.
    pub reject_mint: Option<usize>,
    mints_seen: usize,
}

impl MockPositionManager {
    pub fn rejecting_mint(step: usize) -> Self {
        Self {
            reject_mint: Some(step),
            ..Default::default()
        }
    }

    pub fn mints(&self) -> Vec<MintParams> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ManagerCall::Mint(params) => Some(params.clone()),
                ManagerCall::CreatePool { .. } => None,
            })
            .collect()
    }

    fn check_mint(&self, params: &MintParams, step: usize) -> Result<(), MockManagerError> {
        if self.reject_mint == Some(step) {
            return Err(MockManagerError::Rejected(format!("mint {step} rejected")));
        }
        let key = (
            params.token0,
            params.token1,
            PoolTickSpacing::new(params.tick_spacing)
                .map_err(|_| MockManagerError::TickNotAlignedWithTickSpacing)?,
        );
        if !self.pools.contains_key(&key) {
            return Err(MockManagerError::PoolNotInitialized);
        }
        if params.tick_lower % params.tick_spacing != 0
            || params.tick_upper % params.tick_spacing != 0
        {
            return Err(MockManagerError::TickNotAlignedWithTickSpacing);
        }
        Ok(())
    }
}

impl PositionManager for MockPositionManager {
    type Receipt = usize;
    type Error = MockManagerError;

    async fn create_pool_from_factory(
        &mut self,
        token0: TokenId,
        token1: TokenId,
        tick_spacing: PoolTickSpacing,
        sqrt_price_x96: U256,
    ) -> Result<usize, MockManagerError> {
        self.calls.push(ManagerCall::CreatePool {
            token0,
            token1,
            tick_spacing,
            sqrt_price_x96,
        });
        tokio::task::yield_now().await;

        let key = (token0, token1, tick_spacing);
        if self.pools.contains_key(&key) {
            return Err(MockManagerError::PoolAlreadyExists);
        }
        self.pools.insert(key, sqrt_price_x96);
        Ok(self.calls.len() - 1)
    }

    async fn mint(&mut self, params: MintParams) -> Result<usize, MockManagerError> {
        self.calls.push(ManagerCall::Mint(params.clone()));
        tokio::task::yield_now().await;

        let step = self.mints_seen;
        self.mints_seen += 1;
        self.check_mint(&params, step)?;

        self.positions.push(params);
        Ok(self.calls.len() - 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockFactoryError(pub String);

/// Pair factory returning a canned receipt, or a `PairCreated` receipt for
/// the sorted tokens when none is set.
#[derive(Default)]
pub struct MockPairFactory {
    pub calls: Vec<(TokenId, TokenId, bool)>,
    pub receipt: Option<TransactionReceipt>,
    pub fail_with: Option<String>,
}

pub fn pair_address() -> TokenId {
    TokenId::from_str("0xC0C0C0C0C0C0C0C0C0C0C0C0C0C0C0C0C0C0C0C0").unwrap()
}

impl MockPairFactory {
    pub fn with_receipt(receipt: TransactionReceipt) -> Self {
        Self {
            receipt: Some(receipt),
            ..Default::default()
        }
    }
}

impl PairFactory for MockPairFactory {
    type Error = MockFactoryError;

    async fn create_pool(
        &mut self,
        token_a: TokenId,
        token_b: TokenId,
        stable: bool,
    ) -> Result<TransactionReceipt, MockFactoryError> {
        self.calls.push((token_a, token_b, stable));
        tokio::task::yield_now().await;

        if let Some(message) = &self.fail_with {
            return Err(MockFactoryError(message.clone()));
        }
        if let Some(receipt) = &self.receipt {
            return Ok(receipt.clone());
        }

        let pair = canonicalize(token_a, token_b);
        let event = PairCreated {
            token0: pair.token0(),
            token1: pair.token1(),
            stable,
            pair: pair_address(),
            all_pairs_length: U256::from(self.calls.len() as u64),
        };
        Ok(TransactionReceipt {
            events: vec![RawEvent::from(&event)],
        })
    }
}
