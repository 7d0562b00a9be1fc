use candid::Nat;
use ic_canister_log::log;
use types::MintParams;

use crate::{
    client::PositionManager,
    errors::FixtureError,
    logs::{DEBUG, INFO},
    pool::types::PoolTickSpacing,
    tick::types::TickRange,
    token::{CanonicalPair, TokenId},
};

pub mod types;


/// Builds the mint request for one range, with zero minimum amounts.
pub fn mint_params(
    pair: CanonicalPair,
    tick_spacing: PoolTickSpacing,
    range: TickRange,
    recipient: TokenId,
    amount_desired: u128,
    deadline: u64,
) -> MintParams {
    MintParams {
        token0: pair.token0(),
        token1: pair.token1(),
        tick_spacing: tick_spacing.get(),
        tick_lower: range.tick_lower(),
        tick_upper: range.tick_upper(),
        recipient,
        amount0_desired: Nat::from(amount_desired),
        amount1_desired: Nat::from(amount_desired),
        amount0_min: Nat::from(0_u8),
        amount1_min: Nat::from(0_u8),
        deadline,
    }
}

/// Submits the mints one after the other and returns the receipt of the last.
///
/// Each mint is awaited before the next one is issued, later positions see
/// the pool state left by earlier ones. The first rejection stops the
/// sequence; positions minted before it are not burnt.
pub async fn mint_positions<M: PositionManager>(
    manager: &mut M,
    requests: Vec<MintParams>,
) -> Result<M::Receipt, FixtureError<M::Error>> {
    let total = requests.len();
    let mut last_receipt = None;

    for (step, params) in requests.into_iter().enumerate() {
        let (tick_lower, tick_upper) = (params.tick_lower, params.tick_upper);

        let receipt = manager.mint(params).await.map_err(|error| {
            log!(
                DEBUG,
                "[mint_positions]: mint {} of {total} for range [{tick_lower}, {tick_upper}] failed with error: {error:?}",
                step + 1
            );
            FixtureError::MintFailed {
                step,
                tick_lower,
                tick_upper,
                error,
            }
        })?;

        log!(
            INFO,
            "[mint_positions]: minted position {} of {total} in range [{tick_lower}, {tick_upper}]",
            step + 1
        );
        last_receipt = Some(receipt);
    }

    last_receipt.ok_or(FixtureError::NoPositionsRequested)
}
