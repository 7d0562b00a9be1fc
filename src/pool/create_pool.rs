use ethnum::U256;
use ic_canister_log::log;

use crate::{
    client::PositionManager,
    errors::FixtureError,
    logs::{DEBUG, INFO},
};

use super::types::PoolId;

/// Creates and initializes the pool through the factory entry point of the
/// position manager.
///
/// Nothing is checked locally: creating the same pool twice, or passing an
/// out of range price, fails with whatever the manager reports.
pub async fn create_pool<M: PositionManager>(
    manager: &mut M,
    pool_id: &PoolId,
    sqrt_price_x96: U256,
) -> Result<M::Receipt, FixtureError<M::Error>> {
    let tick_spacing = pool_id.tick_spacing();

    match manager
        .create_pool_from_factory(pool_id.token0, pool_id.token1, tick_spacing, sqrt_price_x96)
        .await
    {
        Ok(receipt) => {
            log!(
                INFO,
                "[create_pool]: created pool {pool_id} with tick spacing {} at sqrt price {sqrt_price_x96}",
                tick_spacing.get()
            );
            Ok(receipt)
        }
        Err(error) => {
            log!(
                DEBUG,
                "[create_pool]: failed to create pool {pool_id} with error: {error:?}"
            );
            Err(FixtureError::CreatePoolFailed(error))
        }
    }
}
