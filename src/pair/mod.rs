use ic_canister_log::log;

use crate::{
    client::PairFactory,
    errors::CreatePairError,
    logs::{DEBUG, INFO},
    token::TokenId,
};
use events::{DecodeEventError, PairCreated, pair_created_args};

pub mod events;

#[cfg(test)]
mod tests;

/// Creates an exchange pair and returns its address.
///
/// The factory sorts the tokens itself. The address is read from the first
/// event of the receipt, which must be a well formed `PairCreated`. Any
/// drift in that event's layout is an error, never a silently wrong address.
pub async fn create_pair<F: PairFactory>(
    factory: &mut F,
    token_a: TokenId,
    token_b: TokenId,
    stable: bool,
) -> Result<TokenId, CreatePairError<F::Error>> {
    let receipt = factory
        .create_pool(token_a, token_b, stable)
        .await
        .map_err(|error| {
            log!(
                DEBUG,
                "[create_pair]: failed to create pair {token_a}/{token_b} (stable: {stable}) with error: {error:?}"
            );
            CreatePairError::FactoryCallFailed(error)
        })?;

    let decoded = receipt
        .events
        .first()
        .ok_or(DecodeEventError::MissingEvent)
        .and_then(|event| PairCreated::try_from(event));

    match decoded {
        Ok(event) => {
            log!(
                INFO,
                "[create_pair]: created pair {} for {}/{} (stable: {}), total pairs: {}",
                event.pair,
                event.token0,
                event.token1,
                event.stable,
                event.all_pairs_length
            );
            Ok(event.pair)
        }
        Err(reason) => {
            log!(
                DEBUG,
                "[create_pair]: pair address not found in transaction receipt: {reason:?}"
            );
            Err(match reason {
                DecodeEventError::MissingEvent => CreatePairError::PairAddressNotFound,
                DecodeEventError::MissingArgument { index, .. }
                | DecodeEventError::UnexpectedArgument { index, .. }
                    if index == pair_created_args::PAIR =>
                {
                    CreatePairError::PairAddressNotFound
                }
                DecodeEventError::UnexpectedEvent { name } => {
                    CreatePairError::UnexpectedEvent { name }
                }
                other => CreatePairError::MalformedEvent(other),
            })
        }
    }
}
