use candid::{CandidType, Deserialize, Nat};

use crate::token::TokenId;

/// Arguments of a single `mint` call on the position manager.
///
/// Built fresh for every mint and submitted once.
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MintParams {
    pub token0: TokenId,
    pub token1: TokenId,
    pub tick_spacing: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub recipient: TokenId,
    pub amount0_desired: Nat,
    pub amount1_desired: Nat,
    pub amount0_min: Nat, // slippage floor
    pub amount1_min: Nat,
    pub deadline: u64, // absolute expiry
}

impl MintParams {
    /// Candid encoding, for managers that forward the call to a canister.
    pub fn encode_call_args(&self) -> Result<Vec<u8>, candid::Error> {
        candid::encode_one(self)
    }
}
