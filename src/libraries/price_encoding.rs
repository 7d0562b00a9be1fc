use ethnum::U256;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::{
    constants::Q96,
    safe_cast::{big_uint_to_u256, u256_to_big_uint},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodePriceError {
    ZeroReserve,
    PriceOverflow,
}

/// Encodes the price `reserve1 / reserve0` as a Q64.96 square root price.
///
/// Computes `floor(sqrt(reserve1 * 2^192 / reserve0))`, which is the
/// `sqrtPriceX96` the pool engine expects at initialization. Returns exactly
/// 2^96 for equal reserves.
pub fn encode_price_sqrt(reserve1: u128, reserve0: u128) -> Result<U256, EncodePriceError> {
    if reserve0 == 0 {
        return Err(EncodePriceError::ZeroReserve);
    }

    let ratio_x192: BigUint = (BigUint::from(reserve1) << 192_u32) / BigUint::from(reserve0);

    big_uint_to_u256(ratio_x192.sqrt()).map_err(|_| EncodePriceError::PriceOverflow)
}

/// Decodes a Q64.96 square root price back into a floating point price.
/// Lossy, meant for assertions and diagnostics.
pub fn decode_price_sqrt(sqrt_price_x96: U256) -> f64 {
    if sqrt_price_x96 == U256::ZERO {
        return 0.0;
    }
    let q96 = u256_to_big_uint(*Q96);
    let value = u256_to_big_uint(sqrt_price_x96);

    // split into integer and fractional parts so large prices keep precision
    let integer = (&value / &q96).to_f64().unwrap_or(f64::INFINITY);
    let remainder = &value % &q96;
    let fraction = if remainder.is_zero() {
        0.0
    } else {
        remainder.to_f64().unwrap_or(0.0) / 2_f64.powi(96)
    };

    let sqrt_price = integer + fraction;
    sqrt_price * sqrt_price
}

#[cfg(test)]
mod tests {
    use super::*;

    // sqrt(1/1) * 2^96
    const SQRT_PRICE_1_1: u128 = 79228162514264337593543950336;
    // sqrt(1.21/1) * 2^96
    const SQRT_PRICE_121_100: u128 = 87150978765690771352898345369;

    #[test]
    fn encode_one_to_one_is_q96() {
        let encoded = encode_price_sqrt(1, 1).unwrap();
        assert_eq!(encoded, *Q96);
        assert_eq!(encoded, U256::from(SQRT_PRICE_1_1));
        assert_eq!(decode_price_sqrt(encoded), 1.0);
    }

    #[test]
    fn encode_depends_only_on_the_ratio() {
        assert_eq!(
            encode_price_sqrt(1_000_000, 1_000_000).unwrap(),
            encode_price_sqrt(1, 1).unwrap()
        );
        assert_eq!(
            encode_price_sqrt(4, 1).unwrap(),
            U256::from(2_u8) * *Q96
        );
        assert_eq!(encode_price_sqrt(1, 4).unwrap(), *Q96 >> 1);
    }

    #[test]
    fn encode_rounds_down() {
        assert_eq!(
            encode_price_sqrt(121, 100).unwrap(),
            U256::from(SQRT_PRICE_121_100)
        );
        let decoded = decode_price_sqrt(U256::from(SQRT_PRICE_121_100));
        assert!((decoded - 1.21).abs() < 1e-12);
    }

    #[test]
    fn encode_rejects_zero_denominator() {
        assert_eq!(encode_price_sqrt(1, 0), Err(EncodePriceError::ZeroReserve));
    }

    #[test]
    fn encode_extreme_ratios_fit() {
        let max = encode_price_sqrt(u128::MAX, 1).unwrap();
        assert!(max > *Q96);
        assert_eq!(encode_price_sqrt(0, 1).unwrap(), U256::ZERO);
        assert_eq!(decode_price_sqrt(U256::ZERO), 0.0);
    }
}
