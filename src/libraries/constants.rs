use ethnum::U256;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref Q96: U256 = U256::from(1u8) << 96; // 2^96 ;

    pub static ref MIN_SQRT_RATIO: U256 = U256::from_str_radix("4295128739", 10).unwrap();
    pub static ref MAX_SQRT_RATIO: U256 =
        U256::from_str_radix("1461446703485210103287273052203988822378723970342", 10).unwrap();
}

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = 887272;
