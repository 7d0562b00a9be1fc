use std::str::FromStr;

use pool_fixtures::token::{TokenId, canonicalize};

/// we have 2 args, token_a and token_b as hex addresses
/// returns token_0 and token_1
fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 3 {
        panic!("expected two token addresses");
    }

    let token_a = TokenId::from_str(&args[1]).expect("expected a valid address");
    let token_b = TokenId::from_str(&args[2]).expect("expected a valid address");

    let pair = canonicalize(token_a, token_b);

    println!("token_0: {} , token_1:{}", pair.token0(), pair.token1());
}
