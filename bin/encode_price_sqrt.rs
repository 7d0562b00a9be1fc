use pool_fixtures::libraries::price_encoding::{decode_price_sqrt, encode_price_sqrt};

// we have 2 args, reserve1 and reserve0; the price is reserve1 / reserve0

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 3 {
        panic!("expected reserve1 and reserve0");
    }

    let reserve1 = args[1]
        .parse::<u128>()
        .expect("expected an unsigned integer reserve1");
    let reserve0 = args[2]
        .parse::<u128>()
        .expect("expected an unsigned integer reserve0");

    let sqrt_price_x96 =
        encode_price_sqrt(reserve1, reserve0).expect("failed to encode the sqrt price");

    println!(
        "sqrt_price_x96 for price {}/{} is {} (decodes to {})",
        reserve1,
        reserve0,
        sqrt_price_x96,
        decode_price_sqrt(sqrt_price_x96)
    );
}
