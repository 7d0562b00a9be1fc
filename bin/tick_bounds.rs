use pool_fixtures::{
    pool::types::FeeAmount,
    tick::{get_max_tick, get_min_tick},
};

// we have 1 arg, a tick_spacing or a fee tier (LOW, MEDIUM, HIGH)

fn main() {
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 2 {
        panic!("expected a tick spacing or a fee tier");
    }

    let tick_spacing = match args[1].to_uppercase().as_str() {
        "LOW" => FeeAmount::Low.tick_spacing().get(),
        "MEDIUM" => FeeAmount::Medium.tick_spacing().get(),
        "HIGH" => FeeAmount::High.tick_spacing().get(),
        other => other
            .parse::<i32>()
            .expect("expected a valid tick_spacing"),
    };

    if tick_spacing <= 0 {
        panic!("tick_spacing must be positive");
    }

    println!(
        "tick_spacing {} has min_tick {} and max_tick {}",
        tick_spacing,
        get_min_tick(tick_spacing),
        get_max_tick(tick_spacing)
    );
}
