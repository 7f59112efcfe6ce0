use changemaker::change::{compare, time_strategy, Strategy, TimingConfig, DEMO_CASES};

fn main() {
    env_logger::init();

    let mut config = TimingConfig::default();
    if let Ok(value) = std::env::var("CHANGE_ITERATIONS") {
        match value.parse() {
            Ok(iterations) => config.iterations = iterations,
            Err(err) => log::warn!("ignoring CHANGE_ITERATIONS={}: {}", value, err),
        }
    }

    for &(amount, denominations) in DEMO_CASES.iter() {
        println!(
            "\n---=== Amount {} with denominations {:?} ===---",
            amount, denominations
        );

        match compare(amount, denominations) {
            Ok(result) => {
                println!(
                    "{} = {}, total coins {}",
                    Strategy::Greedy,
                    result.greedy,
                    result.greedy.total_coins()
                );
                println!(
                    "{} = {}, total coins {}",
                    Strategy::MinCoin,
                    result.minimal,
                    result.minimal.total_coins()
                );
                if !result.greedy_is_optimal() {
                    println!("greedy used {} extra coin(s)", result.coins_saved());
                }
            }
            Err(err) => println!("error: {}", err),
        }

        println!(
            "\n--- timing for amount {} over {} calls ---",
            config.amount, config.iterations
        );
        for strategy in Strategy::ALL {
            match time_strategy(strategy, &config) {
                Ok(elapsed) => println!("{} - {:?}", strategy, elapsed),
                Err(err) => println!("{} - error: {}", strategy, err),
            }
        }
    }
}
