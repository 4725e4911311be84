use seqkit_rs::{lotto_select, rand_select, range, rotate, SamplingConfig};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // A fixed seed makes the draws below repeatable
    let config = SamplingConfig::seeded(2024);
    let mut rng = config.rng();

    let deck: Vec<i64> = range(1, 52);
    let hand = rand_select(&deck, 5, &mut rng).unwrap_or_else(|err| {
        eprintln!("sampling failed: {err}");
        std::process::exit(1);
    });
    println!("Hand of five: {:?}", hand);

    let numbers = lotto_select(6, 49, &mut rng);
    println!("Lotto numbers: {:?}", numbers);

    let shuffled = rand_select(&deck, deck.len() as i64, &mut rng).unwrap_or_default();
    println!("Top of shuffled deck: {:?}", &shuffled[..shuffled.len().min(10)]);

    println!("Deck cut at 13: {:?}", &rotate(&deck, 13)[..5]);
}
