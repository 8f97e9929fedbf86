use avl_collections::avl_tree::{join_keys, AvlMap};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::error::Error;

const DEFAULT_NUM_OF_KEYS: usize = 16;
const DEFAULT_SEED: u64 = 1;

fn initialize_logging() -> Result<(), log::SetLoggerError> {
    let level = env::var("AVL_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
}

fn print_map(map: &AvlMap) {
    print!("{}", map);
    println!("size:        {}", map.len());
    println!("height:      {}", map.height());
    println!("pre-order:   {}", join_keys(&map.pre_order()));
    println!("in-order:    {}", join_keys(&map.in_order()));
    println!("post-order:  {}", join_keys(&map.post_order()));
    println!("level-order: {}", join_keys(&map.level_order()));
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    let mut args = env::args().skip(1);
    let num_of_keys = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_NUM_OF_KEYS,
    };
    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_SEED,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = AvlMap::new();
    let mut keys = Vec::new();
    for _ in 0..num_of_keys {
        let key = rng.gen_range(-100..100);
        map.insert(key, rng.gen());
        keys.push(key);
    }
    info!("inserted {} keys, {} distinct", keys.len(), map.len());
    print_map(&map);

    println!("------------------");

    for key in keys.iter().step_by(2) {
        map.remove(key);
    }
    info!("{} keys left after removals", map.len());
    print_map(&map);

    Ok(())
}
