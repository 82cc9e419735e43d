use chain_hash::DefaultHashBuilder;
use chain_hash::HashMap;
use chain_hash::LoadFactor;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Number of keys to insert.
    #[arg(short = 'c', long = "count", default_value_t = 1000)]
    count: u64,

    /// Grow when `len * max_load > buckets`.
    #[arg(long = "max_load", default_value_t = 1)]
    max_load: usize,

    /// Shrink when `len * min_load < buckets`.
    #[arg(long = "min_load", default_value_t = 8)]
    min_load: usize,

    /// Percentage of inserted keys to remove afterwards.
    #[arg(short = 'r', long = "remove_percent", default_value_t = 0)]
    remove_percent: u64,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashMap with max_load {} and min_load {}",
        args.max_load, args.min_load
    );

    let mut map: HashMap<u64, u64> = HashMap::with_load_factor_and_hasher(
        LoadFactor::new(args.max_load, args.min_load),
        DefaultHashBuilder::default(),
    );

    println!("Filling map with {} u64 keys...", args.count);

    let mut rebuilds = 0;
    for key in 0..args.count {
        let buckets = map.bucket_count();
        if !map.insert(key, key * 2) {
            panic!("Key already exists in map: {}", key);
        }
        if map.bucket_count() != buckets {
            rebuilds += 1;
        }
    }

    println!(
        "Inserted {} keys into {} buckets ({} rebuilds)",
        map.len(),
        map.bucket_count(),
        rebuilds
    );

    let to_remove = args.count * args.remove_percent.min(100) / 100;
    if to_remove > 0 {
        for key in 0..to_remove {
            map.remove(&key);
        }
        println!(
            "Removed {} keys, {} remain in {} buckets",
            to_remove,
            map.len(),
            map.bucket_count()
        );
    }

    map.print_chain_histogram();
    map.debug_stats().print();
}
