use policycache::{Cache, Policy, PolicyCache};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CAP: usize = 100;
const OPS: u64 = 100_000;
const KEYS: u32 = 200;

fn simulate(policy: Policy, rng: &mut StdRng) -> (u64, u64) {
    let mut l = PolicyCache::new(CAP, policy).unwrap();

    (0..OPS).for_each(|_| {
        let k = rng.gen_range(0..KEYS);
        let missed = l.get(&k).is_none();
        // 80% of the operations only fill misses, the rest always write
        if missed || rng.gen_bool(0.2) {
            let _ = l.put(k, rng.gen_range(0..1000u32));
        }
    });

    (l.hit_count(), l.miss_count())
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    for policy in Policy::ALL {
        let (hit, miss) = simulate(policy, &mut rng);
        println!("Testing {} Policy ({}):", policy.name(), policy);
        println!("Total operations: {}", OPS);
        println!("Cache Hits: {}", hit);
        println!("Cache Misses: {}", miss);
        println!("Hit Rate: {:.2}%", (hit as f64) * 100.0 / (OPS as f64));
        println!("Miss Rate: {:.2}%\n", (miss as f64) * 100.0 / (OPS as f64));
    }
}
