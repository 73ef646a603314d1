use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fnv::FnvBuildHasher;
use policycache::{Cache, Policy, PolicyCache};
use rand::{thread_rng, Rng};
use rustc_hash::FxHasher;
use std::hash::{BuildHasher, BuildHasherDefault};

const CASES: usize = 1_000_000;

fn nums() -> Vec<u64> {
    let mut rng = thread_rng();
    black_box(
        (0..(CASES * 2))
            .map(|i| {
                if i % 2 == 0 {
                    rng.gen::<u64>() % 16384
                } else {
                    rng.gen::<u64>() % 32768
                }
            })
            .collect(),
    )
}

fn bench_with<S, F>(c: &mut Criterion, hasher_name: &str, hasher: F)
where
    S: BuildHasher,
    F: Fn() -> S,
{
    for policy in Policy::ALL {
        let name = format!("Test {} cache freq {} hasher", policy.name(), hasher_name);
        c.bench_function(&name, |b| {
            b.iter_batched(
                || {
                    let l = PolicyCache::with_hasher(8192, policy, hasher()).unwrap();
                    (l, nums())
                },
                |(mut l, nums)| {
                    (0..CASES).for_each(|v| {
                        let k = nums[v];
                        let _ = l.put(k, k);
                    });

                    (0..CASES).for_each(|v| {
                        let k = nums[v];
                        let _ = l.get(&k);
                    });
                },
                BatchSize::LargeInput,
            )
        });
    }
}

fn bench_default_hasher(c: &mut Criterion) {
    bench_with(c, "default", policycache::DefaultHashBuilder::default);
}

fn bench_fx_hasher(c: &mut Criterion) {
    bench_with(c, "FX", BuildHasherDefault::<FxHasher>::default);
}

fn bench_fnv_hasher(c: &mut Criterion) {
    bench_with(c, "FNV", FnvBuildHasher::default);
}

criterion_group!(
    policy_cache,
    bench_default_hasher,
    bench_fx_hasher,
    bench_fnv_hasher
);

criterion_main!(policy_cache);
