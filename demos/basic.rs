use policycache::{Cache, Policy, PolicyCache, PutResult};

fn main() {
    let mut cache = PolicyCache::new(2, Policy::Lru).unwrap();
    // fill the cache
    assert_eq!(cache.put(1, 1), PutResult::Put);
    assert_eq!(cache.put(2, 2), PutResult::Put);

    // put 3, should evict the entry (1, 1)
    assert_eq!(cache.put(3, 3), PutResult::Evicted { key: 1, value: 1 });

    // get 2, should update the recent-ness
    assert_eq!(cache.get(&2), Some(&2));

    // put 4, should evict the entry (3, 3)
    assert_eq!(cache.put(4, 4), PutResult::Evicted { key: 3, value: 3 });

    let mut cache = PolicyCache::new(2, Policy::Mru).unwrap();
    cache.put(1, 1);
    cache.put(2, 2);

    // get 1, it becomes the most recently used one
    assert_eq!(cache.get(&1), Some(&1));
    assert_eq!(cache.put(3, 3), PutResult::Evicted { key: 1, value: 1 });

    let mut cache = PolicyCache::new(2, Policy::Lfu).unwrap();
    cache.put(1, 1);
    cache.put(2, 2);
    cache.get(&1);

    // 2 was never read
    assert_eq!(cache.put(3, 3), PutResult::Evicted { key: 2, value: 2 });
    println!("{:?}", cache.iter().collect::<Vec<_>>());
}
