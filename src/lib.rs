//! A fixed size, in-memory key-value cache with a choice of eviction policy.
//!
//! [`PolicyCache`] holds at most `cap` entries. When an insert would exceed
//! the capacity exactly one entry is evicted, chosen by the [`Policy`] picked
//! at construction:
//!
//! - [`Policy::Lru`] evicts the least recently used entry.
//! - [`Policy::Mru`] evicts the most recently used entry.
//! - [`Policy::Lfu`] evicts the least frequently used entry, breaking ties by
//!   the order in which entries reached that frequency.
//!
//! ```
//! use policycache::{Cache, Policy, PolicyCache, PutResult};
//!
//! let mut cache = PolicyCache::new(2, Policy::Lru).unwrap();
//! cache.put(1, "a");
//! cache.put(2, "b");
//! assert_eq!(cache.put(3, "c"), PutResult::Evicted { key: 1, value: "a" });
//!
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.get(&2), Some(&"b"));
//! assert_eq!((cache.hit_count(), cache.miss_count()), (1, 1));
//! ```
//!
//! The cache is not synchronized; share it between threads behind a lock.
#![no_std]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
extern crate alloc;
#[cfg(feature = "hashbrown")]
extern crate hashbrown;

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod cache_api;
mod error;
mod iterators;
mod policy;
mod raw;

pub use cache::{CacheBuilder, PolicyCache};
pub use cache_api::Cache;
pub use error::CacheError;
pub use iterators::{Iter, Keys, Values};
pub use policy::Policy;

cfg_if::cfg_if! {
    if #[cfg(feature = "hashbrown")] {
        /// The hash builder used by default, `hashbrown`'s.
        pub type DefaultHashBuilder = hashbrown::hash_map::DefaultHashBuilder;
    } else {
        /// The hash builder used by default, the standard library's.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    }
}

/// `DefaultEvictCallback` is a noop evict callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEvictCallback;

impl OnEvictCallback for DefaultEvictCallback {
    fn on_evict<K, V>(&self, _: &K, _: &V) {}
}

/// `OnEvictCallback` is called with every entry the cache evicts to stay
/// within its capacity.
pub trait OnEvictCallback {
    /// Called with the evicted key and value, before they are handed back.
    fn on_evict<K, V>(&self, key: &K, val: &V);
}

impl<T: OnEvictCallback> OnEvictCallback for &T {
    fn on_evict<K, V>(&self, key: &K, val: &V) {
        (**self).on_evict(key, val)
    }
}

/// `PutResult` is returned when trying to put an entry in cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutResult<K, V> {
    /// The key was not in the cache and the cache had room for it.
    Put,

    /// The key was already in the cache, the old value is returned.
    Update(V),

    /// The key was not in the cache and the cache was full, the evicted
    /// entry is returned.
    Evicted {
        /// key of the evicted entry
        key: K,
        /// value of the evicted entry
        value: V,
    },
}
