//! The basic APIs for Cache implementation.
use crate::PutResult;
use core::borrow::Borrow;
use core::hash::Hash;

/// Cache contains the basic APIs for a cache.
pub trait Cache<K: Hash + Eq, V> {
    /// Puts a key-value pair into cache, returns a [`PutResult`].
    ///
    /// [`PutResult`]: enum.PutResult.html
    fn put(&mut self, k: K, v: V) -> PutResult<K, V>;

    /// Returns a reference to the value of the key in the cache or `None` if it
    /// is not present in the cache. Counts a hit or a miss and updates the
    /// eviction order if the key exists.
    fn get<Q>(&mut self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns a mutable reference to the value of the key in the cache or `None` if it
    /// is not present in the cache. Counts a hit or a miss and updates the
    /// eviction order if the key exists.
    fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns a reference to the value corresponding to the key in the cache or `None` if it is
    /// not present in the cache. Unlike `get`, `peek` does not update the cache and does not
    /// count a hit or a miss.
    fn peek<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns a bool indicating whether the given key is in the cache. Does not update the
    /// cache.
    fn contains<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Removes and returns the value corresponding to the key from the cache or
    /// `None` if it does not exist.
    fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Clears the contents of the cache and resets its statistics.
    fn clear(&mut self);

    /// Returns the number of key-value pairs that are currently in the the cache.
    fn len(&self) -> usize;

    /// Returns the maximum number of key-value pairs the cache can hold.
    fn cap(&self) -> usize;

    /// Returns a bool indicating whether the cache is empty or not.
    fn is_empty(&self) -> bool;
}
