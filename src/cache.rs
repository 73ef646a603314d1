use crate::error::{check_size, CacheError};
use crate::iterators::{Iter, Keys, Values};
use crate::policy::{Policy, PolicyState};
use crate::raw::{Node, Slab, SlotId};
use crate::{Cache, DefaultEvictCallback, DefaultHashBuilder, OnEvictCallback, PutResult};
use core::borrow::Borrow;
use core::fmt::{Debug, Formatter};
use core::hash::{BuildHasher, Hash};
use core::mem;

import_hashbrown!(HashMap);
import_std!(HashMap);

// Upper bound on the slots reserved up front, larger caches grow on demand.
const PREALLOC_LIMIT: usize = 1024;

/// A fixed size cache with a pluggable eviction [`Policy`].
///
/// Lookups go through a hash index to a slot in an arena of entries; the
/// policy threads its own ordering structure through the same slots. Every
/// [`get`] that finds its key counts as a hit, every other [`get`] as a miss.
/// [`put`] never changes the counters.
///
/// Keys must be `Clone` because the index and the entry each hold one. To
/// store "no value" for a key, use an `Option` value type: `Some(&None)` from
/// [`get`] means the key is present with an empty value, `None` that the key
/// is absent.
///
/// # Example
///
/// ```rust
/// use policycache::{Cache, Policy, PolicyCache, PutResult};
///
/// let mut cache = PolicyCache::new(3, Policy::Lfu).unwrap();
/// cache.put(1, "a");
/// cache.put(2, "b");
/// cache.put(3, "c");
///
/// // 1 is read twice, 2 once, 3 never
/// cache.get(&1);
/// cache.get(&1);
/// cache.get(&2);
///
/// assert_eq!(cache.put(4, "d"), PutResult::Evicted { key: 3, value: "c" });
/// assert_eq!(cache.frequency(&1), Some(3));
/// assert_eq!(cache.frequency(&4), Some(1));
/// ```
///
/// [`Policy`]: enum.Policy.html
/// [`get`]: trait.Cache.html#tymethod.get
/// [`put`]: trait.Cache.html#tymethod.put
pub struct PolicyCache<K, V, E = DefaultEvictCallback, S = DefaultHashBuilder> {
    map: HashMap<K, SlotId, S>,
    slab: Slab<Node<K, V>>,
    state: PolicyState,
    policy: Policy,
    cap: usize,
    hits: u64,
    misses: u64,
    on_evict: Option<E>,
}

impl<K: Hash + Eq + Clone, V> PolicyCache<K, V> {
    /// Creates a new cache that holds at most `cap` items and evicts with
    /// the given policy.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{CacheError, Policy, PolicyCache};
    ///
    /// let cache: PolicyCache<u64, &str> = PolicyCache::new(10, Policy::Mru).unwrap();
    /// assert_eq!(cache.policy(), Policy::Mru);
    ///
    /// let err = PolicyCache::<u64, &str>::new(0, Policy::Lru).unwrap_err();
    /// assert_eq!(err, CacheError::InvalidSize(0));
    /// ```
    pub fn new(cap: usize, policy: Policy) -> Result<Self, CacheError> {
        Self::with_hasher(cap, policy, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache that holds at most `cap` items.
    pub fn lru(cap: usize) -> Result<Self, CacheError> {
        Self::new(cap, Policy::Lru)
    }

    /// Creates a new MRU cache that holds at most `cap` items.
    pub fn mru(cap: usize) -> Result<Self, CacheError> {
        Self::new(cap, Policy::Mru)
    }

    /// Creates a new LFU cache that holds at most `cap` items.
    pub fn lfu(cap: usize) -> Result<Self, CacheError> {
        Self::new(cap, Policy::Lfu)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> PolicyCache<K, V, DefaultEvictCallback, S> {
    /// Creates a new cache that holds at most `cap` items and
    /// uses the provided hash builder to hash keys.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{DefaultHashBuilder, Policy, PolicyCache};
    ///
    /// let s = DefaultHashBuilder::default();
    /// let cache: PolicyCache<isize, &str> = PolicyCache::with_hasher(10, Policy::Lru, s).unwrap();
    /// ```
    pub fn with_hasher(cap: usize, policy: Policy, hash_builder: S) -> Result<Self, CacheError> {
        check_size(cap).map(|_| Self::construct(cap, policy, hash_builder, None))
    }
}

impl<K: Hash + Eq + Clone, V, E: OnEvictCallback> PolicyCache<K, V, E> {
    /// Creates a new cache that holds at most `cap` items and
    /// uses the provided evict callback.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, OnEvictCallback, Policy, PolicyCache};
    /// use std::sync::atomic::{AtomicU64, Ordering};
    ///
    /// #[derive(Default)]
    /// struct EvictedCounter {
    ///     ctr: AtomicU64,
    /// }
    ///
    /// impl OnEvictCallback for EvictedCounter {
    ///     fn on_evict<K, V>(&self, _: &K, _: &V) {
    ///         self.ctr.fetch_add(1, Ordering::SeqCst);
    ///     }
    /// }
    ///
    /// let counter = EvictedCounter::default();
    /// let mut cache = PolicyCache::with_on_evict_cb(1, Policy::Lru, &counter).unwrap();
    /// cache.put(1, 1);
    /// cache.put(2, 2);
    /// cache.put(3, 3);
    /// assert_eq!(counter.ctr.load(Ordering::SeqCst), 2);
    /// ```
    pub fn with_on_evict_cb(cap: usize, policy: Policy, cb: E) -> Result<Self, CacheError> {
        Self::with_on_evict_cb_and_hasher(cap, policy, cb, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V, E: OnEvictCallback, S: BuildHasher> PolicyCache<K, V, E, S> {
    /// Creates a new cache that holds at most `cap` items and
    /// uses the provided evict callback and the provided hash builder to hash keys.
    pub fn with_on_evict_cb_and_hasher(
        cap: usize,
        policy: Policy,
        cb: E,
        hasher: S,
    ) -> Result<Self, CacheError> {
        check_size(cap).map(|_| Self::construct(cap, policy, hasher, Some(cb)))
    }

    fn construct(cap: usize, policy: Policy, hasher: S, cb: Option<E>) -> Self {
        debug!(cap, policy = policy.name(), "creating cache");
        let reserved = cap.min(PREALLOC_LIMIT);
        Self {
            map: HashMap::with_capacity_and_hasher(reserved, hasher),
            slab: Slab::with_capacity(reserved),
            state: PolicyState::new(policy),
            policy,
            cap,
            hits: 0,
            misses: 0,
            on_evict: cb,
        }
    }

    /// Returns the eviction policy of the cache.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the number of `get` calls that found their key since the
    /// cache was created or last cleared.
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    /// Returns the number of `get` calls that did not find their key since
    /// the cache was created or last cleared.
    #[inline]
    pub fn miss_count(&self) -> u64 {
        self.misses
    }

    /// Returns the share of `get` calls that were hits, `0.0` if there were none.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    ///
    /// let mut cache = PolicyCache::lru(2).unwrap();
    /// assert_eq!(cache.hit_ratio(), 0.0);
    ///
    /// cache.put("a", 1);
    /// cache.get(&"a");
    /// cache.get(&"b");
    /// assert_eq!(cache.hit_ratio(), 0.5);
    /// ```
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Returns how many times the entry has been put or read successfully
    /// since it was inserted, without touching it. The count is kept for
    /// every policy but only LFU evicts by it.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    ///
    /// let mut cache = PolicyCache::lfu(2).unwrap();
    /// cache.put(1, "a");
    /// cache.put(1, "b");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.frequency(&1), Some(3));
    /// assert_eq!(cache.frequency(&2), None);
    /// ```
    pub fn frequency<Q>(&self, k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(k).map(|id| self.slab[*id].freq)
    }

    /// Returns the entry the next overflowing `put` would evict, without
    /// touching it, or `None` if the cache is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    ///
    /// let mut lru = PolicyCache::lru(3).unwrap();
    /// let mut mru = PolicyCache::mru(3).unwrap();
    /// for i in 1..=3 {
    ///     lru.put(i, i * 10);
    ///     mru.put(i, i * 10);
    /// }
    ///
    /// assert_eq!(lru.peek_victim(), Some((&1, &10)));
    /// assert_eq!(mru.peek_victim(), Some((&3, &30)));
    /// ```
    pub fn peek_victim(&self) -> Option<(&K, &V)> {
        self.state.victim().map(|id| {
            let node = &self.slab[id];
            (&node.key, &node.val)
        })
    }

    /// An iterator visiting all entries in eviction order: the next victim
    /// comes first for LRU and LFU caches and last for MRU caches. The
    /// iterator element type is `(&K, &V)`.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    ///
    /// let mut cache = PolicyCache::lru(3).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// cache.put(3, "three");
    /// cache.get(&1);
    ///
    /// let entries: Vec<_> = cache.iter().collect();
    /// assert_eq!(entries, [(&2, &"two"), (&3, &"three"), (&1, &"one")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slab, self.state.lists())
    }

    /// An iterator visiting all keys in eviction order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// An iterator visiting all values in eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    ///
    /// let mut cache = PolicyCache::lfu(3).unwrap();
    /// cache.put(1, "one");
    /// cache.put(2, "two");
    /// cache.put(3, "three");
    /// cache.get(&1);
    /// cache.get(&1);
    /// cache.get(&2);
    ///
    /// let values: Vec<_> = cache.values().copied().collect();
    /// assert_eq!(values, ["three", "two", "one"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    fn evict(&mut self) -> (K, V) {
        let id = match self.state.victim() {
            Some(id) => id,
            None => panic!(
                "{} cache holds {} entries but its eviction order is empty",
                self.policy.name(),
                self.map.len()
            ),
        };
        self.state.on_remove(&mut self.slab, id);

        let node = match self.slab.remove(id) {
            Some(node) => node,
            None => panic!("{} victim slot is vacant", self.policy.name()),
        };
        self.map.remove(&node.key);
        self.cb(&node.key, &node.val);
        trace!(
            policy = self.policy.name(),
            len = self.map.len(),
            "evicted entry"
        );
        (node.key, node.val)
    }

    #[inline]
    fn cb(&self, k: &K, v: &V) {
        if let Some(ref cb) = self.on_evict {
            cb.on_evict(k, v);
        }
    }
}

impl<K: Hash + Eq + Clone, V, E: OnEvictCallback, S: BuildHasher> Cache<K, V>
    for PolicyCache<K, V, E, S>
{
    /// Puts a key-value pair into cache, returns a [`PutResult`].
    ///
    /// An existing key gets its value replaced and is touched like a hit,
    /// without counting as one. A new key evicts one entry first when the
    /// cache is full.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache, PutResult};
    /// let mut cache = PolicyCache::lru(2).unwrap();
    ///
    /// assert_eq!(PutResult::Put, cache.put(1, "a"));
    /// assert_eq!(PutResult::Put, cache.put(2, "b"));
    /// assert_eq!(PutResult::Update("b"), cache.put(2, "beta"));
    /// assert_eq!(PutResult::Evicted { key: 1, value: "a" }, cache.put(3, "c"));
    ///
    /// assert_eq!(cache.get(&1), None);
    /// assert_eq!(cache.get(&2), Some(&"beta"));
    /// ```
    ///
    /// [`PutResult`]: enum.PutResult.html
    fn put(&mut self, k: K, mut v: V) -> PutResult<K, V> {
        if let Some(&id) = self.map.get(&k) {
            mem::swap(&mut v, &mut self.slab[id].val);
            self.state.on_touch(&mut self.slab, id);
            return PutResult::Update(v);
        }

        let evicted = if self.map.len() >= self.cap {
            Some(self.evict())
        } else {
            None
        };

        let id = self.slab.insert(Node::new(k.clone(), v));
        self.map.insert(k, id);
        self.state.on_insert(&mut self.slab, id);

        match evicted {
            Some((key, value)) => PutResult::Evicted { key, value },
            None => PutResult::Put,
        }
    }

    /// Returns a reference to the value of the key in the cache or `None` if it is not
    /// present in the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    /// let mut cache = PolicyCache::lru(2).unwrap();
    ///
    /// cache.put(1, "a");
    /// cache.put(2, "b");
    /// cache.put(2, "c");
    /// cache.put(3, "d");
    ///
    /// assert_eq!(cache.get(&1), None);
    /// assert_eq!(cache.get(&2), Some(&"c"));
    /// assert_eq!(cache.get(&3), Some(&"d"));
    /// assert_eq!(cache.hit_count(), 2);
    /// assert_eq!(cache.miss_count(), 1);
    /// ```
    fn get<Q>(&mut self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get(k).copied() {
            Some(id) => {
                self.hits += 1;
                self.state.on_touch(&mut self.slab, id);
                Some(&self.slab[id].val)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Returns a mutable reference to the value of the key in the cache or `None` if it
    /// is not present in the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    /// let mut cache = PolicyCache::mru(2).unwrap();
    ///
    /// cache.put("apple", 8);
    /// if let Some(v) = cache.get_mut(&"apple") {
    ///     *v += 1;
    /// }
    ///
    /// assert_eq!(cache.get_mut(&"pear"), None);
    /// assert_eq!(cache.peek(&"apple"), Some(&9));
    /// ```
    fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get(k).copied() {
            Some(id) => {
                self.hits += 1;
                self.state.on_touch(&mut self.slab, id);
                Some(&mut self.slab[id].val)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key in the cache or `None` if it is
    /// not present in the cache.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    /// let mut cache = PolicyCache::lru(2).unwrap();
    ///
    /// cache.put(1, "a");
    /// cache.put(2, "b");
    ///
    /// assert_eq!(cache.peek(&1), Some(&"a"));
    /// assert_eq!(cache.peek(&3), None);
    /// assert_eq!(cache.hit_count() + cache.miss_count(), 0);
    /// ```
    fn peek<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(k).map(|id| &self.slab[*id].val)
    }

    #[inline]
    fn contains<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(k)
    }

    /// Removes and returns the value corresponding to the key from the cache or
    /// `None` if it does not exist. The evict callback is not called.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    /// let mut cache = PolicyCache::lfu(2).unwrap();
    ///
    /// cache.put(2, "a");
    ///
    /// assert_eq!(cache.remove(&1), None);
    /// assert_eq!(cache.remove(&2), Some("a"));
    /// assert_eq!(cache.remove(&2), None);
    /// assert_eq!(cache.len(), 0);
    /// ```
    fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.map.remove(k)?;
        self.state.on_remove(&mut self.slab, id);
        self.slab.remove(id).map(|node| node.val)
    }

    /// Clears the contents of the cache and resets the hit and miss counters.
    /// Capacity and policy are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use policycache::{Cache, PolicyCache};
    /// let mut cache = PolicyCache::mru(2).unwrap();
    ///
    /// cache.put(1, "a");
    /// cache.get(&1);
    /// cache.clear();
    ///
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.hit_count(), 0);
    /// assert_eq!(cache.cap(), 2);
    /// ```
    fn clear(&mut self) {
        self.map.clear();
        self.slab.clear();
        self.state.clear();
        self.hits = 0;
        self.misses = 0;
        debug!(policy = self.policy.name(), "cleared cache");
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn cap(&self) -> usize {
        self.cap
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V, E, S> Debug for PolicyCache<K, V, E, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PolicyCache")
            .field("policy", &self.policy)
            .field("len", &self.map.len())
            .field("cap", &self.cap)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl<'a, K: Hash + Eq + Clone, V, E: OnEvictCallback, S: BuildHasher> IntoIterator
    for &'a PolicyCache<K, V, E, S>
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Hash + Eq + Clone, V, E: OnEvictCallback, S: BuildHasher> Extend<(K, V)>
    for PolicyCache<K, V, E, S>
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| {
            self.put(k, v);
        });
    }
}

/// `CacheBuilder` is used to help build a [`PolicyCache`] with custom configurations.
///
/// # Example
///
/// ```
/// use policycache::{Cache, CacheBuilder, CacheError, Policy};
///
/// let mut cache = CacheBuilder::new(2)
///     .set_policy(Policy::Mru)
///     .finalize::<u64, u64>()
///     .unwrap();
/// cache.put(1, 1);
/// assert_eq!(cache.policy(), Policy::Mru);
///
/// let err = CacheBuilder::new(2).finalize::<u64, u64>().unwrap_err();
/// assert_eq!(err, CacheError::MissingPolicy);
/// ```
///
/// [`PolicyCache`]: struct.PolicyCache.html
pub struct CacheBuilder<E = DefaultEvictCallback, S = DefaultHashBuilder> {
    cap: usize,
    policy: Option<Policy>,
    on_evict: Option<E>,
    hasher: S,
}

impl CacheBuilder {
    /// The constructor of CacheBuilder
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            policy: None,
            on_evict: None,
            hasher: DefaultHashBuilder::default(),
        }
    }
}

impl<E: OnEvictCallback, S: BuildHasher> CacheBuilder<E, S> {
    /// Set the capacity of the cache
    pub fn set_cap(self, cap: usize) -> Self {
        Self { cap, ..self }
    }

    /// Set the eviction policy
    pub fn set_policy(self, policy: Policy) -> Self {
        Self {
            policy: Some(policy),
            ..self
        }
    }

    /// Set the callback called on every eviction
    pub fn set_on_evict<NE: OnEvictCallback>(self, cb: NE) -> CacheBuilder<NE, S> {
        CacheBuilder {
            cap: self.cap,
            policy: self.policy,
            on_evict: Some(cb),
            hasher: self.hasher,
        }
    }

    /// Set the hash builder of the index
    pub fn set_hasher<NS: BuildHasher>(self, hasher: NS) -> CacheBuilder<E, NS> {
        CacheBuilder {
            cap: self.cap,
            policy: self.policy,
            on_evict: self.on_evict,
            hasher,
        }
    }

    /// Finalize the builder to [`PolicyCache`]
    ///
    /// [`PolicyCache`]: struct.PolicyCache.html
    pub fn finalize<K: Hash + Eq + Clone, V>(self) -> Result<PolicyCache<K, V, E, S>, CacheError> {
        check_size(self.cap)?;
        let policy = self.policy.ok_or(CacheError::MissingPolicy)?;
        Ok(PolicyCache::construct(
            self.cap,
            policy,
            self.hasher,
            self.on_evict,
        ))
    }
}
