//! Eviction policies.
//!
//! Every policy keeps its own ordering structure over the slots of the shared
//! arena and answers the same three questions: where does a new entry go,
//! what happens to an entry when it is touched, and which entry goes next.
mod frequency;
mod recency;

pub(crate) use frequency::Lfu;
pub(crate) use recency::{Lru, Mru};

use crate::error::CacheError;
use crate::raw::{Links, Node, Slab, SlotId};
use alloc::collections::btree_map;
use alloc::string::ToString;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// `Policy` selects how a [`PolicyCache`] picks its victim when it is full.
///
/// # Example
///
/// ```
/// use policycache::Policy;
///
/// assert_eq!(Policy::Lfu.to_string(), "Least Frequently Used");
/// assert_eq!(Policy::Mru.name(), "MRU");
/// assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
/// assert_eq!("Most Recently Used".parse::<Policy>().unwrap(), Policy::Mru);
/// assert!("fifo".parse::<Policy>().is_err());
/// ```
///
/// [`PolicyCache`]: struct.PolicyCache.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Least Recently Used, evicts the entry untouched for the longest time.
    Lru,
    /// Most Recently Used, evicts the entry touched or inserted last.
    Mru,
    /// Least Frequently Used, evicts the entry with the fewest accesses.
    /// Ties go to the entry that reached that frequency first.
    Lfu,
}

impl Policy {
    /// All the supported policies.
    pub const ALL: [Policy; 3] = [Policy::Lru, Policy::Mru, Policy::Lfu];

    /// Returns the short tag of the policy, e.g. `"LRU"`.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Lru => "LRU",
            Policy::Mru => "MRU",
            Policy::Lfu => "LFU",
        }
    }

    /// Returns the human readable description of the policy.
    pub fn description(&self) -> &'static str {
        match self {
            Policy::Lru => "Least Recently Used",
            Policy::Mru => "Most Recently Used",
            Policy::Lfu => "Least Frequently Used",
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Policy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Policy::ALL
            .iter()
            .copied()
            .find(|p| s.eq_ignore_ascii_case(p.name()) || s.eq_ignore_ascii_case(p.description()))
            .ok_or_else(|| CacheError::UnknownPolicy(s.to_string()))
    }
}

/// The capabilities an eviction policy exposes to the cache engine.
///
/// The engine owns the index and the arena; the policy owns the ordering
/// structure and must keep exactly the slots the engine handed to it.
pub(crate) trait EvictionPolicy {
    /// A new slot entered the cache.
    fn on_insert<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId);

    /// An existing slot was read by `get` or overwritten by `put`.
    fn on_touch<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId);

    /// The slot is leaving the cache, unlink it.
    fn on_remove<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId);

    /// The slot that should be evicted next, without unlinking it.
    fn victim(&self) -> Option<SlotId>;

    /// Forget every slot.
    fn clear(&mut self);
}

/// Closed set of policies, dispatched statically.
pub(crate) enum PolicyState {
    Lru(Lru),
    Mru(Mru),
    Lfu(Lfu),
}

impl PolicyState {
    pub(crate) fn new(policy: Policy) -> Self {
        match policy {
            Policy::Lru => PolicyState::Lru(Lru::default()),
            Policy::Mru => PolicyState::Mru(Mru::default()),
            Policy::Lfu => PolicyState::Lfu(Lfu::default()),
        }
    }

    #[inline(always)]
    pub(crate) fn on_insert<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        match self {
            PolicyState::Lru(p) => p.on_insert(slab, id),
            PolicyState::Mru(p) => p.on_insert(slab, id),
            PolicyState::Lfu(p) => p.on_insert(slab, id),
        }
    }

    #[inline(always)]
    pub(crate) fn on_touch<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        match self {
            PolicyState::Lru(p) => p.on_touch(slab, id),
            PolicyState::Mru(p) => p.on_touch(slab, id),
            PolicyState::Lfu(p) => p.on_touch(slab, id),
        }
    }

    #[inline(always)]
    pub(crate) fn on_remove<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        match self {
            PolicyState::Lru(p) => p.on_remove(slab, id),
            PolicyState::Mru(p) => p.on_remove(slab, id),
            PolicyState::Lfu(p) => p.on_remove(slab, id),
        }
    }

    #[inline(always)]
    pub(crate) fn victim(&self) -> Option<SlotId> {
        match self {
            PolicyState::Lru(p) => p.victim(),
            PolicyState::Mru(p) => p.victim(),
            PolicyState::Lfu(p) => p.victim(),
        }
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        match self {
            PolicyState::Lru(p) => p.clear(),
            PolicyState::Mru(p) => p.clear(),
            PolicyState::Lfu(p) => p.clear(),
        }
    }

    /// The lists to walk, in order, to visit every slot in eviction order
    /// of the structure (oldest first).
    pub(crate) fn lists(&self) -> Lists<'_> {
        match self {
            PolicyState::Lru(p) => Lists::One(Some(p.links())),
            PolicyState::Mru(p) => Lists::One(Some(p.links())),
            PolicyState::Lfu(p) => Lists::Buckets(p.buckets()),
        }
    }
}

/// Iterator over the lists making up an ordering structure.
#[derive(Clone)]
pub(crate) enum Lists<'a> {
    One(Option<&'a Links>),
    Buckets(btree_map::Values<'a, usize, Links>),
}

impl<'a> Iterator for Lists<'a> {
    type Item = &'a Links;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Lists::One(list) => list.take(),
            Lists::Buckets(buckets) => buckets.next(),
        }
    }
}
