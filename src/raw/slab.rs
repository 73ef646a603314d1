use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// Stable handle to an occupied slot of a [`Slab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

/// `Node` is used to hold a key-value pair together with the bookkeeping the
/// eviction policies thread through it.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) val: V,
    pub(crate) freq: usize,
    pub(crate) prev: Option<SlotId>,
    pub(crate) next: Option<SlotId>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, val: V) -> Self {
        Self {
            key,
            val,
            freq: 1,
            prev: None,
            next: None,
        }
    }
}

/// Arena of values addressed by [`SlotId`]. Freed slots are recycled.
pub(crate) struct Slab<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Slab<T> {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Vec::with_capacity(cap),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, val: T) -> SlotId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(val);
                idx
            }
            None => {
                self.slots.push(Some(val));
                self.slots.len() - 1
            }
        };
        self.len += 1;
        SlotId(idx)
    }

    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        let val = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(val)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Drops every value but keeps the allocation, the cache refills up to the
    /// same capacity.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<T> Index<SlotId> for Slab<T> {
    type Output = T;

    fn index(&self, id: SlotId) -> &T {
        match self.slots.get(id.0) {
            Some(Some(val)) => val,
            _ => panic!("slab slot {} is vacant", id.0),
        }
    }
}

impl<T> IndexMut<SlotId> for Slab<T> {
    fn index_mut(&mut self, id: SlotId) -> &mut T {
        match self.slots.get_mut(id.0) {
            Some(Some(val)) => val,
            _ => panic!("slab slot {} is vacant", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_reuse() {
        let mut slab = Slab::with_capacity(2);
        let a = slab.insert("a");
        let b = slab.insert("b");
        assert_eq!(slab.len(), 2);
        assert_eq!(slab[a], "a");
        assert_eq!(slab.get(b), Some(&"b"));

        assert_eq!(slab.remove(a), Some("a"));
        assert_eq!(slab.remove(a), None);
        assert_eq!(slab.get(a), None);
        assert_eq!(slab.len(), 1);

        let c = slab.insert("c");
        assert_eq!(c, a);
        assert_eq!(slab[c], "c");
        assert_eq!(slab.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut slab = Slab::with_capacity(4);
        let a = slab.insert(1);
        slab.insert(2);
        slab.clear();
        assert_eq!(slab.len(), 0);
        assert_eq!(slab.get(a), None);
    }

    #[test]
    #[should_panic(expected = "vacant")]
    fn test_index_vacant() {
        let mut slab = Slab::with_capacity(1);
        let a = slab.insert(1);
        slab.remove(a);
        let _v = slab[a];
    }
}
