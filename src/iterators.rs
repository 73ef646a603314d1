use crate::policy::Lists;
use crate::raw::{Node, Slab, SlotId};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// An iterator over the entries of a [`PolicyCache`], in eviction order.
///
/// For LRU and MRU caches the entries come from the least recently to the
/// most recently used one. For LFU caches they come by ascending frequency,
/// and within one frequency in the order they reached it.
///
/// This `struct` is created by the [`iter`] method on [`PolicyCache`].
///
/// [`PolicyCache`]: struct.PolicyCache.html
/// [`iter`]: struct.PolicyCache.html#method.iter
pub struct Iter<'a, K, V> {
    slab: &'a Slab<Node<K, V>>,
    lists: Lists<'a>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(slab: &'a Slab<Node<K, V>>, lists: Lists<'a>) -> Self {
        Self {
            slab,
            lists,
            cursor: None,
            remaining: slab.len(),
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slab: self.slab,
            lists: self.lists.clone(),
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<K, V> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.cursor {
                let slab: &'a Slab<Node<K, V>> = self.slab;
                let node = &slab[id];
                self.cursor = node.next;
                self.remaining -= 1;
                return Some((&node.key, &node.val));
            }

            if self.remaining == 0 {
                return None;
            }
            self.cursor = self.lists.next()?.head();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize {
        self.remaining
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`PolicyCache`], in the same order as [`Iter`].
///
/// [`PolicyCache`]: struct.PolicyCache.html
/// [`Iter`]: struct.Iter.html
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Keys")
            .field("remaining", &self.inner.remaining)
            .finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn count(self) -> usize {
        self.inner.count()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`PolicyCache`], in the same order as [`Iter`].
///
/// [`PolicyCache`]: struct.PolicyCache.html
/// [`Iter`]: struct.Iter.html
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.inner.remaining)
            .finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn count(self) -> usize {
        self.inner.count()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
