use super::EvictionPolicy;
use crate::raw::{Links, Node, Slab, SlotId};
use alloc::collections::{btree_map, BTreeMap};

/// Least Frequently Used.
///
/// Slots are grouped in buckets keyed by their access count. Inside a bucket
/// slots are kept in the order they arrived at that count, so the victim is
/// the head of the lowest bucket and equal counts evict first in, first out.
///
/// ```text
/// freq 1: [d]
/// freq 2: [b] -> [a]      b reached 2 before a
/// freq 5: [c]
/// ```
#[derive(Default)]
pub(crate) struct Lfu {
    buckets: BTreeMap<usize, Links>,
}

impl Lfu {
    pub(crate) fn buckets(&self) -> btree_map::Values<'_, usize, Links> {
        self.buckets.values()
    }

    fn push<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        let freq = slab[id].freq;
        self.buckets
            .entry(freq)
            .or_default()
            .push_back(slab, id);
    }

    fn unlink<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        let freq = slab[id].freq;
        match self.buckets.entry(freq) {
            btree_map::Entry::Occupied(mut bucket) => {
                bucket.get_mut().unlink(slab, id);
                if bucket.get().is_empty() {
                    bucket.remove();
                }
            }
            btree_map::Entry::Vacant(_) => {
                panic!("frequency bucket {} is missing a resident slot", freq)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn validate<K, V>(&self, slab: &Slab<Node<K, V>>) {
        for (freq, bucket) in self.buckets.iter() {
            assert!(!bucket.is_empty(), "empty bucket {}", freq);
            let mut seen = 0;
            let mut cursor = bucket.head();
            while let Some(id) = cursor {
                assert_eq!(slab[id].freq, *freq);
                seen += 1;
                cursor = slab[id].next;
            }
            assert_eq!(seen, bucket.len());
        }
    }
}

impl EvictionPolicy for Lfu {
    fn on_insert<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        slab[id].freq = 1;
        self.push(slab, id);
    }

    fn on_touch<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.unlink(slab, id);
        let freq = slab[id].freq.saturating_add(1);
        slab[id].freq = freq;
        self.push(slab, id);
    }

    fn on_remove<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.unlink(slab, id);
    }

    fn victim(&self) -> Option<SlotId> {
        self.buckets
            .first_key_value()
            .and_then(|(_, bucket)| bucket.head())
    }

    fn clear(&mut self) {
        self.buckets.clear();
    }
}
