use super::EvictionPolicy;
use crate::raw::{Links, Node, Slab, SlotId};

/// Recency order shared by LRU and MRU: head is the least recently touched
/// slot, tail the most recently touched or inserted one.
///
/// Both policies insert and touch at the tail; they differ only in which end
/// is evicted.
#[derive(Default)]
pub(crate) struct RecencyList {
    list: Links,
}

impl RecencyList {
    #[inline]
    fn push<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.list.push_back(slab, id);
    }

    #[inline]
    fn touch<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        let freq = slab[id].freq.saturating_add(1);
        slab[id].freq = freq;
        self.list.move_to_back(slab, id);
    }

    #[inline]
    fn remove<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.list.unlink(slab, id);
    }
}

/// Least Recently Used.
#[derive(Default)]
pub(crate) struct Lru(RecencyList);

impl Lru {
    pub(crate) fn links(&self) -> &Links {
        &self.0.list
    }
}

impl EvictionPolicy for Lru {
    fn on_insert<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.0.push(slab, id);
    }

    fn on_touch<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.0.touch(slab, id);
    }

    fn on_remove<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.0.remove(slab, id);
    }

    fn victim(&self) -> Option<SlotId> {
        self.0.list.head()
    }

    fn clear(&mut self) {
        self.0.list.clear();
    }
}

/// Most Recently Used.
#[derive(Default)]
pub(crate) struct Mru(RecencyList);

impl Mru {
    pub(crate) fn links(&self) -> &Links {
        &self.0.list
    }
}

impl EvictionPolicy for Mru {
    fn on_insert<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.0.push(slab, id);
    }

    fn on_touch<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.0.touch(slab, id);
    }

    fn on_remove<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        self.0.remove(slab, id);
    }

    fn victim(&self) -> Option<SlotId> {
        self.0.list.tail()
    }

    fn clear(&mut self) {
        self.0.list.clear();
    }
}
