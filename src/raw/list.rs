use super::slab::{Node, Slab, SlotId};

/// Doubly linked list threaded through the `prev`/`next` fields of the nodes
/// in a [`Slab`]. The list itself only owns the end points.
///
/// Head is the oldest entry, tail the newest.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Links {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl Links {
    #[inline]
    pub(crate) fn head(&self) -> Option<SlotId> {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> Option<SlotId> {
        self.tail
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn push_back<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        {
            let node = &mut slab[id];
            node.prev = self.tail;
            node.next = None;
        }

        match self.tail {
            Some(tail) => slab[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    pub(crate) fn unlink<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        let (prev, next) = {
            let node = &mut slab[id];
            (node.prev.take(), node.next.take())
        };

        match prev {
            Some(prev) => slab[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => slab[next].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    pub(crate) fn move_to_back<K, V>(&mut self, slab: &mut Slab<Node<K, V>>, id: SlotId) {
        if self.tail == Some(id) {
            return;
        }
        self.unlink(slab, id);
        self.push_back(slab, id);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
