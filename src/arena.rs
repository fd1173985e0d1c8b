//! Slot storage for index-linked nodes.
//!
//! Linked lists keep their nodes here and refer to them by slot index, so
//! links are plain `usize`s instead of owning pointers. Vacated slots are
//! threaded into a free list and reused before the backing `Vec` grows.

use std::mem;

/// Link value meaning "no node".
pub(crate) const NIL: usize = !0;

enum Slot<N> {
    Occupied(N),
    Vacant { next_free: usize },
}

pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: usize,
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: NIL,
            len: 0,
        }
    }

    /// Stores `node` and returns the slot index it lives at.
    pub(crate) fn insert(&mut self, node: N) -> usize {
        self.len += 1;

        if self.free == NIL {
            self.slots.push(Slot::Occupied(node));
            return self.slots.len() - 1;
        }

        let index = self.free;
        match mem::replace(&mut self.slots[index], Slot::Occupied(node)) {
            Slot::Vacant { next_free } => self.free = next_free,
            Slot::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
        }
        index
    }

    pub(crate) fn remove(&mut self, index: usize) -> N {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };

        match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(node) => {
                self.free = index;
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => unreachable!("removing vacant slot {index}"),
        }
    }

    pub(crate) fn get(&self, index: usize) -> &N {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("reading vacant slot {index}"),
        }
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut N {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("writing vacant slot {index}"),
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = NIL;
        self.len = 0;
    }
}
