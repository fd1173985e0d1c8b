use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{Arena, NIL};
use crate::error::{ListError, Result};

struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// A list of nodes linked in both directions, with head and tail links.
///
/// Both ends are O(1). Index operations walk from whichever end is closer.
///
/// # Example
/// ```rust
/// use chunky_list::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<i64> = [1, 3].into_iter().collect();
/// list.insert(1, 2).unwrap();
///
/// assert_eq!(list.back(), Ok(&3));
/// assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NIL,
            tail: NIL,
        }
    }

    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.link_front(value);
        Ok(())
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.link_back(value);
        Ok(())
    }

    /// Links `value` in so that it ends up at `index`.
    ///
    /// # Errors
    /// [`ListError::BadIndex`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(ListError::BadIndex {
                index,
                len: self.len(),
            });
        }

        if index == 0 {
            return self.push_front(value);
        }

        if index == self.len() {
            return self.push_back(value);
        }

        let next = self.slot_at(index);
        let prev = self.nodes.get(next).prev;
        let slot = self.nodes.insert(Node { value, prev, next });
        self.nodes.get_mut(prev).next = slot;
        self.nodes.get_mut(next).prev = slot;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        Ok(self.unlink(self.head))
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        Ok(self.unlink(self.tail))
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Errors
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::BadIndex`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.unlink(self.slot_at(index)))
    }

    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        Ok(&self.nodes.get(self.head).value)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        Ok(&mut self.nodes.get_mut(self.head).value)
    }

    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        Ok(&self.nodes.get(self.tail).value)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        Ok(&mut self.nodes.get_mut(self.tail).value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.nodes.get(self.slot_at(index)).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(&mut self.nodes.get_mut(slot).value)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head == NIL
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            len: self.len(),
        }
    }

    fn link_front(&mut self, value: T) {
        let slot = self.nodes.insert(Node {
            value,
            prev: NIL,
            next: self.head,
        });

        match self.head {
            NIL => self.tail = slot,
            head => self.nodes.get_mut(head).prev = slot,
        }
        self.head = slot;
    }

    fn link_back(&mut self, value: T) {
        let slot = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: NIL,
        });

        match self.tail {
            NIL => self.head = slot,
            tail => self.nodes.get_mut(tail).next = slot,
        }
        self.tail = slot;
    }

    fn unlink(&mut self, slot: usize) -> T {
        let Node { value, prev, next } = self.nodes.remove(slot);

        match prev {
            NIL => self.head = next,
            prev => self.nodes.get_mut(prev).next = next,
        }

        match next {
            NIL => self.tail = prev,
            next => self.nodes.get_mut(next).prev = prev,
        }

        value
    }

    /// Returns the arena slot of the node at `index`, which must be in bounds.
    fn slot_at(&self, index: usize) -> usize {
        if index <= self.len() / 2 {
            let mut slot = self.head;
            for _ in 0..index {
                slot = self.nodes.get(slot).next;
            }
            return slot;
        }

        let mut slot = self.tail;
        for _ in index + 1..self.len() {
            slot = self.nodes.get(slot).prev;
        }
        slot
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        if index >= self.len() {
            return Err(ListError::BadIndex {
                index,
                len: self.len(),
            });
        }

        Ok(())
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.link_back(value));
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// A double-ended iterator over the elements of a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: usize,
    back: usize,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.nodes.get(self.front);
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.nodes.get(self.back);
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`DoublyLinkedList`].
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
