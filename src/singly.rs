use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{Arena, NIL};
use crate::error::{ListError, Result};

struct Node<T> {
    value: T,
    next: usize,
}

/// A list of nodes chained forward from a single head link.
///
/// Front operations are O(1). Everything that touches the back or an
/// index walks the chain from the head.
///
/// # Example
/// ```rust
/// use chunky_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2).unwrap();
/// list.push_front(1).unwrap();
/// list.insert(2, 3).unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(list.pop_back(), Ok(3));
/// ```
pub struct SinglyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NIL,
        }
    }

    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.head = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        Ok(())
    }

    /// Appends `value`, walking the whole chain to find the last node.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.insert(self.len(), value)
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

        let prev = self.slot_at(index - 1);
        let next = self.nodes.get(prev).next;
        let slot = self.nodes.insert(Node { value, next });
        self.nodes.get_mut(prev).next = slot;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let node = self.nodes.remove(self.head);
        self.head = node.next;
        Ok(node.value)
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.remove(self.len() - 1)
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Errors
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::BadIndex`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        if index == 0 {
            return self.pop_front();
        }

        let prev = self.slot_at(index - 1);
        let node = self.nodes.remove(self.nodes.get(prev).next);
        self.nodes.get_mut(prev).next = node.next;
        Ok(node.value)
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

        self.get(self.len() - 1)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.get_mut(self.len() - 1)
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
    }

    /// Provides a forward iterator over the elements.
    ///
    /// Each call starts a fresh traversal from the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            len: self.len(),
        }
    }

    /// Returns the arena slot of the node at `index`, which must be in bounds.
    fn slot_at(&self, index: usize) -> usize {
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.nodes.get(slot).next;
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

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = match self.len() {
            0 => NIL,
            len => self.slot_at(len - 1),
        };

        for value in iter {
            let slot = self.nodes.insert(Node { value, next: NIL });
            match tail {
                NIL => self.head = slot,
                tail => self.nodes.get_mut(tail).next = slot,
            }
            tail = slot;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An iterator over the elements of a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    next: usize,
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
        if self.next == NIL {
            return None;
        }

        let node = self.nodes.get(self.next);
        self.next = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`SinglyLinkedList`].
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
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

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
