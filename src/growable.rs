use std::{fmt, slice};

use tracing::trace;

use crate::error::{ListError, Result};
use crate::fixed::FixedCapacityList;

/// An array-backed list that doubles its buffer whenever an insertion finds
/// it full.
///
/// # Example
/// ```rust
/// use chunky_list::GrowableList;
///
/// let mut list = GrowableList::with_capacity(1);
/// list.push_back(1).unwrap();
/// list.push_back(2).unwrap();
/// list.push_front(0).unwrap();
///
/// assert_eq!(list.as_slice(), &[0, 1, 2]);
/// assert_eq!(list.capacity(), 4);
/// ```
pub struct GrowableList<T> {
    items: FixedCapacityList<T>,
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GrowableList<T> {
    /// Number of slots allocated by [`GrowableList::new`].
    pub const START_CAPACITY: usize = 32;

    pub fn new() -> Self {
        Self::with_capacity(Self::START_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: FixedCapacityList::new(capacity),
        }
    }

    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.insert(0, value)
    }

    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.insert(self.len(), value)
    }

    /// Inserts `value` at `index`, growing the buffer first if it is full.
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

        self.reserve_one();
        self.items.insert(index, value)
    }

    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        self.items.pop_front()
    }

    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        self.items.pop_back()
    }

    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.items.remove(index)
    }

    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.items.front()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.items.front_mut()
    }

    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.items.back()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.items.back_mut()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every element, keeping the current buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    fn reserve_one(&mut self) {
        if !self.items.is_full() {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(2).max(1);
        trace!(old_capacity, new_capacity, "growing list buffer");
        self.items.grow_to(new_capacity);
    }
}

impl<T> Extend<T> for GrowableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter().peekable();
        while iter.peek().is_some() {
            self.reserve_one();
            self.items.fill_from(&mut iter);
        }
    }
}

impl<T> FromIterator<T> for GrowableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T: Clone> Clone for GrowableList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableList<T> {}

impl<T: fmt::Debug> fmt::Debug for GrowableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.items, f)
    }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GrowableList<T> {
    type Item = T;
    type IntoIter = crate::fixed::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::ListError;
    use crate::growable::GrowableList;

    #[test]
    fn test_new_starts_with_the_default_capacity() {
        let sut: GrowableList<i64> = GrowableList::new();
        assert!(sut.is_empty());
        assert_eq!(sut.capacity(), GrowableList::<i64>::START_CAPACITY);
        assert_eq!(sut.front(), Err(ListError::EmptyList));
    }

    #[test]
    fn test_buffer_doubles_when_full() {
        let mut sut = GrowableList::with_capacity(2);
        sut.push_back(1).unwrap();
        sut.push_back(2).unwrap();
        assert_eq!(sut.capacity(), 2);

        sut.push_back(3).unwrap();
        assert_eq!(sut.capacity(), 4);

        sut.push_front(0).unwrap();
        sut.insert(2, 10).unwrap();
        assert_eq!(sut.capacity(), 8);
        assert_eq!(sut.as_slice(), &[0, 1, 10, 2, 3]);
    }

    #[test]
    fn test_zero_capacity_grows_to_one() {
        let mut sut = GrowableList::with_capacity(0);
        sut.push_front(1).unwrap();
        assert_eq!(sut.capacity(), 1);
        assert_eq!(sut.as_slice(), &[1]);
    }

    #[test]
    fn test_bad_index_does_not_grow_the_buffer() {
        let mut sut = GrowableList::with_capacity(1);
        sut.push_back(1).unwrap();
        assert_eq!(sut.insert(2, 5), Err(ListError::BadIndex { index: 2, len: 1 }));
        assert_eq!(sut.capacity(), 1);
    }

    #[test]
    fn test_removals_and_reads() {
        let mut sut: GrowableList<i64> = (0..40).collect();
        assert_eq!(sut.len(), 40);
        assert_eq!(sut.capacity(), 64);

        assert_eq!(sut.pop_front(), Ok(0));
        assert_eq!(sut.pop_back(), Ok(39));
        assert_eq!(sut.remove(10), Ok(11));
        assert_eq!(sut.remove(37), Err(ListError::BadIndex { index: 37, len: 37 }));

        assert_eq!(sut.front(), Ok(&1));
        assert_eq!(sut.back(), Ok(&38));
        assert_eq!(sut.get(10), Ok(&12));

        *sut.get_mut(0).unwrap() = 100;
        *sut.back_mut().unwrap() += 1;
        *sut.front_mut().unwrap() += 1;
        assert_eq!(sut.front(), Ok(&101));
        assert_eq!(sut.back(), Ok(&39));

        sut.clear();
        assert_eq!(sut.pop_back(), Err(ListError::EmptyList));
        assert_eq!(sut.remove(0), Err(ListError::EmptyList));
    }

    #[test]
    fn test_clone_eq_debug_into_iter() {
        let sut: GrowableList<i64> = (0..3).collect();
        let copy = sut.clone();
        assert_eq!(copy, sut);
        assert_eq!(format!("{sut:?}"), "[0, 1, 2]");
        assert_eq!((&sut).into_iter().count(), 3);
        assert_eq!(sut.into_iter().rev().collect::<Vec<_>>(), vec![2, 1, 0]);
    }
}
