use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::{fmt, ptr, slice};

use crate::error::{ListError, Result};

/// An array-backed list that never holds more than a fixed number of elements.
///
/// The capacity is chosen once at construction. Back operations and index
/// lookups are O(1); front and middle insertions and removals shift the
/// elements behind them.
///
/// # Example
/// ```rust
/// use chunky_list::{FixedCapacityList, ListError};
///
/// let mut list = FixedCapacityList::new(2);
/// list.push_back(2).unwrap();
/// list.push_front(1).unwrap();
///
/// assert_eq!(list.as_slice(), &[1, 2]);
/// assert_eq!(list.push_back(3), Err(ListError::OutOfSpace { capacity: 2 }));
/// ```
pub struct FixedCapacityList<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> FixedCapacityList<T> {
    /// Creates an empty list able to hold `capacity` elements.
    ///
    /// A capacity of zero is allowed; every insertion then fails with
    /// [`ListError::OutOfSpace`].
    pub fn new(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Box::new_uninit_slice(capacity),
        }
    }

    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.insert(0, value)
    }

    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.insert(self.len(), value)
    }

    /// Inserts `value` at `index`, shifting every element after it to the right.
    ///
    /// # Errors
    /// - [`ListError::BadIndex`] if `index > len`.
    /// - [`ListError::OutOfSpace`] if the list is already full.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(ListError::BadIndex {
                index,
                len: self.len(),
            });
        }

        if self.is_full() {
            return Err(ListError::OutOfSpace {
                capacity: self.capacity(),
            });
        }

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<T> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        self.len -= 1;
        Ok(unsafe { self.data[self.len].assume_init_read() })
    }

    /// Removes and returns the element at `index`, shifting every element
    /// after it to the left.
    ///
    /// # Errors
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::BadIndex`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let value = unsafe { self.data[index].assume_init_read() };

        unsafe {
            // Shift elements from `index + 1` to fill the gap
            let data_ptr = self.data.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        Ok(value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(ListError::EmptyList)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(ListError::EmptyList)
    }

    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(ListError::EmptyList)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(ListError::EmptyList)
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.data.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Moves the elements into a fresh buffer of `capacity` slots.
    /// Does nothing if the current buffer is already that large.
    pub(crate) fn grow_to(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }

        let mut data = Box::new_uninit_slice(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len);
        }

        // The old buffer only holds `MaybeUninit`s, dropping it leaves the
        // moved elements alone.
        self.data = data;
    }

    /// Appends elements from `iter` until the list is full or `iter` runs dry.
    pub(crate) fn fill_from<I: Iterator<Item = T>>(&mut self, iter: &mut I) {
        while !self.is_full() {
            let Some(value) = iter.next() else {
                break;
            };

            self.data[self.len].write(value);
            self.len += 1;
        }
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

impl<T> Drop for FixedCapacityList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for FixedCapacityList<T> {
    fn clone(&self) -> Self {
        let mut this = Self::new(self.capacity());
        for (slot, value) in this.data.iter_mut().zip(self.as_slice()) {
            slot.write(value.clone());
            this.len += 1;
        }
        this
    }
}

impl<T: PartialEq> PartialEq for FixedCapacityList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FixedCapacityList<T> {}

impl<T: fmt::Debug> fmt::Debug for FixedCapacityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a FixedCapacityList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for FixedCapacityList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let back = mem::replace(&mut self.len, 0);
        let data = mem::replace(&mut self.data, Box::new_uninit_slice(0));
        IntoIter {
            data,
            front: 0,
            back,
        }
    }
}

/// An owning iterator over the elements of a [`FixedCapacityList`].
pub struct IntoIter<T> {
    data: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = unsafe { self.data[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { self.data[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.data[self.front..self.back] {
            unsafe { slot.assume_init_drop() };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::ListError;
    use crate::fixed::FixedCapacityList;

    #[test]
    fn insert_puts_elements_in_the_correct_positions() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(6);
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());

        sut.insert(0, 10).unwrap();
        assert_eq!(sut.as_slice(), &[10]);

        sut.insert(1, 15).unwrap();
        assert_eq!(sut.as_slice(), &[10, 15]);

        sut.insert(0, 5).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 15]);

        sut.insert(3, 20).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 15, 20]);

        sut.insert(2, 13).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 20]);

        sut.insert(4, 17).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 17, 20]);
        assert_eq!(sut.len(), 6);
        assert!(sut.is_full());

        assert_eq!(sut.insert(6, 100), Err(ListError::OutOfSpace { capacity: 6 }));
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 17, 20]);
    }

    #[test]
    fn insert_rejects_index_out_of_bounds() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(6);
        assert_eq!(
            sut.insert(usize::MAX, 100),
            Err(ListError::BadIndex {
                index: usize::MAX,
                len: 0
            })
        );

        sut.push_back(1).unwrap();
        assert_eq!(
            sut.insert(2, 100),
            Err(ListError::BadIndex { index: 2, len: 1 })
        );
        assert_eq!(sut.as_slice(), &[1]);
    }

    #[test]
    fn bad_index_is_reported_before_running_out_of_space() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(1);
        sut.push_back(1).unwrap();
        assert_eq!(
            sut.insert(3, 100),
            Err(ListError::BadIndex { index: 3, len: 1 })
        );
    }

    #[test]
    fn zero_capacity_list_rejects_every_insertion() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(0);
        assert!(sut.is_full());
        assert_eq!(sut.push_front(1), Err(ListError::OutOfSpace { capacity: 0 }));
        assert_eq!(sut.push_back(1), Err(ListError::OutOfSpace { capacity: 0 }));
        assert!(sut.is_empty());
    }

    #[test]
    fn remove_removes_correct_elements() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(6);
        for value in 0..6 {
            sut.push_back(value).unwrap();
        }
        assert_eq!(sut.len(), 6);

        assert_eq!(sut.remove(2), Ok(2));
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4, 5]);

        assert_eq!(sut.remove(3), Ok(4));
        assert_eq!(sut.as_slice(), &[0, 1, 3, 5]);

        assert_eq!(sut.remove(1), Ok(1));
        assert_eq!(sut.as_slice(), &[0, 3, 5]);

        assert_eq!(sut.remove(0), Ok(0));
        assert_eq!(sut.as_slice(), &[3, 5]);

        assert_eq!(sut.remove(2), Err(ListError::BadIndex { index: 2, len: 2 }));

        assert_eq!(sut.remove(1), Ok(5));
        assert_eq!(sut.remove(0), Ok(3));
        assert!(sut.is_empty());

        assert_eq!(sut.remove(0), Err(ListError::EmptyList));
    }

    #[test]
    fn pop_with_empty_list_fails() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(6);
        assert_eq!(sut.pop_front(), Err(ListError::EmptyList));
        assert_eq!(sut.pop_back(), Err(ListError::EmptyList));
    }

    #[test]
    fn pop_takes_from_both_ends() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(4);
        sut.push_back(2).unwrap();
        sut.push_back(3).unwrap();
        sut.push_front(1).unwrap();

        assert_eq!(sut.pop_back(), Ok(3));
        assert_eq!(sut.pop_front(), Ok(1));
        assert_eq!(sut.pop_front(), Ok(2));
        assert_eq!(sut.pop_back(), Err(ListError::EmptyList));
    }

    #[test]
    fn reads_follow_the_emptiness_and_bounds_rules() {
        let mut sut: FixedCapacityList<i64> = FixedCapacityList::new(6);
        assert_eq!(sut.get(0), Err(ListError::EmptyList));
        assert_eq!(sut.get_mut(0), Err(ListError::EmptyList));
        assert_eq!(sut.front(), Err(ListError::EmptyList));
        assert_eq!(sut.back(), Err(ListError::EmptyList));

        sut.push_back(10).unwrap();
        sut.push_back(20).unwrap();

        assert_eq!(sut.front(), Ok(&10));
        assert_eq!(sut.back(), Ok(&20));
        assert_eq!(sut.get(1), Ok(&20));
        assert_eq!(sut.get(2), Err(ListError::BadIndex { index: 2, len: 2 }));

        *sut.get_mut(0).unwrap() = 11;
        *sut.back_mut().unwrap() += 1;
        *sut.front_mut().unwrap() += 1;
        assert_eq!(sut.as_slice(), &[12, 21]);
    }

    #[test]
    fn grow_to_keeps_elements_and_raises_capacity() {
        let mut sut: FixedCapacityList<String> = FixedCapacityList::new(2);
        sut.push_back("a".to_owned()).unwrap();
        sut.push_back("b".to_owned()).unwrap();
        assert!(sut.is_full());

        sut.grow_to(1);
        assert_eq!(sut.capacity(), 2);

        sut.grow_to(4);
        assert_eq!(sut.capacity(), 4);
        assert_eq!(sut.as_slice(), &["a", "b"]);

        sut.push_back("c".to_owned()).unwrap();
        assert_eq!(sut.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn drop_and_clear_release_every_element() {
        let tracker = Rc::new(());

        let mut sut = FixedCapacityList::new(4);
        for _ in 0..4 {
            sut.push_back(Rc::clone(&tracker)).unwrap();
        }
        assert_eq!(Rc::strong_count(&tracker), 5);

        sut.remove(1).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 4);

        sut.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert!(sut.is_empty());

        sut.push_back(Rc::clone(&tracker)).unwrap();
        sut.push_back(Rc::clone(&tracker)).unwrap();
        drop(sut);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn into_iter_yields_in_order_and_drops_the_rest() {
        let tracker = Rc::new(());

        let mut sut = FixedCapacityList::new(3);
        for _ in 0..3 {
            sut.push_back(Rc::clone(&tracker)).unwrap();
        }

        let mut iter = sut.into_iter();
        assert_eq!(iter.len(), 3);
        assert!(iter.next().is_some());
        assert!(iter.next_back().is_some());
        assert_eq!(iter.len(), 1);
        drop(iter);
        assert_eq!(Rc::strong_count(&tracker), 1);

        let mut sut = FixedCapacityList::new(3);
        sut.push_back(1).unwrap();
        sut.push_back(2).unwrap();
        sut.push_back(3).unwrap();
        assert_eq!(sut.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn clone_eq_and_debug_work_correctly() {
        let mut sut = FixedCapacityList::new(3);
        sut.push_back(1).unwrap();
        sut.push_back(2).unwrap();

        let copy = sut.clone();
        assert_eq!(copy, sut);
        assert_eq!(copy.capacity(), 3);
        assert_eq!(format!("{sut:?}"), "[1, 2]");
        assert_eq!((&sut).into_iter().copied().sum::<i32>(), 3);
    }
}
