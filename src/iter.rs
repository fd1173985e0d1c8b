use core::iter::FusedIterator;
use std::collections::vec_deque;
use std::iter::Flatten;

use crate::fixed::FixedCapacityList;

/// An iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::iter().
pub struct Iter<'a, T> {
    delegate: Flatten<vec_deque::Iter<'a, FixedCapacityList<T>>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(chunks: vec_deque::Iter<'a, FixedCapacityList<T>>, len: usize) -> Self {
        Self {
            delegate: chunks.flatten(),
            len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next()?;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}

/// An iterator over the chunks of a ChunkedList, each seen as a slice.
///
/// This struct is created by ChunkedList::chunks().
pub struct Chunks<'a, T> {
    delegate: vec_deque::Iter<'a, FixedCapacityList<T>>,
}

impl<'a, T> Chunks<'a, T> {
    pub(crate) fn new(chunks: vec_deque::Iter<'a, FixedCapacityList<T>>) -> Self {
        Self { delegate: chunks }
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().map(FixedCapacityList::as_slice)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }
}

impl<T> DoubleEndedIterator for Chunks<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().map(FixedCapacityList::as_slice)
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}
