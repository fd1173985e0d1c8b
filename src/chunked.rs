use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{ListError, Result};
use crate::fixed::FixedCapacityList;
use crate::into_iter::IntoIter;
use crate::iter::{Chunks, Iter};

/// Chunk capacity used by [`ChunkedList::default`].
pub const DEFAULT_CHUNK_CAPACITY: usize = 16;

/// A linked sequence of fixed-capacity chunks.
///
/// Every chunk holds up to `chunk_capacity` elements. Global operations
/// locate the owning chunk by walking the sequence and accumulating chunk
/// lengths, then shift elements inside that chunk only. A chunk is
/// allocated exactly when an insertion targets a full one, and a chunk
/// emptied by a removal is dropped unless it is the last chunk left.
///
/// # Features
/// - **Bounded shifting**: front, back and middle insertions move at most
///   one chunk's worth of elements, whatever the total length.
/// - **Never empty**: the chunk sequence always holds at least one chunk, so
///   the front and back chunks are always there to inspect.
///
/// # Example
/// ```rust
/// use chunky_list::ChunkedList;
///
/// let mut list = ChunkedList::new(3).unwrap();
/// for value in 1..=4 {
///     list.push_back(value).unwrap();
/// }
///
/// assert_eq!(list.chunks().collect::<Vec<_>>(), vec![&[1, 2, 3][..], &[4][..]]);
/// assert_eq!(list.get(3), Ok(&4));
///
/// assert_eq!(list.remove(0), Ok(1));
/// assert_eq!(list.chunks().collect::<Vec<_>>(), vec![&[2, 3][..], &[4][..]]);
/// assert_eq!(list.len(), 3);
/// ```
pub struct ChunkedList<T> {
    chunk_capacity: usize,
    chunks: VecDeque<FixedCapacityList<T>>,
}

impl<T> Default for ChunkedList<T> {
    fn default() -> Self {
        Self::with_valid_capacity(DEFAULT_CHUNK_CAPACITY)
    }
}

impl<T> ChunkedList<T> {
    /// Creates an empty list whose chunks hold up to `chunk_capacity`
    /// elements. The list starts with a single empty chunk.
    ///
    /// # Errors
    /// [`ListError::ZeroCapacity`] if `chunk_capacity` is zero.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkedList, ListError};
    ///
    /// let list: ChunkedList<i64> = ChunkedList::new(4).unwrap();
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 1);
    ///
    /// assert!(matches!(ChunkedList::<i64>::new(0), Err(ListError::ZeroCapacity)));
    /// ```
    pub fn new(chunk_capacity: usize) -> Result<Self> {
        if chunk_capacity == 0 {
            return Err(ListError::ZeroCapacity);
        }

        Ok(Self::with_valid_capacity(chunk_capacity))
    }

    /// Creates a list with the given chunk capacity holding the elements of
    /// `iter`, packed into full chunks.
    pub fn from_iter_with_capacity<I>(chunk_capacity: usize, iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut this = Self::new(chunk_capacity)?;
        this.extend(iter);
        Ok(this)
    }

    fn with_valid_capacity(chunk_capacity: usize) -> Self {
        let mut chunks = VecDeque::new();
        chunks.push_back(FixedCapacityList::new(chunk_capacity));

        Self {
            chunk_capacity,
            chunks,
        }
    }

    /// Adds an element to the front of the list.
    ///
    /// If the first chunk is full, a new chunk is allocated in front of it
    /// to hold the element.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkedList;
    ///
    /// let mut list = ChunkedList::new(2).unwrap();
    /// list.push_front(30).unwrap();
    /// list.push_front(20).unwrap();
    /// list.push_front(10).unwrap();
    ///
    /// assert_eq!(list.chunk_lens().collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(list.front(), Ok(&10));
    /// ```
    pub fn push_front(&mut self, value: T) -> Result<()> {
        match self.chunks.front_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_front(value),
            _ => {
                trace!(chunk_capacity = self.chunk_capacity, "allocating chunk at the front");
                let chunk = Self::chunk_with(self.chunk_capacity, value)?;
                self.chunks.push_front(chunk);
                Ok(())
            }
        }
    }

    /// Adds an element to the back of the list.
    ///
    /// If the last chunk is full, a new chunk is allocated behind it to hold
    /// the element.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        match self.chunks.back_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_back(value),
            _ => {
                trace!(chunk_capacity = self.chunk_capacity, "allocating chunk at the back");
                let chunk = Self::chunk_with(self.chunk_capacity, value)?;
                self.chunks.push_back(chunk);
                Ok(())
            }
        }
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// The owning chunk is the first one whose range, inclusive of its end,
    /// contains `index`. When that chunk is full a new chunk is allocated
    /// right after it: the new chunk receives `value` if it goes at the very
    /// end of the owning chunk, otherwise it receives the owning chunk's last
    /// element and `value` takes the freed slot.
    ///
    /// # Errors
    /// [`ListError::BadIndex`] if `index > len`.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkedList;
    ///
    /// let mut list = ChunkedList::from_iter_with_capacity(3, [1, 2, 3, 4]).unwrap();
    /// list.insert(1, 9).unwrap();
    ///
    /// assert_eq!(list, [1, 9, 2, 3, 4]);
    /// assert_eq!(list.chunks().collect::<Vec<_>>(), vec![&[1, 9, 2][..], &[3][..], &[4][..]]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(ListError::BadIndex { index, len });
        }

        if self.is_empty() {
            return self.push_front(value);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_insert_target(index)
            .ok_or(ListError::BadIndex { index, len })?;

        let chunk_capacity = self.chunk_capacity;
        let chunk = &mut self.chunks[chunk_index];
        if !chunk.is_full() {
            return chunk.insert(target_index, value);
        }

        let new_chunk = if target_index == chunk.len() {
            trace!(chunk_index, "allocating chunk after a full chunk");
            Self::chunk_with(chunk_capacity, value)?
        } else {
            trace!(chunk_index, "spilling the last element of a full chunk");
            let spilled = chunk.pop_back()?;
            let new_chunk = Self::chunk_with(chunk_capacity, spilled)?;
            chunk.insert(target_index, value)?;
            new_chunk
        };

        self.chunks.insert(chunk_index + 1, new_chunk);
        Ok(())
    }

    /// Removes and returns the first element of the list.
    ///
    /// # Errors
    /// [`ListError::EmptyList`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let value = self.chunks[0].pop_front()?;
        self.prune(0);
        Ok(value)
    }

    /// Removes and returns the last element of the list.
    ///
    /// # Errors
    /// [`ListError::EmptyList`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let last = self.chunks.len() - 1;
        let value = self.chunks[last].pop_back()?;
        self.prune(last);
        Ok(value)
    }

    /// Removes and returns the element at `index`, shifting the rest of its
    /// chunk to the left.
    ///
    /// # Errors
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::BadIndex`] if no chunk covers `index`.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkedList, ListError};
    ///
    /// let mut list = ChunkedList::from_iter_with_capacity(2, [10, 20, 30]).unwrap();
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list.remove(5), Err(ListError::BadIndex { index: 5, len: 2 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index).ok_or_else(|| ListError::BadIndex {
            index,
            len: self.len(),
        })?;

        let value = self.chunks[chunk_index].remove(target_index)?;
        self.prune(chunk_index);
        Ok(value)
    }

    pub fn front(&self) -> Result<&T> {
        self.chunks
            .front()
            .ok_or(ListError::EmptyList)
            .and_then(FixedCapacityList::front)
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.chunks
            .front_mut()
            .ok_or(ListError::EmptyList)
            .and_then(FixedCapacityList::front_mut)
    }

    pub fn back(&self) -> Result<&T> {
        self.chunks
            .back()
            .ok_or(ListError::EmptyList)
            .and_then(FixedCapacityList::back)
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.chunks
            .back_mut()
            .ok_or(ListError::EmptyList)
            .and_then(FixedCapacityList::back_mut)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::BadIndex`] if no chunk covers `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index).ok_or_else(|| ListError::BadIndex {
            index,
            len: self.len(),
        })?;

        self.chunks[chunk_index].get(target_index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index).ok_or_else(|| ListError::BadIndex {
            index,
            len: self.len(),
        })?;

        self.chunks[chunk_index].get_mut(target_index)
    }

    /// Returns the number of elements, summing the chunk lengths.
    ///
    /// This walks every chunk, so it is linear in the number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(FixedCapacityList::len).sum()
    }

    /// Checks the first chunk only. Emptied chunks are pruned whenever
    /// another chunk remains, so an empty first chunk means an empty list.
    pub fn is_empty(&self) -> bool {
        self.chunks.front().is_none_or(FixedCapacityList::is_empty)
    }

    /// Drops every element and every chunk but one, which is left empty.
    pub fn clear(&mut self) {
        self.chunks.truncate(1);
        if let Some(chunk) = self.chunks.front_mut() {
            chunk.clear();
        }
    }

    #[inline]
    pub const fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Provides the length of each chunk, front to back.
    pub fn chunk_lens(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.chunks.iter().map(FixedCapacityList::len)
    }

    /// Provides each chunk as a slice, front to back.
    #[inline]
    pub fn chunks(&self) -> Chunks<'_, T> {
        Chunks::new(self.chunks.iter())
    }

    /// Provides an iterator over the list's elements.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkedList;
    ///
    /// let list = ChunkedList::from_iter_with_capacity(2, [0, 1, 2]).unwrap();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.chunks.iter(), self.len())
    }

    fn chunk_with(chunk_capacity: usize, value: T) -> Result<FixedCapacityList<T>> {
        let mut chunk = FixedCapacityList::new(chunk_capacity);
        chunk.push_back(value)?;
        Ok(chunk)
    }

    fn prune(&mut self, chunk_index: usize) {
        if self.chunks.len() > 1 && self.chunks[chunk_index].is_empty() {
            trace!(chunk_index, "pruning emptied chunk");
            self.chunks.remove(chunk_index);
        }
    }

    /// Finds the chunk covering `index` and the index local to that chunk.
    fn search_target(&self, mut index: usize) -> Option<SearchTarget> {
        self.chunks
            .iter()
            .position(|chunk| {
                if index < chunk.len() {
                    return true;
                }

                index -= chunk.len();
                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index,
            })
    }

    /// Like `search_target`, but a chunk also covers the slot one past its
    /// last element.
    fn search_insert_target(&self, mut index: usize) -> Option<SearchTarget> {
        self.chunks
            .iter()
            .position(|chunk| {
                if index <= chunk.len() {
                    return true;
                }

                index -= chunk.len();
                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index,
            })
    }
}

#[derive(Debug, Default)]
struct SearchTarget {
    chunk_index: usize,
    target_index: usize,
}

impl<T> Extend<T> for ChunkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter().peekable();

        if let Some(chunk) = self.chunks.back_mut() {
            chunk.fill_from(&mut iter);
        }

        while iter.peek().is_some() {
            let mut chunk = FixedCapacityList::new(self.chunk_capacity);
            chunk.fill_from(&mut iter);
            self.chunks.push_back(chunk);
        }
    }
}

impl<'a, T> Extend<&'a T> for ChunkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for ChunkedList<T> {
    fn clone(&self) -> Self {
        Self {
            chunk_capacity: self.chunk_capacity,
            chunks: self.chunks.clone(),
        }
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

/// Compares elements only; two lists with different chunk layouts can be equal.
impl<T> PartialEq for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for ChunkedList<T> where T: Eq {}

impl<T> PartialOrd for ChunkedList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for ChunkedList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for ChunkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

/// Prints the chunk layout, one inner list per chunk.
impl<T> fmt::Debug for ChunkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chunks.iter()).finish()
    }
}

impl<T> IntoIterator for ChunkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.chunks, len)
    }
}

impl<'a, T> IntoIterator for &'a ChunkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
