//! # chunky_list
//!
//! `chunky_list` implements an **unrolled linked list**, a linked sequence of
//! fixed-capacity array chunks, together with four simpler lists sharing the
//! same [`List`] interface so they can be swapped for one another.
//!
//! ## Variants
//! - [`ChunkedList`]: the unrolled list. Insertions and removals shift at most
//!   one chunk, and new chunks are allocated only when an insertion targets a
//!   full one.
//! - [`FixedCapacityList`]: a bounded array list, also the chunk type used by
//!   [`ChunkedList`]. Inserting into a full one fails with
//!   [`ListError::OutOfSpace`].
//! - [`GrowableList`]: an array list that doubles its buffer when full.
//! - [`SinglyLinkedList`] and [`DoublyLinkedList`]: node-based lists whose
//!   nodes live in an index arena.
//!
//! ## Errors
//! Every fallible operation returns a [`Result`] carrying a [`ListError`].
//! No operation panics on bad input, and a failed operation leaves the list
//! untouched.
//!
//! ## Example
//! ```rust
//! use chunky_list::{ChunkedList, List, ListError};
//!
//! fn fill<L: List<i64>>(list: &mut L) -> Result<(), ListError> {
//!     list.push_back(2)?;
//!     list.push_front(0)?;
//!     list.insert(1, 1)?;
//!     Ok(())
//! }
//!
//! let mut list = ChunkedList::new(2).unwrap();
//! fill(&mut list).unwrap();
//!
//! assert_eq!(list.front(), Ok(&0));
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.back(), Ok(&2));
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.pop_front(), Ok(0));
//! assert_eq!(list.pop_front(), Err(ListError::EmptyList));
//! ```

mod arena;
mod chunked;
mod doubly;
mod error;
mod fixed;
mod growable;
mod into_iter;
mod iter;
mod singly;

pub use chunked::{ChunkedList, DEFAULT_CHUNK_CAPACITY};
pub use doubly::DoublyLinkedList;
pub use error::{ListError, Result};
pub use fixed::FixedCapacityList;
pub use growable::GrowableList;
pub use into_iter::IntoIter;
pub use iter::{Chunks, Iter};
pub use singly::SinglyLinkedList;

/// Iterator types of the node-based and array-based variants.
pub mod iters {
    pub use crate::doubly::{IntoIter as DoublyIntoIter, Iter as DoublyIter};
    pub use crate::fixed::IntoIter as FixedIntoIter;
    pub use crate::singly::{IntoIter as SinglyIntoIter, Iter as SinglyIter};
}

/// The operations every list variant supports.
///
/// Indices are zero-based. `insert` accepts `index` in `0..=len`, where `len`
/// appends, while `remove` and `get` accept `index` in `0..len`. Every variant
/// also exposes these operations as inherent methods, so the trait only needs
/// to be in scope for generic code.
pub trait List<T> {
    /// Adds an element to the front.
    fn push_front(&mut self, value: T) -> Result<()>;

    /// Adds an element to the back.
    fn push_back(&mut self, value: T) -> Result<()>;

    /// Inserts an element at `index`, shifting the following elements right.
    ///
    /// # Errors
    /// - [`ListError::BadIndex`] if `index > len`.
    /// - [`ListError::OutOfSpace`] if the list is bounded and full.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    fn pop_front(&mut self) -> Result<T>;

    fn pop_back(&mut self) -> Result<T>;

    /// Removes the element at `index`, shifting the following elements left.
    ///
    /// # Errors
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::BadIndex`] if `index >= len`.
    fn remove(&mut self, index: usize) -> Result<T>;

    fn front(&self) -> Result<&T>;

    fn back(&self) -> Result<&T>;

    fn get(&self, index: usize) -> Result<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_list {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T> List<T> for $ty<T> {
                #[inline]
                fn push_front(&mut self, value: T) -> Result<()> {
                    $ty::push_front(self, value)
                }

                #[inline]
                fn push_back(&mut self, value: T) -> Result<()> {
                    $ty::push_back(self, value)
                }

                #[inline]
                fn insert(&mut self, index: usize, value: T) -> Result<()> {
                    $ty::insert(self, index, value)
                }

                #[inline]
                fn pop_front(&mut self) -> Result<T> {
                    $ty::pop_front(self)
                }

                #[inline]
                fn pop_back(&mut self) -> Result<T> {
                    $ty::pop_back(self)
                }

                #[inline]
                fn remove(&mut self, index: usize) -> Result<T> {
                    $ty::remove(self, index)
                }

                #[inline]
                fn front(&self) -> Result<&T> {
                    $ty::front(self)
                }

                #[inline]
                fn back(&self) -> Result<&T> {
                    $ty::back(self)
                }

                #[inline]
                fn get(&self, index: usize) -> Result<&T> {
                    $ty::get(self, index)
                }

                #[inline]
                fn len(&self) -> usize {
                    $ty::len(self)
                }

                #[inline]
                fn is_empty(&self) -> bool {
                    $ty::is_empty(self)
                }
            }
        )+
    };
}

impl_list!(
    ChunkedList,
    FixedCapacityList,
    GrowableList,
    SinglyLinkedList,
    DoublyLinkedList,
);
