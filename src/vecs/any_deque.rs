//! Object-safe abstractions shared by [`FixedDeque`] and [`EmptyDeque`].
//!
//! [`AnyDeque`] covers everything that is meaningful for every capacity,
//! including zero. [`IndexedDeque`] adds unchecked element access and is only
//! implemented by [`FixedDeque`], so generic code that asks for it cannot be
//! instantiated with the zero-capacity variant.
//!
//! [`FixedDeque`]: crate::FixedDeque
//! [`EmptyDeque`]: crate::EmptyDeque

use crate::utils::index_type::{IndexOfType, to_index_of};

/// An object-safe abstraction over the fixed-capacity deque variants.
///
/// Every fallible mutator reports failure through its return value and leaves
/// the deque untouched when it fails.
pub trait AnyDeque<T> {
    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns the fixed capacity.
    fn capacity(&self) -> usize;

    /// Returns `true` if the deque holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if no further element fits.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns the live elements, front to back.
    fn as_slice(&self) -> &[T];

    /// Adds `item` at the back. Returns `false` if full.
    fn append(&mut self, item: T) -> bool;

    /// Adds `item` at the front. Returns `false` if full.
    fn prepend(&mut self, item: T) -> bool;

    /// Drops the back element, if any.
    fn unappend(&mut self);

    /// Drops the front element, if any.
    fn unprepend(&mut self);

    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Removes the element at `index`. Returns `false` if `index >= len()`.
    fn remove_at(&mut self, index: usize) -> bool;

    /// Inserts `item` before the element at `index`.
    ///
    /// Returns `false` if the deque is full or `index >= len()`.
    fn insert(&mut self, index: usize, item: T) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns the front element, or `None` if empty.
    fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the back element, or `None` if empty.
    fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if some live element equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Returns the index of the first live element equal to `item`, or
    /// [`INVALID_INDEX`](crate::INVALID_INDEX).
    fn index_of(&self, item: &T) -> IndexOfType
    where
        T: PartialEq,
    {
        to_index_of(self.as_slice().iter().position(|x| x == item))
    }

    /// Removes the element equal to `item` that is closest to the front.
    fn remove_first(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.as_slice().iter().position(|x| x == item) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Removes the element equal to `item` that is closest to the back.
    fn remove_last(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.as_slice().iter().rposition(|x| x == item) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }
}

/// Element access for deques that always own at least one slot.
///
/// Like slice indexing on the backing array, [`first`](IndexedDeque::first)
/// and [`last`](IndexedDeque::last) are not checked against `len()`: on an
/// empty deque they refer to slot 0, which holds a default value.
pub trait IndexedDeque<T>: AnyDeque<T> {
    /// Returns the slot at the front.
    fn first(&self) -> &T;

    /// Returns the slot at the front, mutably.
    fn first_mut(&mut self) -> &mut T;

    /// Returns the slot at the back.
    fn last(&self) -> &T;

    /// Returns the slot at the back, mutably.
    fn last_mut(&mut self) -> &mut T;

    /// Returns the live element at `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}
