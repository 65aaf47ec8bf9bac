//! Zero-capacity deque.
//!
//! [`EmptyDeque<T>`] offers the capacity-independent part of the
//! [`FixedDeque`](crate::FixedDeque) interface for a deque that can never hold
//! an element. Queries report an empty and full deque; every mutator fails or
//! does nothing. Element access (`first`, `last`, indexing) is not defined on
//! the type, so using it is rejected by the compiler:
//!
//! ```compile_fail
//! use fixed_deque::EmptyDeque;
//!
//! let d: EmptyDeque<u8> = EmptyDeque::new();
//! let _ = d.first();
//! ```
//!
//! ```compile_fail
//! use fixed_deque::EmptyDeque;
//!
//! let d: EmptyDeque<u8> = EmptyDeque::new();
//! let _ = d[0];
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::InsertError;
use crate::utils::index_type::{INVALID_INDEX, IndexOfType, SizeType};
use crate::vecs::any_deque::AnyDeque;

/// A deque with capacity zero.
///
/// Holds no storage; `size_of::<EmptyDeque<T>>() == 0`.
///
/// # Examples
///
/// ```rust
/// use fixed_deque::EmptyDeque;
///
/// let mut d: EmptyDeque<i32> = EmptyDeque::new();
/// assert!(d.is_empty());
/// assert!(d.is_full());
/// assert!(!d.append(1));
/// assert_eq!(d.index_of(&1), EmptyDeque::<i32>::INVALID_INDEX);
/// ```
pub struct EmptyDeque<T> {
    _marker: PhantomData<T>,
}

impl<T> EmptyDeque<T> {
    /// Always zero.
    pub const CAPACITY: SizeType = 0;

    /// There is no valid slot, so the front index is the sentinel.
    pub const FIRST_INDEX: IndexOfType = INVALID_INDEX;

    /// Same as [`FIRST_INDEX`](Self::FIRST_INDEX): there is no last slot.
    pub const LAST_INDEX: IndexOfType = INVALID_INDEX;

    /// Value returned by [`index_of`](Self::index_of).
    pub const INVALID_INDEX: IndexOfType = INVALID_INDEX;

    /// Creates the (only) empty deque.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Always `true`.
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// Always `true`: no element fits.
    pub const fn is_full(&self) -> bool {
        true
    }

    /// Always zero.
    pub const fn count(&self) -> SizeType {
        0
    }

    /// Always zero, as a `usize`.
    pub const fn len(&self) -> usize {
        0
    }

    /// Returns [`CAPACITY`](Self::CAPACITY), which is zero.
    pub const fn capacity(&self) -> SizeType {
        Self::CAPACITY
    }

    /// The backing storage: always an empty slice.
    pub const fn data(&self) -> &[T] {
        &[]
    }

    /// Mutable counterpart of [`data`](Self::data); always empty.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut []
    }

    /// A dangling, well-aligned pointer; never dereference it.
    pub const fn as_ptr(&self) -> *const T {
        NonNull::dangling().as_ptr()
    }

    /// Mutable counterpart of [`as_ptr`](Self::as_ptr); never dereference it.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        NonNull::dangling().as_ptr()
    }

    /// The live elements: always an empty slice.
    pub const fn as_slice(&self) -> &[T] {
        &[]
    }

    /// Mutable counterpart of [`as_slice`](Self::as_slice); always empty.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut []
    }

    /// Always `None`.
    pub const fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    /// Always `None`.
    pub const fn front(&self) -> Option<&T> {
        None
    }

    /// Always `None`.
    pub const fn back(&self) -> Option<&T> {
        None
    }

    /// Always `false`.
    pub const fn contains(&self, _item: &T) -> bool {
        false
    }

    /// Always [`INVALID_INDEX`](Self::INVALID_INDEX).
    pub const fn index_of(&self, _item: &T) -> IndexOfType {
        INVALID_INDEX
    }

    /// Always `None`.
    pub const fn position(&self, _item: &T) -> Option<usize> {
        None
    }

    /// Always `None`.
    pub const fn rposition(&self, _item: &T) -> Option<usize> {
        None
    }

    /// Does nothing.
    pub const fn clear(&mut self) {}

    /// Always returns `false`, dropping `item`.
    pub fn append(&mut self, item: T) -> bool {
        self.try_append(item).is_ok()
    }

    /// Always hands `item` back.
    pub fn try_append(&mut self, item: T) -> Result<(), T> {
        trace_rejected!(capacity = 0, "append rejected: zero-capacity deque");
        Err(item)
    }

    /// Always returns `false`, dropping `item`.
    pub fn prepend(&mut self, item: T) -> bool {
        self.try_prepend(item).is_ok()
    }

    /// Always hands `item` back.
    pub fn try_prepend(&mut self, item: T) -> Result<(), T> {
        trace_rejected!(capacity = 0, "prepend rejected: zero-capacity deque");
        Err(item)
    }

    /// Does nothing.
    pub const fn unappend(&mut self) {}

    /// Does nothing.
    pub const fn unprepend(&mut self) {}

    /// Always `None`.
    pub const fn pop_back(&mut self) -> Option<T> {
        None
    }

    /// Always `None`.
    pub const fn pop_front(&mut self) -> Option<T> {
        None
    }

    /// Always `false`: nothing can match.
    pub const fn remove_first(&mut self, _item: &T) -> bool {
        false
    }

    /// Always `false`: nothing can match.
    pub const fn remove_last(&mut self, _item: &T) -> bool {
        false
    }

    /// Always `false`: no index is occupied.
    pub const fn remove_at(&mut self, _index: usize) -> bool {
        false
    }

    /// Always `None`.
    pub const fn take_at(&mut self, _index: usize) -> Option<T> {
        None
    }

    /// Always returns `false`, dropping `item`.
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        self.try_insert(index, item).is_ok()
    }

    /// Always fails with [`InsertError::OutOfRange`]: there is no occupied
    /// slot to insert before.
    pub fn try_insert(&mut self, index: usize, item: T) -> Result<(), InsertError<T>> {
        trace_rejected!(index, "insert rejected: zero-capacity deque");
        Err(InsertError::OutOfRange { item, index, len: 0 })
    }
}

impl<T> AnyDeque<T> for EmptyDeque<T> {
    fn len(&self) -> usize {
        0
    }
    fn capacity(&self) -> usize {
        0
    }
    fn as_slice(&self) -> &[T] {
        &[]
    }
    fn append(&mut self, item: T) -> bool {
        self.append(item)
    }
    fn prepend(&mut self, item: T) -> bool {
        self.prepend(item)
    }
    fn unappend(&mut self) {}
    fn unprepend(&mut self) {}
    fn pop_back(&mut self) -> Option<T> {
        None
    }
    fn pop_front(&mut self) -> Option<T> {
        None
    }
    fn remove_at(&mut self, _index: usize) -> bool {
        false
    }
    fn insert(&mut self, index: usize, item: T) -> bool {
        self.insert(index, item)
    }
    fn clear(&mut self) {}
}

impl<T> Clone for EmptyDeque<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyDeque<T> {}

impl<T> Default for EmptyDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EmptyDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[]")
    }
}

impl<T> PartialEq for EmptyDeque<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
impl<T> Eq for EmptyDeque<T> {}

impl<T: Hash> Hash for EmptyDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_empty_deque_queries() {
        let d: EmptyDeque<i32> = EmptyDeque::new();
        assert!(d.is_empty());
        assert!(d.is_full());
        assert_eq!(d.count(), 0);
        assert_eq!(d.capacity(), 0);
        assert!(d.data().is_empty());
        assert!(!d.as_ptr().is_null());
        assert!(!d.contains(&0));
        assert_eq!(d.index_of(&0), INVALID_INDEX);
        assert_eq!(d.front(), None);
        assert_eq!(d.get(0), None);
        assert_eq!(core::mem::size_of::<EmptyDeque<u64>>(), 0);
    }

    #[test]
    fn test_empty_deque_constants() {
        assert_eq!(EmptyDeque::<u8>::CAPACITY, 0);
        assert_eq!(EmptyDeque::<u8>::FIRST_INDEX, INVALID_INDEX);
        assert_eq!(EmptyDeque::<u8>::LAST_INDEX, INVALID_INDEX);
    }

    #[test]
    fn test_empty_deque_mutators_fail() {
        let mut d: EmptyDeque<i32> = EmptyDeque::default();
        assert!(!d.append(1));
        assert!(!d.prepend(1));
        assert!(!d.insert(0, 1));
        assert!(!d.remove_at(0));
        assert!(!d.remove_first(&1));
        assert!(!d.remove_last(&1));
        assert_eq!(d.try_append(3), Err(3));
        assert_eq!(d.try_prepend(4), Err(4));
        assert_eq!(d.try_insert(0, 5).unwrap_err().into_inner(), 5);
        assert_eq!(d.pop_back(), None);
        assert_eq!(d.pop_front(), None);
        assert_eq!(d.take_at(0), None);
        d.unappend();
        d.unprepend();
        d.clear();
        assert!(d.is_empty());
        assert_eq!(format!("{:?}", d), "[]");
    }

    #[test]
    fn test_empty_deque_const_context() {
        const D: EmptyDeque<u32> = EmptyDeque::new();
        const FULL: bool = D.is_full();
        const LEN: usize = D.len();
        assert!(FULL);
        assert_eq!(LEN, 0);
    }

    #[test]
    fn test_empty_deque_any_deque_trait() {
        let mut d: EmptyDeque<i32> = EmptyDeque::new();
        let any: &mut dyn AnyDeque<i32> = &mut d;
        assert!(any.is_empty());
        assert!(any.is_full());
        assert!(!any.append(1));
        assert!(!any.prepend(1));
        assert!(!any.insert(0, 1));
        assert_eq!(any.index_of(&1), INVALID_INDEX);
        assert!(!any.remove_first(&1));
        assert_eq!(any.back(), None);
    }
}
