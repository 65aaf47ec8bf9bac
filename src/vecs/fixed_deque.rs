//! Array-backed double-ended queue with a compile-time capacity.
//!
//! [`FixedDeque<T, N>`] keeps its elements in an inline `[T; N]` and a single
//! `u8` counter. Live elements always occupy the contiguous prefix
//! `[0, len)`, so the whole deque can be handed out as one slice.
//!
//! # Why not a ring buffer?
//! A head/tail ring would make `prepend` O(1), but the live range could then
//! wrap around the end of the array and [`data`](FixedDeque::data) /
//! [`as_slice`](FixedDeque::as_slice) could no longer return a single
//! contiguous view. Deques in the target environments are small (at most
//! 127 slots), so shifting is kept and `prepend`, `unprepend` and the
//! positional operations cost O(len).

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Index, IndexMut};

use crate::error::InsertError;
use crate::utils::index_type::{
    CompactIndex, INVALID_INDEX, IndexOfType, IndexType, MAX_CAPACITY, SizeType, to_index_of,
};
use crate::vecs::any_deque::{AnyDeque, IndexedDeque};

/// A double-ended queue holding up to `N` elements inline, without allocating.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|--------|
/// | `T` | Element type; `Default` is needed to fill unused slots |
/// | `N` | Capacity; must satisfy `1 <= N <= 127` |
///
/// # Compile-time assertions
/// `new()` uses `const { assert!(...) }` to reject `N == 0` (use
/// [`EmptyDeque`](crate::EmptyDeque)) and `N > 127`.
///
/// ```compile_fail
/// use fixed_deque::FixedDeque;
///
/// let d: FixedDeque<u8, 128> = FixedDeque::new();
/// ```
///
/// ```compile_fail
/// use fixed_deque::FixedDeque;
///
/// let d: FixedDeque<u8, 0> = FixedDeque::new();
/// ```
///
/// # Pseudo-code Implementation
///
/// ```text
/// // 1. Prepend (prepend)
/// if len == N: return false
/// items[len] = item
/// rotate items[0..=len] right by one      // item lands at 0
/// len += 1
///
/// // 2. Insert (insert)
/// if index >= len or len == N: return false
/// items[len] = item
/// rotate items[index..=len] right by one  // item lands at index
/// len += 1
///
/// // 3. Remove (remove_at)
/// if index >= len: return false
/// rotate items[index..len] left by one    // removed element moves to len - 1
/// len -= 1
/// items[len] = T::default()
/// ```
///
/// # Examples
///
/// ```rust
/// use fixed_deque::FixedDeque;
///
/// let mut d: FixedDeque<i32, 4> = FixedDeque::new();
/// assert!(d.append(1));
/// assert!(d.append(2));
/// assert!(d.prepend(0));
/// assert_eq!(d.as_slice(), &[0, 1, 2]);
///
/// assert!(d.insert(1, 9));
/// assert!(d.is_full());
/// assert!(!d.append(5));
///
/// assert!(d.remove_first(&9));
/// assert_eq!(d.as_slice(), &[0, 1, 2]);
/// ```
#[derive(Clone)]
pub struct FixedDeque<T, const N: usize> {
    items: [T; N],
    /// Number of live elements; also the index one past the back.
    size: SizeType,
}

impl<T, const N: usize> FixedDeque<T, N> {
    /// `N` narrowed to a [`SizeType`] once it is known to be in `1..=127`.
    const CHECKED_CAPACITY: SizeType = {
        assert!(
            N > 0,
            "FixedDeque capacity must be at least 1; use EmptyDeque for zero capacity"
        );
        assert!(
            N <= MAX_CAPACITY,
            "FixedDeque capacity must not exceed 127"
        );
        N as SizeType
    };

    /// The fixed capacity.
    ///
    /// ```compile_fail
    /// use fixed_deque::FixedDeque;
    ///
    /// let c = FixedDeque::<u8, 300>::CAPACITY;
    /// ```
    pub const CAPACITY: SizeType = Self::CHECKED_CAPACITY;

    /// Index of the front slot.
    pub const FIRST_INDEX: IndexType = 0;

    /// Index of the last slot of the backing array.
    ///
    /// ```compile_fail
    /// use fixed_deque::FixedDeque;
    ///
    /// let i = FixedDeque::<u8, 0>::LAST_INDEX;
    /// ```
    pub const LAST_INDEX: IndexType = Self::CHECKED_CAPACITY - 1;

    /// Value returned by [`index_of`](Self::index_of) when nothing matches.
    pub const INVALID_INDEX: IndexOfType = INVALID_INDEX;

    /// Returns the number of live elements.
    #[inline(always)]
    pub fn count(&self) -> SizeType {
        self.size
    }

    /// Returns the number of live elements as a `usize`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size.as_usize()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size.is_zero()
    }

    /// Returns `true` if no further element fits.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() >= N
    }

    /// Returns the fixed capacity.
    #[inline(always)]
    pub const fn capacity(&self) -> SizeType {
        Self::CAPACITY
    }

    /// Returns the whole backing array, including slots past `len()`.
    ///
    /// Slots in `[len(), N)` hold default values or whatever a caller wrote
    /// there through [`data_mut`](Self::data_mut); they are not part of the
    /// deque.
    #[inline(always)]
    pub fn data(&self) -> &[T] {
        &self.items
    }

    /// Mutable counterpart of [`data`](Self::data).
    ///
    /// Writes beyond `len()` are allowed but are not observed by any deque
    /// operation.
    #[inline(always)]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns a raw pointer to slot 0 of the backing array.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns a mutable raw pointer to slot 0 of the backing array.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Returns the live elements, front to back.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len()]
    }

    /// Returns the live elements mutably, front to back.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.items[..len]
    }

    /// Returns the live element at `index`, or `None` if `index >= len()`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the live element at `index` mutably, or `None`.
    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the front slot. Not checked against `len()`.
    #[inline(always)]
    pub fn first(&self) -> &T {
        &self.items[Self::FIRST_INDEX.as_usize()]
    }

    /// Returns the front slot mutably. Not checked against `len()`.
    #[inline(always)]
    pub fn first_mut(&mut self) -> &mut T {
        &mut self.items[Self::FIRST_INDEX.as_usize()]
    }

    /// Returns the slot holding the back element, `items[len - 1]`.
    ///
    /// On an empty deque this is slot 0.
    #[inline(always)]
    pub fn last(&self) -> &T {
        &self.items[self.back_index()]
    }

    /// Returns the back slot mutably. On an empty deque this is slot 0.
    #[inline(always)]
    pub fn last_mut(&mut self) -> &mut T {
        let index = self.back_index();
        &mut self.items[index]
    }

    /// Returns the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the back element, or `None` if empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the front element mutably, or `None` if empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the back element mutably, or `None` if empty.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    #[inline(always)]
    fn back_index(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

impl<T: Default, const N: usize> FixedDeque<T, N> {
    /// Creates an empty deque with every slot set to `T::default()`.
    ///
    /// # Panics (compile-time)
    /// Asserts that `1 <= N <= 127`.
    pub fn new() -> Self {
        const {
            assert!(Self::CHECKED_CAPACITY as usize == N);
        }
        Self {
            items: core::array::from_fn(|_| T::default()),
            size: SizeType::ZERO,
        }
    }

    /// Creates a deque holding the elements of `iter` in order.
    ///
    /// Returns `Err` with the first element that did not fit if `iter`
    /// yields more than `N` elements.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, T> {
        let mut deque = Self::new();
        for item in iter {
            deque.try_append(item)?;
        }
        Ok(deque)
    }

    /// Removes every element, resetting the vacated slots to `T::default()`.
    pub fn clear(&mut self) {
        self.as_mut_slice().fill_with(T::default);
        self.size = SizeType::ZERO;
    }

    /// Adds `item` at the back. Returns `false` and drops `item` if full.
    #[inline]
    pub fn append(&mut self, item: T) -> bool {
        self.try_append(item).is_ok()
    }

    /// Adds `item` at the back. Returns `Err(item)` if full.
    pub fn try_append(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            trace_rejected!(capacity = N, "append rejected: deque full");
            return Err(item);
        }

        self.items[self.len()] = item;
        self.size = self.size.inc();
        Ok(())
    }

    /// Adds `item` at the front, shifting every live element back by one.
    ///
    /// Returns `false` and drops `item` if full. Costs O(len).
    #[inline]
    pub fn prepend(&mut self, item: T) -> bool {
        self.try_prepend(item).is_ok()
    }

    /// Adds `item` at the front. Returns `Err(item)` if full.
    pub fn try_prepend(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            trace_rejected!(capacity = N, "prepend rejected: deque full");
            return Err(item);
        }

        let len = self.len();
        self.items[len] = item;
        self.items[..=len].rotate_right(1);
        self.size = self.size.inc();
        Ok(())
    }

    /// Drops the back element. Does nothing if empty.
    #[inline]
    pub fn unappend(&mut self) {
        self.pop_back();
    }

    /// Drops the front element, shifting the rest forward. Does nothing if
    /// empty.
    #[inline]
    pub fn unprepend(&mut self) {
        self.pop_front();
    }

    /// Removes and returns the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.size = self.size.dec();
        Some(mem::take(&mut self.items[self.len()]))
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.take_at(0)
    }

    /// Removes the element at `index`, closing the gap.
    ///
    /// Returns `false` if `index >= len()`.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> bool {
        self.take_at(index).is_some()
    }

    /// Removes and returns the element at `index`, or `None` if
    /// `index >= len()`.
    pub fn take_at(&mut self, index: usize) -> Option<T> {
        let len = self.len();
        if index >= len {
            trace_rejected!(index, len, "remove rejected: index out of range");
            return None;
        }

        self.items[index..len].rotate_left(1);
        self.size = self.size.dec();
        Some(mem::take(&mut self.items[len - 1]))
    }

    /// Inserts `item` before the element at `index`.
    ///
    /// Returns `false` and drops `item` if the deque is full or `index` does
    /// not name a live element. Inserting at `len()` is rejected; use
    /// [`append`](Self::append).
    #[inline]
    pub fn insert(&mut self, index: usize, item: T) -> bool {
        self.try_insert(index, item).is_ok()
    }

    /// Inserts `item` before the element at `index`, reporting why it could
    /// not.
    pub fn try_insert(&mut self, index: usize, item: T) -> Result<(), InsertError<T>> {
        let len = self.len();
        if index >= len {
            trace_rejected!(index, len, "insert rejected: index out of range");
            return Err(InsertError::OutOfRange { item, index, len });
        }
        if self.is_full() {
            trace_rejected!(capacity = N, "insert rejected: deque full");
            return Err(InsertError::Full { item, capacity: N });
        }

        self.items[len] = item;
        self.items[index..=len].rotate_right(1);
        self.size = self.size.inc();
        Ok(())
    }
}

impl<T: PartialEq, const N: usize> FixedDeque<T, N> {
    /// Returns `true` if some live element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.as_slice().contains(item)
    }

    /// Returns the index of the first live element equal to `item`, or
    /// [`INVALID_INDEX`](Self::INVALID_INDEX).
    pub fn index_of(&self, item: &T) -> IndexOfType {
        to_index_of(self.position(item))
    }

    /// Returns the index of the first live element equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.as_slice().iter().position(|x| x == item)
    }

    /// Returns the index of the last live element equal to `item`.
    pub fn rposition(&self, item: &T) -> Option<usize> {
        self.as_slice().iter().rposition(|x| x == item)
    }
}

impl<T: PartialEq + Default, const N: usize> FixedDeque<T, N> {
    /// Removes the element equal to `item` that is closest to the front.
    ///
    /// Returns `false` if no live element matches.
    pub fn remove_first(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(index) => self.remove_at(index),
            None => {
                trace_rejected!(len = self.len(), "remove_first: no match");
                false
            }
        }
    }

    /// Removes the element equal to `item` that is closest to the back.
    ///
    /// Returns `false` if no live element matches.
    pub fn remove_last(&mut self, item: &T) -> bool {
        match self.rposition(item) {
            Some(index) => self.remove_at(index),
            None => {
                trace_rejected!(len = self.len(), "remove_last: no match");
                false
            }
        }
    }
}

impl<T: Default, const N: usize> AnyDeque<T> for FixedDeque<T, N> {
    fn len(&self) -> usize {
        self.len()
    }
    fn capacity(&self) -> usize {
        N
    }
    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }
    fn append(&mut self, item: T) -> bool {
        self.append(item)
    }
    fn prepend(&mut self, item: T) -> bool {
        self.prepend(item)
    }
    fn unappend(&mut self) {
        self.unappend();
    }
    fn unprepend(&mut self) {
        self.unprepend();
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn remove_at(&mut self, index: usize) -> bool {
        self.remove_at(index)
    }
    fn insert(&mut self, index: usize, item: T) -> bool {
        self.insert(index, item)
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T: Default, const N: usize> IndexedDeque<T> for FixedDeque<T, N> {
    fn first(&self) -> &T {
        self.first()
    }
    fn first_mut(&mut self) -> &mut T {
        self.first_mut()
    }
    fn last(&self) -> &T {
        self.last()
    }
    fn last_mut(&mut self) -> &mut T {
        self.last_mut()
    }
}

/// Unchecked against `len()`: any `index < N` reads the backing slot.
impl<T, const N: usize> Index<usize> for FixedDeque<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedDeque<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T: Default, const N: usize> Default for FixedDeque<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedDeque<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedDeque<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for FixedDeque<T, N> {}

impl<T: Hash, const N: usize> Hash for FixedDeque<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Default, const N: usize> From<heapless::Vec<T, N>> for FixedDeque<T, N> {
    fn from(vec: heapless::Vec<T, N>) -> Self {
        let mut deque = Self::new();
        for item in vec {
            // Same capacity on both sides.
            let appended = deque.try_append(item);
            debug_assert!(appended.is_ok());
        }
        deque
    }
}

impl<T, const N: usize> From<FixedDeque<T, N>> for heapless::Vec<T, N> {
    fn from(deque: FixedDeque<T, N>) -> Self {
        let len = deque.len();
        let mut vec = heapless::Vec::new();
        for item in deque.items.into_iter().take(len) {
            let pushed = vec.push(item);
            debug_assert!(pushed.is_ok());
        }
        vec
    }
}


#[cfg(all(test, feature = "tracing"))]
mod trace_tests {
    use super::*;
    use crate::EmptyDeque;
    use std::io;
    use std::string::String;
    use std::sync::{Arc, Mutex};
    use std::vec::Vec;
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted events in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_target(true)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    fn line_with<'a>(logs: &'a str, message: &str) -> &'a str {
        logs.lines()
            .find(|l| l.contains(message))
            .unwrap_or_else(|| panic!("no event {message:?} in:\n{logs}"))
    }

    #[test]
    fn test_rejected_mutations_emit_trace_events() {
        let logs = capture(|| {
            let mut d: FixedDeque<i32, 1> = FixedDeque::new();
            assert!(d.append(1));
            assert!(!d.append(2));
            assert!(!d.prepend(0));
            assert!(!d.insert(5, 3));
            assert!(!d.remove_at(4));
            assert!(!d.remove_first(&9));
            assert!(!d.remove_last(&9));
        });

        let append = line_with(&logs, "append rejected: deque full");
        assert!(append.contains("TRACE"));
        assert!(append.contains("fixed_deque"));
        assert!(append.contains("capacity=1"));

        let prepend = line_with(&logs, "prepend rejected: deque full");
        assert!(prepend.contains("capacity=1"));

        let insert = line_with(&logs, "insert rejected: index out of range");
        assert!(insert.contains("fixed_deque"));
        assert!(insert.contains("index=5"));
        assert!(insert.contains("len=1"));

        let remove = line_with(&logs, "remove rejected: index out of range");
        assert!(remove.contains("index=4"));
        assert!(remove.contains("len=1"));

        assert!(line_with(&logs, "remove_first: no match").contains("len=1"));
        assert!(line_with(&logs, "remove_last: no match").contains("len=1"));
    }

    #[test]
    fn test_successful_mutations_are_silent() {
        let logs = capture(|| {
            let mut d: FixedDeque<i32, 2> = FixedDeque::new();
            assert!(d.append(1));
            assert!(d.prepend(0));
            assert!(d.remove_first(&1));
            d.unappend();
        });
        assert!(!logs.contains("fixed_deque"), "unexpected events:\n{logs}");
    }

    #[test]
    fn test_zero_capacity_rejections_emit_trace_events() {
        let logs = capture(|| {
            let mut d: EmptyDeque<i32> = EmptyDeque::new();
            assert!(!d.append(1));
            assert!(!d.insert(2, 1));
        });
        let append = line_with(&logs, "append rejected: zero-capacity deque");
        assert!(append.contains("fixed_deque"));
        assert!(append.contains("capacity=0"));
        assert!(line_with(&logs, "insert rejected: zero-capacity deque").contains("index=2"));
    }
}
