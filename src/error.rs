//! Error type for the fallible `try_*` operations.

use thiserror::Error;

/// Why [`try_insert`](crate::FixedDeque::try_insert) rejected an element.
///
/// Both variants hand the rejected element back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError<T> {
    /// The deque already holds `capacity` elements.
    #[error("deque is full (capacity {capacity})")]
    Full {
        /// The rejected element.
        item: T,
        /// Capacity of the deque.
        capacity: usize,
    },
    /// `index` does not name an occupied slot.
    #[error("insertion index {index} is out of the occupied range (len {len})")]
    OutOfRange {
        /// The rejected element.
        item: T,
        /// Requested position.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
}

impl<T> InsertError<T> {
    /// Recovers the element that was not inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Full { item, .. } | InsertError::OutOfRange { item, .. } => item,
        }
    }
}
