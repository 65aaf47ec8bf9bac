//! # Fixed Deque
//!
//! A fixed-capacity, array-backed double-ended queue for environments where heap
//! allocation is unavailable or unwanted (microcontrollers, interrupt handlers,
//! bootloaders).
//!
//! [`FixedDeque<T, N>`] stores up to `N` elements inline in a `[T; N]` next to a
//! single `u8` size counter. Elements can be added and removed at both ends,
//! inserted or removed at any occupied position, and searched linearly.
//!
//! ## Key Features
//!
//! * **No allocation:** storage is part of the value; it lives wherever the deque lives.
//! * **Contiguous:** the live elements are always the prefix `[0, len)` of the backing
//!   array, so [`FixedDeque::as_slice`] and [`FixedDeque::data`] are plain slices.
//! * **Non-panicking mutators:** failures (full, index out of range, no match) are
//!   reported through `bool`, `Option` or `Result` and leave the deque unchanged.
//! * **Compile-Time Safety:** the capacity is checked during the build.
//! * **Zero capacity:** [`EmptyDeque<T>`] provides the same interface for a deque that
//!   can never hold an element, without element accessors.
//!
//! ## Capacity Constraints (`N`)
//!
//! * `N` must be at least **1** (use [`EmptyDeque`] for zero).
//! * `N` must be at most **127** ([`MAX_CAPACITY`]), so that sizes fit in a
//!   [`SizeType`] and search results, including [`INVALID_INDEX`], fit in an
//!   [`IndexOfType`].
//!
//! ## Cargo Features
//!
//! * `std` — link the standard library.
//! * `serde` — `Serialize` / `Deserialize` for both deques.
//! * `tracing` — emit `trace`-level events (target `fixed_deque`) when a mutation is
//!   rejected.
//!
//! ## Examples
//!
//! ```rust
//! use fixed_deque::{FixedDeque, INVALID_INDEX};
//!
//! let mut d: FixedDeque<u8, 4> = FixedDeque::new();
//!
//! d.append(1);
//! d.append(2);
//! d.prepend(0);
//! assert_eq!(d.as_slice(), &[0, 1, 2]);
//! assert_eq!(*d.last(), 2);
//!
//! assert_eq!(d.index_of(&2), 2);
//! assert_eq!(d.index_of(&7), INVALID_INDEX);
//!
//! d.unprepend();
//! assert_eq!(d.as_slice(), &[1, 2]);
//! ```
//!
//! Generic code can target both variants through [`AnyDeque`]:
//!
//! ```rust
//! use fixed_deque::{AnyDeque, EmptyDeque, FixedDeque};
//!
//! fn fill<D: AnyDeque<u32>>(d: &mut D) -> usize {
//!     let mut n = 0;
//!     while d.append(n as u32) {
//!         n += 1;
//!     }
//!     n
//! }
//!
//! assert_eq!(fill(&mut FixedDeque::<u32, 3>::new()), 3);
//! assert_eq!(fill(&mut EmptyDeque::<u32>::new()), 0);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]

#[macro_use]
mod trace;

mod error;
#[cfg(feature = "serde")]
mod serde;
pub mod utils;
pub mod vecs;

// --- Re-exports ---

pub use error::InsertError;
pub use utils::index_type::{
    INVALID_INDEX, IndexOfType, IndexType, MAX_CAPACITY, SizeType,
};
pub use vecs::any_deque::{AnyDeque, IndexedDeque};
pub use vecs::empty_deque::EmptyDeque;
pub use vecs::fixed_deque::FixedDeque;
