//! Compact size and index types shared by the deque variants.
//!
//! Capacities are capped at [`MAX_CAPACITY`] so that every size fits in a
//! [`SizeType`] and every search result, including the "not found" sentinel,
//! fits in a signed [`IndexOfType`].

/// Type of the live element counter.
pub type SizeType = u8;

/// Type of a slot position inside the backing array.
pub type IndexType = u8;

/// Type returned by searches; negative values mean "not found".
pub type IndexOfType = i8;

/// Sentinel returned by `index_of` when no live element matches.
pub const INVALID_INDEX: IndexOfType = -1;

/// Largest capacity a `FixedDeque` accepts.
pub const MAX_CAPACITY: usize = IndexOfType::MAX as usize;

/// A sealed trait for the compact counters used as deque sizes.
///
/// Element positions are exposed as `usize` on the public API; this trait keeps
/// the narrowing and widening in one place.
pub trait CompactIndex: Copy + Eq + core::fmt::Debug + 'static + sealed::Sealed {
    /// The first valid index.
    const ZERO: Self;

    /// Widens this index for slice access.
    fn as_usize(self) -> usize;

    /// Narrows a slot position.
    ///
    /// # Panics
    /// Debug builds panic if `i` does not fit; callers only pass values
    /// bounded by a capacity that was validated at compile time.
    fn from_usize(i: usize) -> Self;

    /// Converts to the signed search result type.
    fn as_index_of(self) -> IndexOfType;

    /// Increments the index (self + 1).
    fn inc(self) -> Self;

    /// Decrements the index (self - 1).
    fn dec(self) -> Self;

    /// Returns true if the index is zero.
    fn is_zero(self) -> bool;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
}

impl CompactIndex for u8 {
    const ZERO: Self = 0;
    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }
    #[inline(always)]
    fn from_usize(i: usize) -> Self {
        debug_assert!(i <= u8::MAX as usize);
        i as u8
    }
    #[inline(always)]
    fn as_index_of(self) -> IndexOfType {
        debug_assert!(self as usize <= MAX_CAPACITY);
        self as IndexOfType
    }
    #[inline(always)]
    fn inc(self) -> Self {
        self + 1
    }
    #[inline(always)]
    fn dec(self) -> Self {
        self - 1
    }
    #[inline(always)]
    fn is_zero(self) -> bool {
        self == 0
    }
}

/// Maps an optional position onto the sentinel convention.
#[inline]
pub fn to_index_of(position: Option<usize>) -> IndexOfType {
    match position {
        Some(i) => IndexType::from_usize(i).as_index_of(),
        None => INVALID_INDEX,
    }
}
