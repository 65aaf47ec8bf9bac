//! Trace hook for rejected mutations.
//!
//! Expands to a `tracing::trace!` event under the `fixed_deque` target when the
//! `tracing` feature is on, and to nothing otherwise.

macro_rules! trace_rejected {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "fixed_deque", $($arg)+);
        }
    };
}
