//! The deque types and the traits they share.

pub mod any_deque;
pub mod empty_deque;
pub mod fixed_deque;
