//! Shared helpers.

pub mod index_type;
