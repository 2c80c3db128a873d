//! Utility functions

pub mod ordering;

pub use ordering::{IdSortKey, sort_newest_first};
